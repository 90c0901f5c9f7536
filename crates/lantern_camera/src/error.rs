//! # Camera Error Types

use thiserror::Error;

/// Camera construction errors.
#[derive(Error, Debug)]
pub enum CameraError {
    /// Interpolation time must lie in `[0, 1]` (fraction of a focus spent easing).
    #[error("camera interpolation time may not exceed 1 (got {0})")]
    InterpolationTimeOutOfRange(f32),

    /// Camera config failed to parse.
    #[error("invalid camera config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for camera operations.
pub type CameraResult<T> = Result<T, CameraError>;
