//! Camera tuning.

use serde::{Deserialize, Serialize};

use crate::error::CameraResult;

/// Camera parameters, loadable from TOML.
///
/// ```toml
/// interpolation_time = 0.5
/// bar_height = 0.15
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CameraConfig {
    /// Fraction of each focus spent easing in plus easing out, in `[0, 1]`.
    pub interpolation_time: f32,
    /// Height of each cinematic bar at full force, as a fraction of the canvas height.
    pub bar_height: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            interpolation_time: 0.5,
            bar_height: 0.15,
        }
    }
}

impl CameraConfig {
    /// Parses a config. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `CameraError::Config` on malformed TOML or unknown keys.
    pub fn from_toml(text: &str) -> CameraResult<Self> {
        Ok(toml::from_str(text)?)
    }
}
