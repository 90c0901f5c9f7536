//! # Render Error Types

use thiserror::Error;

/// Errors raised while parsing draw styles from configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// Color string is neither a known name nor a `#rgb`/`#rrggbb`/`#rrggbbaa` literal.
    #[error("invalid color: {0:?}")]
    InvalidColor(String),

    /// Blend mode name is not a supported canvas composite operation.
    #[error("unknown blend mode: {0:?}")]
    UnknownBlendMode(String),
}

/// Result type for render style parsing.
pub type RenderResult<T> = Result<T, RenderError>;
