//! # Particle Error Types

use thiserror::Error;

/// Errors raised while building emitters from presets.
#[derive(Error, Debug)]
pub enum ParticleError {
    /// Preset file failed to parse (syntax, unknown field, bad color or blend name).
    #[error("invalid particle preset: {0}")]
    Config(#[from] toml::de::Error),

    /// A `{ min, max }` range is inverted or not finite.
    #[error("invalid range for `{field}`: min {min} / max {max}")]
    InvalidRange {
        /// Preset field name
        field: &'static str,
        /// Lower bound as written
        min: String,
        /// Upper bound as written
        max: String,
    },

    /// The attribute type has no notion of a range.
    #[error("`{0}` does not support `{{ min, max }}` ranges, use `one_of`")]
    RangeUnsupported(&'static str),

    /// A `one_of` list is empty.
    #[error("`one_of` for `{0}` is empty")]
    EmptyChoice(&'static str),

    /// Named preset is missing from a library.
    #[error("unknown particle preset: {0:?}")]
    UnknownPreset(String),
}

/// Result type for particle configuration.
pub type ParticleResult<T> = Result<T, ParticleError>;
