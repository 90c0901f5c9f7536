//! Compositing modes.
//!
//! Names match the canvas `globalCompositeOperation` strings so presets can be
//! written the way artists already know them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Paint compositing mode applied to subsequent draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlendMode {
    /// Normal alpha blending.
    #[default]
    SourceOver,
    /// Additive blending (fire, sparks).
    Lighter,
    /// Multiply source and destination.
    Multiply,
    /// Inverse multiply.
    Screen,
    /// Multiply or screen depending on the destination.
    Overlay,
    /// Keep the darker of source and destination.
    Darken,
    /// Keep the lighter of source and destination.
    Lighten,
    /// Exclusive or.
    Xor,
    /// Replace destination.
    Copy,
}

impl BlendMode {
    /// Canvas name of this mode.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SourceOver => "source-over",
            Self::Lighter => "lighter",
            Self::Multiply => "multiply",
            Self::Screen => "screen",
            Self::Overlay => "overlay",
            Self::Darken => "darken",
            Self::Lighten => "lighten",
            Self::Xor => "xor",
            Self::Copy => "copy",
        }
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlendMode {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = match s.trim() {
            "source-over" => Self::SourceOver,
            "lighter" => Self::Lighter,
            "multiply" => Self::Multiply,
            "screen" => Self::Screen,
            "overlay" => Self::Overlay,
            "darken" => Self::Darken,
            "lighten" => Self::Lighten,
            "xor" => Self::Xor,
            "copy" => Self::Copy,
            other => return Err(RenderError::UnknownBlendMode(other.to_string())),
        };
        Ok(mode)
    }
}
