//! Paint styles: colors and particle appearances.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red component (0-1).
    pub r: f32,
    /// Green component (0-1).
    pub g: f32,
    /// Blue component (0-1).
    pub b: f32,
    /// Alpha component (0-1).
    pub a: f32,
}

impl Color {
    /// Transparent black.
    pub const TRANSPARENT: Self = Self::rgba(0.0, 0.0, 0.0, 0.0);
    /// Solid black.
    pub const BLACK: Self = Self::rgba(0.0, 0.0, 0.0, 1.0);
    /// Solid white.
    pub const WHITE: Self = Self::rgba(1.0, 1.0, 1.0, 1.0);

    /// Creates a color from RGBA values (0-1).
    #[must_use]
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a color from RGB values (0-1) with full alpha.
    #[must_use]
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from hex value (0xRRGGBBAA).
    #[must_use]
    pub const fn hex(hex: u32) -> Self {
        let r = ((hex >> 24) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let b = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let a = (hex & 0xFF) as f32 / 255.0;
        Self::rgba(r, g, b, a)
    }

    fn to_hex(self) -> u32 {
        let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u32;
        (channel(self.r) << 24) | (channel(self.g) << 16) | (channel(self.b) << 8) | channel(self.a)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.to_hex())
    }
}

impl FromStr for Color {
    type Err = RenderError;

    /// Accepts a handful of CSS names and `#rgb`, `#rrggbb`, `#rrggbbaa`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || RenderError::InvalidColor(s.to_string());
        let text = s.trim();

        let named = match text.to_ascii_lowercase().as_str() {
            "white" => Some(Self::WHITE),
            "black" => Some(Self::BLACK),
            "transparent" => Some(Self::TRANSPARENT),
            "red" => Some(Self::rgb(1.0, 0.0, 0.0)),
            "green" => Some(Self::hex(0x0080_00FF)),
            "blue" => Some(Self::rgb(0.0, 0.0, 1.0)),
            "yellow" => Some(Self::rgb(1.0, 1.0, 0.0)),
            "orange" => Some(Self::hex(0xFFA5_00FF)),
            "gray" | "grey" => Some(Self::hex(0x8080_80FF)),
            _ => None,
        };
        if let Some(color) = named {
            return Ok(color);
        }

        let digits = text.strip_prefix('#').ok_or_else(invalid)?;
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }
        let value = u32::from_str_radix(digits, 16).map_err(|_| invalid())?;
        match digits.len() {
            3 => {
                let expand = |n: u32| (n & 0xF) * 0x11;
                let (r, g, b) = (expand(value >> 8), expand(value >> 4), expand(value));
                Ok(Self::hex((r << 24) | (g << 16) | (b << 8) | 0xFF))
            }
            6 => Ok(Self::hex((value << 8) | 0xFF)),
            8 => Ok(Self::hex(value)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = RenderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Handle to an image owned by the backend (sprite sheet, decal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageHandle {
    /// Backend image id.
    pub id: u32,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// What a particle looks like: a flat color square or an image stamp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Appearance {
    /// Solid color fill.
    Color(Color),
    /// Image blit.
    Image(ImageHandle),
}

impl Default for Appearance {
    fn default() -> Self {
        Self::Color(Color::WHITE)
    }
}

impl From<Color> for Appearance {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<ImageHandle> for Appearance {
    fn from(image: ImageHandle) -> Self {
        Self::Image(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_forms() {
        let full: Color = "#806057".parse().unwrap();
        assert!((full.r - 128.0 / 255.0).abs() < 1e-6);
        assert!((full.g - 96.0 / 255.0).abs() < 1e-6);
        assert!((full.b - 87.0 / 255.0).abs() < 1e-6);
        assert_eq!(full.a, 1.0);

        let short: Color = "#fff".parse().unwrap();
        assert_eq!(short, Color::WHITE);

        let with_alpha: Color = "#00000000".parse().unwrap();
        assert_eq!(with_alpha, Color::TRANSPARENT);
    }

    #[test]
    fn test_parse_names_and_errors() {
        assert_eq!("White".parse::<Color>(), Ok(Color::WHITE));
        assert_eq!(" red ".parse::<Color>(), Ok(Color::rgb(1.0, 0.0, 0.0)));
        assert!("#12345".parse::<Color>().is_err());
        assert!("#zzzzzz".parse::<Color>().is_err());
        assert!("chartreuse".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        let color = Color::hex(0x3C83_76FF);
        assert_eq!(color.to_string(), "#3c8376ff");
        assert_eq!(color.to_string().parse::<Color>(), Ok(color));
    }
}
