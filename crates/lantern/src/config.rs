//! Game configuration.

use lantern_camera::CameraConfig;
use lantern_shared::MAX_FRAME_STEP;
use serde::{Deserialize, Serialize};

use crate::error::GameResult;

/// Everything tunable without recompiling.
///
/// ```toml
/// show_fps = true
/// display_scale = 2.0
/// seed = 7
///
/// [camera]
/// interpolation_time = 0.5
/// bar_height = 0.15
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Camera tuning
    pub camera: CameraConfig,
    /// Draw the FPS counter
    pub show_fps: bool,
    /// Device pixels per game pixel
    pub display_scale: f32,
    /// Largest game step per frame (seconds)
    pub max_frame_step: f32,
    /// Seed for every game-side random roll. Entropy when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            camera: CameraConfig::default(),
            show_fps: true,
            display_scale: 1.0,
            max_frame_step: MAX_FRAME_STEP,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Parses a config. Missing keys keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Config` on malformed TOML or unknown keys.
    pub fn from_toml(text: &str) -> GameResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Sets the seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;

    #[test]
    fn test_defaults() {
        let config = GameConfig::from_toml("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(config.max_frame_step, 0.1);
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_nested_camera() {
        let config = GameConfig::from_toml(
            "display_scale = 2.0\nseed = 7\n\n[camera]\nbar_height = 0.0\n",
        )
        .unwrap();
        assert_eq!(config.display_scale, 2.0);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.camera.bar_height, 0.0);
        assert_eq!(config.camera.interpolation_time, 0.5);
    }

    #[test]
    fn test_bad_value() {
        assert!(matches!(
            GameConfig::from_toml("show_fps = \"yes\""),
            Err(GameError::Config(_))
        ));
        assert!(matches!(
            GameConfig::from_toml("show_fsp = false"),
            Err(GameError::Config(_))
        ));
    }
}
