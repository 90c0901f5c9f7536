//! # Game Error Types

use lantern_camera::CameraError;
use lantern_particles::ParticleError;
use thiserror::Error;

use crate::world::WorldError;

/// Errors raised while setting up a game.
#[derive(Error, Debug)]
pub enum GameError {
    /// Camera rejected its configuration.
    #[error(transparent)]
    Camera(#[from] CameraError),

    /// Collision map is malformed.
    #[error(transparent)]
    World(#[from] WorldError),

    /// Effect preset rejected.
    #[error(transparent)]
    Particle(#[from] ParticleError),

    /// Config or asset file unreadable.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Game config failed to parse.
    #[error("invalid game config: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for game setup.
pub type GameResult<T> = Result<T, GameError>;
