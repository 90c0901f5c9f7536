//! # LANTERN
//!
//! The main game crate, wiring the units into a playable frame loop.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                              LANTERN                                    │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  ┌─────────────────┐     ┌─────────────────┐     ┌─────────────────┐   │
//! │  │  lantern_shared │     │ lantern_render  │     │ lantern_camera  │   │
//! │  │                 │────>│                 │<────│                 │   │
//! │  │  • Vec2         │     │  • RenderTarget │     │  • Focus blend  │   │
//! │  │  • Constants    │     │  • Colors/blend │     │  • Bars         │   │
//! │  └────────┬────────┘     └────────▲────────┘     └────────▲────────┘   │
//! │           │                       │                       │            │
//! │           │              ┌────────┴────────┐              │            │
//! │           └─────────────>│lantern_particles│              │            │
//! │                          │  • Emitters     │              │            │
//! │                          │  • Curves       │              │            │
//! │                          └────────▲────────┘              │            │
//! │                                   │                       │            │
//! │                          ┌────────┴───────────────────────┴───┐        │
//! │                          │  lantern (this crate)              │        │
//! │                          │  • Frame clock, Game               │        │
//! │                          │  • Player, NPCs, dust, world       │        │
//! │                          └────────────────────────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - `game_loop`: Frame clock, update/draw orchestration
//! - `player` / `npc`: Scene objects
//! - `world`: Collision lookups
//! - `effects`: Gameplay-driven particles
//! - `telemetry`: Log setup for binaries

pub mod config;
pub mod dialog;
pub mod effects;
pub mod error;
pub mod game_loop;
pub mod npc;
pub mod player;
pub mod telemetry;
pub mod world;

// Re-export the units
pub use lantern_camera as camera;
pub use lantern_particles as particles;
pub use lantern_render as render;
pub use lantern_shared as shared;

// Re-export commonly used types
pub use config::GameConfig;
pub use dialog::{Dialog, Message};
pub use effects::{DustTrail, GroundContact};
pub use error::{GameError, GameResult};
pub use game_loop::{FpsCounter, FrameClock, FrameStats, Game, GameObject, UpdateContext};
pub use npc::Npc;
pub use player::{Player, PlayerInput};
pub use world::{CollisionMap, WorldError};
