//! # LANTERN Shared
//!
//! Common types used by every simulation crate.
//!
//! ## CRITICAL RULE
//!
//! This crate must NEVER depend on rendering or simulation crates.
//! If you need draw types, put them in `lantern_render`.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod constants;
pub mod math;

pub use constants::{
    GAME_HEIGHT, GAME_WIDTH, GRAVITY, MAX_FRAME_STEP, MAX_PLAYER_SPEED, PIXEL_PER_METER,
    PLAYER_ACCELERATION, PLAYER_JUMP_HEIGHT,
};
pub use math::{clamp, lerp, Vec2};
