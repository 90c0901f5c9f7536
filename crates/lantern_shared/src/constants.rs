//! # Game Constants
//!
//! World units are pixels. The world's y axis points up.

/// Pixels per simulated meter.
pub const PIXEL_PER_METER: f32 = 18.0;

/// Gravity acceleration magnitude (pixels per second squared).
pub const GRAVITY: f32 = 9.81 * PIXEL_PER_METER;

/// Largest frame step (seconds) the simulation accepts.
///
/// After a stall (tab in background, debugger) real elapsed time can be
/// several seconds; feeding that into physics makes everything jump.
pub const MAX_FRAME_STEP: f32 = 0.1;

/// Logical canvas width in pixels.
pub const GAME_WIDTH: u32 = 480;

/// Logical canvas height in pixels.
pub const GAME_HEIGHT: u32 = 300;

/// Top horizontal player speed (pixels per second).
pub const MAX_PLAYER_SPEED: f32 = 6.0 * PIXEL_PER_METER;

/// Horizontal player acceleration and braking (pixels per second squared).
pub const PLAYER_ACCELERATION: f32 = 12.0 * PIXEL_PER_METER;

/// Apex height of a standing jump (pixels).
pub const PLAYER_JUMP_HEIGHT: f32 = 2.0 * PIXEL_PER_METER;
