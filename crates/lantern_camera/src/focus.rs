//! Camera focus records.
//!
//! A focus pulls the camera toward a point for a fixed duration. Its force
//! eases from 0 to 1 with a raised cosine, holds at 1, then eases back to 0:
//!
//! ```text
//! force
//!   1 ┤      ┌──────────────┐
//!     │    ╱                  ╲
//!   0 ┼───┘                    └───
//!     0   hw                1-hw   1   progress
//! ```
//!
//! `hw` is the camera's half window (interpolation time / 2).

use std::f32::consts::PI;

use lantern_shared::{clamp, Vec2};

/// Force for a focus at `progress` given the easing half window.
///
/// Continuous on `[0, 1]`: 0 at both ends, 1 on the plateau.
#[must_use]
pub fn focus_force(progress: f32, half_window: f32) -> f32 {
    if progress < half_window || progress > 1.0 - half_window {
        let edge = if progress < 0.5 { progress } else { 1.0 - progress };
        0.5 - 0.5 * (edge / half_window * PI).cos()
    } else {
        1.0
    }
}

/// A timed request to look at a point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFocus {
    /// Point to look at (y-up)
    target: Vec2,
    /// Zoom while fully focused
    zoom: f32,
    /// Game time the focus was requested
    start_time: f64,
    /// Seconds
    duration: f32,
    /// `start_time + duration`
    end_time: f64,
    /// 0..=1, never decreases
    progress: f32,
    /// Blend weight from the last update
    force: f32,
    /// Finished; removed by the camera at the end of the tick
    dead: bool,
}

impl CameraFocus {
    /// Creates a focus starting at `start_time`.
    #[must_use]
    pub fn new(start_time: f64, duration: f32, target: Vec2, zoom: f32) -> Self {
        Self {
            target,
            zoom,
            start_time,
            duration,
            end_time: start_time + f64::from(duration),
            progress: 0.0,
            force: 0.0,
            dead: false,
        }
    }

    /// Recomputes progress and force for game time `time`.
    ///
    /// Returns `true` while the focus is alive. A non-positive duration
    /// completes immediately. Progress never moves backwards, even if `time`
    /// does. Times stay `f64` until the ratio is taken.
    #[allow(clippy::cast_possible_truncation)]
    pub fn advance(&mut self, time: f64, half_window: f32) -> bool {
        let progress = if self.duration > 0.0 {
            let elapsed = (time - self.start_time) / f64::from(self.duration);
            clamp(elapsed as f32, 0.0, 1.0)
        } else {
            1.0
        };
        self.progress = self.progress.max(progress);
        self.dead = self.progress >= 1.0;

        if !self.dead {
            self.force = focus_force(self.progress, half_window);
        }
        !self.dead
    }

    /// Point to look at.
    #[must_use]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Zoom at full force.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Start time.
    #[must_use]
    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    /// Duration in seconds.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// End time.
    #[must_use]
    pub fn end_time(&self) -> f64 {
        self.end_time
    }

    /// Normalized progress.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Current blend weight.
    #[must_use]
    pub fn force(&self) -> f32 {
        self.force
    }

    /// `true` once progress reached 1.
    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.dead
    }
}
