//! Frame-rate independent randomness helpers for gameplay code.

use rand::Rng;

/// Uniform float in `[min, max)`.
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    min + rng.gen::<f32>() * (max - min)
}

/// Fires on average once every `average_interval` seconds of simulated time.
///
/// Intended to be called once per frame with that frame's `dt`. A
/// non-positive interval always fires; `dt == 0` (paused) never does.
pub fn timed_chance<R: Rng + ?Sized>(rng: &mut R, dt: f32, average_interval: f32) -> bool {
    if average_interval <= 0.0 {
        return true;
    }
    rng.gen::<f32>() < dt / average_interval
}
