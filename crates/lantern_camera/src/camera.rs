//! The game camera.
//!
//! Each tick the camera snaps to its followed target with zoom 1, then blends
//! every active focus on top in request order, each weighted by its force.

use lantern_render::{Color, RenderTarget};
use lantern_shared::{lerp, Vec2};
use tracing::{debug, warn};

use crate::config::CameraConfig;
use crate::error::{CameraError, CameraResult};
use crate::focus::CameraFocus;

/// Anything the camera can follow.
pub trait Followable {
    /// Current position in y-up game space.
    fn position(&self) -> Vec2;
}

impl Followable for Vec2 {
    fn position(&self) -> Vec2 {
        *self
    }
}

/// Follow camera with timed focuses and cinematic bars.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Look-at point (y-up)
    position: Vec2,
    /// Current zoom
    zoom: f32,
    /// Active focuses in request order
    focuses: Vec<CameraFocus>,
    /// Game time of the last update
    time: f64,
    /// Configured interpolation time
    interpolation_time: f32,
    /// `interpolation_time / 2`
    half_window: f32,
    /// Bar height fraction at full force
    bar_height: f32,
}

impl Camera {
    /// Creates a camera at the origin.
    ///
    /// # Errors
    ///
    /// [`CameraError::InterpolationTimeOutOfRange`] if `interpolation_time` is
    /// not within `[0, 1]`.
    pub fn new(interpolation_time: f32, bar_height: f32) -> CameraResult<Self> {
        if !(0.0..=1.0).contains(&interpolation_time) {
            return Err(CameraError::InterpolationTimeOutOfRange(interpolation_time));
        }
        Ok(Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            focuses: Vec::new(),
            time: 0.0,
            interpolation_time,
            half_window: interpolation_time / 2.0,
            bar_height,
        })
    }

    /// Creates a camera from a config.
    ///
    /// # Errors
    ///
    /// Returns error if [`Camera::new`] rejects the config values.
    pub fn from_config(config: &CameraConfig) -> CameraResult<Self> {
        Self::new(config.interpolation_time, config.bar_height)
    }

    /// Looks at `(x, y)` with `zoom` for `duration` seconds, starting now.
    pub fn focus_on(&mut self, duration: f32, x: f32, y: f32, zoom: f32) {
        if duration <= 0.0 {
            warn!(duration, "camera focus with non-positive duration ends immediately");
        }
        debug!(x, y, zoom, duration, start = self.time, "camera focus requested");
        self.focuses
            .push(CameraFocus::new(self.time, duration, Vec2::new(x, y), zoom));
    }

    /// Looks at `point` at zoom 1 for `duration` seconds.
    pub fn focus_on_point(&mut self, duration: f32, point: Vec2) {
        self.focus_on(duration, point.x, point.y, 1.0);
    }

    /// Moves the camera for game time `time`.
    ///
    /// Focuses finished at `time` no longer contribute and are removed.
    pub fn update(&mut self, _dt: f32, time: f64, target: &impl Followable) {
        self.time = time;
        self.position = target.position();
        self.zoom = 1.0;

        for focus in &mut self.focuses {
            if focus.advance(time, self.half_window) {
                let force = focus.force();
                self.position = self.position.lerp(focus.target(), force);
                self.zoom = lerp(self.zoom, focus.zoom(), force);
            }
        }

        let before = self.focuses.len();
        self.focuses.retain(|focus| !focus.is_dead());
        if self.focuses.len() < before {
            debug!(
                finished = before - self.focuses.len(),
                remaining = self.focuses.len(),
                time,
                "camera focus finished"
            );
        }
    }

    /// `true` when no focus is active and the camera belongs to its target.
    #[must_use]
    pub fn is_on_target(&self) -> bool {
        self.focuses.is_empty()
    }

    /// Strongest force among active focuses, 0 when none.
    #[must_use]
    pub fn focus_force(&self) -> f32 {
        self.focuses.iter().map(CameraFocus::force).fold(0.0, f32::max)
    }

    /// Applies zoom, then moves the look-at point to the origin.
    ///
    /// The screen is y-down, so the y translation keeps its sign.
    pub fn apply_transform(&self, target: &mut dyn RenderTarget) {
        target.scale(self.zoom, self.zoom);
        target.translate(-self.position.x, self.position.y);
    }

    /// Draws letterbox bars scaled by [`Camera::focus_force`].
    pub fn render_cinematic_bars(&self, target: &mut dyn RenderTarget) {
        self.render_cinematic_bars_with(target, self.focus_force());
    }

    /// Draws letterbox bars at an explicit force, in screen space.
    pub fn render_cinematic_bars_with(&self, target: &mut dyn RenderTarget, force: f32) {
        if self.bar_height == 0.0 {
            return;
        }
        let (width, height) = target.size();
        let bar = height * self.bar_height * force;

        target.save();
        target.reset_transform();
        target.fill_rect(0.0, 0.0, width, bar, Color::BLACK);
        target.fill_rect(0.0, height - bar, width, bar, Color::BLACK);
        target.restore();
    }

    /// Drops every focus, e.g. on scene change.
    pub fn clear_focuses(&mut self) {
        self.focuses.clear();
    }

    /// Look-at point after the last update.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Zoom after the last update.
    #[must_use]
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Game time of the last update.
    #[must_use]
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Active focuses in request order.
    #[must_use]
    pub fn focuses(&self) -> &[CameraFocus] {
        &self.focuses
    }

    /// Configured interpolation time.
    #[must_use]
    pub fn interpolation_time(&self) -> f32 {
        self.interpolation_time
    }

    /// Bar height fraction.
    #[must_use]
    pub fn bar_height(&self) -> f32 {
        self.bar_height
    }
}

impl Default for Camera {
    fn default() -> Self {
        let config = CameraConfig::default();
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
            focuses: Vec::new(),
            time: 0.0,
            interpolation_time: config.interpolation_time,
            half_window: config.interpolation_time / 2.0,
            bar_height: config.bar_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_render::{CommandRecorder, RenderCommand};

    #[test]
    fn test_rejects_interpolation_time() {
        assert!(matches!(
            Camera::new(1.5, 0.15),
            Err(CameraError::InterpolationTimeOutOfRange(t)) if t == 1.5
        ));
        assert!(Camera::new(-0.1, 0.15).is_err());
        assert!(Camera::new(f32::NAN, 0.15).is_err());
        assert!(Camera::new(1.0, 0.15).is_ok());
        assert!(Camera::new(0.0, 0.15).is_ok());
    }

    #[test]
    fn test_follows_target_without_focus() {
        let mut camera = Camera::default();
        camera.update(0.016, 0.016, &Vec2::new(12.0, -3.0));
        assert_eq!(camera.position(), Vec2::new(12.0, -3.0));
        assert_eq!(camera.zoom(), 1.0);
        assert!(camera.is_on_target());
        assert_eq!(camera.focus_force(), 0.0);
    }

    #[test]
    fn test_focus_point_keeps_zoom() {
        let mut camera = Camera::default();
        camera.focus_on_point(2.0, Vec2::new(10.0, 10.0));
        camera.update(1.0, 1.0, &Vec2::ZERO);
        assert_eq!(camera.position(), Vec2::new(10.0, 10.0));
        assert_eq!(camera.zoom(), 1.0);
    }

    #[test]
    fn test_apply_transform() {
        let mut camera = Camera::default();
        camera.focus_on(2.0, 100.0, 50.0, 2.0);
        camera.update(1.0, 1.0, &Vec2::ZERO);

        let mut recorder = CommandRecorder::default();
        camera.apply_transform(&mut recorder);
        assert_eq!(
            recorder.commands(),
            &[
                RenderCommand::Scale { sx: 2.0, sy: 2.0 },
                RenderCommand::Translate { x: -100.0, y: 50.0 },
            ]
        );
    }

    #[test]
    fn test_bars() {
        let camera = Camera::new(0.5, 0.25).unwrap();
        let mut recorder = CommandRecorder::new(400.0, 200.0);
        camera.render_cinematic_bars_with(&mut recorder, 0.5);

        assert_eq!(
            recorder.commands(),
            &[
                RenderCommand::Save,
                RenderCommand::ResetTransform,
                RenderCommand::FillRect {
                    x: 0.0,
                    y: 0.0,
                    width: 400.0,
                    height: 25.0,
                    color: Color::BLACK,
                },
                RenderCommand::FillRect {
                    x: 0.0,
                    y: 175.0,
                    width: 400.0,
                    height: 25.0,
                    color: Color::BLACK,
                },
                RenderCommand::Restore,
            ]
        );
    }

    #[test]
    fn test_no_bars_when_height_zero() {
        let camera = Camera::new(0.5, 0.0).unwrap();
        let mut recorder = CommandRecorder::default();
        camera.render_cinematic_bars_with(&mut recorder, 1.0);
        assert_eq!(recorder.command_count(), 0);
    }

    #[test]
    fn test_clear_focuses() {
        let mut camera = Camera::default();
        camera.focus_on(5.0, 1.0, 1.0, 1.0);
        assert!(!camera.is_on_target());
        camera.clear_focuses();
        assert!(camera.is_on_target());
    }
}
