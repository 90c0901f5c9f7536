//! A single particle.
//!
//! Particles live in y-up game space. Velocity is in units per second, angle
//! in radians. `progress` goes from 0 at spawn to 1 at expiry and drives the
//! emitter's alpha and size curves.

use lantern_render::{Appearance, RenderTarget};
use lantern_shared::Vec2;

use crate::curve::ValueCurve;

/// Emitter-wide physics applied to every particle in a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhysicsFrame {
    /// Acceleration (units/s²).
    pub gravity: Vec2,
    /// Fraction of velocity kept after one second.
    pub break_factor: f32,
}

impl Default for PhysicsFrame {
    fn default() -> Self {
        Self {
            gravity: Vec2::ZERO,
            break_factor: 1.0,
        }
    }
}

/// A short-lived simulated point.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Position (y-up)
    position: Vec2,
    /// Velocity (units/s)
    velocity: Vec2,
    /// Rotation (radians)
    angle: f32,
    /// Rotation speed (radians/s)
    angle_speed: f32,
    /// Color square or image
    appearance: Appearance,
    /// Square side before the size curve
    size: f32,
    /// Seconds left
    lifetime: f32,
    /// Lifetime at spawn
    original_lifetime: f32,
    /// Base opacity before the alpha curve
    alpha: f32,
    /// 0 at spawn, 1 at expiry
    progress: f32,
}

impl Particle {
    /// Creates a white, unrotated particle of size 4.
    #[must_use]
    pub fn new(position: Vec2, velocity: Vec2, lifetime: f32) -> Self {
        Self {
            position,
            velocity,
            angle: 0.0,
            angle_speed: 0.0,
            appearance: Appearance::default(),
            size: 4.0,
            lifetime,
            original_lifetime: lifetime,
            alpha: 1.0,
            progress: 0.0,
        }
    }

    /// Sets initial rotation and spin.
    #[must_use]
    pub fn with_rotation(mut self, angle: f32, angle_speed: f32) -> Self {
        self.angle = angle;
        self.angle_speed = angle_speed;
        self
    }

    /// Sets the appearance.
    #[must_use]
    pub fn with_appearance(mut self, appearance: Appearance) -> Self {
        self.appearance = appearance;
        self
    }

    /// Sets the base size.
    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Sets the base opacity.
    #[must_use]
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Advances the particle by `dt` seconds.
    ///
    /// Returns `true` when the particle expired during this call. An expiring
    /// particle is not integrated on its final tick.
    pub fn update(&mut self, dt: f32, frame: &PhysicsFrame) -> bool {
        self.lifetime -= dt;
        if self.lifetime <= 0.0 {
            return true;
        }

        self.progress = 1.0 - self.lifetime / self.original_lifetime;

        self.velocity += frame.gravity * dt;
        if frame.break_factor != 1.0 {
            self.velocity *= frame.break_factor.powf(dt);
        }
        self.position += self.velocity * dt;
        self.angle += self.angle_speed * dt;

        false
    }

    /// Draws the particle centered on its position.
    ///
    /// The caller's transform maps game space to screen space; the particle
    /// flips y itself. Alpha and size are shaped by the given curves.
    pub fn draw(&self, target: &mut dyn RenderTarget, alpha_curve: &ValueCurve, size_curve: &ValueCurve) {
        target.save();
        target.set_global_alpha(self.alpha * alpha_curve.get(self.progress));
        target.translate(self.position.x, -self.position.y);
        if self.angle != 0.0 {
            target.rotate(self.angle);
        }

        match self.appearance {
            Appearance::Color(color) => {
                let size = self.size * size_curve.get(self.progress);
                let half = size / 2.0;
                target.fill_rect(-half, -half, size, size, color);
            }
            Appearance::Image(image) => {
                let x = -(image.width as f32) / 2.0;
                let y = -(image.height as f32) / 2.0;
                target.draw_image(image, x, y);
            }
        }

        target.restore();
    }

    /// Current position.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Current velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Current rotation.
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle
    }

    /// Seconds left.
    #[must_use]
    pub fn lifetime(&self) -> f32 {
        self.lifetime
    }

    /// Lifetime at spawn.
    #[must_use]
    pub fn original_lifetime(&self) -> f32 {
        self.original_lifetime
    }

    /// Normalized age in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Base opacity.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    /// Base size.
    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    /// Appearance.
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        self.appearance
    }
}
