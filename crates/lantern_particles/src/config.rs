//! Emitter configuration.

use lantern_render::{Appearance, BlendMode};
use lantern_shared::{Vec2, GRAVITY};

use crate::curve::{self, SharedCurve};
use crate::generator::Generator;

/// Everything an emitter needs. Only `position` is required; see [`EmitterConfig::at`].
#[derive(Debug)]
pub struct EmitterConfig {
    /// Emission origin (y-up game space)
    pub position: Vec2,
    /// Spawn offset from `position`
    pub offset: Generator<Vec2>,
    /// Initial velocity
    pub velocity: Generator<Vec2>,
    /// Color or image per particle
    pub appearance: Generator<Appearance>,
    /// Base opacity
    pub alpha: Generator<f32>,
    /// Base size
    pub size: Generator<f32>,
    /// Emitter gravity, re-sampled every tick
    pub gravity: Generator<Vec2>,
    /// Lifetime in seconds
    pub lifetime: Generator<f32>,
    /// Velocity kept per second, in `(0, 1]`
    pub break_factor: f32,
    /// Compositing mode for the whole emitter
    pub blend_mode: BlendMode,
    /// Alpha over normalized lifetime
    pub alpha_curve: SharedCurve,
    /// Size over normalized lifetime
    pub size_curve: SharedCurve,
    /// Initial rotation
    pub angle: Generator<f32>,
    /// Rotation speed
    pub angle_speed: Generator<f32>,
    /// RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,
}

impl EmitterConfig {
    /// Defaults: white 4px squares at rest, falling under world gravity for 5s.
    #[must_use]
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            offset: Generator::fixed(Vec2::ZERO),
            velocity: Generator::fixed(Vec2::ZERO),
            appearance: Generator::default(),
            alpha: Generator::fixed(1.0),
            size: Generator::fixed(4.0),
            gravity: Generator::fixed(Vec2::new(0.0, -GRAVITY)),
            lifetime: Generator::fixed(5.0),
            break_factor: 1.0,
            blend_mode: BlendMode::SourceOver,
            alpha_curve: curve::constant(),
            size_curve: curve::constant(),
            angle: Generator::fixed(0.0),
            angle_speed: Generator::fixed(0.0),
            seed: None,
        }
    }

    /// Spawn offset.
    #[must_use]
    pub fn with_offset(mut self, offset: impl Into<Generator<Vec2>>) -> Self {
        self.offset = offset.into();
        self
    }

    /// Initial velocity.
    #[must_use]
    pub fn with_velocity(mut self, velocity: impl Into<Generator<Vec2>>) -> Self {
        self.velocity = velocity.into();
        self
    }

    /// Color or image.
    #[must_use]
    pub fn with_appearance(mut self, appearance: impl Into<Generator<Appearance>>) -> Self {
        self.appearance = appearance.into();
        self
    }

    /// Base opacity.
    #[must_use]
    pub fn with_alpha(mut self, alpha: impl Into<Generator<f32>>) -> Self {
        self.alpha = alpha.into();
        self
    }

    /// Base size.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<Generator<f32>>) -> Self {
        self.size = size.into();
        self
    }

    /// Gravity.
    #[must_use]
    pub fn with_gravity(mut self, gravity: impl Into<Generator<Vec2>>) -> Self {
        self.gravity = gravity.into();
        self
    }

    /// Lifetime.
    #[must_use]
    pub fn with_lifetime(mut self, lifetime: impl Into<Generator<f32>>) -> Self {
        self.lifetime = lifetime.into();
        self
    }

    /// Velocity damping.
    #[must_use]
    pub fn with_break_factor(mut self, break_factor: f32) -> Self {
        self.break_factor = break_factor;
        self
    }

    /// Compositing mode.
    #[must_use]
    pub fn with_blend_mode(mut self, blend_mode: BlendMode) -> Self {
        self.blend_mode = blend_mode;
        self
    }

    /// Alpha curve.
    #[must_use]
    pub fn with_alpha_curve(mut self, curve: SharedCurve) -> Self {
        self.alpha_curve = curve;
        self
    }

    /// Size curve.
    #[must_use]
    pub fn with_size_curve(mut self, curve: SharedCurve) -> Self {
        self.size_curve = curve;
        self
    }

    /// Initial rotation.
    #[must_use]
    pub fn with_angle(mut self, angle: impl Into<Generator<f32>>) -> Self {
        self.angle = angle.into();
        self
    }

    /// Rotation speed.
    #[must_use]
    pub fn with_angle_speed(mut self, angle_speed: impl Into<Generator<f32>>) -> Self {
        self.angle_speed = angle_speed.into();
        self
    }

    /// Deterministic RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
