//! Gameplay-driven particle effects.

use lantern_particles::pacing::{timed_chance, uniform};
use lantern_particles::{curve, EmitterConfig, EmitterId, Generator, ParticleSystem};
use lantern_render::{Appearance, Color};
use lantern_shared::Vec2;
use rand::Rng;

/// Ground palette the dust is tinted with.
pub const GROUND_COLORS: [Color; 4] = [
    Color::hex(0x8060_57FF),
    Color::hex(0x5043_36FF),
    Color::hex(0x3C83_76FF),
    Color::hex(0x9087_84FF),
];

/// Average seconds between dust puffs while walking.
pub const WALK_DUST_INTERVAL: f32 = 0.2;

/// Ground state of a body, sampled once per frame after it moved.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GroundContact {
    /// Feet position
    pub position: Vec2,
    /// Velocity
    pub velocity: Vec2,
    /// Standing on something
    pub grounded: bool,
}

/// Dust kicked up by a walking or landing body.
#[derive(Debug, Clone, Copy)]
pub struct DustTrail {
    emitter: EmitterId,
    /// Airborne on the previous step
    was_flying: bool,
    /// Vertical velocity on the previous step
    previous_vy: f32,
}

impl DustTrail {
    /// Registers the dust emitter at `position`. The particle size is rolled
    /// once here and shared by every puff.
    pub fn new<R: Rng + ?Sized>(system: &mut ParticleSystem, rng: &mut R, position: Vec2) -> Self {
        let config = EmitterConfig::at(position)
            .with_velocity(Generator::sampled(|rng| {
                let x = uniform(rng, -1.0, 1.0) * 26.0;
                let y = uniform(rng, 0.7, 1.0) * 45.0;
                Vec2::new(x, y)
            }))
            .with_appearance(Generator::sampled(|rng| {
                let index = rng.gen_range(0..GROUND_COLORS.len());
                Appearance::Color(GROUND_COLORS[index])
            }))
            .with_size(uniform(rng, 0.5, 1.5))
            .with_gravity(Vec2::new(0.0, -100.0))
            .with_lifetime(Generator::uniform(0.5, 0.8))
            .with_alpha_curve(curve::trapeze(0.05, 0.2))
            .with_seed(rng.gen());

        Self {
            emitter: system.create_emitter(config),
            was_flying: false,
            previous_vy: 0.0,
        }
    }

    /// Handle of the dust emitter.
    #[must_use]
    pub fn emitter(&self) -> EmitterId {
        self.emitter
    }

    /// Emits dust for this frame and returns how many particles were spawned.
    ///
    /// Walking on the ground puffs one particle every
    /// [`WALK_DUST_INTERVAL`] seconds on average. Landing bursts
    /// `ceil(|fall speed| / 5)` particles.
    pub fn step<R: Rng + ?Sized>(
        &mut self,
        system: &mut ParticleSystem,
        rng: &mut R,
        dt: f32,
        body: &GroundContact,
    ) -> usize {
        let was_flying = self.was_flying;
        let previous_vy = self.previous_vy;
        self.was_flying = !body.grounded;
        self.previous_vy = body.velocity.y;

        if !body.grounded || !(body.velocity.x.abs() > 1.0 || was_flying) {
            return 0;
        }
        if !was_flying && !timed_chance(rng, dt, WALK_DUST_INTERVAL) {
            return 0;
        }

        let count = if was_flying {
            (previous_vy.abs() / 5.0).ceil() as usize
        } else {
            1
        };
        match system.emitter_mut(self.emitter) {
            Some(emitter) => {
                emitter.set_position(body.position);
                emitter.emit(count);
                count
            }
            None => 0,
        }
    }
}
