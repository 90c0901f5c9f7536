//! Particle emitter.
//!
//! An emitter owns its particles and the generators that describe new ones.
//! Emission is explicit: gameplay code calls [`ParticleEmitter::emit`] when
//! something happens (a footstep, a landing, a spell).

use lantern_render::{Appearance, BlendMode, RenderTarget};
use lantern_shared::Vec2;
use rand::SeedableRng;
use tracing::{trace, warn};

use crate::config::EmitterConfig;
use crate::curve::SharedCurve;
use crate::generator::{Generator, SimRng};
use crate::particle::{Particle, PhysicsFrame};

/// A particle source and the particles it has spawned.
#[derive(Debug)]
pub struct ParticleEmitter {
    /// Emission origin
    position: Vec2,
    /// Live particles
    particles: Vec<Particle>,
    offset: Generator<Vec2>,
    velocity: Generator<Vec2>,
    appearance: Generator<Appearance>,
    alpha: Generator<f32>,
    size: Generator<f32>,
    lifetime: Generator<f32>,
    angle: Generator<f32>,
    angle_speed: Generator<f32>,
    gravity_source: Generator<Vec2>,
    /// Gravity sampled for the current tick
    gravity: Vec2,
    /// Velocity kept per second
    break_factor: f32,
    blend_mode: BlendMode,
    alpha_curve: SharedCurve,
    size_curve: SharedCurve,
    rng: SimRng,
    /// Particles spawned since creation
    spawned: u64,
    /// Particles removed by the last `update`
    expired_last_tick: usize,
}

impl ParticleEmitter {
    /// Builds an emitter. Nothing is emitted yet.
    ///
    /// A break factor that is not a positive finite number is replaced by 1.
    #[must_use]
    pub fn new(config: EmitterConfig) -> Self {
        let break_factor = if config.break_factor.is_finite() && config.break_factor > 0.0 {
            config.break_factor
        } else {
            warn!(break_factor = config.break_factor, "break factor must be > 0, using 1");
            1.0
        };

        let mut rng = config.seed.map_or_else(SimRng::from_entropy, SimRng::seed_from_u64);
        let mut gravity_source = config.gravity;
        let gravity = gravity_source.sample(&mut rng);

        Self {
            position: config.position,
            particles: Vec::new(),
            offset: config.offset,
            velocity: config.velocity,
            appearance: config.appearance,
            alpha: config.alpha,
            size: config.size,
            lifetime: config.lifetime,
            angle: config.angle,
            angle_speed: config.angle_speed,
            gravity_source,
            gravity,
            break_factor,
            blend_mode: config.blend_mode,
            alpha_curve: config.alpha_curve,
            size_curve: config.size_curve,
            rng,
            spawned: 0,
            expired_last_tick: 0,
        }
    }

    /// Spawns `count` particles at the current position.
    pub fn emit(&mut self, count: usize) {
        self.particles.reserve(count);
        for _ in 0..count {
            let particle = self.spawn();
            self.particles.push(particle);
        }
        self.spawned += count as u64;
    }

    /// Spawns one particle and returns it.
    pub fn emit_single(&mut self) -> &Particle {
        let particle = self.spawn();
        let index = self.particles.len();
        self.particles.push(particle);
        self.spawned += 1;
        &self.particles[index]
    }

    fn spawn(&mut self) -> Particle {
        let rng = &mut self.rng;
        let velocity = self.velocity.sample(rng);
        let offset = self.offset.sample(rng);
        let angle = self.angle.sample(rng);
        let angle_speed = self.angle_speed.sample(rng);
        let appearance = self.appearance.sample(rng);
        let size = self.size.sample(rng);
        let lifetime = self.lifetime.sample(rng);
        let alpha = self.alpha.sample(rng);

        Particle::new(self.position + offset, velocity, lifetime)
            .with_rotation(angle, angle_speed)
            .with_appearance(appearance)
            .with_size(size)
            .with_alpha(alpha)
    }

    /// Advances every live particle by `dt` and drops the expired ones.
    pub fn update(&mut self, dt: f32) {
        self.gravity = self.gravity_source.sample(&mut self.rng);
        let frame = self.physics_frame();

        let before = self.particles.len();
        self.particles.retain_mut(|particle| !particle.update(dt, &frame));
        self.expired_last_tick = before - self.particles.len();

        trace!(
            live = self.particles.len(),
            expired = self.expired_last_tick,
            "emitter tick"
        );
    }

    /// Draws all particles with the emitter's blend mode.
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        target.save();
        target.set_blend_mode(self.blend_mode);
        for particle in &self.particles {
            particle.draw(target, &self.alpha_curve, &self.size_curve);
        }
        target.restore();
    }

    /// Moves the emission origin. Live particles are not affected.
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Emission origin.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Live particles in spawn order.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Number of live particles.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// `true` when no particle is alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Removes every live particle.
    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Gravity used by the most recent tick.
    #[must_use]
    pub fn gravity(&self) -> Vec2 {
        self.gravity
    }

    /// Effective break factor.
    #[must_use]
    pub fn break_factor(&self) -> f32 {
        self.break_factor
    }

    /// Compositing mode.
    #[must_use]
    pub fn blend_mode(&self) -> BlendMode {
        self.blend_mode
    }

    /// Physics applied on the current tick.
    #[must_use]
    pub fn physics_frame(&self) -> PhysicsFrame {
        PhysicsFrame {
            gravity: self.gravity,
            break_factor: self.break_factor,
        }
    }

    /// Particles spawned since creation.
    #[must_use]
    pub fn spawned(&self) -> u64 {
        self.spawned
    }

    /// Particles removed by the last update.
    #[must_use]
    pub fn expired_last_tick(&self) -> usize {
        self.expired_last_tick
    }
}
