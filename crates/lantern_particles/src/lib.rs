//! # LANTERN Particles
//!
//! CPU particle simulation for short-lived visual effects: dust, sparks,
//! smoke puffs.
//!
//! ```text
//! EmitterConfig / EmitterPreset (TOML)
//!            │
//!            ▼
//!   ParticleSystem ──► ParticleEmitter ──► Particle
//!     (EmitterId)       generators, RNG      Euler step
//!                       gravity, curves      expiry
//! ```
//!
//! Every attribute of a new particle comes from a [`Generator`]: a fixed value
//! or a sampler fed by the emitter's own seeded RNG. Alpha and size over a
//! particle's life are shaped by pre-sampled [`ValueCurve`]s.
//!
//! ## Example
//!
//! ```
//! use lantern_particles::{curve, EmitterConfig, Generator, ParticleSystem};
//! use lantern_shared::Vec2;
//!
//! let mut system = ParticleSystem::new();
//! let dust = system.create_emitter(
//!     EmitterConfig::at(Vec2::new(100.0, 20.0))
//!         .with_velocity(Generator::uniform_vec(Vec2::new(-26.0, 31.5), Vec2::new(26.0, 45.0)))
//!         .with_lifetime(Generator::uniform(0.5, 0.8))
//!         .with_alpha_curve(curve::trapeze(0.05, 0.2))
//!         .with_seed(7),
//! );
//!
//! if let Some(emitter) = system.emitter_mut(dust) {
//!     emitter.emit(8);
//! }
//! system.update(1.0 / 60.0);
//! assert_eq!(system.particle_count(), 8);
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod curve;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod pacing;
pub mod particle;
pub mod preset;
pub mod system;

pub use config::EmitterConfig;
pub use curve::{SharedCurve, ValueCurve};
pub use emitter::ParticleEmitter;
pub use error::{ParticleError, ParticleResult};
pub use generator::{Generator, SimRng};
pub use particle::{Particle, PhysicsFrame};
pub use preset::{CurveSpec, EmitterPreset, PresetLibrary, ValueSpec};
pub use system::{EmitterId, ParticleStats, ParticleSystem};
