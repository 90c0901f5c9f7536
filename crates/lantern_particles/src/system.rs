//! Emitter registry.
//!
//! The game owns one `ParticleSystem` and ticks it once per frame. Emitters
//! are addressed by [`EmitterId`] handles and drawn in registration order.

use std::fmt;

use lantern_render::RenderTarget;
use tracing::{debug, trace};

use crate::config::EmitterConfig;
use crate::emitter::ParticleEmitter;

/// Handle to an emitter registered in a [`ParticleSystem`].
///
/// Handles are never reused, so a dropped emitter's handle stays dead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmitterId(u64);

impl EmitterId {
    /// Raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EmitterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "emitter#{}", self.0)
    }
}

/// Statistics from the last update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParticleStats {
    /// Registered emitters
    pub active_emitters: usize,
    /// Live particles across all emitters
    pub alive_count: usize,
    /// Particles that expired during the last update
    pub died_this_frame: usize,
}

/// All emitters of a scene.
#[derive(Debug, Default)]
pub struct ParticleSystem {
    /// Emitters in registration order
    emitters: Vec<(EmitterId, ParticleEmitter)>,
    /// Next handle value
    next_id: u64,
    /// Current statistics
    stats: ParticleStats,
}

impl ParticleSystem {
    /// Creates an empty system.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an emitter from `config` and registers it.
    pub fn create_emitter(&mut self, config: EmitterConfig) -> EmitterId {
        self.add_emitter(ParticleEmitter::new(config))
    }

    /// Registers an existing emitter.
    pub fn add_emitter(&mut self, emitter: ParticleEmitter) -> EmitterId {
        let id = EmitterId(self.next_id);
        self.next_id += 1;
        debug!(%id, position = ?emitter.position(), "emitter added");
        self.emitters.push((id, emitter));
        id
    }

    /// Removes an emitter and its live particles. Returns `false` for unknown handles.
    pub fn drop_emitter(&mut self, id: EmitterId) -> bool {
        match self.emitters.iter().position(|(eid, _)| *eid == id) {
            Some(index) => {
                let (_, emitter) = self.emitters.remove(index);
                debug!(%id, live = emitter.particle_count(), "emitter dropped");
                true
            }
            None => false,
        }
    }

    /// Looks up an emitter.
    #[must_use]
    pub fn emitter(&self, id: EmitterId) -> Option<&ParticleEmitter> {
        self.emitters.iter().find(|(eid, _)| *eid == id).map(|(_, e)| e)
    }

    /// Looks up an emitter mutably, e.g. to move it or emit.
    pub fn emitter_mut(&mut self, id: EmitterId) -> Option<&mut ParticleEmitter> {
        self.emitters
            .iter_mut()
            .find(|(eid, _)| *eid == id)
            .map(|(_, e)| e)
    }

    /// Ticks every emitter once.
    pub fn update(&mut self, dt: f32) {
        let mut died = 0;
        for (_, emitter) in &mut self.emitters {
            emitter.update(dt);
            died += emitter.expired_last_tick();
        }

        self.stats = ParticleStats {
            active_emitters: self.emitters.len(),
            alive_count: self.particle_count(),
            died_this_frame: died,
        };
        trace!(
            emitters = self.stats.active_emitters,
            alive = self.stats.alive_count,
            died,
            "particle system tick"
        );
    }

    /// Draws every emitter in registration order.
    pub fn draw(&self, target: &mut dyn RenderTarget) {
        for (_, emitter) in &self.emitters {
            emitter.draw(target);
        }
    }

    /// Registered emitters.
    #[must_use]
    pub fn emitter_count(&self) -> usize {
        self.emitters.len()
    }

    /// Live particles across all emitters.
    #[must_use]
    pub fn particle_count(&self) -> usize {
        self.emitters.iter().map(|(_, e)| e.particle_count()).sum()
    }

    /// Handles in registration order.
    pub fn ids(&self) -> impl Iterator<Item = EmitterId> + '_ {
        self.emitters.iter().map(|(id, _)| *id)
    }

    /// Statistics from the last update.
    #[must_use]
    pub fn stats(&self) -> ParticleStats {
        self.stats
    }

    /// Drops every emitter. Handles are not reused afterwards.
    pub fn clear(&mut self) {
        self.emitters.clear();
        self.stats = ParticleStats::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lantern_render::{BlendMode, CommandRecorder, RenderCommand};
    use lantern_shared::Vec2;

    fn config() -> EmitterConfig {
        EmitterConfig::at(Vec2::ZERO).with_lifetime(1.0).with_seed(0)
    }

    #[test]
    fn test_handles_are_unique() {
        let mut system = ParticleSystem::new();
        let a = system.create_emitter(config());
        let b = system.create_emitter(config());
        assert_ne!(a, b);
        assert!(system.drop_emitter(a));
        let c = system.create_emitter(config());
        assert_ne!(a, c);
        assert_eq!(system.ids().collect::<Vec<_>>(), vec![b, c]);
    }

    #[test]
    fn test_drop_unknown() {
        let mut system = ParticleSystem::new();
        let id = system.create_emitter(config());
        assert!(system.drop_emitter(id));
        assert!(!system.drop_emitter(id));
        assert!(system.emitter(id).is_none());
        assert_eq!(system.emitter_count(), 0);
    }

    #[test]
    fn test_update_counts() {
        let mut system = ParticleSystem::new();
        let a = system.create_emitter(config());
        let b = system.create_emitter(config().with_lifetime(2.0));
        system.emitter_mut(a).unwrap().emit(3);
        system.emitter_mut(b).unwrap().emit(2);
        assert_eq!(system.particle_count(), 5);

        system.update(1.0);
        assert_eq!(
            system.stats(),
            ParticleStats {
                active_emitters: 2,
                alive_count: 2,
                died_this_frame: 3,
            }
        );
    }

    #[test]
    fn test_draw_in_registration_order() {
        let mut system = ParticleSystem::new();
        system.create_emitter(config().with_blend_mode(BlendMode::Screen));
        system.create_emitter(config().with_blend_mode(BlendMode::Lighter));

        let mut recorder = CommandRecorder::default();
        system.draw(&mut recorder);

        let blends: Vec<_> = recorder
            .commands()
            .iter()
            .filter_map(|c| match c {
                RenderCommand::Blend(mode) => Some(*mode),
                _ => None,
            })
            .collect();
        assert_eq!(blends, vec![BlendMode::Screen, BlendMode::Lighter]);
    }

    #[test]
    fn test_clear() {
        let mut system = ParticleSystem::new();
        let id = system.create_emitter(config());
        system.emitter_mut(id).unwrap().emit(4);
        system.clear();
        assert_eq!(system.emitter_count(), 0);
        assert_eq!(system.particle_count(), 0);
    }
}
