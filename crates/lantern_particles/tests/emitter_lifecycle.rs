//! Integration tests for emitter lifecycles through the particle system.

use approx::assert_abs_diff_eq;
use lantern_particles::{curve, EmitterConfig, EmitterPreset, Generator, ParticleSystem};
use lantern_render::{CommandRecorder, RenderCommand};
use lantern_shared::Vec2;

#[test]
fn test_emit_five_then_return_to_baseline() {
    let mut system = ParticleSystem::new();
    let id = system.create_emitter(
        EmitterConfig::at(Vec2::ZERO)
            .with_lifetime(1.0)
            .with_seed(1),
    );

    system.emitter_mut(id).unwrap().emit(5);
    assert_eq!(system.particle_count(), 5);

    // Eight ticks of 0.125s cover the one-second lifetime.
    for _ in 0..8 {
        system.update(0.125);
    }
    assert_eq!(system.particle_count(), 0);
    assert_eq!(system.emitter_count(), 1);
}

#[test]
fn test_single_tick_expiry_has_no_motion() {
    let mut system = ParticleSystem::new();
    let id = system.create_emitter(
        EmitterConfig::at(Vec2::new(3.0, 4.0))
            .with_velocity(Vec2::new(10.0, 10.0))
            .with_gravity(Vec2::new(0.0, -100.0))
            .with_lifetime(1.0)
            .with_seed(2),
    );

    let emitter = system.emitter_mut(id).unwrap();
    let spawned = emitter.emit_single().clone();
    assert_eq!(spawned.position(), Vec2::new(3.0, 4.0));

    system.update(1.0);
    assert_eq!(system.particle_count(), 0);
    assert_eq!(system.stats().died_this_frame, 1);
}

#[test]
fn test_euler_step_with_gravity() {
    let mut system = ParticleSystem::new();
    let id = system.create_emitter(
        EmitterConfig::at(Vec2::ZERO)
            .with_velocity(Vec2::new(10.0, 0.0))
            .with_gravity(Vec2::new(0.0, -100.0))
            .with_lifetime(2.0)
            .with_seed(3),
    );
    system.emitter_mut(id).unwrap().emit(1);

    system.update(0.5);

    let p = &system.emitter(id).unwrap().particles()[0];
    assert_abs_diff_eq!(p.velocity().y, -50.0, epsilon = 1e-4);
    assert_abs_diff_eq!(p.position().x, 5.0, epsilon = 1e-4);
    assert_abs_diff_eq!(p.position().y, -25.0, epsilon = 1e-4);
    assert_abs_diff_eq!(p.progress(), 0.25, epsilon = 1e-6);
}

#[test]
fn test_paused_system_is_frozen() {
    let mut system = ParticleSystem::new();
    let id = system.create_emitter(
        EmitterConfig::at(Vec2::ZERO)
            .with_velocity(Generator::uniform_vec(Vec2::new(-1.0, -1.0), Vec2::new(1.0, 1.0)))
            .with_seed(4),
    );
    system.emitter_mut(id).unwrap().emit(10);
    system.update(0.1);
    let before = system.emitter(id).unwrap().particles().to_vec();

    for _ in 0..100 {
        system.update(0.0);
    }

    assert_eq!(system.emitter(id).unwrap().particles(), before.as_slice());
}

#[test]
fn test_dropped_emitter_takes_its_particles() {
    let mut system = ParticleSystem::new();
    let keep = system.create_emitter(EmitterConfig::at(Vec2::ZERO).with_seed(5));
    let gone = system.create_emitter(EmitterConfig::at(Vec2::ZERO).with_seed(6));
    system.emitter_mut(keep).unwrap().emit(2);
    system.emitter_mut(gone).unwrap().emit(7);

    assert!(system.drop_emitter(gone));
    assert_eq!(system.particle_count(), 2);
    assert!(system.emitter_mut(gone).is_none());
}

#[test]
fn test_preset_driven_frame() {
    let preset = EmitterPreset::from_toml(
        r##"
        velocity = { min = { x = -26.0, y = 31.5 }, max = { x = 26.0, y = 45.0 } }
        color = { one_of = ["#806057", "#504336"] }
        lifetime = { min = 0.5, max = 0.8 }
        alpha_curve = { kind = "trapeze", rise = 0.05, fall = 0.2 }
        blend_mode = "lighter"
        seed = 11
        "##,
    )
    .unwrap();

    let mut system = ParticleSystem::new();
    let id = system.create_emitter(preset.into_config(Vec2::new(50.0, 10.0)).unwrap());
    system.emitter_mut(id).unwrap().emit(20);
    system.update(1.0 / 60.0);

    let mut recorder = CommandRecorder::default();
    system.draw(&mut recorder);

    assert_eq!(recorder.filled_rects().count(), 20);
    assert_eq!(recorder.depth(), 0);
    assert!(recorder
        .commands()
        .contains(&RenderCommand::Blend(lantern_render::BlendMode::Lighter)));

    // One frame in, every particle is still fading in.
    for command in recorder.commands() {
        if let RenderCommand::GlobalAlpha(alpha) = command {
            assert!(*alpha < 1.0);
        }
    }
}

#[test]
fn test_curves_compose() {
    let fade_in = curve::linear();
    let fade_out = fade_in.invert();
    let pulse = fade_in.append(&fade_out, 1.0);

    assert_abs_diff_eq!(pulse.get(0.0), 0.0, epsilon = 1e-6);
    assert_abs_diff_eq!(pulse.get_exact(0.5), 1.0, epsilon = 1e-6);
    assert_abs_diff_eq!(pulse.get_exact(0.49), 0.98, epsilon = 1e-4);
    // The fade out is only read up to input 0.5.
    assert_abs_diff_eq!(pulse.get_exact(0.75), 0.75, epsilon = 1e-6);
    assert_abs_diff_eq!(pulse.get(1.0), 0.5, epsilon = 1e-6);
}
