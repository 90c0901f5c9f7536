//! # Particle Simulation Benchmark
//!
//! Run with: `cargo bench --package lantern_particles`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lantern_particles::{curve, EmitterConfig, Generator, ParticleEmitter};
use lantern_render::CommandRecorder;
use lantern_shared::Vec2;

fn dust_config() -> EmitterConfig {
    EmitterConfig::at(Vec2::ZERO)
        .with_velocity(Generator::uniform_vec(Vec2::new(-26.0, 31.5), Vec2::new(26.0, 45.0)))
        .with_gravity(Vec2::new(0.0, -100.0))
        .with_lifetime(Generator::uniform(50.0, 80.0))
        .with_break_factor(0.8)
        .with_alpha_curve(curve::trapeze(0.05, 0.2))
        .with_seed(42)
}

/// Benchmark: emission cost (generator sampling + push).
fn bench_emit(c: &mut Criterion) {
    let mut group = c.benchmark_group("emit");

    for count in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut emitter = ParticleEmitter::new(dust_config());
                emitter.emit(count);
                black_box(emitter.particle_count())
            });
        });
    }

    group.finish();
}

/// Benchmark: one 60 Hz tick over 10k live particles.
fn bench_update(c: &mut Criterion) {
    let mut emitter = ParticleEmitter::new(dust_config());
    emitter.emit(10_000);

    c.bench_function("update_10k", |b| {
        b.iter(|| {
            emitter.update(black_box(1.0 / 60.0));
        });
    });
}

/// Benchmark: recording draw commands for 10k particles.
fn bench_draw(c: &mut Criterion) {
    let mut emitter = ParticleEmitter::new(dust_config());
    emitter.emit(10_000);
    emitter.update(0.1);
    let mut recorder = CommandRecorder::default();

    c.bench_function("draw_10k", |b| {
        b.iter(|| {
            recorder.begin_frame();
            emitter.draw(&mut recorder);
            black_box(recorder.command_count())
        });
    });
}

criterion_group!(benches, bench_emit, bench_update, bench_draw);
criterion_main!(benches);
