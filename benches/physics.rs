//! Benchmarks for gasbag balloon simulation.

use criterion::{criterion_group, criterion_main, Criterion};
use gasbag::*;

fn balloons(count: usize, segments: usize) -> Simulation<f32> {
    let mut sim = Simulation::new(SimulationConfig::new()).unwrap();
    for i in 0..count {
        let x = -350.0 + 700.0 * i as f32 / count.max(1) as f32;
        sim.spawn_ring(Vec2::new(x, 150.0), 40.0, segments).unwrap();
    }
    sim
}

fn bench_single_balloon(c: &mut Criterion) {
    c.bench_function("balloon_32_segments_60_steps", |b| {
        b.iter(|| {
            let mut sim = balloons(1, 32);
            let dt = sim.config().dt();
            for _ in 0..60 {
                sim.step(dt, &mut NoOpStepObserver);
            }
            sim.positions()
        });
    });
}

fn bench_many_balloons(c: &mut Criterion) {
    c.bench_function("balloons_10x16_segments_60_steps", |b| {
        b.iter(|| {
            let mut sim = balloons(10, 16);
            let dt = sim.config().dt();
            for _ in 0..60 {
                sim.step(dt, &mut NoOpStepObserver);
            }
            sim.positions()
        });
    });
}

fn bench_shoelace_estimator(c: &mut Criterion) {
    c.bench_function("balloon_shoelace_32_segments_60_steps", |b| {
        b.iter(|| {
            let config = SimulationConfig::<f32>::new().with_area_estimator(AreaEstimator::Shoelace);
            let mut sim = Simulation::new(config).unwrap();
            sim.spawn_ring(Vec2::new(0.0, 0.0), 40.0, 32).unwrap();
            let dt = sim.config().dt();
            for _ in 0..60 {
                sim.step(dt, &mut NoOpStepObserver);
            }
            sim.positions()
        });
    });
}

fn bench_authoring(c: &mut Criterion) {
    c.bench_function("author_and_close_64_point_chain", |b| {
        let viewport = Viewport::fit_window(500.0f32, 1000.0).unwrap();
        b.iter(|| {
            let mut sim = Simulation::new(SimulationConfig::new()).unwrap();
            for i in 0..64 {
                let pointer = Vec2::new(300.0 + i as f32 * 5.0, 400.0);
                sim.frame(InputSample::held(pointer), &viewport, &mut NoOpStepObserver).unwrap();
            }
            sim.frame(InputSample::released(Vec2::zero()), &viewport, &mut NoOpStepObserver)
                .unwrap()
        });
    });
}

criterion_group!(
    benches,
    bench_single_balloon,
    bench_many_balloons,
    bench_shoelace_estimator,
    bench_authoring
);
criterion_main!(benches);
