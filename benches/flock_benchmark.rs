/*
 * Flock Update Benchmark
 *
 * Measures one full update pass (neighbor scan plus integration) of the
 * boid collection at a few population sizes. The scan is O(n^2), which is
 * fine at demo scale; this bench is the canary if that assumption changes.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use std::time::Duration;

use pixel_boids::{BoidCollection, SimRng, SimulationParams};

fn bench_update_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("update_pass");
    let bounds = vec2(800.0, 1000.0);

    for num_boids in [30usize, 50, 100, 200] {
        group.bench_with_input(
            BenchmarkId::from_parameter(num_boids),
            &num_boids,
            |b, &n| {
                let params = SimulationParams::swarming();
                let mut rng = SimRng::seeded(1);
                let mut collection = BoidCollection::new(n, bounds, &mut rng);

                b.iter(|| {
                    collection.update(&params, bounds, &mut rng);
                    black_box(collection.len());
                });
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_update_pass
}

criterion_main!(benches);
