use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use life_census::catalogue::Catalogue;
use life_census::grid::random_grid;
use life_census::simulation::GenerationEngine;

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("generation_step");

    for size in [32usize, 64, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            let catalogue = Catalogue::standard().unwrap();
            let grid = random_grid(size, 0.2, 42);
            b.iter(|| {
                let mut engine = GenerationEngine::new(grid.clone(), catalogue.clone(), 1).unwrap();
                black_box(engine.step().unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_step);
criterion_main!(benches);
