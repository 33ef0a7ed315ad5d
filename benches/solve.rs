use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mazepaths::{
    enumerate_paths, generate,
    solver::{RecursiveWalk, Sweep},
    solve_with,
};

pub fn generation(c: &mut Criterion) {
    c.bench_function("generate_40_scarcity_0.5", |b| {
        b.iter(|| generate(black_box(40), black_box(0.5), Some(1)).unwrap())
    });
}

pub fn strategies(c: &mut Criterion) {
    let maze = generate(14, 0.5, Some(1)).unwrap();

    c.bench_function("recursive_walk_14", |b| {
        b.iter(|| {
            let mut maze = maze.clone();
            solve_with(black_box(&mut maze), &RecursiveWalk);
        })
    });

    c.bench_function("sweep_14", |b| {
        b.iter(|| {
            let mut maze = maze.clone();
            solve_with(black_box(&mut maze), &Sweep);
        })
    });
}

pub fn enumeration(c: &mut Criterion) {
    let maze = generate(40, 0.9, Some(1)).unwrap();

    c.bench_function("enumerate_10000_paths", |b| {
        b.iter(|| enumerate_paths(black_box(&maze), 10_000))
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = generation, strategies, enumeration}
criterion_main!(benches);
