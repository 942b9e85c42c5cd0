use criterion::{black_box, criterion_group, criterion_main, Criterion};
use growmaze::{Dims, GrowingTree, Random};
use rand::SeedableRng as _;

const DIMS: Dims = Dims(100, 100);

pub fn growing_tree_run(c: &mut Criterion) {
    c.bench_function("growing_tree_run", |b| {
        b.iter(|| {
            let rng = Random::seed_from_u64(black_box(7));
            GrowingTree::new(black_box(DIMS), rng).unwrap().run()
        })
    });
}

pub fn growing_tree_steps(c: &mut Criterion) {
    c.bench_function("growing_tree_steps", |b| {
        b.iter(|| {
            let rng = Random::seed_from_u64(black_box(7));
            GrowingTree::new(black_box(DIMS), rng).unwrap().count()
        })
    });
}

criterion_group! {name = benches; config = Criterion::default().sample_size(10); targets = growing_tree_run, growing_tree_steps}
criterion_main!(benches);
