use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lwe_csprng::generators::{
    BytesPerChild, ChildrenCount, DefaultRandomGenerator, ParallelRandomGenerator,
    RandomGenerator,
};
use lwe_csprng::seeders::Seed;
use rayon::prelude::*;

// Bytes of a 64 bits mask of dimension 630.
const MASK_BYTES: usize = 630 * 8;
const CHILDREN: [usize; 3] = [16, 256, 4096];

fn mask_generation(c: &mut Criterion) {
    let mut generator = DefaultRandomGenerator::new(Seed(0));
    let mut mask = vec![0_u8; MASK_BYTES];
    let mut group = c.benchmark_group("mask_generation");
    group.throughput(Throughput::Bytes(MASK_BYTES as u64));
    group.bench_function("sequential", |b| {
        b.iter(|| {
            mask.iter_mut()
                .zip(&mut generator)
                .for_each(|(byte, random)| *byte = random);
            black_box(&mask);
        })
    });
    group.finish();
}

fn fork_per_ciphertext(c: &mut Criterion) {
    let mut group = c.benchmark_group("fork_per_ciphertext");
    for children in CHILDREN {
        group.bench_with_input(BenchmarkId::new("sequential", children), &children, |b, &n| {
            let mut generator = DefaultRandomGenerator::new(Seed(1));
            b.iter(|| {
                let masks = generator
                    .try_fork(ChildrenCount(n), BytesPerChild(MASK_BYTES))
                    .expect("the parent generator is unbounded")
                    .map(|child| child.take(MASK_BYTES).fold(0_u8, u8::wrapping_add))
                    .collect::<Vec<_>>();
                black_box(masks)
            })
        });
        group.bench_with_input(BenchmarkId::new("parallel", children), &children, |b, &n| {
            let mut generator = DefaultRandomGenerator::new(Seed(1));
            b.iter(|| {
                let masks = generator
                    .par_try_fork(ChildrenCount(n), BytesPerChild(MASK_BYTES))
                    .expect("the parent generator is unbounded")
                    .map(|child| child.take(MASK_BYTES).fold(0_u8, u8::wrapping_add))
                    .collect::<Vec<_>>();
                black_box(masks)
            })
        });
    }
    group.finish();
}

criterion_group!(benches, mask_generation, fork_per_ciphertext);
criterion_main!(benches);
