use criterion::{BatchSize, BenchmarkId, Criterion};
use std::hint::black_box;

use rescalc::resources::{ResourceAmount, ResourceVector};

use crate::{create_vectors, kinds};

fn bench_sort(c: &mut Criterion) {
    for dimensions in [2, 4, 8] {
        let cluster = ResourceVector::filled(dimensions, ResourceAmount::new(16_384));
        for kind in kinds() {
            let calc = kind.create();
            c.bench_with_input(
                BenchmarkId::new(format!("sort 10k vectors ({kind})"), dimensions),
                &dimensions,
                |b, &dimensions| {
                    b.iter_batched_ref(
                        || create_vectors(10_000, dimensions),
                        |vectors| vectors.sort_by(|a, b| calc.compare(&cluster, a, b)),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

fn bench_normalize(c: &mut Criterion) {
    for dimensions in [2, 4, 8] {
        let minimum = ResourceVector::filled(dimensions, ResourceAmount::new(1_000));
        let maximum = ResourceVector::filled(dimensions, ResourceAmount::new(8_192));
        let increment = ResourceVector::filled(dimensions, ResourceAmount::new(512));
        let vectors = create_vectors(1_000, dimensions);
        for kind in kinds() {
            let calc = kind.create();
            c.bench_with_input(
                BenchmarkId::new(format!("normalize 1k vectors ({kind})"), dimensions),
                &vectors,
                |b, vectors| {
                    b.iter(|| {
                        for ask in vectors {
                            black_box(calc.normalize(ask, &minimum, &maximum, &increment));
                        }
                    });
                },
            );
        }
    }
}

pub fn benchmark(c: &mut Criterion) {
    bench_sort(c);
    bench_normalize(c);
}
