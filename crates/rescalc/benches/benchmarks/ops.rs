use criterion::{BenchmarkId, Criterion};
use std::hint::black_box;

use rescalc::ops;
use rescalc::resources::{ResourceAmount, ResourceVector};

use crate::{create_vectors, kinds};

fn bench_fits_in(c: &mut Criterion) {
    for dimensions in [2, 4, 8] {
        let cluster = ResourceVector::filled(dimensions, ResourceAmount::new(16_384));
        let vectors = create_vectors(1_000, dimensions);
        let capacity = ResourceVector::filled(dimensions, ResourceAmount::new(8_192));
        for kind in kinds() {
            let calc = kind.create();
            c.bench_with_input(
                BenchmarkId::new(format!("fits in ({kind})"), dimensions),
                &vectors,
                |b, vectors| {
                    b.iter(|| {
                        vectors
                            .iter()
                            .filter(|v| ops::fits_in(calc.as_ref(), &cluster, v, &capacity))
                            .count()
                    });
                },
            );
        }
    }
}

fn bench_max(c: &mut Criterion) {
    let cluster = ResourceVector::filled(4, ResourceAmount::new(16_384));
    let vectors = create_vectors(1_000, 4);
    for kind in kinds() {
        let calc = kind.create();
        c.bench_with_input(
            BenchmarkId::new("max of 1k vectors", kind),
            &vectors,
            |b, vectors| {
                b.iter(|| {
                    black_box(
                        vectors
                            .iter()
                            .fold(&vectors[0], |acc, v| ops::max(calc.as_ref(), &cluster, acc, v)),
                    )
                });
            },
        );
    }
}

pub fn benchmark(c: &mut Criterion) {
    bench_fits_in(c);
    bench_max(c);
}
