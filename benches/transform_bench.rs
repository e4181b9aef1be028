//! Benchmarks for the forward and inverse CST transforms.
//!
//! Run with: `cargo bench --bench transform_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use cst_airfoil::{CstCoefficients, coords2cst, cst2coords_with};

/// Smooth cambered section with `n` weights per shape.
fn design(n: usize) -> CstCoefficients {
    let a_ca = (0..n).map(|i| 0.08 + 0.02 * (i as f64).sin()).collect();
    let a_th = (0..n).map(|i| 0.15 + 0.03 * (i as f64 * 0.7).cos()).collect();
    CstCoefficients::new(a_ca, a_th, 0.002)
}

/// Benchmark coefficients → coordinates.
fn bench_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("cst2coords");

    for n_coeffs in [3, 6, 12] {
        let coeffs = design(n_coeffs);
        for n_coords in [100, 400] {
            group.bench_with_input(
                BenchmarkId::new(format!("n{}", n_coeffs), format!("{}_stations", n_coords)),
                &n_coords,
                |b, &n_coords| {
                    b.iter(|| {
                        cst2coords_with(
                            black_box(&coeffs.a_ca),
                            black_box(&coeffs.a_th),
                            black_box(coeffs.t_te),
                            black_box(n_coords),
                        )
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmark coordinates → coefficients (least squares).
fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("coords2cst");

    for n_coeffs in [3, 6, 12] {
        let coords = design(n_coeffs).to_coordinates().unwrap();

        group.bench_with_input(
            BenchmarkId::new("fit", format!("n{}", n_coeffs)),
            &n_coeffs,
            |b, &n| {
                b.iter(|| {
                    coords2cst(
                        black_box(coords.x()),
                        black_box(coords.y_upper()),
                        black_box(coords.y_lower()),
                        black_box(n),
                        black_box(n),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_forward, bench_inverse);
criterion_main!(benches);
