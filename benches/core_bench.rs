use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use curve_point_editor::{
    fit_active_points, format_polynomial, Degree, DisplaySize, HitTester, NormalizedSpace, Point,
    PointSets,
};
use std::hint::black_box;

fn build_synthetic_points(count: usize) -> Vec<Point> {
    (0..count)
        .map(|i| {
            let x = ((i * 37) % 1920) as i32;
            let y = (540.0 + 300.0 * ((x as f64) / 300.0).sin()) as i32;
            Point::new(x, y)
        })
        .collect()
}

fn bench_polynomial_fit(c: &mut Criterion) {
    let mut group = c.benchmark_group("polynomial_fit");
    let space = NormalizedSpace::new(DisplaySize::new(1920, 1080), 50.0, 30.0);

    for &point_count in &[32usize, 512usize] {
        let points = build_synthetic_points(point_count);

        for degree in [2u8, 10u8] {
            group.bench_with_input(
                BenchmarkId::new(format!("degree_{degree}"), point_count),
                &points,
                |b, points| {
                    b.iter(|| {
                        let fit = fit_active_points(
                            black_box(points),
                            Degree::new(degree),
                            black_box(&space),
                        );
                        black_box(fit.map(|f| f.is_some()).unwrap_or(false))
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_toggle_clicks(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle_clicks");
    let tester = HitTester::new(20.0);

    for &point_count in &[100usize, 10_000usize] {
        let sets = PointSets::new(build_synthetic_points(point_count));
        let clicks = build_synthetic_points(256);

        group.bench_with_input(
            BenchmarkId::new("toggle_batch", point_count),
            &sets,
            |b, sets| {
                b.iter(|| {
                    let mut sets = sets.clone();
                    for &pos in &clicks {
                        black_box(sets.toggle_at(black_box(pos), &tester));
                    }
                    black_box(sets.active_count())
                })
            },
        );
    }

    group.finish();
}

fn bench_format(c: &mut Criterion) {
    let coefficients = [
        -0.0000012345, 0.00042, -0.031, 1.0, -1.0, 0.0, 12.5, -3.333333333333, 7.0, 0.1, 2.0,
    ];

    c.bench_function("format_polynomial_degree_10", |b| {
        b.iter(|| black_box(format_polynomial(black_box(&coefficients))))
    });
}

criterion_group!(
    core_benches,
    bench_polynomial_fit,
    bench_toggle_clicks,
    bench_format
);
criterion_main!(core_benches);
