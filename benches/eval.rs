//! Benchmarks for Hermite segment operations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use hermite2d::curves::{cardinal_tangents, HermiteSegment2, CARDINAL_TENSION, PLOT_STEPS};
use hermite2d::Point2;

fn scenario_segment() -> HermiteSegment2<f64> {
    let points = [
        Point2::new(2.0, 2.0),
        Point2::new(12.0, 10.0),
        Point2::new(4.0, 8.0),
    ];
    HermiteSegment2::from_control_points(&points, CARDINAL_TENSION).unwrap()
}

fn bench_eval(c: &mut Criterion) {
    let mut group = c.benchmark_group("hermite_eval");
    let segment = scenario_segment();

    // Single evaluation
    group.bench_function("single", |b| b.iter(|| segment.eval(black_box(0.5))));

    // Multiple evaluations
    for count in [10, 100, 1000] {
        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("batch", count), &count, |b, &count| {
            b.iter(|| {
                for i in 0..count {
                    let u = i as f64 / count as f64;
                    let _ = segment.eval(black_box(u));
                }
            })
        });
    }

    group.finish();
}

fn bench_sample_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("hermite_sample_path");
    let segment = scenario_segment();

    group.bench_function("plot_steps", |b| {
        b.iter(|| segment.sample_path(black_box(PLOT_STEPS)))
    });

    group.finish();
}

fn bench_tangents(c: &mut Criterion) {
    let points = [
        Point2::new(2.0, 2.0),
        Point2::new(12.0, 10.0),
        Point2::new(4.0, 8.0),
    ];

    c.bench_function("cardinal_tangents", |b| {
        b.iter(|| cardinal_tangents(black_box(&points), black_box(CARDINAL_TENSION)))
    });
}

criterion_group!(benches, bench_eval, bench_sample_path, bench_tangents);
criterion_main!(benches);
