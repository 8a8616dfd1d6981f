//! Sweep-vs-brute-force timing comparison, trimmed from the teacher's
//! `geo/benches/sweep_line_intersection.rs` five-group suite down to one
//! representative comparison across dataset sizes plus a dense-grid case.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use geo_sweep::segment_traits::StraightSegmentTraits;
use geo_sweep::Sweeper;
use geo_types::Line;
use rand::prelude::*;

fn generate_random_lines(count: usize, rng: &mut impl Rng) -> Vec<Line<f64>> {
    let mut lines = Vec::with_capacity(count);
    for _ in 0..count {
        let x1 = rng.gen_range(-100.0..100.0);
        let y1 = rng.gen_range(-100.0..100.0);
        let x2 = rng.gen_range(-100.0..100.0);
        let y2 = rng.gen_range(-100.0..100.0);
        lines.push(Line::from([(x1, y1), (x2, y2)]));
    }
    lines
}

fn brute_force_intersection_count(lines: &[Line<f64>]) -> usize {
    fn orient(a: geo_types::Coord<f64>, b: geo_types::Coord<f64>, c: geo_types::Coord<f64>) -> f64 {
        (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
    }
    let mut count = 0;
    for i in 0..lines.len() {
        for j in (i + 1)..lines.len() {
            let (a, b) = (lines[i].start, lines[i].end);
            let (c, d) = (lines[j].start, lines[j].end);
            let o1 = orient(a, b, c).signum();
            let o2 = orient(a, b, d).signum();
            let o3 = orient(c, d, a).signum();
            let o4 = orient(c, d, b).signum();
            if o1 != o2 && o3 != o4 {
                count += 1;
            }
        }
    }
    count
}

fn sweep_intersection_count(lines: &[Line<f64>]) -> usize {
    let sweeper = Sweeper::new(StraightSegmentTraits::<f64>::new());
    let mut count = 0;
    sweeper
        .get_intersection_points(lines.iter().copied(), true, |_| count += 1)
        .unwrap();
    count
}

fn bench_performance_comparison(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    for (n, sample_size) in [(10, None), (100, None), (1_000, Some(20)), (10_000, Some(10))] {
        let mut group = c.benchmark_group(format!("Performance Comparison ({n} lines)"));
        if let Some(sample_size) = sample_size {
            group.sample_size(sample_size);
        }

        let lines = generate_random_lines(n, &mut rng);

        group.bench_function("brute_force", |b| {
            b.iter(|| black_box(brute_force_intersection_count(&lines)));
        });
        group.bench_function("sweep", |b| {
            b.iter(|| black_box(sweep_intersection_count(&lines)));
        });

        group.finish();
    }
}

fn bench_dense_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("Dense Grid Intersections");
    group.sample_size(10);

    let n = 1000;
    let mut lines = Vec::with_capacity(n);
    for i in 0..n / 2 {
        let pos = (i as f64) * 2.0 - (n as f64 / 2.0);
        lines.push(Line::from([(-50.0, pos), (50.0, pos)]));
        lines.push(Line::from([(pos, -50.0), (pos, 50.0)]));
    }

    group.bench_function("brute_force_dense", |b| {
        b.iter(|| black_box(brute_force_intersection_count(&lines)));
    });
    group.bench_function("sweep_dense", |b| {
        b.iter(|| black_box(sweep_intersection_count(&lines)));
    });

    group.finish();
}

criterion_group!(benches, bench_performance_comparison, bench_dense_grid);
criterion_main!(benches);
