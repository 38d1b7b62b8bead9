use criterion::{criterion_group, criterion_main, Criterion};

use sweepline_intersect::geometry::{ExactContext, Point};
use sweepline_intersect::{all_intersections, any_intersection};

/// A "staircase" of `n` segments, each overlapping its neighbours' x-range,
/// so every new segment is adjacent to several already-active ones and the
/// sweep status does real work at every event instead of staying flat.
fn staircase(n: i64) -> Vec<(Point<i64>, Point<i64>)> {
  (0..n)
    .map(|i| (Point::new(i, 0), Point::new(i + 2, n - i)))
    .collect()
}

fn criterion_benchmark(c: &mut Criterion) {
  let ctx = ExactContext;

  let small = staircase(50);
  c.bench_function("any_intersection(staircase 50)", |b| {
    b.iter(|| any_intersection(&small, &ctx).unwrap())
  });

  let medium = staircase(500);
  c.bench_function("all_intersections(staircase 500)", |b| {
    b.iter(|| all_intersections(&medium, &ctx).unwrap())
  });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
