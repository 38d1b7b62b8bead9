//! Public operations (component F): the three pure functions this crate
//! exposes, built on top of the sweep driver.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use crate::driver::{pair_key, Sweep, SweepOutcome};
use crate::error::Error;
use crate::geometry::{GeometryContext, Orientation, Point, Segment, SweepScalar};

/// Validates and canonicalizes raw `(left, right)` endpoint pairs into
/// [`Segment`]s, per §7: fewer than two segments is `EmptyInput`, and any
/// pair of equal endpoints is `DegenerateSegment` at its input index.
fn build_segments<T: SweepScalar>(raw: &[(Point<T>, Point<T>)]) -> Result<Vec<Segment<T>>, Error> {
  if raw.len() < 2 {
    return Err(Error::EmptyInput);
  }
  raw
    .iter()
    .enumerate()
    .map(|(index, (a, b))| Segment::new(a.clone(), b.clone()).ok_or(Error::DegenerateSegment { index }))
    .collect()
}

/// Whether any two distinct input segments intersect — share a point,
/// whether an endpoint, a crossing, or a collinear overlap.
pub fn any_intersection<T, G>(raw: &[(Point<T>, Point<T>)], context: &G) -> Result<bool, Error>
where
  T: SweepScalar,
  G: GeometryContext<T>,
{
  let segments = build_segments(raw)?;
  let sweep = Sweep::new(context, &segments, None);
  match sweep.run(true) {
    SweepOutcome::First(pair) => Ok(pair.is_some()),
    SweepOutcome::All(_) => unreachable!("run(true) only ever returns SweepOutcome::First"),
  }
}

/// Every intersection point, together with the indices of every input
/// segment passing through it.
///
/// A collinear overlap between two segments contributes both endpoints of
/// the shared sub-segment, each mapped to the same pair.
pub fn all_intersections<T, G>(
  raw: &[(Point<T>, Point<T>)],
  context: &G,
) -> Result<BTreeMap<Point<T>, BTreeSet<(usize, usize)>>, Error>
where
  T: SweepScalar,
  G: GeometryContext<T>,
{
  let segments = build_segments(raw)?;
  let sweep = Sweep::new(context, &segments, None);
  match sweep.run(false) {
    SweepOutcome::All(by_point) => Ok(by_point
      .into_iter()
      .map(|(point, pairs)| (point, pairs.into_iter().collect()))
      .collect()),
    SweepOutcome::First(_) => unreachable!("run(false) only ever returns SweepOutcome::All"),
  }
}

/// Whether a closed polygonal contour (cyclic vertex list, edges between
/// consecutive vertices) self-intersects.
///
/// Sharing an endpoint between two edges that are consecutive in the cycle
/// is not a self-intersection; any other contact between two edges is. A
/// zero-length edge, or three consecutive collinear vertices, is always
/// reported as self-intersecting regardless of what the rest of the contour
/// does.
pub fn contour_self_intersects<T, G>(vertices: &[Point<T>], context: &G) -> Result<bool, Error>
where
  T: SweepScalar,
  G: GeometryContext<T>,
{
  let n = vertices.len();
  if n < 3 {
    return Err(Error::EmptyInput);
  }

  for i in 0..n {
    if vertices[i] == vertices[(i + 1) % n] {
      return Ok(true);
    }
  }
  for i in 0..n {
    let prev = &vertices[(i + n - 1) % n];
    let cur = &vertices[i];
    let next = &vertices[(i + 1) % n];
    if context.orientation(prev, cur, next) == Orientation::CoLinear {
      return Ok(true);
    }
  }

  // Neither loop above fired, so every consecutive pair of vertices is
  // distinct and no three consecutive vertices are collinear: building a
  // `Segment` per edge can never hit the degenerate case.
  let segments: Vec<Segment<T>> = (0..n)
    .map(|i| Segment::new(vertices[i].clone(), vertices[(i + 1) % n].clone()).unwrap())
    .collect();
  let adjacency: HashSet<(usize, usize)> = (0..n).map(|i| pair_key(i, (i + 1) % n)).collect();

  let sweep = Sweep::new(context, &segments, Some(adjacency));
  match sweep.run(true) {
    SweepOutcome::First(pair) => Ok(pair.is_some()),
    SweepOutcome::All(_) => unreachable!("run(true) only ever returns SweepOutcome::First"),
  }
}
