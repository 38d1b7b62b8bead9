//! `O(n^2)` baseline used only by property tests to check the sweep driver
//! against brute-force pairwise comparison.

use std::cmp::{max, min};
use std::collections::{BTreeMap, BTreeSet};

use crate::driver::{pair_key, touch_point};
use crate::geometry::{GeometryContext, Point, Relation, Segment, SweepScalar};

/// Every intersection point among `segments`, found by testing every pair.
///
/// Mirrors the sweep driver's reporting rule exactly (a crossing or touch
/// contributes its single point; a collinear overlap contributes both
/// endpoints of the shared sub-segment) so the two can be compared directly.
pub fn all_intersections<T, G>(segments: &[Segment<T>], context: &G) -> BTreeMap<Point<T>, BTreeSet<(usize, usize)>>
where
  T: SweepScalar,
  G: GeometryContext<T>,
{
  let mut out: BTreeMap<Point<T>, BTreeSet<(usize, usize)>> = BTreeMap::new();
  for i in 0..segments.len() {
    for j in (i + 1)..segments.len() {
      match context.segments_relation(&segments[i], &segments[j]) {
        Relation::Disjoint => {}
        Relation::Cross => {
          let p = context.crossing_point(&segments[i], &segments[j]);
          out.entry(p).or_default().insert(pair_key(i, j));
        }
        Relation::Touch => {
          let p = touch_point(context, &segments[i], &segments[j]);
          out.entry(p).or_default().insert(pair_key(i, j));
        }
        Relation::Overlap => {
          let lo = max(segments[i].left(), segments[j].left()).clone();
          let hi = min(segments[i].right(), segments[j].right()).clone();
          out.entry(lo).or_default().insert(pair_key(i, j));
          out.entry(hi).or_default().insert(pair_key(i, j));
        }
      }
    }
  }
  out
}
