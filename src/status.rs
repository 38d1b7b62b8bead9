use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};
use std::rc::Rc;

use crate::event::EventId;
use crate::geometry::{GeometryContext, Orientation, Point, SweepScalar};

/// `(numerator, denominator)` for a segment's y value at some abscissa,
/// with `denominator > 0`. Kept as a fraction rather than dividing so the
/// comparator works over any ring the caller's scalar type supports, not
/// just fields.
fn y_fraction<T: SweepScalar>(left: &Point<T>, right: &Point<T>, x: &T) -> (T, T) {
  let den = right.x().clone() - left.x().clone();
  if den == T::zero() {
    // Vertical segment: there is no single y at this x. Order it by its
    // lower endpoint, which is the best a single comparison key can do;
    // genuine vertical-vs-vertical ordering is resolved by the tie-breaks
    // below.
    return (left.y().clone(), T::one());
  }
  let num =
    left.y().clone() * den.clone() + (x.clone() - left.x().clone()) * (right.y().clone() - left.y().clone());
  (num, den)
}

/// Per spec.md §4.4: strict less-than by y at `x*`; ties broken by the
/// orientation of the other segment's far endpoint relative to the first
/// segment (so segments that coincide at `x*` are ordered by the direction
/// they head in afterwards); a final tie-break (segment identity) is left to
/// the caller, since two genuinely coincident (fully overlapping) segments
/// have no direction to prefer one way or the other.
fn cmp_at<T: SweepScalar, G: GeometryContext<T>>(
  context: &G,
  a: (&Point<T>, &Point<T>),
  b: (&Point<T>, &Point<T>),
  x: &T,
) -> Ordering {
  let (na, da) = y_fraction(a.0, a.1, x);
  let (nb, db) = y_fraction(b.0, b.1, x);
  (na * db).cmp(&(nb * da)).then_with(|| {
    // Both segments pass through the same point at `x*`. Where does `b`'s
    // far endpoint sit relative to the infinite line through `a`? Sweeping
    // left to right with "up" positive, a counter-clockwise turn from `a`
    // to `b`'s far endpoint means `b` continues above `a`, so `a` sorts
    // first (`Less`); collinear (the two lines coincide) leaves the tie
    // for the caller's final tie-break.
    match context.orientation(a.0, a.1, b.1) {
      Orientation::CounterClockWise => Ordering::Less,
      Orientation::ClockWise => Ordering::Greater,
      Orientation::CoLinear => Ordering::Equal,
    }
  })
}

/// One active segment, ordered by its value at the status's shared current
/// sweep point. Two entries with the same left/right event id never
/// coexist, so the final tie-break (by event id) only has to separate
/// genuinely distinct, currently-coincident segments.
struct StatusEntry<'a, T, G> {
  event: EventId,
  left: Point<T>,
  right: Point<T>,
  current: Rc<RefCell<Point<T>>>,
  context: &'a G,
}

impl<'a, T: SweepScalar, G: GeometryContext<T>> PartialEq for StatusEntry<'a, T, G> {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}
impl<'a, T: SweepScalar, G: GeometryContext<T>> Eq for StatusEntry<'a, T, G> {}

impl<'a, T: SweepScalar, G: GeometryContext<T>> PartialOrd for StatusEntry<'a, T, G> {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

impl<'a, T: SweepScalar, G: GeometryContext<T>> Ord for StatusEntry<'a, T, G> {
  fn cmp(&self, other: &Self) -> Ordering {
    let x = self.current.borrow().x().clone();
    cmp_at(self.context, (&self.left, &self.right), (&other.left, &other.right), &x)
      .then_with(|| self.event.0.cmp(&other.event.0))
  }
}

/// The sweep status (component D): active segments ordered by their
/// position along a sweep line currently sitting at `current`.
///
/// Realizes Design Note 9's option (a): a re-entrant comparator reading a
/// shared, driver-owned "current sweep point" cell, rather than resorting
/// the whole structure on every event. `BTreeSet::range` then gives
/// `O(log n)` neighbour lookups. The comparator also reads a borrowed
/// `GeometryContext` (component A) to break y-ties by direction, per
/// spec.md §4.4's three-level order.
pub struct Status<'a, T, G> {
  entries: BTreeSet<StatusEntry<'a, T, G>>,
  current: Rc<RefCell<Point<T>>>,
  context: &'a G,
}

impl<'a, T: SweepScalar, G: GeometryContext<T>> Status<'a, T, G> {
  pub fn new(context: &'a G, start: Point<T>) -> Self {
    Status {
      entries: BTreeSet::new(),
      current: Rc::new(RefCell::new(start)),
      context,
    }
  }

  pub fn set_sweep_point(&mut self, point: Point<T>) {
    *self.current.borrow_mut() = point;
  }

  fn key(&self, event: EventId, left: Point<T>, right: Point<T>) -> StatusEntry<'a, T, G> {
    StatusEntry {
      event,
      left,
      right,
      current: self.current.clone(),
      context: self.context,
    }
  }

  pub fn insert(&mut self, event: EventId, left: Point<T>, right: Point<T>) {
    self.entries.insert(self.key(event, left, right));
  }

  pub fn remove(&mut self, event: EventId, left: Point<T>, right: Point<T>) {
    self.entries.remove(&self.key(event, left, right));
  }

  /// The events immediately below and above the given segment, as if it
  /// were (or already is) a member of the status.
  pub fn neighbors(&self, event: EventId, left: Point<T>, right: Point<T>) -> (Option<EventId>, Option<EventId>) {
    let key = self.key(event, left, right);
    let prev = self.entries.range((Unbounded, Excluded(&key))).next_back().map(|e| e.event);
    let next = self.entries.range((Excluded(&key), Unbounded)).next().map(|e| e.event);
    (prev, next)
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::geometry::ExactContext;

  #[test]
  fn orders_segments_by_y_at_current_x() {
    let ctx = ExactContext;
    let mut status = Status::new(&ctx, Point::new(0, 0));
    status.insert(EventId(0), Point::new(0, 5), Point::new(10, 5));
    status.insert(EventId(1), Point::new(0, 1), Point::new(10, 1));
    status.set_sweep_point(Point::new(5, 0));
    let (below, above) = status.neighbors(EventId(2), Point::new(0, 3), Point::new(10, 3));
    assert_eq!(below, Some(EventId(1)));
    assert_eq!(above, Some(EventId(0)));
  }

  /// Three segments concurrent at `(0, 0)` but heading in different
  /// directions afterwards: the y-at-x* tier ties them all, so the
  /// orientation tier alone must separate them correctly.
  #[test]
  fn breaks_ties_at_a_shared_point_by_heading() {
    let ctx = ExactContext;
    let mut status = Status::new(&ctx, Point::new(0, 0));
    // Heads shallow-up, steep-up, and flat, in insertion order that does
    // not match their eventual vertical order.
    let steep = (EventId(0), Point::new(0, 0), Point::new(10, 10));
    let shallow = (EventId(1), Point::new(0, 0), Point::new(10, 2));
    let flat = (EventId(2), Point::new(0, 0), Point::new(10, 0));
    status.insert(steep.0, steep.1.clone(), steep.2.clone());
    status.insert(shallow.0, shallow.1.clone(), shallow.2.clone());
    status.insert(flat.0, flat.1.clone(), flat.2.clone());
    status.set_sweep_point(Point::new(0, 0));

    let (below_steep, _) = status.neighbors(steep.0, steep.1, steep.2);
    assert_eq!(below_steep, Some(shallow.0));
    let (below_shallow, above_shallow) = status.neighbors(shallow.0, shallow.1, shallow.2);
    assert_eq!(below_shallow, Some(flat.0));
    assert_eq!(above_shallow, Some(steep.0));
  }
}
