use super::point::Point;
use super::relation::{Orientation, Relation};
use super::segment::Segment;

/// The injected geometry boundary (component A).
///
/// The sweep driver never computes an orientation, intersection point, or
/// segment relation itself; it asks a `GeometryContext` for the answer.
/// This is what lets the same driver run over exact rational arithmetic in
/// one configuration and over floating point with a robust predicate in
/// another, without touching the driver's code.
pub trait GeometryContext<T> {
  /// The turn `a -> b -> c` makes.
  fn orientation(&self, a: &Point<T>, b: &Point<T>, c: &Point<T>) -> Orientation;

  /// How `s` and `t` relate to each other.
  ///
  /// Two segments that only touch at a shared endpoint, or where one
  /// endpoint lands in the other's interior, are both reported as
  /// [`Relation::Touch`]; collinear segments whose ranges overlap by more
  /// than a point are [`Relation::Overlap`].
  fn segments_relation(&self, s: &Segment<T>, t: &Segment<T>) -> Relation;

  /// The single point at which two [`Relation::Cross`] segments meet.
  ///
  /// Only ever called once a prior call to [`Self::segments_relation`] has
  /// reported `Cross` for the same pair; implementations may assume the
  /// point exists and is unique.
  fn crossing_point(&self, s: &Segment<T>, t: &Segment<T>) -> Point<T>;

  /// Whether `p` lies anywhere on the closed segment `s`, endpoints
  /// included.
  fn point_in_segment(&self, p: &Point<T>, s: &Segment<T>) -> bool;
}
