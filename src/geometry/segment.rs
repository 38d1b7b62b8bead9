use super::point::Point;

/// A line segment, stored with its endpoints in sweep order.
///
/// `left` is the endpoint that sorts first under [`Point`]'s lexicographic
/// order; `right` sorts after it. Construction canonicalizes this, so a
/// `Segment` never has to be re-checked downstream.
#[derive(Debug, Clone)]
pub struct Segment<T> {
  left: Point<T>,
  right: Point<T>,
}

impl<T: Ord> Segment<T> {
  /// Builds a segment from two endpoints, reordering them if necessary.
  ///
  /// Returns `None` for a degenerate (zero-length) segment: both endpoints
  /// compare equal.
  pub fn new(a: Point<T>, b: Point<T>) -> Option<Segment<T>> {
    use std::cmp::Ordering;
    match a.cmp(&b) {
      Ordering::Less => Some(Segment { left: a, right: b }),
      Ordering::Greater => Some(Segment { left: b, right: a }),
      Ordering::Equal => None,
    }
  }

  pub fn left(&self) -> &Point<T> {
    &self.left
  }

  pub fn right(&self) -> &Point<T> {
    &self.right
  }

  pub fn is_vertical(&self) -> bool {
    self.left.x() == self.right.x()
  }

  pub fn endpoints(&self) -> (&Point<T>, &Point<T>) {
    (&self.left, &self.right)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn canonicalizes_endpoint_order() {
    let a = Point::new(5, 0);
    let b = Point::new(0, 0);
    let s = Segment::new(a, b).unwrap();
    assert_eq!(s.left(), &Point::new(0, 0));
    assert_eq!(s.right(), &Point::new(5, 0));
  }

  #[test]
  fn rejects_degenerate_segment() {
    let p = Point::new(1, 1);
    assert!(Segment::new(p.clone(), p).is_none());
  }

  #[test]
  fn detects_vertical() {
    let s = Segment::new(Point::new(3, 0), Point::new(3, 5)).unwrap();
    assert!(s.is_vertical());
  }
}
