use super::context::GeometryContext;
use super::point::Point;
use super::relation::{Orientation, Relation};
use super::scalar::SweepScalar;
use super::segment::Segment;

/// An exact `GeometryContext` over any scalar closed under `+ - * /` with a
/// total order (`num_rational::BigRational`, plain integers for the two
/// predicate-only operations, etc.) — see [`SweepScalar`] for exactly which
/// operations each backing type needs to support.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactContext;

fn cross<T: SweepScalar>(a: &Point<T>, b: &Point<T>, c: &Point<T>) -> T {
  let ux = b.x().clone() - a.x().clone();
  let uy = b.y().clone() - a.y().clone();
  let vx = c.x().clone() - a.x().clone();
  let vy = c.y().clone() - a.y().clone();
  ux * vy - uy * vx
}

fn classify<T: SweepScalar>(cross: T) -> Orientation {
  match cross.cmp(&T::zero()) {
    std::cmp::Ordering::Less => Orientation::ClockWise,
    std::cmp::Ordering::Greater => Orientation::CounterClockWise,
    std::cmp::Ordering::Equal => Orientation::CoLinear,
  }
}

/// Is `p` within the axis-aligned bounding box of `a` and `b`?
///
/// Only meaningful once `p` is already known to be collinear with `a`, `b`.
fn in_bbox<T: SweepScalar>(p: &Point<T>, a: &Point<T>, b: &Point<T>) -> bool {
  let (lo_x, hi_x) = if a.x() <= b.x() { (a.x(), b.x()) } else { (b.x(), a.x()) };
  let (lo_y, hi_y) = if a.y() <= b.y() { (a.y(), b.y()) } else { (b.y(), a.y()) };
  lo_x <= p.x() && p.x() <= hi_x && lo_y <= p.y() && p.y() <= hi_y
}

impl<T: SweepScalar> GeometryContext<T> for ExactContext {
  fn orientation(&self, a: &Point<T>, b: &Point<T>, c: &Point<T>) -> Orientation {
    classify(cross(a, b, c))
  }

  fn segments_relation(&self, s: &Segment<T>, t: &Segment<T>) -> Relation {
    let (s1, s2) = s.endpoints();
    let (t1, t2) = t.endpoints();

    let o1 = self.orientation(s1, s2, t1);
    let o2 = self.orientation(s1, s2, t2);
    let o3 = self.orientation(t1, t2, s1);
    let o4 = self.orientation(t1, t2, s2);

    if o1 != Orientation::CoLinear
      && o2 != Orientation::CoLinear
      && o3 != Orientation::CoLinear
      && o4 != Orientation::CoLinear
    {
      return if o1 != o2 && o3 != o4 {
        Relation::Cross
      } else {
        Relation::Disjoint
      };
    }

    // At least one endpoint is collinear with the other segment. If *all
    // four* are, the segments share a line; otherwise a single endpoint
    // touches the other segment (or misses it).
    if o1 == Orientation::CoLinear
      && o2 == Orientation::CoLinear
      && o3 == Orientation::CoLinear
      && o4 == Orientation::CoLinear
    {
      return self.collinear_relation(s, t);
    }

    let touches = (o1 == Orientation::CoLinear && in_bbox(t1, s1, s2))
      || (o2 == Orientation::CoLinear && in_bbox(t2, s1, s2))
      || (o3 == Orientation::CoLinear && in_bbox(s1, t1, t2))
      || (o4 == Orientation::CoLinear && in_bbox(s2, t1, t2));

    if touches {
      Relation::Touch
    } else {
      Relation::Disjoint
    }
  }

  fn crossing_point(&self, s: &Segment<T>, t: &Segment<T>) -> Point<T> {
    let (s1, s2) = s.endpoints();
    let (t1, t2) = t.endpoints();
    let (x1, y1) = (s1.x().clone(), s1.y().clone());
    let (x2, y2) = (s2.x().clone(), s2.y().clone());
    let (x3, y3) = (t1.x().clone(), t1.y().clone());
    let (x4, y4) = (t2.x().clone(), t2.y().clone());

    let denom = (x1.clone() - x2.clone()) * (y3.clone() - y4.clone())
      - (y1.clone() - y2.clone()) * (x3.clone() - x4.clone());
    let t_num = (x1.clone() - x3.clone()) * (y3.clone() - y4) - (y1.clone() - y3) * (x3 - x4);
    let ratio = t_num / denom;

    let x = x1.clone() + ratio.clone() * (x2 - x1);
    let y = y1.clone() + ratio * (y2 - y1);
    Point::new(x, y)
  }

  fn point_in_segment(&self, p: &Point<T>, s: &Segment<T>) -> bool {
    let (a, b) = s.endpoints();
    p == a || p == b || (self.orientation(a, b, p) == Orientation::CoLinear && in_bbox(p, a, b))
  }
}

impl ExactContext {
  fn collinear_relation<T: SweepScalar>(&self, s: &Segment<T>, t: &Segment<T>) -> Relation {
    let (s1, s2) = s.endpoints();
    let (t1, t2) = t.endpoints();

    // Same line: order all four endpoints along it by reusing `Point`'s own
    // lexicographic order, which is consistent with a line's direction
    // because the four points are collinear.
    let s_lo = s1.min(s2);
    let s_hi = s1.max(s2);
    let t_lo = t1.min(t2);
    let t_hi = t1.max(t2);

    if s_hi < t_lo || t_hi < s_lo {
      return Relation::Disjoint;
    }
    if s_hi == t_lo || t_hi == s_lo {
      return Relation::Touch;
    }
    Relation::Overlap
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn seg(ax: i64, ay: i64, bx: i64, by: i64) -> Segment<i64> {
    Segment::new(Point::new(ax, ay), Point::new(bx, by)).unwrap()
  }

  #[test]
  fn detects_proper_crossing() {
    let ctx = ExactContext;
    let a = seg(0, 0, 4, 4);
    let b = seg(0, 4, 4, 0);
    assert_eq!(ctx.segments_relation(&a, &b), Relation::Cross);
  }

  #[test]
  fn detects_disjoint() {
    let ctx = ExactContext;
    let a = seg(0, 0, 1, 1);
    let b = seg(5, 5, 6, 6);
    assert_eq!(ctx.segments_relation(&a, &b), Relation::Disjoint);
  }

  #[test]
  fn detects_shared_endpoint_as_touch() {
    let ctx = ExactContext;
    let a = seg(0, 0, 2, 2);
    let b = seg(2, 2, 4, 0);
    assert_eq!(ctx.segments_relation(&a, &b), Relation::Touch);
  }

  #[test]
  fn detects_collinear_overlap() {
    let ctx = ExactContext;
    let a = seg(0, 0, 4, 0);
    let b = seg(2, 0, 6, 0);
    assert_eq!(ctx.segments_relation(&a, &b), Relation::Overlap);
  }

  #[test]
  fn detects_collinear_touch() {
    let ctx = ExactContext;
    let a = seg(0, 0, 2, 0);
    let b = seg(2, 0, 4, 0);
    assert_eq!(ctx.segments_relation(&a, &b), Relation::Touch);
  }

  #[test]
  fn crossing_point_is_exact_with_rationals() {
    use num_rational::BigRational;
    use num_traits::FromPrimitive;
    let r = |n: i64| BigRational::from_i64(n).unwrap();
    let ctx = ExactContext;
    let a = Segment::new(Point::new(r(0), r(0)), Point::new(r(4), r(4))).unwrap();
    let b = Segment::new(Point::new(r(0), r(4)), Point::new(r(4), r(0))).unwrap();
    let p = ctx.crossing_point(&a, &b);
    assert_eq!(p, Point::new(r(2), r(2)));
  }
}
