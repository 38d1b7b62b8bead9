/// The turn a path `a -> b -> c` makes, as decided by a [`crate::GeometryContext`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}

/// How two segments relate to each other along the sweep.
///
/// `Touch` covers both a shared endpoint and an endpoint landing in the
/// interior of the other segment; the driver does not need to tell those
/// apart, only whether a new event point results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
  Disjoint,
  Touch,
  Cross,
  Overlap,
}
