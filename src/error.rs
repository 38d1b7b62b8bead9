use std::fmt;

/// Failures raised during input validation, before the sweep begins.
///
/// All other configurations (overlaps, concurrent segments, shared
/// endpoints, vertical segments) are normal inputs and never produce an
/// `Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than two segments were given to [`crate::any_intersection`] or
  /// [`crate::all_intersections`], or fewer than three vertices were given
  /// to [`crate::contour_self_intersects`].
  EmptyInput,
  /// The segment at this input index has two equal endpoints.
  DegenerateSegment { index: usize },
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Error::EmptyInput => write!(f, "not enough segments or vertices to form an input"),
      Error::DegenerateSegment { index } => {
        write!(f, "segment {index} has two equal endpoints")
      }
    }
  }
}

impl std::error::Error for Error {}

// Callers that want to reject duplicate (fully coincident) input segments
// instead of accepting and fusing them (the default policy, see `queue`'s
// fusion-on-insert) would add a variant here and a validation pass before
// the sweep starts. Nothing in this crate's public surface currently
// exposes such a mode, so it is left undone rather than half-wired.
