//! Exact planar line-segment intersection via the Bentley–Ottmann sweep-line
//! algorithm.
//!
//! The three public operations — [`any_intersection`], [`all_intersections`],
//! [`contour_self_intersects`] — never compute a geometric predicate
//! themselves. Every orientation test, segment-relation classification, and
//! crossing-point computation is routed through an injected
//! [`geometry::GeometryContext`], so the same sweep engine runs identically
//! over exact rational arithmetic ([`geometry::ExactContext`]) or floating
//! point with a robust predicate ([`geometry::FloatContext`]).
//!
//! ```
//! use sweepline_intersect::geometry::{ExactContext, Point};
//! use sweepline_intersect::any_intersection;
//!
//! let ctx = ExactContext;
//! let segments = [
//!   (Point::new(0, 0), Point::new(1, 0)),
//!   (Point::new(0, 0), Point::new(0, 1)),
//! ];
//! assert!(any_intersection(&segments, &ctx).unwrap());
//! ```

mod driver;
mod error;
mod event;
pub mod geometry;
mod ops;
mod queue;
mod status;

pub use error::Error;
pub use ops::{all_intersections, any_intersection, contour_self_intersects};

#[cfg(test)]
mod naive;
