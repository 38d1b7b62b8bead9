use num_traits::*;
use std::iter::Sum;
use std::ops::*;

/// Scalars usable by reference inside [`super::exact::ExactContext`].
pub trait SweepScalarRef<T = Self, Output = Self>: Clone + NumOps<T, Output> {}
impl<T, Rhs, Output> SweepScalarRef<Rhs, Output> for T where T: Clone + NumOps<Rhs, Output> {}

/// Scalars usable by value inside [`super::exact::ExactContext`].
///
/// `Div` is part of `NumOps` and therefore part of this bound too: computing
/// the exact point where two segments cross requires dividing one
/// determinant by another, so only scalars closed under division (rationals,
/// not bare integers) can back [`super::exact::ExactContext::crossing_point`].
/// `any_intersection` and `contour_self_intersects` never call that method
/// (they return as soon as a qualifying relation is known, before any point
/// needs computing), so plain integer scalars are exact for those two.
pub trait SweepScalar<T = Self, Output = Self>:
  SweepScalarRef<T, Output> + One + Zero + Sum + Ord + Neg<Output = Output>
{
}
impl<T, Rhs, Output> SweepScalar<Rhs, Output> for T where
  T: SweepScalarRef<Rhs, Output> + One + Zero + Sum + Ord + Neg<Output = Output>
{
}
