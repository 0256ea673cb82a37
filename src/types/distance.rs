//! Definition of the [`DistanceStrategy`] capability.

use crate::types::coordinate::Coordinate;

/// Computes a scalar distance between two coordinates.
///
/// The unit is chosen by the implementation. Implementations should
/// return non-negative, symmetric results, but neither property is
/// checked by callers. Any failure (for example a formula that does not
/// converge for degenerate input) is reported through [`Self::Error`].
///
/// Each coordinate carries its own ellipsoid; reconciling two different
/// ellipsoids is up to the strategy.
pub trait DistanceStrategy {
    /// Error raised for inputs the strategy cannot handle.
    type Error;

    /// Returns the distance from `a` to `b`.
    fn distance(&self, a: &Coordinate, b: &Coordinate) -> Result<f64, Self::Error>;
}

impl<S: DistanceStrategy + ?Sized> DistanceStrategy for &S {
    type Error = S::Error;

    fn distance(&self, a: &Coordinate, b: &Coordinate) -> Result<f64, Self::Error> {
        (**self).distance(a, b)
    }
}
