//! Definition of the [`FormatterStrategy`] capability.

use crate::types::coordinate::Coordinate;

/// Renders a coordinate into some representation.
///
/// The output type is left open. A formatter that can fail should use a
/// `Result` as its [`Output`](Self::Output).
pub trait FormatterStrategy {
    type Output;

    fn format(&self, point: &Coordinate) -> Self::Output;
}

impl<F: FormatterStrategy + ?Sized> FormatterStrategy for &F {
    type Output = F::Output;

    fn format(&self, point: &Coordinate) -> Self::Output {
        (**self).format(point)
    }
}
