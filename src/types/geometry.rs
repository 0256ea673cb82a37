//! The [`Geometry`] trait shared by every shape made of coordinates.
//!
//! Rust has no inheritance, so shapes expose their vertices through a
//! trait instead, in the same way nodes are exposed through `AsNode`.
//! A single [`Coordinate`] is the smallest geometry: a slice of one.

use crate::types::coordinate::Coordinate;

/// Anything that can hand out the coordinates it is made of.
pub trait Geometry {
    /// All points of the geometry. Order carries no meaning for
    /// single points.
    fn points(&self) -> &[Coordinate];
}

impl Geometry for [Coordinate] {
    fn points(&self) -> &[Coordinate] {
        self
    }
}

impl Geometry for Vec<Coordinate> {
    fn points(&self) -> &[Coordinate] {
        self.as_slice()
    }
}

/// Counts the points over several geometries of any kind.
///
/// # Arguments
/// * `geometries` - Geometries to visit, e.g. single coordinates mixed
///   with point lists.
pub fn count_points(geometries: &[&dyn Geometry]) -> usize {
    geometries.iter().map(|geometry| geometry.points().len()).sum()
}

#[cfg(test)]
mod geometry_tests {
    use super::*;

    #[test]
    fn test_mixed_geometries() {
        let single = Coordinate::new(40.730610, -73.935242).unwrap();
        let line = vec![
            Coordinate::new(37.777843, -122.468207).unwrap(),
            Coordinate::new(37.778339, -122.460395).unwrap(),
        ];

        assert_eq!(count_points(&[&single, &line]), 3);
        assert_eq!(line.as_slice().points().len(), 2);
    }
}
