//! Great-circle distance using the haversine formula.
//!
//! The earth is treated as a sphere with the mean radius of the first
//! coordinate's ellipsoid. Error is up to about 0.5% over long
//! distances, far less at the range of a few kilometers.

use std::convert::Infallible;

use crate::types::coordinate::Coordinate;
use crate::types::distance::DistanceStrategy;

/// Default [`DistanceStrategy`]. Distances are in meters.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct GreatCircle;

impl GreatCircle {
    /// Unit of the returned distances.
    pub const UNIT: &'static str = "m";
}

impl DistanceStrategy for GreatCircle {
    type Error = Infallible;

    fn distance(&self, a: &Coordinate, b: &Coordinate) -> Result<f64, Self::Error> {
        if a.ellipsoid() != b.ellipsoid() {
            debug!(
                "Ellipsoids differ ({} and {}), using {}",
                a.ellipsoid().name(),
                b.ellipsoid().name(),
                a.ellipsoid().name()
            );
        }
        let radius = a.ellipsoid().mean_radius();

        let lat1 = a.latitude().to_radians();
        let lat2 = b.latitude().to_radians();
        let d_lat = lat2 - lat1;
        let d_lon = (b.longitude() - a.longitude()).to_radians();

        let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        // Rounding can push h slightly above 1 for antipodal points.
        let c = 2.0 * h.min(1.0).sqrt().asin();

        let distance = radius * c;
        trace!("great-circle {} -> {}: {} {}", a, b, distance, Self::UNIT);
        Ok(distance)
    }
}
