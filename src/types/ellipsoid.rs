//! Struct definitions and implementations for [`Ellipsoid`].
//!
//! A coordinate only needs to know *which* ellipsoid it sits on. The
//! numbers are read by distance strategies, never by the coordinate
//! itself.

use std::sync::Arc;

use once_cell::sync::Lazy;
use ordered_float::OrderedFloat;
use serde::Serialize;

/// Reference ellipsoid described by its semi-major axis and flattening.
///
/// Values are wrapped in [`OrderedFloat`] so that ellipsoids (and the
/// coordinates that carry them) can be compared and hashed by value.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize)]
pub struct Ellipsoid {
    /// Short identifier, e.g. `WGS84`.
    name: &'static str,

    /// Semi-major axis in meters.
    a: OrderedFloat<f64>,

    /// Flattening, dimensionless.
    f: OrderedFloat<f64>,
}

/// World Geodetic System 1984.
pub const WGS84: Ellipsoid = Ellipsoid::named("WGS84", 6_378_137.0, 1.0 / 298.257_223_563);

/// Geodetic Reference System 1980.
pub const GRS80: Ellipsoid = Ellipsoid::named("GRS80", 6_378_137.0, 1.0 / 298.257_222_101);

/// Process default, shared by every coordinate built without an
/// explicit ellipsoid.
static DEFAULT_ELLIPSOID: Lazy<Arc<Ellipsoid>> = Lazy::new(|| Arc::new(WGS84));

impl Ellipsoid {
    /// User defined ellipsoid.
    ///
    /// # Arguments
    /// * `semi_major_axis` - In meters.
    /// * `flattening` - `(a - b) / a`, e.g. `1.0 / 298.257223563`.
    pub const fn new(semi_major_axis: f64, flattening: f64) -> Ellipsoid {
        Ellipsoid::named("custom", semi_major_axis, flattening)
    }

    /// User defined ellipsoid with a name, usable in `const` context.
    pub const fn named(name: &'static str, semi_major_axis: f64, flattening: f64) -> Ellipsoid {
        Ellipsoid {
            name,
            a: OrderedFloat(semi_major_axis),
            f: OrderedFloat(flattening),
        }
    }

    /// Returns the shared default ellipsoid ([`WGS84`]).
    ///
    /// The instance is created on first use and never changes. Every
    /// call hands out the same allocation.
    pub fn default_shared() -> Arc<Ellipsoid> {
        Arc::clone(&DEFAULT_ELLIPSOID)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.a.into_inner()
    }

    pub fn flattening(&self) -> f64 {
        self.f.into_inner()
    }

    /// Semi-minor axis *b = a(1 - f)*.
    pub fn semi_minor_axis(&self) -> f64 {
        self.semi_major_axis() * (1.0 - self.flattening())
    }

    /// Squared eccentricity *e² = f(2 - f)*.
    pub fn eccentricity_squared(&self) -> f64 {
        let f = self.flattening();
        f * (2.0 - f)
    }

    /// Mean radius *R1 = (2a + b) / 3*, the sphere used by
    /// great-circle approximations.
    pub fn mean_radius(&self) -> f64 {
        (2.0 * self.semi_major_axis() + self.semi_minor_axis()) / 3.0
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        WGS84
    }
}

#[cfg(test)]
mod ellipsoid_tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wgs84_derived_values() {
        assert_relative_eq!(WGS84.semi_major_axis(), 6_378_137.0);
        assert_relative_eq!(WGS84.semi_minor_axis(), 6_356_752.314_245, epsilon = 0.001);
        assert_relative_eq!(WGS84.eccentricity_squared(), 0.006_694_379_990_14, epsilon = 1e-12);
        assert_relative_eq!(WGS84.mean_radius(), 6_371_008.771, epsilon = 0.001);
    }

    #[test]
    fn test_default_is_shared() {
        let first = Ellipsoid::default_shared();
        let second = Ellipsoid::default_shared();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(*first, WGS84);
        assert_eq!(Ellipsoid::default(), WGS84);
    }

    #[test]
    fn test_value_equality() {
        assert_ne!(WGS84, GRS80);
        assert_eq!(Ellipsoid::new(6_378_137.0, 0.0).name(), "custom");
        assert_eq!(
            Ellipsoid::new(6_378_137.0, 0.0),
            Ellipsoid::new(6_378_137.0, 0.0)
        );
    }

    #[test]
    fn test_serialize() {
        assert_eq!(
            serde_json::to_value(WGS84).unwrap(),
            serde_json::json!({
                "name": "WGS84",
                "a": 6_378_137.0,
                "f": 1.0 / 298.257_223_563,
            })
        );
    }

    #[test]
    fn test_default_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(Ellipsoid::default_shared))
            .collect();
        let local = Ellipsoid::default_shared();
        for handle in handles {
            let remote = handle.join().unwrap();
            assert!(Arc::ptr_eq(&local, &remote));
        }
    }
}
