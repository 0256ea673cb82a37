//! Closed-range checks used when validating coordinates.

/// Valid latitudes in degrees, inclusive.
pub const LATITUDE_RANGE: (f64, f64) = (-90.0, 90.0);

/// Valid longitudes in degrees, inclusive.
pub const LONGITUDE_RANGE: (f64, f64) = (-180.0, 180.0);

/// Returns `true` if `value` lies in `[min, max]`.
///
/// Both ends are inclusive. `NaN` is never within any range.
pub fn is_within(value: f64, min: f64, max: f64) -> bool {
    (min..=max).contains(&value)
}
