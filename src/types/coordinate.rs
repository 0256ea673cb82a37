//! Struct definitions and implementations for [`Coordinate`].
//!
//! A [`Coordinate`] is validated once, when it is built, and never
//! changes afterwards. Everything else it offers is delegated to
//! strategies supplied by the caller:
//!
//! * distances through a [`DistanceStrategy`],
//! * rendering through a [`FormatterStrategy`].
//!
//! Since the value is immutable, it can be shared across threads
//! freely, together with the [`Ellipsoid`] it points to.

use std::fmt;
use std::sync::Arc;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::algorithms::great_circle::GreatCircle;
use crate::error::{CoordinateError, Field};
use crate::types::distance::DistanceStrategy;
use crate::types::ellipsoid::Ellipsoid;
use crate::types::formatter::FormatterStrategy;
use crate::types::geometry::Geometry;
use crate::utils::bounds::{is_within, LATITUDE_RANGE, LONGITUDE_RANGE};

/// Default tolerance of [`Coordinate::is_same_location`], in meters.
///
/// The value is expressed in the unit of [`GreatCircle`]
/// ([`GreatCircle::UNIT`]), which is the strategy used for the
/// comparison: 0.001 means one millimeter.
pub const DEFAULT_TOLERANCE_METERS: f64 = 0.001;

/// A geographic position on a reference ellipsoid.
///
/// Fields are private; use the accessors. Float values are wrapped in
/// [`OrderedFloat`] so coordinates can be used as map keys. `NaN` can
/// never be stored since construction rejects it.
#[derive(Debug, PartialEq, Hash, Eq, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate", into = "RawCoordinate")]
pub struct Coordinate {
    /// Degrees, within `[-90, 90]`.
    latitude: OrderedFloat<f64>,

    /// Degrees, within `[-180, 180]`.
    longitude: OrderedFloat<f64>,

    /// Shared, read-only ellipsoid. See [`Ellipsoid::default_shared`].
    ellipsoid: Arc<Ellipsoid>,
}

/// Wire shape of a [`Coordinate`]; the ellipsoid is not serialized.
#[derive(Serialize, Deserialize)]
struct RawCoordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate on the default ellipsoid.
    ///
    /// # Arguments
    /// * `latitude` - Degrees within `[-90, 90]`, bounds included.
    /// * `longitude` - Degrees within `[-180, 180]`, bounds included.
    ///
    /// # Returns
    /// [`CoordinateError::InvalidCoordinate`] naming the first invalid
    /// field. Latitude is checked first, so it is the one reported when
    /// both are out of range.
    pub fn new(latitude: f64, longitude: f64) -> Result<Coordinate, CoordinateError> {
        Coordinate::with_ellipsoid(latitude, longitude, Ellipsoid::default_shared())
    }

    /// Creates a coordinate on the given ellipsoid.
    ///
    /// The ellipsoid is shared, not copied. Validation is the same as in
    /// [`Coordinate::new`]; values are stored exactly as supplied.
    pub fn with_ellipsoid(
        latitude: f64,
        longitude: f64,
        ellipsoid: Arc<Ellipsoid>,
    ) -> Result<Coordinate, CoordinateError> {
        check(Field::Latitude, latitude, LATITUDE_RANGE)?;
        check(Field::Longitude, longitude, LONGITUDE_RANGE)?;

        Ok(Coordinate {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
            ellipsoid,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude.into_inner()
    }

    pub fn longitude(&self) -> f64 {
        self.longitude.into_inner()
    }

    pub fn ellipsoid(&self) -> &Arc<Ellipsoid> {
        &self.ellipsoid
    }

    /// Computes the distance to `other` with the given strategy.
    ///
    /// The unit is whatever `strategy` uses. Errors raised by the
    /// strategy are returned as is.
    pub fn distance_to<S>(&self, other: &Coordinate, strategy: &S) -> Result<f64, S::Error>
    where
        S: DistanceStrategy + ?Sized,
    {
        strategy.distance(self, other)
    }

    /// Returns `true` if `other` is within [`DEFAULT_TOLERANCE_METERS`]
    /// of this coordinate.
    ///
    /// See [`Coordinate::is_same_location_within`].
    pub fn is_same_location(&self, other: &Coordinate) -> bool {
        self.is_same_location_within(other, DEFAULT_TOLERANCE_METERS)
    }

    /// Returns `true` if the [`GreatCircle`] distance to `other` is at
    /// most `tolerance_meters`.
    ///
    /// The great-circle approximation is accurate at the short range this
    /// check is meant for. A coordinate is always the same location as
    /// itself, even with a tolerance of zero.
    pub fn is_same_location_within(&self, other: &Coordinate, tolerance_meters: f64) -> bool {
        match self.distance_to(other, &GreatCircle) {
            Ok(distance) => distance <= tolerance_meters,
            Err(never) => match never {},
        }
    }

    /// Renders this coordinate with the given formatter and returns its
    /// output unchanged.
    pub fn format<F>(&self, formatter: &F) -> F::Output
    where
        F: FormatterStrategy + ?Sized,
    {
        formatter.format(self)
    }
}

/// Runs the bounds check for one field.
fn check(field: Field, value: f64, (min, max): (f64, f64)) -> Result<(), CoordinateError> {
    if is_within(value, min, max) {
        return Ok(());
    }

    debug!("Rejected {}: {} is not within [{}, {}]", field, value, min, max);
    Err(CoordinateError::InvalidCoordinate {
        field,
        value,
        min,
        max,
    })
}

impl Geometry for Coordinate {
    fn points(&self) -> &[Coordinate] {
        std::slice::from_ref(self)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = CoordinateError;

    /// Builds a coordinate from a `(latitude, longitude)` pair.
    fn try_from((latitude, longitude): (f64, f64)) -> Result<Self, Self::Error> {
        Coordinate::new(latitude, longitude)
    }
}

impl TryFrom<RawCoordinate> for Coordinate {
    type Error = CoordinateError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl From<Coordinate> for RawCoordinate {
    fn from(coordinate: Coordinate) -> Self {
        RawCoordinate {
            latitude: coordinate.latitude(),
            longitude: coordinate.longitude(),
        }
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
