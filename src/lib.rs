//! Geographic Coordinate Library.
//! Validated latitude/longitude values with pluggable distance and
//! formatting strategies.
//!
//! ```
//! use geopoint::{Coordinate, DecimalDegrees, GreatCircle};
//!
//! let berlin = Coordinate::new(52.5200, 13.4050).unwrap();
//! let paris = Coordinate::new(48.8566, 2.3522).unwrap();
//!
//! let meters = berlin.distance_to(&paris, &GreatCircle).unwrap();
//! assert!(meters > 870_000.0 && meters < 890_000.0);
//! assert!(!berlin.is_same_location(&paris));
//! assert_eq!(berlin.format(&DecimalDegrees::default()), "52.52000, 13.40500");
//! ```

#[macro_use]
extern crate log;

pub mod error;

mod types {
    pub mod coordinate;
    pub mod distance;
    pub mod ellipsoid;
    pub mod formatter;
    pub mod geometry;
}

mod algorithms {
    pub mod great_circle;
    pub mod vincenty;
}

mod formatters {
    pub mod decimal;
    pub mod geojson;
}

mod utils {
    pub mod bounds;
    #[cfg(test)]
    pub mod generator;
}

pub use algorithms::great_circle::GreatCircle;
pub use algorithms::vincenty::{Vincenty, DEFAULT_MAX_ITERATIONS};
pub use error::{CoordinateError, Field, VincentyError};
pub use formatters::decimal::{DecimalDegrees, DEFAULT_PRECISION};
pub use formatters::geojson::GeoJson;
pub use types::coordinate::{Coordinate, DEFAULT_TOLERANCE_METERS};
pub use types::distance::DistanceStrategy;
pub use types::ellipsoid::{Ellipsoid, GRS80, WGS84};
pub use types::formatter::FormatterStrategy;
pub use types::geometry::{count_points, Geometry};
pub use utils::bounds::{is_within, LATITUDE_RANGE, LONGITUDE_RANGE};
