//! GeoJSON `Point` output (RFC 7946).

use serde_json::{json, Value};

use crate::types::coordinate::Coordinate;
use crate::types::formatter::FormatterStrategy;

/// Formats a coordinate as a GeoJSON `Point` geometry.
///
/// GeoJSON puts longitude first: `[longitude, latitude]`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct GeoJson;

impl FormatterStrategy for GeoJson {
    type Output = Value;

    fn format(&self, point: &Coordinate) -> Self::Output {
        json!({
            "type": "Point",
            "coordinates": [point.longitude(), point.latitude()],
        })
    }
}

#[cfg(test)]
mod geojson_tests {
    use super::*;

    #[test]
    fn test_point() {
        let point = Coordinate::new(40.730610, -73.935242).unwrap();
        assert_eq!(
            point.format(&GeoJson),
            json!({ "type": "Point", "coordinates": [-73.935242, 40.730610] })
        );
    }

    #[test]
    fn test_serializes_to_string() {
        let point = Coordinate::new(0.0, 0.0).unwrap();
        assert_eq!(
            point.format(&GeoJson).to_string(),
            r#"{"coordinates":[0.0,0.0],"type":"Point"}"#
        );
    }
}
