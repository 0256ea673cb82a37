//! Error types raised by this library.
//!
//! Only [`CoordinateError`] originates from the coordinate type itself.
//! Distance strategies define their own error types (see
//! [`VincentyError`]) and those are handed back to the caller untouched.

use std::fmt;

use thiserror::Error;

/// Names the coordinate component that failed validation.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Latitude,
    Longitude,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Latitude => write!(f, "latitude"),
            Field::Longitude => write!(f, "longitude"),
        }
    }
}

/// Raised when a [`Coordinate`](crate::Coordinate) cannot be built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    /// A component lies outside its closed range `[min, max]`.
    #[error("invalid {field} {value}: expected a value within [{min}, {max}]")]
    InvalidCoordinate {
        field: Field,
        value: f64,
        min: f64,
        max: f64,
    },
}

impl CoordinateError {
    /// The component that was rejected.
    pub fn field(&self) -> Field {
        match self {
            CoordinateError::InvalidCoordinate { field, .. } => *field,
        }
    }

    /// The rejected value, exactly as supplied.
    pub fn value(&self) -> f64 {
        match self {
            CoordinateError::InvalidCoordinate { value, .. } => *value,
        }
    }
}

/// Failures of the [`Vincenty`](crate::Vincenty) strategy.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VincentyError {
    #[error("coordinates use different ellipsoids ({0} and {1})")]
    EllipsoidMismatch(&'static str, &'static str),

    #[error("inverse formula did not converge after {0} iterations")]
    NoConvergence(u32),
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_invalid_coordinate_message() {
        let err = CoordinateError::InvalidCoordinate {
            field: Field::Latitude,
            value: 91.0,
            min: -90.0,
            max: 90.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid latitude 91: expected a value within [-90, 90]"
        );
        assert_eq!(err.field(), Field::Latitude);
        assert_eq!(err.value(), 91.0);
    }

    #[test]
    fn test_vincenty_messages() {
        assert_eq!(
            VincentyError::NoConvergence(200).to_string(),
            "inverse formula did not converge after 200 iterations"
        );
        assert_eq!(
            VincentyError::EllipsoidMismatch("WGS84", "clrk66").to_string(),
            "coordinates use different ellipsoids (WGS84 and clrk66)"
        );
    }
}
