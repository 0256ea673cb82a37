//! Plain decimal degree output, e.g. `52.52000, 13.40500`.

use crate::types::coordinate::Coordinate;
use crate::types::formatter::FormatterStrategy;

/// Five decimals narrow the position down to about a meter.
pub const DEFAULT_PRECISION: usize = 5;

/// Formats a coordinate as `"<latitude>, <longitude>"` with a fixed
/// number of decimals.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DecimalDegrees {
    precision: usize,
}

impl DecimalDegrees {
    pub fn new(precision: usize) -> Self {
        DecimalDegrees { precision }
    }
}

impl Default for DecimalDegrees {
    fn default() -> Self {
        DecimalDegrees::new(DEFAULT_PRECISION)
    }
}

impl FormatterStrategy for DecimalDegrees {
    type Output = String;

    fn format(&self, point: &Coordinate) -> Self::Output {
        format!(
            "{:.*}, {:.*}",
            self.precision,
            point.latitude(),
            self.precision,
            point.longitude()
        )
    }
}

#[cfg(test)]
mod decimal_tests {
    use super::*;

    #[test]
    fn test_default_precision() {
        let berlin = Coordinate::new(52.52, 13.405).unwrap();
        assert_eq!(berlin.format(&DecimalDegrees::default()), "52.52000, 13.40500");
    }

    #[test]
    fn test_custom_precision() {
        let point = Coordinate::new(-33.8688, 151.2093).unwrap();
        assert_eq!(point.format(&DecimalDegrees::new(1)), "-33.9, 151.2");
        assert_eq!(point.format(&DecimalDegrees::new(0)), "-34, 151");
    }
}
