//! Validation errors shared by the angle, compass and coordinate layers

use std::fmt;

use thiserror::Error;

/// The kind of value that failed validation
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Quantity {
    /// Azimuth measured clockwise from the North
    Bearing,
    /// Direction of a bearing (a compass point)
    Direction,
    /// Signed latitude in degrees
    Latitude,
    /// Signed longitude in degrees
    Longitude,
    /// Whole degrees of a DMS notation
    Degrees,
    /// Arc minutes of a DMS notation
    ArcMinutes,
    /// Arc seconds of a DMS notation
    ArcSeconds,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bearing => "bearing",
            Self::Direction => "direction",
            Self::Latitude => "latitude",
            Self::Longitude => "longitude",
            Self::Degrees => "degrees",
            Self::ArcMinutes => "arc minutes",
            Self::ArcSeconds => "arc seconds",
        };
        f.write_str(name)
    }
}

/// The value lies outside of its range `[min, max]` (or `[min, max)`)
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub struct OutOfRange {
    quantity: Quantity,
    value: f64,
    min: f64,
    max: f64,
    max_inclusive: bool,
}

impl OutOfRange {
    pub(crate) const fn new(quantity: Quantity, value: f64, min: f64, max: f64) -> Self {
        Self {
            quantity,
            value,
            min,
            max,
            max_inclusive: true,
        }
    }

    /// Check the value is in the inclusive range `[min, max]`.
    /// The `NaN` is never in range.
    pub(crate) fn check(quantity: Quantity, value: f64, min: f64, max: f64) -> Result<f64, Self> {
        if (min..=max).contains(&value) {
            Ok(value)
        } else {
            Err(Self::new(quantity, value, min, max))
        }
    }

    /// Check the value is in the half-open range `[min, max)`.
    pub(crate) fn check_below(
        quantity: Quantity,
        value: f64,
        min: f64,
        max: f64,
    ) -> Result<f64, Self> {
        if (min..max).contains(&value) {
            Ok(value)
        } else {
            Err(Self {
                max_inclusive: false,
                ..Self::new(quantity, value, min, max)
            })
        }
    }

    /// What kind of value was rejected
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// The offending value
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The valid bounds. The lower one is always inclusive.
    pub fn bounds(&self) -> (f64, f64) {
        (self.min, self.max)
    }

    /// Is the upper bound itself a valid value?
    pub fn is_max_inclusive(&self) -> bool {
        self.max_inclusive
    }
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let close = if self.max_inclusive { ']' } else { ')' };
        write!(
            f,
            "{} {} is out of range [{}, {}{}",
            self.quantity, self.value, self.min, self.max, close
        )
    }
}

/// Failed validation of a caller-supplied value
#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ValueError {
    /// The value is present but does not fit its domain
    #[error(transparent)]
    OutOfRange(#[from] OutOfRange),
    /// The required value was not provided at all
    #[error("{0} is required but missing")]
    Missing(Quantity),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_value_and_bounds() {
        let err = OutOfRange::check(Quantity::Bearing, -0.000_000_000_001, 0.0, 360.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "bearing -0.000000000001 is out of range [0, 360]"
        );
        assert_eq!(err.value(), -0.000_000_000_001);
        assert_eq!(err.bounds(), (0.0, 360.0));
    }

    #[test]
    fn nan_is_out_of_range() {
        let err = OutOfRange::check(Quantity::Latitude, f64::NAN, -90.0, 90.0).unwrap_err();
        assert_eq!(err.quantity(), Quantity::Latitude);
        assert!(err.value().is_nan());
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(OutOfRange::check(Quantity::Bearing, 0.0, 0.0, 360.0), Ok(0.0));
        assert_eq!(OutOfRange::check(Quantity::Bearing, 360.0, 0.0, 360.0), Ok(360.0));
    }

    #[test]
    fn half_open_bounds() {
        assert_eq!(OutOfRange::check_below(Quantity::ArcSeconds, 59.9, 0.0, 60.0), Ok(59.9));

        let err = OutOfRange::check_below(Quantity::ArcSeconds, 60.0, 0.0, 60.0).unwrap_err();
        assert!(!err.is_max_inclusive());
        assert_eq!(err.to_string(), "arc seconds 60 is out of range [0, 60)");
    }

    #[test]
    fn missing_is_distinct() {
        let err = ValueError::Missing(Quantity::Direction);
        assert_eq!(err.to_string(), "direction is required but missing");
        assert!(!matches!(err, ValueError::OutOfRange(_)));
    }
}
