use std::{convert::TryFrom, fmt, ops::Neg, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::consts::DEGREE_SIGN,
    bool_enum,
    errors::{OutOfRange, ValueError},
};

use super::{CoordinateKind, ParseCoordinateError, SignedCoordinate};

bool_enum!(RotationalDirection for Longitude: East and West; parse from 'E':'W');

const HALF_TURN: f64 = 180.0;

/// The angle measured on the equatorial plane between the meridian of the point
/// and the prime meridian (Greenwich, UK).
/// [Read more](https://en.wikipedia.org/wiki/Longitude).
///
/// Positive to the East, negative to the West.
/// The `-180` and `180` are the same anti-meridian and stored as `180`.
#[derive(Debug, PartialOrd, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64"))]
pub struct Longitude(f64);

impl Longitude {
    /// Construct a longitude from the signed decimal degrees.
    ///
    /// # Errors
    /// The value is not in the range `[-180, 180]` (or it is `NaN`).
    pub fn new(degrees: f64) -> Result<Self, ValueError> {
        Self::from_signed(degrees)
    }

    /// Construct an eastern longitude.
    ///
    /// # Errors
    /// The angle is not in the range `[0, 180]`.
    pub fn east(angle: f64) -> Result<Self, ValueError> {
        Self::from_angle_and_direction(angle, East)
    }

    /// Construct a western longitude.
    ///
    /// # Errors
    /// The angle is not in the range `[0, 180]`.
    pub fn west(angle: f64) -> Result<Self, ValueError> {
        Self::from_angle_and_direction(angle, West)
    }

    /// Construct a longitude from the Degree-Minute-Second notation.
    ///
    /// # Errors
    /// - the degrees are more than 180;
    /// - the minutes are not less than 60, or the seconds are not in `[0, 60)`;
    /// - the degrees are 180 and the minutes or seconds are not zero.
    pub fn with_dms(
        degrees: u16,
        minutes: u8,
        seconds: f64,
        direction: RotationalDirection,
    ) -> Result<Self, ValueError> {
        Self::from_dms(degrees, minutes, seconds, direction)
    }

    /// The chosen by convention [0-meridian](https://en.wikipedia.org/wiki/Prime_meridian)
    pub const fn prime() -> Self {
        Self(0.0)
    }

    /// The longitude opposite to the prime
    pub const fn anti_meridian() -> Self {
        Self(HALF_TURN)
    }

    /// The signed value in decimal degrees
    pub const fn to_f64(self) -> f64 {
        self.0
    }

    /// The signed value in radians
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Angle between the longitude and the prime meridian (absolute value of the longitude).
    pub fn angle(self) -> f64 {
        self.0.abs()
    }

    /// In which direction (from the prime) should we move to reach the longitude faster
    pub fn direction(self) -> Option<RotationalDirection> {
        if self == Self::prime() || self == Self::anti_meridian() {
            return None;
        }

        if self.0 > 0.0 {
            Some(East)
        } else {
            Some(West)
        }
    }

    /// Diametrically opposite meridian
    /// which together with the current one defines
    /// the hemisphere (great circle)
    pub fn opposite(self) -> Self {
        let opposite = if self.0 > 0.0 {
            self.0 - HALF_TURN
        } else {
            self.0 + HALF_TURN
        };
        Self::canonical(opposite)
    }

    fn canonical(degrees: f64) -> Self {
        #[allow(clippy::float_cmp)]
        let degrees = if degrees == -HALF_TURN {
            HALF_TURN
        } else {
            degrees
        };
        // the negative zero is the same prime meridian
        Self(degrees + 0.0)
    }
}

impl Default for Longitude {
    fn default() -> Self {
        Self::prime()
    }
}

impl SignedCoordinate for Longitude {
    const KIND: CoordinateKind = CoordinateKind::Longitude;
    type Direction = RotationalDirection;

    fn from_signed(degrees: f64) -> Result<Self, ValueError> {
        let max = f64::from(Self::KIND.max_degrees());
        let degrees = OutOfRange::check(Self::KIND.quantity(), degrees, -max, max)?;
        Ok(Self::canonical(degrees))
    }
}

impl Neg for Longitude {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::canonical(-self.0)
    }
}

impl TryFrom<f64> for Longitude {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Longitude {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl fmt::Display for Longitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}{}", self.angle(), DEGREE_SIGN)?;
            if let Some(direction) = self.direction() {
                write!(f, "{}", direction)?;
            }
            Ok(())
        } else {
            write!(f, "{}{}", self.0, DEGREE_SIGN)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::Quantity;

    use super::*;

    #[test]
    fn anti_meridian_is_single() {
        let west = Longitude::new(-180.0).unwrap();
        let east = Longitude::new(180.0).unwrap();
        assert_eq!(west, east);
        assert_eq!(west, Longitude::anti_meridian());
        assert_eq!(west.to_f64(), 180.0);
        assert_eq!(Longitude::west(180.0).unwrap(), Longitude::anti_meridian());
        assert_eq!(-Longitude::anti_meridian(), Longitude::anti_meridian());
    }

    #[test]
    fn directions() {
        assert_eq!(Longitude::new(151.2).unwrap().direction(), Some(East));
        assert_eq!(Longitude::new(-70.5).unwrap().direction(), Some(West));
        assert_eq!(Longitude::prime().direction(), None);
        assert_eq!(Longitude::new(-180.0).unwrap().direction(), None);
        assert_eq!(Longitude::new(-0.0).unwrap(), Longitude::prime());
    }

    #[test]
    fn opposite() {
        let lon = Longitude::new(30.0).unwrap();
        assert_eq!(lon.opposite().to_f64(), -150.0);
        assert_eq!(lon.opposite().opposite(), lon);
        assert_eq!(Longitude::prime().opposite(), Longitude::anti_meridian());
        assert_eq!(Longitude::anti_meridian().opposite(), Longitude::prime());
        assert_eq!(Longitude::new(-90.0).unwrap().opposite().to_f64(), 90.0);
    }

    #[test]
    fn negation() {
        let lon = Longitude::east(70.5).unwrap();
        assert_eq!(-lon, Longitude::west(70.5).unwrap());
        assert_eq!(-Longitude::prime(), Longitude::prime());
    }

    #[test]
    fn out_of_range() {
        let err = Longitude::new(-180.5).unwrap_err();
        assert_eq!(err.to_string(), "longitude -180.5 is out of range [-180, 180]");
        assert!(Longitude::east(181.0).is_err());
        assert!(Longitude::try_from(f64::NAN).is_err());
    }

    #[test]
    fn dms() {
        let lon = Longitude::with_dms(70, 30, 0.0, West).unwrap();
        assert_eq!(lon.to_f64(), -70.5);
        assert_eq!(Longitude::with_dms(180, 0, 0.0, West).unwrap(), Longitude::anti_meridian());

        let err = Longitude::with_dms(180, 0, 0.5, East).unwrap_err();
        assert!(matches!(err, ValueError::OutOfRange(e) if e.quantity() == Quantity::ArcSeconds));
        assert!(Longitude::with_dms(181, 0, 0.0, East).is_err());
    }

    #[test]
    fn parse() {
        assert_eq!("70.5 W".parse::<Longitude>().unwrap().to_f64(), -70.5);
        assert_eq!("151.2E".parse::<Longitude>().unwrap().to_f64(), 151.2);
        assert_eq!("-70.5".parse::<Longitude>().unwrap().to_f64(), -70.5);
        assert_eq!("70°30′W".parse::<Longitude>().unwrap().to_f64(), -70.5);
        assert_eq!("70*30'0\"W".parse::<Longitude>().unwrap().to_f64(), -70.5);
        assert_eq!("-180".parse::<Longitude>().unwrap(), Longitude::anti_meridian());
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "".parse::<Longitude>(),
            Err(ParseCoordinateError::Value(ValueError::Missing(
                Quantity::Longitude
            )))
        );
        assert_eq!(
            "70.5N".parse::<Longitude>(),
            Err(ParseCoordinateError::WrongDirection {
                kind: CoordinateKind::Longitude,
                found: 'N',
            })
        );
        assert_eq!(
            "70,5".parse::<Longitude>(),
            Err(ParseCoordinateError::Notation)
        );
        assert!(matches!(
            "180.5E".parse::<Longitude>(),
            Err(ParseCoordinateError::Value(ValueError::OutOfRange(_)))
        ));
    }

    #[test]
    fn display() {
        let lon = Longitude::new(-70.5).unwrap();
        assert_eq!(lon.to_string(), "-70.5°");
        assert_eq!(format!("{:#}", lon), "70.5°W");
        assert_eq!(format!("{:#}", Longitude::anti_meridian()), "180°");
        assert_eq!(format!("{:#}", Longitude::prime()), "0°");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_canonical_anti_meridian() {
        let lon: Longitude = serde_json::from_str("-180.0").unwrap();
        assert_eq!(lon, Longitude::anti_meridian());
        assert_eq!(lon.to_f64(), 180.0);
        assert_eq!(serde_json::to_string(&lon).unwrap(), "180.0");

        let err = serde_json::from_str::<Longitude>("-180.5").unwrap_err();
        assert!(err.to_string().contains("longitude -180.5 is out of range [-180, 180]"));
    }
}
