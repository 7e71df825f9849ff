use std::{convert::TryFrom, fmt, ops::Neg, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::consts::DEGREE_SIGN,
    bool_enum,
    errors::{OutOfRange, ValueError},
};

use super::{CoordinateKind, ParseCoordinateError, SignedCoordinate};

bool_enum!(Pole for Latitude: North and South; parse from 'N':'S');

/// The angle measured between the equatorial plane and the point along the meridian.
/// [Read more](https://en.wikipedia.org/wiki/Latitude).
///
/// Positive to the North, negative to the South.
#[derive(Debug, PartialOrd, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "f64"))]
pub struct Latitude(f64);

impl Latitude {
    /// Construct a latitude from the signed decimal degrees.
    ///
    /// # Errors
    /// The value is not in the range `[-90, 90]` (or it is `NaN`).
    pub fn new(degrees: f64) -> Result<Self, ValueError> {
        Self::from_signed(degrees)
    }

    /// Construct a northern latitude.
    ///
    /// # Errors
    /// The angle is not in the range `[0, 90]`.
    pub fn north(angle: f64) -> Result<Self, ValueError> {
        Self::from_angle_and_direction(angle, North)
    }

    /// Construct a southern latitude.
    ///
    /// # Errors
    /// The angle is not in the range `[0, 90]`.
    pub fn south(angle: f64) -> Result<Self, ValueError> {
        Self::from_angle_and_direction(angle, South)
    }

    /// Construct a latitude from the Degree-Minute-Second notation.
    ///
    /// ```
    /// use geonav_types::{Latitude, Pole};
    ///
    /// let lat = Latitude::with_dms(33, 27, 0.0, Pole::South).unwrap();
    /// assert_eq!(lat.to_f64(), -33.45);
    /// ```
    ///
    /// # Errors
    /// - the degrees are more than 90;
    /// - the minutes are not less than 60, or the seconds are not in `[0, 60)`;
    /// - the degrees are 90 and the minutes or seconds are not zero.
    pub fn with_dms(
        degrees: u16,
        minutes: u8,
        seconds: f64,
        hemisphere: Pole,
    ) -> Result<Self, ValueError> {
        Self::from_dms(degrees, minutes, seconds, hemisphere)
    }

    /// The central latitude of the sphere equidistant from the poles
    pub const fn equator() -> Self {
        Self(0.0)
    }

    /// The signed value in decimal degrees
    pub const fn to_f64(self) -> f64 {
        self.0
    }

    /// The signed value in radians
    pub fn to_radians(self) -> f64 {
        self.0.to_radians()
    }

    /// Angle between the latitude and the equator (absolute value of the latitude).
    pub fn angle_from_equator(self) -> f64 {
        self.0.abs()
    }

    /// Which pole are closer to the given latitude
    pub fn hemisphere(self) -> Option<Pole> {
        if self.0 > 0.0 {
            Some(North)
        } else if self.0 < 0.0 {
            Some(South)
        } else {
            None
        }
    }

    /// Is the given latitude belongs to a pole
    pub fn is_pole(self) -> bool {
        self == North.into() || self == South.into()
    }
}

impl Default for Latitude {
    fn default() -> Self {
        Self::equator()
    }
}

impl SignedCoordinate for Latitude {
    const KIND: CoordinateKind = CoordinateKind::Latitude;
    type Direction = Pole;

    fn from_signed(degrees: f64) -> Result<Self, ValueError> {
        let max = f64::from(Self::KIND.max_degrees());
        let degrees = OutOfRange::check(Self::KIND.quantity(), degrees, -max, max)?;
        // the negative zero is the same equator
        Ok(Self(degrees + 0.0))
    }
}

impl From<Pole> for Latitude {
    fn from(pole: Pole) -> Self {
        let max = f64::from(CoordinateKind::Latitude.max_degrees());
        match pole {
            North => Self(max),
            South => Self(-max),
        }
    }
}

impl Neg for Latitude {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0 + 0.0)
    }
}

impl TryFrom<f64> for Latitude {
    type Error = ValueError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Latitude {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_notation(s)
    }
}

impl fmt::Display for Latitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}{}", self.angle_from_equator(), DEGREE_SIGN)?;
            if let Some(hemisphere) = self.hemisphere() {
                write!(f, "{}", hemisphere)?;
            }
            Ok(())
        } else {
            write!(f, "{}{}", self.0, DEGREE_SIGN)
        }
    }
}
