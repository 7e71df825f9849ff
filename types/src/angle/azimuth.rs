//! The exact decimal angle is used for every comparison in compass classification.
//! Binary floats cannot represent the sector boundaries like `11.24` or `5.63`
//! so the angle is stored as the whole number of hundredths of a degree.

use std::{
    convert::TryFrom,
    fmt,
    ops::{Add, Sub},
    str::FromStr,
};

use num_traits::{CheckedAdd, CheckedSub};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    errors::{OutOfRange, Quantity, ValueError},
    impl_angle_ops,
    utils::{pow_10, round_half_up_scaled, StripChar},
};

use super::{
    common::UnitsAngle,
    consts::{DEGREE_SIGN, FULL_TURN, FULL_TURN_DEG, HALF_TURN_DEG, MAX_DEGREE},
    errors::ParseAngleError,
    AngleNames,
};

/// Azimuth (clockwise from the North) with the precision of 0.01 degree.
///
/// Valid values are in the range `[0, 360]` and both ends
/// denote the North, see [`Azimuth::normalized`].
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Default, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Centidegrees"))]
pub struct Azimuth {
    units: u16,
}

/// The serialized form of [`Azimuth`], checked on the way in
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct Centidegrees {
    units: u16,
}

#[cfg(feature = "serde")]
impl TryFrom<Centidegrees> for Azimuth {
    type Error = OutOfRange;

    fn try_from(value: Centidegrees) -> Result<Self, Self::Error> {
        Self::from_centidegrees(value.units)
    }
}

impl AngleNames for Azimuth {
    fn zero() -> Self {
        Self::default()
    }

    fn straight() -> Self {
        Self::from_degrees(HALF_TURN_DEG)
    }

    fn complete() -> Self {
        Self::from_degrees(FULL_TURN_DEG)
    }
}

impl_angle_ops!(Azimuth);

impl UnitsAngle for Azimuth {
    type Units = u16;

    fn with_units(units: Self::Units) -> Result<Self, OutOfRange> {
        if units > Self::max_units() {
            return Err(OutOfRange::new(
                Quantity::Bearing,
                f64::from(units) / f64::from(Self::UNITS_IN_DEG),
                0.0,
                FULL_TURN,
            ));
        }

        Ok(Self { units })
    }

    fn units(self) -> Self::Units {
        self.units
    }

    fn max_units() -> Self::Units {
        MAX_DEGREE * Self::UNITS_IN_DEG
    }
}

impl Azimuth {
    // the number of degree's decimal digits
    const PRECISION: usize = 2;

    const UNITS_IN_DEG: u16 = pow_10(Self::PRECISION) as u16;

    /// Construct without the range check.
    /// Only for the constant tables, the tests verify the range.
    pub(crate) const fn from_centidegrees_unchecked(units: u16) -> Self {
        Self { units }
    }

    fn from_degrees(degrees: u16) -> Self {
        Self::with_units(degrees * Self::UNITS_IN_DEG).expect("Whole turn angles are valid")
    }

    /// Construct from the number of hundredths of a degree.
    ///
    /// # Errors
    /// When the value is more than 360 degrees (36000 units).
    pub fn from_centidegrees(units: u16) -> Result<Self, OutOfRange> {
        Self::with_units(units)
    }

    /// The total number of hundredths of a degree
    pub fn centidegrees(self) -> u16 {
        self.units
    }

    /// The whole number of degrees in the angle
    pub fn degrees(self) -> u16 {
        self.units / Self::UNITS_IN_DEG
    }

    /// The hundredths of a degree above the whole degrees
    pub fn fract(self) -> u8 {
        (self.units % Self::UNITS_IN_DEG) as u8
    }

    /// The angle in decimal degrees
    pub fn to_f64(self) -> f64 {
        f64::from(self.units) / f64::from(Self::UNITS_IN_DEG)
    }

    /// The angle in radians
    pub fn to_radians(self) -> f64 {
        self.to_f64().to_radians()
    }

    /// The complete turn is the same direction as zero one,
    /// so replace it with zero to get the canonical `[0, 360)` value.
    pub fn normalized(self) -> Self {
        if self.is_complete() {
            Self::zero()
        } else {
            self
        }
    }

    /// The opposite direction: the azimuth pointing back to the origin
    pub fn back_azimuth(self) -> Self {
        let initial = self.normalized();
        if initial.is_straight() {
            return Self::zero();
        }

        let back = if initial.is_reflex() {
            initial - Self::straight()
        } else {
            initial + Self::straight()
        };
        back.normalized()
    }
}

impl TryFrom<f64> for Azimuth {
    type Error = OutOfRange;

    /// The value is rounded half-up to the two decimal places
    /// as it is written in the shortest decimal form.
    fn try_from(value: f64) -> Result<Self, Self::Error> {
        let value = OutOfRange::check(Quantity::Bearing, value, 0.0, FULL_TURN)?;
        let out_of_range = || OutOfRange::new(Quantity::Bearing, value, 0.0, FULL_TURN);

        let units = round_half_up_scaled(value, Self::PRECISION).ok_or_else(out_of_range)?;
        let units = u16::try_from(units).map_err(|_| out_of_range())?;
        Self::with_units(units)
    }
}

impl TryFrom<u16> for Azimuth {
    type Error = OutOfRange;

    fn try_from(degrees: u16) -> Result<Self, Self::Error> {
        if degrees > MAX_DEGREE {
            return Err(OutOfRange::new(
                Quantity::Bearing,
                f64::from(degrees),
                0.0,
                FULL_TURN,
            ));
        }
        Ok(Self::from_degrees(degrees))
    }
}

impl FromStr for Azimuth {
    type Err = ParseAngleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix_char(DEGREE_SIGN).unwrap_or_else(|| s.to_string());
        if s.is_empty() {
            return Err(ValueError::Missing(Quantity::Bearing).into());
        }

        let number: f64 = s.trim_end().parse()?;
        Ok(Self::try_from(number)?)
    }
}

impl fmt::Display for Azimuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (deg, fract) = (self.degrees(), self.fract());
        if fract == 0 {
            write!(f, "{}{}", deg, DEGREE_SIGN)
        } else if fract % 10 == 0 {
            write!(f, "{}.{}{}", deg, fract / 10, DEGREE_SIGN)
        } else {
            write!(
                f,
                "{}.{:0>width$}{}",
                deg,
                fract,
                DEGREE_SIGN,
                width = Self::PRECISION
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::mem::size_of;

    use super::*;

    #[test]
    fn azimuth_is_16_bits() {
        assert_eq!(size_of::<Azimuth>(), 2)
    }

    #[test]
    fn default() {
        let zero_angle = Azimuth::default();
        assert!(zero_angle.is_zero());

        assert_eq!(zero_angle.degrees(), 0);
        assert_eq!(zero_angle.fract(), 0);
        assert_eq!(zero_angle.centidegrees(), 0);
    }

    #[test]
    fn complete() {
        let angle = Azimuth::try_from(360).unwrap();
        assert!(angle.is_complete());
        assert_eq!(angle.centidegrees(), 36000);
        assert_eq!(angle.normalized(), Azimuth::zero());
    }

    #[test]
    fn names() {
        assert!(Azimuth::try_from(180).unwrap().is_straight());
        assert!(Azimuth::try_from(270.01).unwrap().is_reflex());
        assert!(Azimuth::try_from(180.01).unwrap().is_reflex());
        assert!(!Azimuth::try_from(179.99).unwrap().is_reflex());
        assert!(!Azimuth::complete().is_reflex());
    }

    #[test]
    fn from_f64_keeps_hundredths() {
        let angle = Azimuth::try_from(11.24).unwrap();
        assert_eq!(angle.degrees(), 11);
        assert_eq!(angle.fract(), 24);
        assert_eq!(angle, Azimuth::from_centidegrees(1124).unwrap());
    }

    #[test]
    fn from_f64_rounds_half_up() {
        assert_eq!(Azimuth::try_from(348.749).unwrap().centidegrees(), 34875);
        assert_eq!(
            Azimuth::try_from(348.744_999_999_999).unwrap().centidegrees(),
            34874
        );
        assert_eq!(Azimuth::try_from(5.625).unwrap().centidegrees(), 563);
        assert_eq!(Azimuth::try_from(0.004).unwrap().centidegrees(), 0);
    }

    #[test]
    fn from_f64_rounds_up_to_complete() {
        let angle = Azimuth::try_from(359.999).unwrap();
        assert!(angle.is_complete());
    }

    #[test]
    fn from_f64_negative() {
        let err = Azimuth::try_from(-0.000_000_000_001).unwrap_err();
        assert_eq!(
            err.to_string(),
            "bearing -0.000000000001 is out of range [0, 360]"
        );
    }

    #[test]
    fn from_f64_more_than_complete() {
        let err = Azimuth::try_from(360.000_000_000_001).unwrap_err();
        assert_eq!(
            err.to_string(),
            "bearing 360.000000000001 is out of range [0, 360]"
        );
    }

    #[test]
    fn from_f64_negative_zero() {
        assert!(Azimuth::try_from(-0.0).unwrap().is_zero());
    }

    #[test]
    fn from_f64_nan() {
        let err = Azimuth::try_from(f64::NAN).unwrap_err();
        assert!(err.value().is_nan());
    }

    #[test]
    fn from_units_out_of_range() {
        let err = Azimuth::from_centidegrees(36001).unwrap_err();
        assert_eq!(err.to_string(), "bearing 360.01 is out of range [0, 360]");
    }

    #[test]
    fn to_f64_is_exact_for_hundredths() {
        assert_eq!(Azimuth::from_centidegrees(34875).unwrap().to_f64(), 348.75);
        assert_eq!(Azimuth::from_centidegrees(563).unwrap().to_f64(), 5.63);
    }

    #[test]
    fn wrapping_sum() {
        let a = Azimuth::try_from(350.0).unwrap();
        let b = Azimuth::try_from(20.5).unwrap();
        assert_eq!(a + b, Azimuth::try_from(10.5).unwrap());
        assert!(a.checked_add(&b).is_none());
    }

    #[test]
    fn wrapping_difference() {
        let a = Azimuth::try_from(10.0).unwrap();
        let b = Azimuth::try_from(20.0).unwrap();
        assert_eq!(a - b, Azimuth::try_from(350.0).unwrap());
        assert!(a.checked_sub(&b).is_none());
        assert_eq!(b.checked_sub(&a), Some(a));
    }

    #[test]
    fn back_azimuth() {
        let back = |deg: f64| Azimuth::try_from(deg).unwrap().back_azimuth().to_f64();
        assert_eq!(back(0.0), 180.0);
        assert_eq!(back(360.0), 180.0);
        assert_eq!(back(180.0), 0.0);
        assert_eq!(back(270.0), 90.0);
        assert_eq!(back(90.0), 270.0);
        assert_eq!(back(179.99), 359.99);
        assert_eq!(back(180.01), 0.01);
        assert_eq!(back(359.99), 179.99);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_checks_range() {
        let angle: Azimuth = serde_json::from_str(r#"{"units":34875}"#).unwrap();
        assert_eq!(angle.to_f64(), 348.75);
        assert_eq!(serde_json::to_string(&angle).unwrap(), r#"{"units":34875}"#);

        let full: Azimuth = serde_json::from_str(r#"{"units":36000}"#).unwrap();
        assert_eq!(full.back_azimuth().to_f64(), 180.0);

        let err = serde_json::from_str::<Azimuth>(r#"{"units":65535}"#).unwrap_err();
        assert!(err.to_string().contains("bearing 655.35 is out of range [0, 360]"));
        assert!(serde_json::from_str::<Azimuth>(r#"{"units":36001}"#).is_err());
    }

    #[test]
    fn display() {
        let show = |units: u16| Azimuth::from_centidegrees(units).unwrap().to_string();
        assert_eq!(show(0), "0°");
        assert_eq!(show(34875), "348.75°");
        assert_eq!(show(33750), "337.5°");
        assert_eq!(show(1107), "11.07°");
        assert_eq!(show(36000), "360°");
    }

    #[test]
    fn parse() {
        assert_eq!(
            "348.75°".parse::<Azimuth>().unwrap(),
            Azimuth::from_centidegrees(34875).unwrap()
        );
        assert_eq!(" 22.5 ".parse::<Azimuth>().unwrap().centidegrees(), 2250);
        assert_eq!("90 °".parse::<Azimuth>().unwrap().centidegrees(), 9000);
    }

    #[test]
    fn parse_empty_is_missing() {
        assert_eq!(
            "".parse::<Azimuth>().unwrap_err(),
            ParseAngleError::Value(ValueError::Missing(Quantity::Bearing))
        );
        assert_eq!(
            "°".parse::<Azimuth>().unwrap_err(),
            ParseAngleError::Value(ValueError::Missing(Quantity::Bearing))
        );
    }

    #[test]
    fn parse_bad() {
        assert!(matches!(
            "north".parse::<Azimuth>(),
            Err(ParseAngleError::Float(_))
        ));
        assert!(matches!(
            "400".parse::<Azimuth>(),
            Err(ParseAngleError::Value(ValueError::OutOfRange(_)))
        ));
    }
}
