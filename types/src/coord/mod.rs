//! Latitude, longitude and the point on the sphere built from them

use std::{convert::TryFrom, fmt};

use lazy_static::lazy_static;
use regex::{Captures, Regex};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    errors::{OutOfRange, Quantity, ValueError},
    utils::StripChar,
};

pub use self::{
    lat::{Latitude, Pole},
    lon::{Longitude, RotationalDirection},
    point::Point,
};

mod lat;
mod lon;
mod point;

const MINUTES_IN_DEGREE: f64 = 60.0;
const SECONDS_IN_MINUTE: f64 = 60.0;

/// The closed family of the geographic coordinates
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CoordinateKind {
    /// North-south position
    Latitude,
    /// East-west position
    Longitude,
}

impl CoordinateKind {
    /// The maximum absolute value in degrees
    pub fn max_degrees(self) -> u16 {
        match self {
            Self::Latitude => 90,
            Self::Longitude => 180,
        }
    }

    fn quantity(self) -> Quantity {
        match self {
            Self::Latitude => Quantity::Latitude,
            Self::Longitude => Quantity::Longitude,
        }
    }
}

impl fmt::Display for CoordinateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.quantity(), f)
    }
}

/// Either latitude or longitude
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Coordinate {
    /// North-south position
    Latitude(Latitude),
    /// East-west position
    Longitude(Longitude),
}

impl Coordinate {
    /// Which coordinate is it
    pub fn kind(&self) -> CoordinateKind {
        match self {
            Self::Latitude(_) => CoordinateKind::Latitude,
            Self::Longitude(_) => CoordinateKind::Longitude,
        }
    }

    /// The signed value in decimal degrees
    pub fn to_f64(&self) -> f64 {
        match self {
            Self::Latitude(lat) => lat.to_f64(),
            Self::Longitude(lon) => lon.to_f64(),
        }
    }

    /// The signed value in radians
    pub fn to_radians(&self) -> f64 {
        self.to_f64().to_radians()
    }
}

impl From<Latitude> for Coordinate {
    fn from(lat: Latitude) -> Self {
        Self::Latitude(lat)
    }
}

impl From<Longitude> for Coordinate {
    fn from(lon: Longitude) -> Self {
        Self::Longitude(lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latitude(lat) => fmt::Display::fmt(lat, f),
            Self::Longitude(lon) => fmt::Display::fmt(lon, f),
        }
    }
}

/// Failed to read a coordinate from a string
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseCoordinateError {
    /// The number was read but it is not a valid coordinate
    #[error("Coordinate parsing failed: {0}")]
    Value(#[from] ValueError),
    /// The direction letter belongs to another coordinate or is unknown
    #[error("Coordinate parsing failed: {found:?} is not a {kind} direction")]
    WrongDirection {
        /// The coordinate being parsed
        kind: CoordinateKind,
        /// The unexpected letter
        found: char,
    },
    /// Neither decimal nor Degree-Minute-Second notation
    #[error("Coordinate parsing failed: not a decimal or Degree-Minute-Second notation")]
    Notation,
}

impl From<OutOfRange> for ParseCoordinateError {
    fn from(err: OutOfRange) -> Self {
        Self::Value(err.into())
    }
}

/// Convert the Degree-Minute-Second notation to the decimal degrees
fn dms_to_degrees(
    kind: CoordinateKind,
    degrees: u16,
    minutes: u8,
    seconds: f64,
) -> Result<f64, OutOfRange> {
    let max = kind.max_degrees();
    let _ = OutOfRange::check(Quantity::Degrees, f64::from(degrees), 0.0, f64::from(max))?;

    let minutes = f64::from(minutes);
    if degrees == max {
        let _ = OutOfRange::check(Quantity::ArcMinutes, minutes, 0.0, 0.0)?;
        let _ = OutOfRange::check(Quantity::ArcSeconds, seconds, 0.0, 0.0)?;
    } else {
        let _ = OutOfRange::check_below(Quantity::ArcMinutes, minutes, 0.0, MINUTES_IN_DEGREE)?;
        let _ = OutOfRange::check_below(Quantity::ArcSeconds, seconds, 0.0, SECONDS_IN_MINUTE)?;
    }

    Ok(f64::from(degrees)
        + minutes / MINUTES_IN_DEGREE
        + seconds / (MINUTES_IN_DEGREE * SECONDS_IN_MINUTE))
}

/// Construct regular expression to parse Degree-Minute-Second representation of a coordinate
fn parse_dms_re(is_ascii: bool) -> String {
    let (deg, min, sec) = if is_ascii {
        ("\\*?", '\'', '"')
    } else {
        ("°", '′', '″')
    };

    format!(
        r#"(?x)                                 # enables verbose mode (to allow these comments)
        ^                                           # match the whole line from the start
        (?P<deg>\d{{1,3}})                              # mandatory degree VALUE (validated later)
        {}                                              # degree sign (can be mandatory or optional)
        (?:\x20?                                        # minutes and seconds group optionally started with the space
            (?P<min>\d{{1,2}})                              # minutes VALUE (validated later)
            {}                                              # arcminute sign
            (?:\x20?                                        # seconds group optionally started with the space
                (?P<sec>\d{{1,2}}(?:\.\d+)?)                    # seconds VALUE with the optional decimal fraction
                {}                                              # arcsecond sign
            )?                                              # seconds are optional
        )?                                              # minutes and seconds are optional
        $                                           # match the whole line till the end
        "#,
        deg, min, sec
    )
}

lazy_static! {
    static ref RE_UNICODE: Regex = Regex::new(&parse_dms_re(false)).expect("Unicode regex is valid");
    static ref RE_ASCII: Regex = Regex::new(&parse_dms_re(true)).expect("ASCII regex is valid");
}

/// The unsigned angle in either decimal or Degree-Minute-Second notation
fn parse_unsigned_angle(kind: CoordinateKind, s: &str) -> Result<f64, ParseCoordinateError> {
    if s.starts_with(['+', '-']) {
        return Err(ParseCoordinateError::Notation);
    }

    let decimal = s.strip_suffix_char('°').unwrap_or_else(|| s.to_string());
    if let Ok(number) = decimal.parse::<f64>() {
        return Ok(number);
    }

    let capture = RE_UNICODE
        .captures(s)
        .or_else(|| RE_ASCII.captures(s))
        .ok_or(ParseCoordinateError::Notation)?;
    parse_dms_captures(kind, &capture)
}

fn parse_dms_captures(
    kind: CoordinateKind,
    capture: &Captures<'_>,
) -> Result<f64, ParseCoordinateError> {
    // the regex bounds the digits, so the numbers always fit
    let deg = capture.name("deg").ok_or(ParseCoordinateError::Notation)?;
    let deg = deg.as_str().parse::<u16>().map_err(|_| ParseCoordinateError::Notation)?;
    let min = capture.name("min").map_or("0", |m| m.as_str());
    let min = min.parse::<u8>().map_err(|_| ParseCoordinateError::Notation)?;
    let sec = capture.name("sec").map_or("0", |m| m.as_str());
    let sec = sec.parse::<f64>().map_err(|_| ParseCoordinateError::Notation)?;

    Ok(dms_to_degrees(kind, deg, min, sec)?)
}

/// Common construction and parsing of the signed coordinates
trait SignedCoordinate: Sized {
    const KIND: CoordinateKind;

    /// The direction of the positive (`true`) and the negative (`false`) values
    type Direction: Copy + From<bool> + Into<bool> + TryFrom<char, Error = ParseCoordinateError>;

    fn from_signed(degrees: f64) -> Result<Self, ValueError>;

    fn from_angle_and_direction(angle: f64, direction: Self::Direction) -> Result<Self, ValueError> {
        let max = f64::from(Self::KIND.max_degrees());
        let angle = OutOfRange::check(Self::KIND.quantity(), angle, 0.0, max)?;
        let signed = if direction.into() { angle } else { -angle };
        Self::from_signed(signed)
    }

    fn from_dms(
        degrees: u16,
        minutes: u8,
        seconds: f64,
        direction: Self::Direction,
    ) -> Result<Self, ValueError> {
        let angle = dms_to_degrees(Self::KIND, degrees, minutes, seconds)?;
        Self::from_angle_and_direction(angle, direction)
    }

    fn from_notation(s: &str) -> Result<Self, ParseCoordinateError> {
        let s = s.trim();
        let (rest, last) = s
            .split_last()
            .ok_or(ValueError::Missing(Self::KIND.quantity()))?;

        // the direction letter at the end, a single space is allowed before it
        if last.is_ascii_alphabetic() {
            let direction = Self::Direction::try_from(last)?;
            let rest = rest.strip_suffix(' ').unwrap_or(rest.as_str());
            let angle = parse_unsigned_angle(Self::KIND, rest)?;
            return Ok(Self::from_angle_and_direction(angle, direction)?);
        }

        if let Ok(number) = s.parse::<f64>() {
            return Ok(Self::from_signed(number)?);
        }

        let (body, positive) = match s.strip_prefix('-') {
            Some(body) => (body, false),
            None => (s.strip_prefix('+').unwrap_or(s), true),
        };
        let angle = parse_unsigned_angle(Self::KIND, body)?;
        Ok(Self::from_angle_and_direction(angle, positive.into())?)
    }
}

#[doc(hidden)]
#[macro_export]
/// Implements simple two variants enum associated with the boolean type
macro_rules! bool_enum {
    ($name:ident for $kind:ident: $truthy:ident and $falsy:ident; parse from $true_ch:literal:$false_ch:literal) => {
        use self::$name::{$falsy, $truthy};

        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        /// The direction of the positive and negative values of the coordinate
        pub enum $name {
            #[allow(missing_docs)]
            $truthy,
            #[allow(missing_docs)]
            $falsy,
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                match self {
                    $falsy => $truthy,
                    $truthy => $falsy,
                }
            }
        }

        impl From<bool> for $name {
            fn from(val: bool) -> Self {
                if val {
                    $truthy
                } else {
                    $falsy
                }
            }
        }

        impl From<$name> for bool {
            fn from(val: $name) -> Self {
                val == $truthy
            }
        }

        impl TryFrom<char> for $name {
            type Error = ParseCoordinateError;

            fn try_from(c: char) -> Result<Self, Self::Error> {
                match c {
                    $true_ch => Ok($truthy),
                    $false_ch => Ok($falsy),
                    _ => Err(ParseCoordinateError::WrongDirection {
                        kind: CoordinateKind::$kind,
                        found: c,
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let symbol = match self {
                    $truthy => $true_ch,
                    $falsy => $false_ch,
                };
                write!(f, "{}", symbol)
            }
        }
    };
}
