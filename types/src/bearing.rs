use std::{convert::TryFrom, fmt};

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::{
    angle::{normalize::back_azimuth, Azimuth, FULL_TURN},
    compass::{CompassPoint, PointCount},
    errors::{OutOfRange, Quantity, ValueError},
};

/// The direction of travel: the compass point and the raw azimuth it was classified from
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Bearing {
    direction: CompassPoint,
    degrees: f64,
}

impl Bearing {
    /// Pair the direction with the azimuth.
    ///
    /// Only the range of the azimuth is checked in release builds.
    /// The direction must be the point whose sector contains the azimuth,
    /// use [`Bearing::classify`] to find it.
    ///
    /// # Errors
    /// When the azimuth is not in the range `[0, 360]`.
    pub fn new(direction: CompassPoint, degrees: f64) -> Result<Self, ValueError> {
        let degrees = OutOfRange::check(Quantity::Bearing, degrees, 0.0, FULL_TURN)?;
        debug_assert!(
            Azimuth::try_from(degrees).map_or(false, |azimuth| direction.contains(azimuth)),
            "{}° is outside of the {} sector",
            degrees,
            direction
        );
        Ok(Self { direction, degrees })
    }

    /// Pair the optional direction with the azimuth.
    ///
    /// # Errors
    /// - the direction is not provided;
    /// - the azimuth is not in the range `[0, 360]`.
    pub fn from_parts(direction: Option<CompassPoint>, degrees: f64) -> Result<Self, ValueError> {
        let direction = direction.ok_or(ValueError::Missing(Quantity::Direction))?;
        Self::new(direction, degrees)
    }

    /// Find the direction of the azimuth on the given compass rose.
    ///
    /// ```
    /// use geonav_types::{Bearing, PointCount};
    ///
    /// let bearing = Bearing::classify(11.25, PointCount::Sixteen).unwrap();
    /// assert_eq!(bearing.direction().abbreviation(), "NNE");
    /// assert_eq!(bearing.to_string(), "11.25° NNE");
    /// ```
    ///
    /// # Errors
    /// When the azimuth is not in the range `[0, 360]`.
    pub fn classify(degrees: f64, compass: PointCount) -> Result<Self, ValueError> {
        let direction = compass.scale().classify(degrees)?;
        Self::new(direction, degrees)
    }

    /// The compass point
    pub fn direction(&self) -> CompassPoint {
        self.direction
    }

    /// The raw azimuth in decimal degrees
    pub fn degrees(&self) -> f64 {
        self.degrees
    }

    /// The azimuth rounded to the hundredths of a degree
    pub fn azimuth(&self) -> Azimuth {
        Azimuth::try_from(self.degrees).expect("Bearing keeps the valid azimuth")
    }

    /// The bearing pointing back to the origin, on the same compass rose
    pub fn reverse(&self) -> Self {
        let back = back_azimuth(self.degrees).expect("Bearing keeps the valid azimuth");
        Self::classify(back, self.direction.point_count())
            .expect("Back azimuth is always normalized")
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}° ", self.degrees)?;
        if f.alternate() {
            write!(f, "{:#}", self.direction)
        } else {
            write!(f, "{}", self.direction)
        }
    }
}
