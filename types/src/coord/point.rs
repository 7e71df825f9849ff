use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::ValueError;

use super::{
    lat::{
        Latitude,
        Pole::{North, South},
    },
    lon::Longitude,
};

#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The point on the surface of a sphere, represented as the pair (latitude, longitude)
pub struct Point {
    lat: Latitude,
    lon: Longitude,
}

impl Point {
    /// Construct a point from the given latitude and longitude
    pub const fn new(lat: Latitude, lon: Longitude) -> Self {
        Self { lat, lon }
    }

    /// Construct a point from the signed decimal degrees.
    ///
    /// # Errors
    /// The latitude is not in `[-90, 90]` or the longitude is not in `[-180, 180]`.
    pub fn with_coordinates(lat: f64, lon: f64) -> Result<Self, ValueError> {
        let lat = Latitude::new(lat)?;
        let lon = Longitude::new(lon)?;
        Ok(Self { lat, lon })
    }

    /// Construct a north pole point (lat=90, lon=0 (by convention)).
    pub fn north_pole() -> Self {
        // All longitude values reach singularity on a pole, so put it zero
        Self::new(North.into(), Longitude::prime())
    }

    /// Construct a south pole point (lat=-90, lon=0 (by convention)).
    pub fn south_pole() -> Self {
        // All longitude values reach singularity on a pole, so put it zero
        Self::new(South.into(), Longitude::prime())
    }

    /// The north-south position
    pub const fn lat(&self) -> Latitude {
        self.lat
    }

    /// The east-west position
    pub const fn lon(&self) -> Longitude {
        self.lon
    }

    /// Is the point represents a pole?
    /// All the longitudes at pole are singular, so the longitude of the pole can be any meridian.
    pub fn is_pole(&self) -> bool {
        self.lat.is_pole()
    }

    /// The diametrically opposite point
    pub fn antipodal(&self) -> Self {
        Self {
            lat: -self.lat,
            lon: self.lon.opposite(),
        }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        if self.lat == other.lat {
            // meridians at the poles do not matter
            if self.lat.is_pole() {
                return true;
            }

            if self.lon == other.lon {
                return true;
            }
        }

        false
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "Lat: {:#}, Long: {:#}", self.lat, self.lon)
        } else {
            write!(f, "({},{})", self.lat, self.lon)
        }
    }
}
