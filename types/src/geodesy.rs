//! Great-circle navigation between two points on the spherical Earth

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    angle::normalize::{back_azimuth, normalize},
    bearing::Bearing,
    compass::PointCount,
    coord::Point,
    errors::ValueError,
};

/// The mean radius of the Earth in kilometres
pub const EARTH_MEAN_RADIUS_KM: f64 = 6371.0;

const METERS_IN_KM: f64 = 1000.0;
const KM_IN_MILE: f64 = 1.609_344;
const KM_IN_NAUTICAL_MILE: f64 = 1.852;

/// The unit to measure the distance along the surface
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistanceUnit {
    #[default]
    #[allow(missing_docs)]
    Kilometers,
    #[allow(missing_docs)]
    Meters,
    /// The statute mile
    Miles,
    #[allow(missing_docs)]
    NauticalMiles,
}

impl DistanceUnit {
    /// Convert the distance given in kilometres
    pub fn from_km(self, km: f64) -> f64 {
        match self {
            Self::Kilometers => km,
            Self::Meters => km * METERS_IN_KM,
            Self::Miles => km / KM_IN_MILE,
            Self::NauticalMiles => km / KM_IN_NAUTICAL_MILE,
        }
    }
}

impl fmt::Display for DistanceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Self::Kilometers => "km",
            Self::Meters => "m",
            Self::Miles => "mi",
            Self::NauticalMiles => "nmi",
        };
        f.write_str(symbol)
    }
}

impl Point {
    /// Calculate the great-circle distance to another point using the Haversine formula.
    /// Read more here: <https://en.wikipedia.org/wiki/Haversine_formula>
    pub fn distance_to(&self, other: &Self, unit: DistanceUnit) -> f64 {
        let lat_from = self.lat().to_radians();
        let lat_to = other.lat().to_radians();
        let delta_lat = (other.lat().to_f64() - self.lat().to_f64()).to_radians();
        let delta_lon = (other.lon().to_f64() - self.lon().to_f64()).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat_from.cos() * lat_to.cos() * (delta_lon / 2.0).sin().powi(2);
        // rounding may push the antipodal case just over 1
        let a = a.min(1.0);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        unit.from_km(EARTH_MEAN_RADIUS_KM * c)
    }

    /// The forward azimuth of the great circle at the start point,
    /// in degrees `[0, 360)` clockwise from the North.
    pub fn initial_bearing_to(&self, other: &Self) -> f64 {
        let lat_from = self.lat().to_radians();
        let lat_to = other.lat().to_radians();
        let delta_lon = (other.lon().to_f64() - self.lon().to_f64()).to_radians();

        let y = delta_lon.sin() * lat_to.cos();
        let x = lat_from.cos() * lat_to.sin() - lat_from.sin() * lat_to.cos() * delta_lon.cos();

        normalize(y.atan2(x).to_degrees())
    }

    /// The initial bearing to another point on the given compass rose.
    ///
    /// # Errors
    /// Never happens for the valid points: the azimuth is always normalized.
    pub fn bearing_to(&self, other: &Self, compass: PointCount) -> Result<Bearing, ValueError> {
        Bearing::classify(self.initial_bearing_to(other), compass)
    }

    /// The bearing opposite to the initial one, on the given compass rose.
    ///
    /// # Errors
    /// Never happens for the valid points: the azimuth is always normalized.
    pub fn back_azimuth_to(
        &self,
        other: &Self,
        compass: PointCount,
    ) -> Result<Bearing, ValueError> {
        let back = back_azimuth(self.initial_bearing_to(other))?;
        Bearing::classify(back, compass)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;

    fn london() -> Point {
        Point::with_coordinates(51.5074, -0.1278).unwrap()
    }

    fn paris() -> Point {
        Point::with_coordinates(48.8566, 2.3522).unwrap()
    }

    fn new_york() -> Point {
        Point::with_coordinates(40.7128, -74.006).unwrap()
    }

    #[test]
    fn london_to_paris() {
        let km = london().distance_to(&paris(), DistanceUnit::Kilometers);
        assert_relative_eq!(km, 343.556_060_341, epsilon = 1e-6);

        let back = paris().distance_to(&london(), DistanceUnit::Kilometers);
        assert_relative_eq!(km, back, epsilon = 1e-9);
    }

    #[test]
    fn units() {
        let km = london().distance_to(&paris(), DistanceUnit::Kilometers);
        let m = london().distance_to(&paris(), DistanceUnit::Meters);
        let mi = london().distance_to(&paris(), DistanceUnit::Miles);
        let nmi = london().distance_to(&paris(), DistanceUnit::NauticalMiles);

        assert_relative_eq!(m, km * 1000.0, epsilon = 1e-6);
        assert_relative_eq!(mi, 213.475_839, epsilon = 1e-3);
        assert_relative_eq!(nmi, 185.505_432, epsilon = 1e-3);
        assert_eq!(DistanceUnit::default(), DistanceUnit::Kilometers);
        assert_eq!(DistanceUnit::NauticalMiles.to_string(), "nmi");
    }

    #[test]
    fn same_point() {
        assert_abs_diff_eq!(london().distance_to(&london(), DistanceUnit::Meters), 0.0);
    }

    #[test]
    fn quarter_of_the_meridian() {
        let origin = Point::with_coordinates(0.0, 0.0).unwrap();
        let km = origin.distance_to(&Point::north_pole(), DistanceUnit::Kilometers);
        assert_relative_eq!(km, EARTH_MEAN_RADIUS_KM * std::f64::consts::FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn antipodes_are_half_the_circumference_away() {
        let point = Point::with_coordinates(-33.45, -70.5).unwrap();
        let km = point.distance_to(&point.antipodal(), DistanceUnit::Kilometers);
        assert_relative_eq!(km, EARTH_MEAN_RADIUS_KM * std::f64::consts::PI, epsilon = 1e-6);
    }

    #[test]
    fn initial_bearings() {
        assert_relative_eq!(london().initial_bearing_to(&paris()), 148.115_616_871, epsilon = 1e-6);
        assert_relative_eq!(paris().initial_bearing_to(&london()), 330.021_092_856, epsilon = 1e-6);
        assert_relative_eq!(new_york().initial_bearing_to(&london()), 51.212_616_824, epsilon = 1e-6);
    }

    #[test]
    fn bearing_along_the_axes() {
        let origin = Point::with_coordinates(0.0, 0.0).unwrap();
        let east = Point::with_coordinates(0.0, 90.0).unwrap();
        assert_abs_diff_eq!(origin.initial_bearing_to(&east), 90.0, epsilon = 1e-9);
        assert_abs_diff_eq!(origin.initial_bearing_to(&Point::north_pole()), 0.0, epsilon = 1e-9);

        let west = Point::with_coordinates(0.0, -90.0).unwrap();
        assert_abs_diff_eq!(origin.initial_bearing_to(&west), 270.0, epsilon = 1e-9);
    }

    #[test]
    fn classified_bearing() {
        let bearing = london().bearing_to(&paris(), PointCount::Sixteen).unwrap();
        assert_eq!(bearing.direction().abbreviation(), "SSE");

        let bearing = london().bearing_to(&paris(), PointCount::Eight).unwrap();
        assert_eq!(bearing.direction().abbreviation(), "SE");

        let bearing = new_york().bearing_to(&london(), PointCount::ThirtyTwo).unwrap();
        assert_eq!(bearing.direction().abbreviation(), "NEbE");
    }

    #[test]
    fn classified_back_azimuth() {
        let back = london().back_azimuth_to(&paris(), PointCount::Sixteen).unwrap();
        assert_relative_eq!(back.degrees(), 328.115_616_871, epsilon = 1e-6);
        assert_eq!(back.direction().abbreviation(), "NNW");
        assert_eq!(
            back.direction(),
            london().bearing_to(&paris(), PointCount::Sixteen).unwrap().reverse().direction()
        );
    }
}
