//! Compass roses of 8, 16 and 32 points.
//!
//! Every rose is a process-wide immutable [`CompassScale`] built lazily
//! from its literal table of sector boundaries.

use std::{convert::TryFrom, fmt};

use lazy_static::lazy_static;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::angle::{AngleNames, Azimuth};

pub use self::index::{DuplicateKey, UniqueIndex};

mod classify;
mod index;
mod tables;

/// The granularity of a compass rose
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PointCount {
    /// Cardinal and intercardinal directions
    Eight,
    /// Adds the secondary intercardinal directions (NNE, ENE, ...)
    Sixteen,
    /// Adds the "by" points (NbE, NEbN, ...)
    ThirtyTwo,
}

impl PointCount {
    /// All the supported compass roses from the coarsest one
    pub const ALL: [Self; 3] = [Self::Eight, Self::Sixteen, Self::ThirtyTwo];

    /// The number of points in the rose
    pub const fn count(self) -> usize {
        match self {
            Self::Eight => 8,
            Self::Sixteen => 16,
            Self::ThirtyTwo => 32,
        }
    }

    /// The angle between two adjacent points
    pub fn step(self) -> Azimuth {
        let full_turn = Azimuth::complete().centidegrees();
        // 36000 is divisible by all the supported counts
        Azimuth::from_centidegrees_unchecked(full_turn / self.count() as u16)
    }

    /// The shared instance of the compass rose
    pub fn scale(self) -> &'static CompassScale {
        match self {
            Self::Eight => &EIGHT_POINT,
            Self::Sixteen => &SIXTEEN_POINT,
            Self::ThirtyTwo => &THIRTY_TWO_POINT,
        }
    }

    fn table(self) -> &'static [tables::Row] {
        match self {
            Self::Eight => &tables::EIGHT_POINTS,
            Self::Sixteen => &tables::SIXTEEN_POINTS,
            Self::ThirtyTwo => &tables::THIRTY_TWO_POINTS,
        }
    }
}

impl fmt::Display for PointCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-point", self.count())
    }
}

/// The compass rose of the given size does not exist
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
#[error("compass of {0} points is not supported (only 8, 16 or 32)")]
pub struct UnsupportedPointCount(pub usize);

impl TryFrom<usize> for PointCount {
    type Error = UnsupportedPointCount;

    fn try_from(count: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.count() == count)
            .ok_or(UnsupportedPointCount(count))
    }
}

/// The named direction covering the sector `[minimum, maximum]` of a compass rose.
///
/// The North sector crosses the zero azimuth, so its `minimum`
/// is numerically greater than its `middle` and `maximum`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CompassPoint {
    kind: PointCount,
    ordinal: u8,
    abbreviation: &'static str,
    name: &'static str,
    minimum: Azimuth,
    middle: Azimuth,
    maximum: Azimuth,
}

impl CompassPoint {
    /// Short code unique within its rose, e.g. `NNE` or `SWbS`
    pub fn abbreviation(&self) -> &'static str {
        self.abbreviation
    }

    /// Full English name, e.g. `North-northeast`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Position in the rose, clockwise from the North (which is 0)
    pub fn ordinal(&self) -> usize {
        usize::from(self.ordinal)
    }

    /// The first azimuth of the sector (inclusive)
    pub fn minimum(&self) -> Azimuth {
        self.minimum
    }

    /// The azimuth the point is centered on
    pub fn middle(&self) -> Azimuth {
        self.middle
    }

    /// The last azimuth of the sector (inclusive)
    pub fn maximum(&self) -> Azimuth {
        self.maximum
    }

    /// Which rose the point belongs to
    pub fn point_count(&self) -> PointCount {
        self.kind
    }

    /// The only point which sector wraps around the zero azimuth
    pub fn is_north(&self) -> bool {
        self.ordinal == 0
    }

    /// The rose the point belongs to
    pub fn scale(&self) -> &'static CompassScale {
        self.kind.scale()
    }

    /// The adjacent point clockwise
    pub fn next(&self) -> Self {
        self.scale().next(*self)
    }

    /// The adjacent point counterclockwise
    pub fn previous(&self) -> Self {
        self.scale().previous(*self)
    }
}

impl fmt::Display for CompassPoint {
    /// The abbreviation, or the full name with the alternate flag (`{:#}`)
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str(self.name)
        } else {
            f.write_str(self.abbreviation)
        }
    }
}

lazy_static! {
    static ref EIGHT_POINT: CompassScale = CompassScale::build(PointCount::Eight);
    static ref SIXTEEN_POINT: CompassScale = CompassScale::build(PointCount::Sixteen);
    static ref THIRTY_TWO_POINT: CompassScale = CompassScale::build(PointCount::ThirtyTwo);
}

/// The ordered cyclic sequence of compass points
#[derive(Debug)]
pub struct CompassScale {
    kind: PointCount,
    points: Vec<CompassPoint>,
    by_abbreviation: UniqueIndex<&'static str, CompassPoint>,
}

impl CompassScale {
    /// # Panics
    /// The table is malformed (wrong number of rows or a repeated abbreviation).
    fn build(kind: PointCount) -> Self {
        let rows = kind.table();
        assert_eq!(
            rows.len(),
            kind.count(),
            "{} table should have a row for every point",
            kind
        );

        let points: Vec<_> = rows
            .iter()
            .zip(0_u8..)
            .map(|(row, ordinal)| CompassPoint {
                kind,
                ordinal,
                abbreviation: row.abbreviation,
                name: row.name,
                minimum: row.minimum,
                middle: row.middle,
                maximum: row.maximum,
            })
            .collect();

        let by_abbreviation = UniqueIndex::build(points.iter().copied(), CompassPoint::abbreviation);

        debug!(points = points.len(), "{} compass is ready", kind);
        Self {
            kind,
            points,
            by_abbreviation,
        }
    }

    /// The granularity of the rose
    pub fn kind(&self) -> PointCount {
        self.kind
    }

    /// The number of points: 8, 16 or 32
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// The point at the given position.
    /// The position is taken by modulo of the number of points,
    /// so any number is valid.
    pub fn point_at(&self, ordinal: usize) -> CompassPoint {
        self.points[ordinal % self.points.len()]
    }

    /// The first point of the rose
    pub fn north(&self) -> CompassPoint {
        self.point_at(0)
    }

    /// The adjacent point clockwise.
    /// Only the ordinal of the given point is taken into account.
    pub fn next(&self, point: CompassPoint) -> CompassPoint {
        self.point_at(point.ordinal() + 1)
    }

    /// The adjacent point counterclockwise.
    /// Only the ordinal of the given point is taken into account.
    pub fn previous(&self, point: CompassPoint) -> CompassPoint {
        let count = self.point_count();
        self.point_at(point.ordinal() % count + count - 1)
    }

    /// All the points clockwise starting from the North
    pub fn points(&self) -> impl Iterator<Item = CompassPoint> + '_ {
        self.points.iter().copied()
    }

    /// The point with the given abbreviation (case-sensitive), if any
    pub fn lookup(&self, abbreviation: &str) -> Option<CompassPoint> {
        self.by_abbreviation.get(abbreviation).copied()
    }
}
