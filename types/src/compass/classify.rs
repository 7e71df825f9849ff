use std::convert::TryFrom;

use tracing::trace;

use crate::{angle::Azimuth, errors::ValueError, utils::RoundDiv};

use super::{CompassPoint, CompassScale};

impl CompassPoint {
    /// Is the azimuth inside the (inclusive) sector of the point?
    ///
    /// The sector of the North consists of two parts:
    /// `[minimum, 360]` and `[0, maximum]`.
    pub fn contains(&self, azimuth: Azimuth) -> bool {
        if self.is_north() {
            azimuth >= self.minimum || azimuth <= self.maximum
        } else {
            self.minimum <= azimuth && azimuth <= self.maximum
        }
    }
}

impl CompassScale {
    /// Find the point which sector contains the bearing.
    ///
    /// The bearing is rounded half-up to the hundredths of a degree
    /// before the lookup, and the 360 is the same as 0 (North).
    ///
    /// # Errors
    /// When the bearing is not in the range `[0, 360]`.
    pub fn classify(&self, bearing: f64) -> Result<CompassPoint, ValueError> {
        let azimuth = Azimuth::try_from(bearing)?;
        Ok(self.classify_azimuth(azimuth))
    }

    /// Find the point which sector contains the exact azimuth
    pub fn classify_azimuth(&self, azimuth: Azimuth) -> CompassPoint {
        let azimuth = azimuth.normalized();
        let step = u32::from(self.kind.step().centidegrees());
        let last = self.point_count() - 1;

        let estimate = u32::from(azimuth.centidegrees()).div_round_half_up(step);
        let estimate = usize::try_from(estimate).map_or(last, |index| index.min(last));
        let candidate = self.point_at(estimate);
        if candidate.contains(azimuth) {
            return candidate;
        }

        // the estimate misses by one sector at most
        let corrected = if azimuth > candidate.maximum {
            self.next(candidate)
        } else {
            self.previous(candidate)
        };
        trace!(
            %azimuth,
            estimated = candidate.abbreviation,
            corrected = corrected.abbreviation,
            "{} sector estimate corrected",
            self.kind
        );
        debug_assert!(corrected.contains(azimuth));
        corrected
    }
}
