//! Reduce the raw (e.g. calculated by the trigonometric formulas)
//! bearings into the canonical `[0, 360)` range.

use crate::errors::{OutOfRange, Quantity, ValueError};

use super::FULL_TURN;

const HALF_TURN: f64 = FULL_TURN / 2.0;

/// Reduce any angle (negative or more than a full turn) into `[0, 360)`.
///
/// ```
/// use geonav_types::normalize;
///
/// assert_eq!(normalize(-10.0), 350.0);
/// assert_eq!(normalize(370.0), 10.0);
/// assert_eq!(normalize(360.0), 0.0);
/// ```
pub fn normalize(degrees: f64) -> f64 {
    // the remainder keeps the sign of the dividend
    let rem = degrees % FULL_TURN;
    let wrapped = if rem < 0.0 { rem + FULL_TURN } else { rem };

    // a tiny negative remainder rounds up to the full turn
    if wrapped >= FULL_TURN {
        0.0
    } else {
        wrapped + 0.0
    }
}

/// The bearing pointing back to the origin of the given initial bearing.
///
/// The initial bearing of exactly 180 (or -180) degrees turns back to the North.
///
/// # Errors
/// When the initial bearing is not in the range `[0, 360]`.
#[allow(clippy::float_cmp)]
pub fn back_azimuth(initial: f64) -> Result<f64, ValueError> {
    if initial == HALF_TURN || initial == -HALF_TURN {
        return Ok(0.0);
    }

    let initial = OutOfRange::check(Quantity::Bearing, initial, 0.0, FULL_TURN)?;
    let initial = if initial < FULL_TURN { initial } else { 0.0 };

    let back = if initial < HALF_TURN {
        initial + HALF_TURN
    } else {
        initial - HALF_TURN
    };
    Ok(normalize(back))
}
