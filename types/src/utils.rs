//! Utilities functions which do not linked to domain

use std::ops::{Add, Div, Mul, Rem, Sub};

/// Strip the given character from the end
pub(crate) trait StripChar {
    /// Strip the character from the end
    fn strip_suffix_char(self, ch: char) -> Option<String>;
    /// Split into the rest of the string and the last character
    fn split_last(self) -> Option<(String, char)>;
}

impl StripChar for &str {
    fn strip_suffix_char(self, ch: char) -> Option<String> {
        self.strip_suffix(ch).map(str::to_string)
    }

    fn split_last(self) -> Option<(String, char)> {
        self.chars().last().and_then(|tail| {
            self.strip_suffix_char(tail)
                .map(|stripped| (stripped, tail))
        })
    }
}

/// Division and remainder in one step
pub fn div_mod<T>(divider: T, divisor: T) -> (T, T)
where
    T: Copy + Div<Output = T> + Rem<Output = T>,
{
    (divider / divisor, divider % divisor)
}

/// Integer division rounding the exact half away from zero
pub(crate) trait RoundDiv {
    fn div_round_half_up(self, y: Self) -> Self;
}

impl<T> RoundDiv for T
where
    T: Copy
        + PartialOrd
        + From<u8>
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Rem<Output = T>,
{
    fn div_round_half_up(self, y: Self) -> Self {
        let (quot, rem) = div_mod(self, y);
        if rem * Self::from(2) >= y {
            // >= 0.5 rounds up
            quot + Self::from(1)
        } else {
            quot
        }
    }
}

const POW_10: [u32; 10] = [
    1_u32,
    10,
    100,
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    100_000_000,
    1_000_000_000,
];

/// The powers of 10
pub const fn pow_10(pow: usize) -> u32 {
    POW_10[pow]
}

/// Scale the non-negative number by `10^decimals` and round it half-up
/// to the whole number.
///
/// The digits are taken from the shortest decimal representation
/// which still round-trips to the same `f64`, so the value `0.145`
/// is treated as written (rounds to `0.15`) and not as its binary approximation
/// `0.144999...`.
///
/// Returns `None` for negative or non-finite values and on overflow.
pub(crate) fn round_half_up_scaled(value: f64, decimals: usize) -> Option<u64> {
    if !value.is_finite() || (value.is_sign_negative() && value != 0.0) {
        return None;
    }

    // the `Display` of `f64` never switches to the exponent notation
    let repr = value.abs().to_string();
    let (whole, fraction) = repr.split_once('.').unwrap_or((&repr, ""));

    let whole: u64 = whole.parse().ok()?;
    let mut scaled = whole.checked_mul(u64::from(pow_10(decimals)))?;

    let mut digits = fraction.bytes().map(|b| u64::from(b - b'0'));
    for position in (0..decimals).rev() {
        let digit = digits.next().unwrap_or(0);
        scaled = scaled.checked_add(digit * u64::from(pow_10(position)))?;
    }

    if digits.next().map_or(false, |first_dropped| first_dropped >= 5) {
        scaled = scaled.checked_add(1)?;
    }

    Some(scaled)
}
