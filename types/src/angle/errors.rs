use std::num::ParseFloatError;

use thiserror::Error;

use crate::errors::{OutOfRange, ValueError};

/// Failed to read an angle from a string
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseAngleError {
    /// The number was read but it is not a valid angle
    #[error("Cannot parse angle: {0}")]
    Value(#[from] ValueError),
    /// Not a decimal number
    #[error("Cannot parse angle: {0}")]
    Float(#[from] ParseFloatError),
}

impl From<OutOfRange> for ParseAngleError {
    fn from(err: OutOfRange) -> Self {
        Self::Value(err.into())
    }
}
