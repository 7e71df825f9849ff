pub(crate) const MAX_DEGREE: u16 = 360;

pub(crate) const DEGREE_SIGN: char = '°';

pub(crate) const FULL_TURN_DEG: u16 = MAX_DEGREE;
pub(crate) const HALF_TURN_DEG: u16 = FULL_TURN_DEG >> 1;

pub(crate) const FULL_TURN: f64 = FULL_TURN_DEG as f64;
