//! Angles measured in degrees clockwise from the North

mod azimuth;
mod common;
pub(crate) mod consts;
mod errors;
pub mod normalize;

pub use azimuth::Azimuth;
pub use errors::ParseAngleError;

pub(crate) use consts::FULL_TURN;

#[allow(clippy::module_name_repetitions)]
/// Common terminology for angles
/// <https://en.wikipedia.org/wiki/Angle#Individual_angles>
pub trait AngleNames: Copy + PartialOrd {
    /// No turn at all
    fn zero() -> Self;

    /// The angle made of two exactly opposite direction
    fn straight() -> Self;

    /// The angle made of full circle (perigon)
    fn complete() -> Self;

    /// No angle
    fn is_zero(self) -> bool {
        self == Self::zero()
    }

    /// Is the angle forms a straight line?
    fn is_straight(self) -> bool {
        self == Self::straight()
    }

    /// Is the angle more than a straight line?
    fn is_reflex(self) -> bool {
        self > Self::straight() && self < Self::complete()
    }

    /// Is the angle full round?
    fn is_complete(self) -> bool {
        self == Self::complete()
    }
}
