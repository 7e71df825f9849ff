//! Compass bearings and geographic coordinates.
//!
//! Classify an azimuth into the 8-, 16- or 32-point compass rose,
//! reverse it, and get it from the great-circle course between two points.
//!
//! ```
//! use geonav_types::{DistanceUnit, Point, PointCount};
//!
//! let london = Point::with_coordinates(51.5074, -0.1278).unwrap();
//! let paris = Point::with_coordinates(48.8566, 2.3522).unwrap();
//!
//! let bearing = london.bearing_to(&paris, PointCount::Sixteen).unwrap();
//! assert_eq!(bearing.direction().abbreviation(), "SSE");
//! assert_eq!(bearing.reverse().direction().abbreviation(), "NNW");
//!
//! let km = london.distance_to(&paris, DistanceUnit::Kilometers);
//! assert!((km - 343.56).abs() < 0.01);
//! ```

// do not warn on older Rust versions
#![allow(unknown_lints)]
//
// The following list was generated with the command
//   $ rustc -W help | grep ' allow ' | awk '{print $1}' | tr - _ | sort | xargs -I{} echo '#![warn({})]'
//
#![warn(absolute_paths_not_starting_with_crate)]
#![warn(anonymous_parameters)]
// use `Box` without fear
#![warn(box_pointers)]
#![warn(deprecated_in_future)]
#![warn(elided_lifetimes_in_paths)]
#![warn(explicit_outlives_requirements)]
#![warn(indirect_structural_match)]
#![warn(invalid_html_tags)]
#![warn(keyword_idents)]
#![warn(macro_use_extern_crate)]
#![warn(meta_variable_misuse)]
#![warn(missing_copy_implementations)]
#![warn(missing_crate_level_docs)]
#![warn(missing_debug_implementations)]
#![warn(missing_doc_code_examples)]
#![warn(missing_docs)]
#![warn(non_ascii_idents)]
#![warn(pointer_structural_match)]
#![warn(private_doc_tests)]
#![warn(single_use_lifetimes)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
// conflicts with the `clippy::redundant_pub_crate`
#![allow(unreachable_pub)]
// !!! NO UNSAFE
#![forbid(unsafe_code)]
#![warn(unstable_features)]
#![warn(unused_crate_dependencies)]
#![warn(unused_extern_crates)]
#![warn(unused_import_braces)]
#![warn(unused_labels)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]
#![warn(unused_results)]
#![warn(variant_size_differences)]
//
// additional recommendations
#![deny(clippy::mem_forget)]
// suppress some pedantic warnings
#![allow(clippy::non_ascii_literal)]
#![allow(clippy::must_use_candidate)]
// `use super::*` in tests
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub use angle::{
    normalize::{back_azimuth, normalize},
    AngleNames, Azimuth, ParseAngleError,
};
pub use bearing::Bearing;
pub use compass::{
    CompassPoint, CompassScale, DuplicateKey, PointCount, UniqueIndex, UnsupportedPointCount,
};
pub use coord::{
    Coordinate, CoordinateKind, Latitude, Longitude, ParseCoordinateError, Point, Pole,
    RotationalDirection,
};
pub use errors::{OutOfRange, Quantity, ValueError};
pub use geodesy::{DistanceUnit, EARTH_MEAN_RADIUS_KM};

mod angle;
mod bearing;
mod compass;
mod coord;
mod errors;
mod geodesy;
mod utils;

// only the `serde` feature tests read JSON
#[cfg(all(test, not(feature = "serde")))]
use serde_json as _;
