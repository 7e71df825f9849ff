//! The sector boundaries in hundredths of a degree.
//!
//! The boundaries are rounded to 0.01 degree the same way
//! the printed compass tables do it, so they are written out
//! instead of being calculated from the step.

use crate::angle::Azimuth;

pub(super) struct Row {
    pub(super) abbreviation: &'static str,
    pub(super) name: &'static str,
    pub(super) minimum: Azimuth,
    pub(super) middle: Azimuth,
    pub(super) maximum: Azimuth,
}

const fn row(
    abbreviation: &'static str,
    name: &'static str,
    minimum: u16,
    middle: u16,
    maximum: u16,
) -> Row {
    Row {
        abbreviation,
        name,
        minimum: Azimuth::from_centidegrees_unchecked(minimum),
        middle: Azimuth::from_centidegrees_unchecked(middle),
        maximum: Azimuth::from_centidegrees_unchecked(maximum),
    }
}

#[rustfmt::skip]
pub(super) const EIGHT_POINTS: [Row; 8] = [
    row("N",    "North",               33750,     0,  2249),
    row("NE",   "Northeast",            2250,  4500,  6749),
    row("E",    "East",                 6750,  9000, 11249),
    row("SE",   "Southeast",           11250, 13500, 15749),
    row("S",    "South",               15750, 18000, 20249),
    row("SW",   "Southwest",           20250, 22500, 24749),
    row("W",    "West",                24750, 27000, 29249),
    row("NW",   "Northwest",           29250, 31500, 33749),
];

#[rustfmt::skip]
pub(super) const SIXTEEN_POINTS: [Row; 16] = [
    row("N",    "North",               34875,     0,  1124),
    row("NNE",  "North-northeast",      1125,  2250,  3374),
    row("NE",   "Northeast",            3375,  4500,  5624),
    row("ENE",  "East-northeast",       5625,  6750,  7874),
    row("E",    "East",                 7875,  9000, 10124),
    row("ESE",  "East-southeast",      10125, 11250, 12374),
    row("SE",   "Southeast",           12375, 13500, 14624),
    row("SSE",  "South-southeast",     14625, 15750, 16874),
    row("S",    "South",               16875, 18000, 19124),
    row("SSW",  "South-southwest",     19125, 20250, 21374),
    row("SW",   "Southwest",           21375, 22500, 23624),
    row("WSW",  "West-southwest",      23625, 24750, 25874),
    row("W",    "West",                25875, 27000, 28124),
    row("WNW",  "West-northwest",      28125, 29250, 30374),
    row("NW",   "Northwest",           30375, 31500, 32624),
    row("NNW",  "North-northwest",     32625, 33750, 34874),
];

#[rustfmt::skip]
pub(super) const THIRTY_TWO_POINTS: [Row; 32] = [
    row("N",    "North",               35438,     0,   562),
    row("NbE",  "North by east",         563,  1125,  1687),
    row("NNE",  "North-northeast",      1688,  2250,  2812),
    row("NEbN", "Northeast by north",   2813,  3375,  3937),
    row("NE",   "Northeast",            3938,  4500,  5062),
    row("NEbE", "Northeast by east",    5063,  5625,  6187),
    row("ENE",  "East-northeast",       6188,  6750,  7312),
    row("EbN",  "East by north",        7313,  7875,  8437),
    row("E",    "East",                 8438,  9000,  9562),
    row("EbS",  "East by south",        9563, 10125, 10687),
    row("ESE",  "East-southeast",      10688, 11250, 11812),
    row("SEbE", "Southeast by east",   11813, 12375, 12937),
    row("SE",   "Southeast",           12938, 13500, 14062),
    row("SEbS", "Southeast by south",  14063, 14625, 15187),
    row("SSE",  "South-southeast",     15188, 15750, 16312),
    row("SbE",  "South by east",       16313, 16875, 17437),
    row("S",    "South",               17438, 18000, 18562),
    row("SbW",  "South by west",       18563, 19125, 19687),
    row("SSW",  "South-southwest",     19688, 20250, 20812),
    row("SWbS", "Southwest by south",  20813, 21375, 21937),
    row("SW",   "Southwest",           21938, 22500, 23062),
    row("SWbW", "Southwest by west",   23063, 23625, 24187),
    row("WSW",  "West-southwest",      24188, 24750, 25312),
    row("WbS",  "West by south",       25313, 25875, 26437),
    row("W",    "West",                26438, 27000, 27562),
    row("WbN",  "West by north",       27563, 28125, 28687),
    row("WNW",  "West-northwest",      28688, 29250, 29812),
    row("NWbW", "Northwest by west",   29813, 30375, 30937),
    row("NW",   "Northwest",           30938, 31500, 32062),
    row("NWbN", "Northwest by north",  32063, 32625, 33187),
    row("NNW",  "North-northwest",     33188, 33750, 34312),
    row("NbW",  "North by west",       34313, 34875, 35437),
];
