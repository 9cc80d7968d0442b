//! Zodiac classification of sidereal longitudes.
//!
//! This crate provides:
//! - Rashi (12 signs of 30 deg) with degrees-minutes-seconds inside the sign
//! - Nakshatra (27 mansions of 13 deg 20') with pada (quarter)
//! - Sign names in Sanskrit, English and Russian, and lookup from any of them
//! - [`Sector`], the unit a transit search watches
//!
//! Every function here is pure and total for finite input.

pub mod error;
pub mod nakshatra;
pub mod rashi;
pub mod sector;

pub use error::VedicError;
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude,
};
pub use sector::{Sector, SectorKind, SectorPosition};

/// Normalize longitude to [0, 360).
pub(crate) fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r >= 0.0 {
        return r;
    }
    // A tiny negative remainder rounds up to exactly 360.0.
    let wrapped = r + 360.0;
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Lowercase and drop whitespace, `-` and `_` for name comparison.
pub(crate) fn fold_name(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}
