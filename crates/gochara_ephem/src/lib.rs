//! Ephemeris oracle seam for the gochara scanners.
//!
//! This crate provides:
//! - [`EphemerisOracle`], the trait scanners call for body positions
//! - [`Body`] with the Ketu = Rahu + 180 deg convention
//! - Julian Date conversion from civil UTC timestamps
//! - Ayanamsha systems (J2000 reference + IAU 2006 general precession)
//! - Lunar node (Rahu) longitudes
//! - [`AnalyticEphemeris`], a kernel-free low-precision oracle

pub mod analytic;
pub mod ayanamsha;
pub mod body;
pub mod error;
pub mod julian;
pub mod lunar_nodes;
pub mod oracle;
pub mod precession;

pub use analytic::AnalyticEphemeris;
pub use ayanamsha::{AyanamshaSystem, ayanamsha_deg};
pub use body::{ALL_BODIES, Body};
pub use error::OracleError;
pub use julian::{J2000_JD, calendar_to_jd, jd_to_centuries, utc_to_jd};
pub use lunar_nodes::true_rahu_deg;
pub use oracle::EphemerisOracle;

/// Normalize an angle to [0, 360).
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r >= 0.0 {
        return r;
    }
    // A tiny negative remainder rounds up to exactly 360.0.
    let wrapped = r + 360.0;
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_basic() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-12);
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-12);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-12);
        assert!((normalize_360(725.5) - 5.5).abs() < 1e-12);
    }

    #[test]
    fn normalize_tiny_negative_stays_below_360() {
        assert_eq!(normalize_360(-1e-15), 0.0);
        assert!(normalize_360(-1e-9) < 360.0);
    }
}
