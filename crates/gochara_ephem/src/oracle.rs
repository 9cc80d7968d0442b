//! The ephemeris oracle consumed by the scanners.

use chrono::{DateTime, Utc};

use crate::body::Body;
use crate::error::OracleError;
use crate::julian::utc_to_jd;
use crate::normalize_360;

/// Source of body positions and the sidereal correction.
///
/// Implementations are shared by reference across scanner workers, so they
/// must be [`Send`] + [`Sync`] and must not rely on per-call mutable state.
pub trait EphemerisOracle: Send + Sync {
    /// Julian Date for a UTC civil timestamp (proleptic Gregorian).
    fn julian_day(&self, utc: &DateTime<Utc>) -> Result<f64, OracleError> {
        Ok(utc_to_jd(utc))
    }

    /// Raw tropical ecliptic longitude in degrees, not normalized.
    ///
    /// Only called with [`Body::source`] bodies (never Ketu).
    fn tropical_longitude_deg(&self, body: Body, jd: f64) -> Result<f64, OracleError>;

    /// Ayanamsha (tropical minus sidereal) in degrees.
    fn ayanamsa_deg(&self, jd: f64) -> Result<f64, OracleError>;

    /// Sidereal longitude in [0, 360) for a body at `jd` with a precomputed
    /// ayanamsha.
    fn sidereal_longitude_at(
        &self,
        body: Body,
        jd: f64,
        ayanamsa_deg: f64,
    ) -> Result<f64, OracleError> {
        let raw = self.tropical_longitude_deg(body.source(), jd)?;
        let lon = normalize_360(raw + body.phase_shift_deg() - ayanamsa_deg);
        if lon.is_finite() {
            Ok(lon)
        } else {
            Err(OracleError::NonFinite {
                what: "sidereal longitude",
            })
        }
    }

    /// Sidereal longitude in [0, 360) for a body at a UTC timestamp.
    fn sidereal_longitude_deg(&self, body: Body, utc: &DateTime<Utc>) -> Result<f64, OracleError> {
        let jd = self.julian_day(utc)?;
        let aya = self.ayanamsa_deg(jd)?;
        self.sidereal_longitude_at(body, jd, aya)
    }
}

impl<T: EphemerisOracle + ?Sized> EphemerisOracle for &T {
    fn julian_day(&self, utc: &DateTime<Utc>) -> Result<f64, OracleError> {
        (**self).julian_day(utc)
    }

    fn tropical_longitude_deg(&self, body: Body, jd: f64) -> Result<f64, OracleError> {
        (**self).tropical_longitude_deg(body, jd)
    }

    fn ayanamsa_deg(&self, jd: f64) -> Result<f64, OracleError> {
        (**self).ayanamsa_deg(jd)
    }
}
