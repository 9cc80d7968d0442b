//! Stub oracles for unit tests.

use chrono::{DateTime, TimeZone, Utc};
use gochara_ephem::{Body, EphemerisOracle, OracleError, utc_to_jd};

/// Oracle driven by a closure of (body, hours since [`epoch`]); ayanamsha 0.
pub(crate) struct FnOracle<F>(F);

impl<F> FnOracle<F>
where
    F: Fn(Body, f64) -> Result<f64, OracleError> + Send + Sync,
{
    pub(crate) fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> EphemerisOracle for FnOracle<F>
where
    F: Fn(Body, f64) -> Result<f64, OracleError> + Send + Sync,
{
    fn tropical_longitude_deg(&self, body: Body, jd: f64) -> Result<f64, OracleError> {
        let hours = (jd - utc_to_jd(&epoch())) * 24.0;
        (self.0)(body, hours)
    }

    fn ayanamsa_deg(&self, _jd: f64) -> Result<f64, OracleError> {
        Ok(0.0)
    }
}

pub(crate) fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}
