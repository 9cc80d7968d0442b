//! Stub oracles shared by integration tests.

#![allow(dead_code)]

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use gochara_ephem::{Body, EphemerisOracle, OracleError, utc_to_jd};
use gochara_search::{ParallelConfig, ScanConfig, TimeRange};

/// Oracle driven by a closure of (body, whole hours since [`epoch`]); ayanamsha 0.
pub struct HourlyOracle<F>(F);

impl<F> HourlyOracle<F>
where
    F: Fn(Body, i64) -> Result<f64, OracleError> + Send + Sync,
{
    pub fn new(f: F) -> Self {
        Self(f)
    }
}

impl<F> EphemerisOracle for HourlyOracle<F>
where
    F: Fn(Body, i64) -> Result<f64, OracleError> + Send + Sync,
{
    fn tropical_longitude_deg(&self, body: Body, jd: f64) -> Result<f64, OracleError> {
        let hours = ((jd - utc_to_jd(&epoch())) * 24.0).round() as i64;
        (self.0)(body, hours)
    }

    fn ayanamsa_deg(&self, _jd: f64) -> Result<f64, OracleError> {
        Ok(0.0)
    }
}

pub fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

pub fn at_hour(h: i64) -> DateTime<Utc> {
    epoch() + TimeDelta::hours(h)
}

/// Hourly scan over `[epoch, epoch + n h)`.
pub fn hourly(n: i64) -> ScanConfig {
    ScanConfig::new(TimeRange::new(epoch(), at_hour(n)), TimeDelta::hours(1))
}

pub fn sequential(n: i64) -> ScanConfig {
    hourly(n).with_parallel(ParallelConfig::disabled())
}
