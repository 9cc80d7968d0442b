//! Kernel-free analytic ephemeris.
//!
//! Low-precision theories good to a few arcminutes for the Sun and planets
//! and roughly a tenth of a degree for the Moon inside 1800..2050:
//! - Sun: geometric mean longitude + equation of centre (Meeus ch. 25)
//! - Moon: principal periodic terms of the lunar longitude (Meeus ch. 47)
//! - Mercury..Saturn: Keplerian mean elements (Standish, "Approximate
//!   Positions of the Planets", Table 1), geocentric via the Earth-Moon
//!   barycentre, precessed from the J2000 ecliptic to the equinox of date
//! - Rahu: true lunar node
//!
//! Light time, aberration and nutation are ignored.

mod moon;
mod planets;
mod sun;

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg};
use crate::body::Body;
use crate::error::OracleError;
use crate::julian::{calendar_to_jd, jd_to_centuries};
use crate::lunar_nodes::true_rahu_deg;
use crate::oracle::EphemerisOracle;

/// Analytic oracle with a validity window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticEphemeris {
    system: AyanamshaSystem,
    jd_min: f64,
    jd_max: f64,
}

impl AnalyticEphemeris {
    /// Oracle for the given ayanamsha system, valid 1800-01-01 .. 2050-01-01.
    pub fn new(system: AyanamshaSystem) -> Self {
        Self {
            system,
            jd_min: calendar_to_jd(1800, 1, 1.0),
            jd_max: calendar_to_jd(2050, 1, 1.0),
        }
    }

    /// Restrict (or widen) the range of Julian Dates the oracle accepts.
    pub fn with_validity(mut self, jd_min: f64, jd_max: f64) -> Self {
        self.jd_min = jd_min;
        self.jd_max = jd_max;
        self
    }

    fn check_epoch(&self, jd: f64) -> Result<(), OracleError> {
        if !jd.is_finite() {
            return Err(OracleError::NonFinite { what: "julian day" });
        }
        if jd < self.jd_min || jd >= self.jd_max {
            return Err(OracleError::EpochOutOfRange { jd });
        }
        Ok(())
    }
}

impl Default for AnalyticEphemeris {
    fn default() -> Self {
        Self::new(AyanamshaSystem::default())
    }
}

impl EphemerisOracle for AnalyticEphemeris {
    fn tropical_longitude_deg(&self, body: Body, jd: f64) -> Result<f64, OracleError> {
        self.check_epoch(jd)?;
        let t = jd_to_centuries(jd);
        match body {
            Body::Sun => Ok(sun::apparent_longitude_deg(t)),
            Body::Moon => Ok(moon::longitude_deg(t)),
            Body::Rahu => Ok(true_rahu_deg(t)),
            Body::Mercury | Body::Venus | Body::Mars | Body::Jupiter | Body::Saturn => {
                planets::geocentric_longitude_deg(body, t)
            }
            Body::Ketu => Err(OracleError::UnsupportedBody(body)),
        }
    }

    fn ayanamsa_deg(&self, jd: f64) -> Result<f64, OracleError> {
        self.check_epoch(jd)?;
        Ok(ayanamsha_deg(self.system, jd))
    }
}
