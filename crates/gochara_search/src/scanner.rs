//! The capability every event scanner implements.

use chrono::{DateTime, TimeDelta, Utc};
use gochara_ephem::{Body, EphemerisOracle};

use crate::cancel::CancellationToken;
use crate::error::SearchError;
use crate::range::TimeRange;

/// A sampled instant and the body's sidereal longitude there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Moment {
    pub time: DateTime<Utc>,
    /// Sidereal longitude in [0, 360).
    pub longitude_deg: f64,
}

/// Fixed-step event detector over a time range.
///
/// `scan` starts from empty state every call: state never carries over
/// between ranges, so scanning two adjacent ranges can miss an event that a
/// single scan over their union reports.
pub trait Scanner: Sync {
    type Event: Send;

    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Reject parameters that make the scan meaningless.
    fn validate(&self) -> Result<(), SearchError> {
        Ok(())
    }

    /// Sample `range` every `step` and return events in sample order.
    fn scan(
        &self,
        range: &TimeRange,
        step: TimeDelta,
        oracle: &dyn EphemerisOracle,
        cancel: &CancellationToken,
    ) -> Result<Vec<Self::Event>, SearchError>;
}

/// Julian Date and ayanamsha at one sample, shared by every body queried there.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SampleFrame {
    pub time: DateTime<Utc>,
    jd: f64,
    ayanamsa_deg: f64,
}

impl SampleFrame {
    pub(crate) fn at(
        oracle: &dyn EphemerisOracle,
        time: DateTime<Utc>,
    ) -> Result<Self, SearchError> {
        let jd = oracle.julian_day(&time)?;
        let ayanamsa_deg = oracle.ayanamsa_deg(jd)?;
        Ok(Self {
            time,
            jd,
            ayanamsa_deg,
        })
    }

    pub(crate) fn moment(
        &self,
        oracle: &dyn EphemerisOracle,
        body: Body,
    ) -> Result<Moment, SearchError> {
        let longitude_deg = oracle.sidereal_longitude_at(body, self.jd, self.ayanamsa_deg)?;
        Ok(Moment {
            time: self.time,
            longitude_deg,
        })
    }
}
