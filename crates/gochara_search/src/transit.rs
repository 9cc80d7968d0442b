//! Fixed-step transit scan: first samples inside a sign or nakshatra.
//!
//! Each watched sector keeps its own occupancy state, so watching all 12
//! signs at once reports the same events as 12 single-sign scans merged in
//! time order, while querying the oracle once per sample.

use chrono::TimeDelta;
use gochara_ephem::{Body, EphemerisOracle};
use gochara_vedic::{nakshatra_from_longitude, rashi_from_longitude};
use tracing::debug;

use crate::cancel::{CancellationToken, checkpoint};
use crate::error::SearchError;
use crate::range::TimeRange;
use crate::scanner::{SampleFrame, Scanner};
use crate::transit_types::{TransitEvent, TransitTarget, TransitTracker};

/// Reports entries of a body into the target sector(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitScanner {
    pub body: Body,
    pub target: TransitTarget,
}

impl TransitScanner {
    pub fn new(body: Body, target: TransitTarget) -> Self {
        Self { body, target }
    }
}

impl Scanner for TransitScanner {
    type Event = TransitEvent;

    fn name(&self) -> &'static str {
        "transit"
    }

    fn scan(
        &self,
        range: &TimeRange,
        step: TimeDelta,
        oracle: &dyn EphemerisOracle,
        cancel: &CancellationToken,
    ) -> Result<Vec<TransitEvent>, SearchError> {
        let kind = self.target.kind();
        let mut trackers: Vec<TransitTracker> = self
            .target
            .sectors()
            .into_iter()
            .map(TransitTracker::new)
            .collect();

        let mut events = Vec::new();
        for t in range.samples(step) {
            checkpoint(cancel)?;
            let moment = SampleFrame::at(oracle, t)?.moment(oracle, self.body)?;
            let pos = kind.locate(moment.longitude_deg);
            for tracker in &mut trackers {
                if tracker.observe(pos.sector, pos.whole_degrees()) {
                    events.push(TransitEvent {
                        body: self.body,
                        moment,
                        sector: tracker.target(),
                        rashi: rashi_from_longitude(moment.longitude_deg),
                        nakshatra: nakshatra_from_longitude(moment.longitude_deg),
                    });
                }
            }
        }
        debug!(
            body = %self.body,
            sectors = trackers.len(),
            start = %range.start,
            found = events.len(),
            "transit scan finished"
        );
        Ok(events)
    }
}
