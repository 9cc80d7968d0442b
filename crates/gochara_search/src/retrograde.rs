//! Fixed-step retrograde scan: samples where apparent motion reverses.

use chrono::TimeDelta;
use gochara_ephem::{Body, EphemerisOracle};
use gochara_vedic::rashi_from_longitude;
use tracing::debug;

use crate::cancel::{CancellationToken, checkpoint};
use crate::config::AngleMode;
use crate::error::SearchError;
use crate::range::TimeRange;
use crate::retrograde_types::{RetroTracker, RetrogradeEvent};
use crate::scanner::{SampleFrame, Scanner};

/// Reports retrograde start and end samples for one body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetrogradeScanner {
    pub body: Body,
    pub mode: AngleMode,
}

impl RetrogradeScanner {
    pub fn new(body: Body) -> Self {
        Self {
            body,
            mode: AngleMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: AngleMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Scanner for RetrogradeScanner {
    type Event = RetrogradeEvent;

    fn name(&self) -> &'static str {
        "retrograde"
    }

    fn scan(
        &self,
        range: &TimeRange,
        step: TimeDelta,
        oracle: &dyn EphemerisOracle,
        cancel: &CancellationToken,
    ) -> Result<Vec<RetrogradeEvent>, SearchError> {
        let mut tracker = RetroTracker::default();
        let mut events = Vec::new();
        for t in range.samples(step) {
            checkpoint(cancel)?;
            let moment = SampleFrame::at(oracle, t)?.moment(oracle, self.body)?;
            if let Some(kind) = tracker.observe(moment.longitude_deg, self.mode) {
                events.push(RetrogradeEvent {
                    body: self.body,
                    moment,
                    rashi: rashi_from_longitude(moment.longitude_deg),
                    kind,
                });
            }
        }
        debug!(
            body = %self.body,
            start = %range.start,
            found = events.len(),
            "retrograde scan finished"
        );
        Ok(events)
    }
}
