//! Fixed-step conjunction scan.
//!
//! Every sample whose two sidereal longitudes lie closer than the accuracy
//! threshold is reported. There is no refinement between samples, so a slow
//! pair can produce a run of consecutive events and a fast pair can slip
//! through between two samples.

use chrono::TimeDelta;
use gochara_ephem::{Body, EphemerisOracle};
use tracing::debug;

use crate::cancel::{CancellationToken, checkpoint};
use crate::config::AngleMode;
use crate::conjunction_types::{ConjunctionEvent, DEFAULT_ACCURACY_DEG};
use crate::error::SearchError;
use crate::range::TimeRange;
use crate::scanner::{SampleFrame, Scanner};

/// Reports samples where two bodies share a longitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConjunctionScanner {
    pub body1: Body,
    pub body2: Body,
    /// Separation threshold in degrees (exclusive).
    pub accuracy_deg: f64,
    pub mode: AngleMode,
}

impl ConjunctionScanner {
    pub fn new(body1: Body, body2: Body) -> Self {
        Self {
            body1,
            body2,
            accuracy_deg: DEFAULT_ACCURACY_DEG,
            mode: AngleMode::default(),
        }
    }

    pub fn with_accuracy(mut self, accuracy_deg: f64) -> Self {
        self.accuracy_deg = accuracy_deg;
        self
    }

    pub fn with_mode(mut self, mode: AngleMode) -> Self {
        self.mode = mode;
        self
    }
}

impl Scanner for ConjunctionScanner {
    type Event = ConjunctionEvent;

    fn name(&self) -> &'static str {
        "conjunction"
    }

    fn validate(&self) -> Result<(), SearchError> {
        if !self.accuracy_deg.is_finite() || self.accuracy_deg <= 0.0 {
            return Err(SearchError::InvalidConfig("accuracy must be positive"));
        }
        Ok(())
    }

    fn scan(
        &self,
        range: &TimeRange,
        step: TimeDelta,
        oracle: &dyn EphemerisOracle,
        cancel: &CancellationToken,
    ) -> Result<Vec<ConjunctionEvent>, SearchError> {
        let mut events = Vec::new();
        for t in range.samples(step) {
            checkpoint(cancel)?;
            let frame = SampleFrame::at(oracle, t)?;
            let moment1 = frame.moment(oracle, self.body1)?;
            let moment2 = frame.moment(oracle, self.body2)?;
            let sep = self
                .mode
                .separation_deg(moment1.longitude_deg, moment2.longitude_deg);
            if sep < self.accuracy_deg {
                events.push(ConjunctionEvent {
                    body1: self.body1,
                    body2: self.body2,
                    moment1,
                    moment2,
                });
            }
        }
        debug!(
            body1 = %self.body1,
            body2 = %self.body2,
            start = %range.start,
            found = events.len(),
            "conjunction scan finished"
        );
        Ok(events)
    }
}
