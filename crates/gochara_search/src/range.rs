//! Half-open time intervals and their sample grids.

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::SearchError;

/// Half-open interval `[start, end)` in UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeRange {
    /// Build a range without checking order. Degenerate ranges scan nothing.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Build a range, rejecting `start >= end`.
    pub fn validated(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, SearchError> {
        if start >= end {
            return Err(SearchError::InvalidInterval);
        }
        Ok(Self { start, end })
    }

    /// True when the range holds no instant (`start >= end`).
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Length of the range, zero when degenerate.
    pub fn duration(&self) -> TimeDelta {
        if self.is_empty() {
            TimeDelta::zero()
        } else {
            self.end - self.start
        }
    }

    /// Sample instants `start, start + step, ...` strictly before `end`.
    ///
    /// A non-positive step yields no samples.
    pub fn samples(&self, step: TimeDelta) -> impl Iterator<Item = DateTime<Utc>> + '_ {
        let first = (step > TimeDelta::zero() && !self.is_empty()).then_some(self.start);
        std::iter::successors(first, move |t| t.checked_add_signed(step))
            .take_while(move |t| *t < self.end)
    }

    /// Number of samples `samples(step)` yields.
    pub fn sample_count(&self, step: TimeDelta) -> usize {
        let step_ms = step.num_milliseconds();
        if step_ms <= 0 || self.is_empty() {
            return 0;
        }
        let dur_ms = self.duration().num_milliseconds();
        ((dur_ms + step_ms - 1) / step_ms) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, h, m, 0).unwrap()
    }

    #[test]
    fn validated_rejects_reversed_and_equal() {
        assert_eq!(
            TimeRange::validated(t(2, 0), t(1, 0)),
            Err(SearchError::InvalidInterval)
        );
        assert_eq!(
            TimeRange::validated(t(1, 0), t(1, 0)),
            Err(SearchError::InvalidInterval)
        );
        assert!(TimeRange::validated(t(1, 0), t(1, 1)).is_ok());
    }

    #[test]
    fn samples_are_half_open() {
        let r = TimeRange::new(t(0, 0), t(0, 10));
        let s: Vec<_> = r.samples(TimeDelta::minutes(5)).collect();
        assert_eq!(s, vec![t(0, 0), t(0, 5)]);
        assert_eq!(r.sample_count(TimeDelta::minutes(5)), 2);
    }

    #[test]
    fn partial_last_step_is_sampled() {
        let r = TimeRange::new(t(0, 0), t(0, 11));
        assert_eq!(r.samples(TimeDelta::minutes(5)).count(), 3);
        assert_eq!(r.sample_count(TimeDelta::minutes(5)), 3);
    }

    #[test]
    fn degenerate_has_no_samples() {
        let r = TimeRange::new(t(1, 0), t(0, 0));
        assert!(r.is_empty());
        assert_eq!(r.samples(TimeDelta::minutes(1)).count(), 0);
        assert_eq!(r.duration(), TimeDelta::zero());
    }

    #[test]
    fn zero_step_has_no_samples() {
        let r = TimeRange::new(t(0, 0), t(1, 0));
        assert_eq!(r.samples(TimeDelta::zero()).count(), 0);
    }
}
