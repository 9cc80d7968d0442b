//! Deterministic split of a time range into chunks on the sample grid.
//!
//! Every chunk holds `max(1, total_steps / workers)` steps, counted from
//! `range.start`, so chunk starts land on the same grid a single scan would
//! sample. The final chunk absorbs the remainder and ends at `range.end`.
//! When there are fewer steps than workers the trailing chunks are empty.

use chrono::{DateTime, TimeDelta, Utc};

use crate::error::SearchError;
use crate::range::TimeRange;

/// Split `range` into exactly `workers` contiguous chunks.
///
/// A degenerate range yields no chunks.
pub fn partition(
    range: &TimeRange,
    step: TimeDelta,
    workers: usize,
) -> Result<Vec<TimeRange>, SearchError> {
    if workers == 0 {
        return Err(SearchError::InvalidConfig("worker count must be > 0"));
    }
    let step_ms = step.num_milliseconds();
    if step_ms <= 0 {
        return Err(SearchError::InvalidConfig("step must be positive"));
    }
    if range.is_empty() {
        return Ok(Vec::new());
    }

    let total_steps = range.duration().num_milliseconds() / step_ms;
    let steps_per_chunk = (total_steps / workers as i64).max(1);
    let chunk_ms = step_ms.saturating_mul(steps_per_chunk);

    let at = |i: usize| offset_clamped(range, chunk_ms.saturating_mul(i as i64));
    let chunks = (0..workers)
        .map(|i| {
            let end = if i + 1 == workers { range.end } else { at(i + 1) };
            TimeRange::new(at(i), end)
        })
        .collect();
    Ok(chunks)
}

/// `range.start + ms`, never past `range.end`.
fn offset_clamped(range: &TimeRange, ms: i64) -> DateTime<Utc> {
    TimeDelta::try_milliseconds(ms)
        .and_then(|d| range.start.checked_add_signed(d))
        .map_or(range.end, |t| t.min(range.end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn day_range(days: i64) -> TimeRange {
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        TimeRange::new(start, start + TimeDelta::days(days))
    }

    fn assert_contiguous(range: &TimeRange, chunks: &[TimeRange]) {
        assert_eq!(chunks.first().map(|c| c.start), Some(range.start));
        assert_eq!(chunks.last().map(|c| c.end), Some(range.end));
        for pair in chunks.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(pair[0].start <= pair[1].start);
        }
    }

    #[test]
    fn even_split() {
        let r = day_range(4);
        let chunks = partition(&r, TimeDelta::hours(1), 4).unwrap();
        assert_eq!(chunks.len(), 4);
        assert_contiguous(&r, &chunks);
        for c in &chunks {
            assert_eq!(c.duration(), TimeDelta::days(1));
        }
    }

    #[test]
    fn remainder_goes_to_last_chunk() {
        let r = day_range(10);
        let chunks = partition(&r, TimeDelta::days(1), 3).unwrap();
        let lens: Vec<_> = chunks.iter().map(|c| c.duration().num_days()).collect();
        assert_eq!(lens, vec![3, 3, 4]);
        assert_contiguous(&r, &chunks);
    }

    #[test]
    fn fewer_steps_than_workers_leaves_empty_tail() {
        let r = day_range(2);
        let chunks = partition(&r, TimeDelta::days(1), 5).unwrap();
        assert_eq!(chunks.len(), 5);
        assert_contiguous(&r, &chunks);
        assert_eq!(chunks.iter().filter(|c| !c.is_empty()).count(), 2);
        assert!(chunks[2..].iter().all(TimeRange::is_empty));
    }

    #[test]
    fn step_longer_than_range() {
        let r = day_range(1);
        let chunks = partition(&r, TimeDelta::days(3), 2).unwrap();
        assert_eq!(chunks[0], r);
        assert!(chunks[1].is_empty());
    }

    #[test]
    fn chunk_starts_on_global_grid() {
        let r = day_range(7);
        let step = TimeDelta::minutes(7);
        let chunks = partition(&r, step, 6).unwrap();
        for c in &chunks {
            let offset = (c.start - r.start).num_milliseconds();
            assert_eq!(offset % step.num_milliseconds(), 0);
        }
    }

    #[test]
    fn chunk_samples_equal_full_samples() {
        let r = day_range(3);
        let step = TimeDelta::minutes(13);
        let chunks = partition(&r, step, 4).unwrap();
        let joined: Vec<_> = chunks.iter().flat_map(|c| c.samples(step)).collect();
        let full: Vec<_> = r.samples(step).collect();
        assert_eq!(joined, full);
    }

    #[test]
    fn degenerate_range_yields_nothing() {
        let r = TimeRange::new(day_range(1).end, day_range(0).start);
        assert!(partition(&r, TimeDelta::hours(1), 4).unwrap().is_empty());
        let r = day_range(0);
        assert!(partition(&r, TimeDelta::hours(1), 4).unwrap().is_empty());
    }

    #[test]
    fn invalid_arguments() {
        let r = day_range(1);
        assert!(matches!(
            partition(&r, TimeDelta::hours(1), 0),
            Err(SearchError::InvalidConfig(_))
        ));
        assert!(matches!(
            partition(&r, TimeDelta::zero(), 2),
            Err(SearchError::InvalidConfig(_))
        ));
    }
}
