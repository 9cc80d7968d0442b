//! Console formatting of scan results.
//!
//! Times are printed in the configured display offset. Positions print the
//! sign in its Russian, English and Sanskrit names, the 1-based sign number,
//! the nakshatra and pada, then degrees:minutes:seconds within the sign.

use chrono::{DateTime, FixedOffset, TimeDelta, Utc};
use gochara_ephem::Body;
use gochara_search::{ConjunctionEvent, RetrogradeEvent, TimeRange, TransitEvent};
use gochara_vedic::{nakshatra_from_longitude, rashi_from_longitude};

use crate::config::TIME_FORMAT;

/// Printed when a search finds nothing.
pub const NO_MATCHES: &str = "There are no matches for these params";

/// `time` in `offset`, formatted as "YYYY-MM-DD HH:MM:SS".
pub fn local_time(time: DateTime<Utc>, offset: &FixedOffset) -> String {
    time.with_timezone(offset).format(TIME_FORMAT).to_string()
}

/// "Овен|Aries|Mesha:1:Ashwini(2)" for a sidereal longitude.
pub fn sign_label(longitude_deg: f64) -> String {
    let rashi = rashi_from_longitude(longitude_deg).rashi;
    let nak = nakshatra_from_longitude(longitude_deg);
    format!(
        "{}|{}|{}:{}:{}({})",
        rashi.russian_name(),
        rashi.western_name(),
        rashi.name(),
        rashi.index() + 1,
        nak.nakshatra.name(),
        nak.pada
    )
}

/// Position within the sign as "d:m:s".
pub fn sign_dms(longitude_deg: f64) -> String {
    rashi_from_longitude(longitude_deg).dms.to_string()
}

/// Step as a human duration, in minutes when whole.
pub fn step_label(step: TimeDelta) -> String {
    if step.num_seconds() % 60 == 0 {
        format!("{} min", step.num_minutes())
    } else {
        format!("{} s", step.num_seconds())
    }
}

/// Print `header` and one line per event, or the no-matches message.
pub fn print_events<E>(header: &str, events: &[E], line: impl Fn(&E) -> String) {
    if events.is_empty() {
        println!("{NO_MATCHES}");
        return;
    }
    println!("{header}");
    for event in events {
        println!("{}", line(event));
    }
}

/// Opening line of every search.
pub fn starting_line(offset: &FixedOffset, parallel: bool) -> String {
    format!("Starting, timezone: {offset}, parallel: {parallel}")
}

/// Closing summary line.
pub fn summary_line(found: usize, elapsed: std::time::Duration) -> String {
    format!("Found: {found}, end for: {:.3}s", elapsed.as_secs_f64())
}

fn range_label(range: &TimeRange, step: TimeDelta, offset: &FixedOffset) -> String {
    format!(
        "from: {}, to: {}, for: {}",
        local_time(range.start, offset),
        local_time(range.end, offset),
        step_label(step)
    )
}

pub fn conjunction_header(
    body1: Body,
    body2: Body,
    range: &TimeRange,
    step: TimeDelta,
    accuracy: f64,
    offset: &FixedOffset,
) -> String {
    format!(
        "Moments, when {body1} and {body2} are in one degree, {}, with accuracy: {accuracy}:",
        range_label(range, step, offset)
    )
}

pub fn conjunction_line(event: &ConjunctionEvent, offset: &FixedOffset) -> String {
    let lon1 = event.moment1.longitude_deg;
    let lon2 = event.moment2.longitude_deg;
    format!(
        "Time: {}, Sign: {}, {}: {}, {}: {}",
        local_time(event.moment1.time, offset),
        sign_label(lon1),
        event.body1,
        sign_dms(lon1),
        event.body2,
        sign_dms(lon2)
    )
}

pub fn transit_header(
    body: Body,
    target: &str,
    range: &TimeRange,
    step: TimeDelta,
    offset: &FixedOffset,
) -> String {
    format!(
        "Moments, when {body} moves to {target}, {}:",
        range_label(range, step, offset)
    )
}

pub fn transit_line(event: &TransitEvent, offset: &FixedOffset) -> String {
    let lon = event.moment.longitude_deg;
    format!(
        "Time: {}, Entered: {}, Sign: {}, {}: {}",
        local_time(event.moment.time, offset),
        event.sector,
        sign_label(lon),
        event.body,
        event.rashi.dms
    )
}

pub fn retrograde_header(
    body: Body,
    range: &TimeRange,
    step: TimeDelta,
    offset: &FixedOffset,
) -> String {
    format!(
        "Moments, when {body} starts or ends retro, {}:",
        range_label(range, step, offset)
    )
}

pub fn retrograde_line(event: &RetrogradeEvent, offset: &FixedOffset) -> String {
    let lon = event.moment.longitude_deg;
    format!(
        "Time: {}, {}, Sign: {}, {}: {}",
        local_time(event.moment.time, offset),
        event.kind,
        sign_label(lon),
        event.body,
        event.rashi.dms
    )
}
