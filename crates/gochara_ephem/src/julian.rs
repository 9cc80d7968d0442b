//! Julian Date conversion for civil (proleptic Gregorian) UTC timestamps.
//!
//! The scanners sample in UTC; the built-in ephemeris treats the resulting
//! Julian Date as dynamical time (the ~70 s UT/TT offset is below its
//! precision).

use chrono::{DateTime, Datelike, Timelike, Utc};

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a proleptic Gregorian calendar date to a Julian Date.
///
/// `day_frac` carries the time of day, e.g. `1.5` = day 1 at 12:00.
pub fn calendar_to_jd(year: i32, month: u32, day_frac: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day_frac + b - 1524.5
}

/// Convert a UTC timestamp to a Julian Date.
pub fn utc_to_jd(utc: &DateTime<Utc>) -> f64 {
    let seconds = utc.second() as f64 + utc.nanosecond() as f64 * 1e-9;
    let day_frac = utc.day() as f64
        + utc.hour() as f64 / 24.0
        + utc.minute() as f64 / 1440.0
        + seconds / 86_400.0;
    calendar_to_jd(utc.year(), utc.month(), day_frac)
}

/// Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
