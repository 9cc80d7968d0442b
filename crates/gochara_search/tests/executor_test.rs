//! Executor behaviour with stub oracles: chunk merge order, chunk-start
//! artifacts, failure propagation and cancellation.

mod common;

use common::{HourlyOracle, at_hour, epoch, hourly, sequential};
use gochara_ephem::{Body, OracleError};
use gochara_search::{
    CancellationToken, ConjunctionScanner, RetroEdge, RetrogradeScanner, SearchError, TimeRange,
    TransitEvent, TransitScanner, TransitTarget, run, run_on_workers,
};
use gochara_vedic::{Rashi, Sector, SectorKind};

/// Rises until hour 9, falls from hour 10 to 14, rises again from hour 15.
fn reversal_at_hour_10(_: Body, h: i64) -> Result<f64, OracleError> {
    let h = h as f64;
    Ok(if h <= 9.0 {
        100.0 + h
    } else if h <= 14.0 {
        109.0 - (h - 9.0)
    } else {
        104.0 + (h - 14.0)
    })
}

#[test]
fn constant_conjunction_parallel_matches_sequential() {
    let oracle = HourlyOracle::new(|_, _| Ok(200.0));
    let scanner = ConjunctionScanner::new(Body::Venus, Body::Jupiter);
    let seq = run(&scanner, &sequential(97), &oracle).unwrap();
    let par = run_on_workers(&scanner, &hourly(97), &oracle, &CancellationToken::new(), 4).unwrap();
    assert_eq!(seq.len(), 97);
    assert_eq!(par, seq);
}

#[test]
fn retrograde_onset_on_chunk_boundary_is_lost_in_parallel() {
    let oracle = HourlyOracle::new(reversal_at_hour_10);
    let scanner = RetrogradeScanner::new(Body::Mercury);

    let seq = run(&scanner, &sequential(20), &oracle).unwrap();
    let seq_kinds: Vec<_> = seq.iter().map(|e| e.kind).collect();
    assert_eq!(seq_kinds, vec![RetroEdge::RetroStart, RetroEdge::RetroEnd]);
    assert_eq!(seq[0].moment.time, at_hour(10));

    // Two chunks: [0h, 10h) and [10h, 20h). The onset is the first sample of
    // the second chunk, which starts without a previous longitude.
    let par = run_on_workers(&scanner, &hourly(20), &oracle, &CancellationToken::new(), 2).unwrap();
    let par_kinds: Vec<_> = par.iter().map(|e| e.kind).collect();
    assert_eq!(par_kinds, vec![RetroEdge::RetroEnd]);
    assert_eq!(par[0].moment.time, at_hour(15));
}

#[test]
fn transit_entries_on_chunk_starts_survive() {
    let oracle = HourlyOracle::new(|_, h| Ok((h as f64).rem_euclid(360.0)));
    let scanner = TransitScanner::new(Body::Sun, TransitTarget::All(SectorKind::Rashi));
    let seq = run(&scanner, &sequential(360), &oracle).unwrap();
    let par = run_on_workers(&scanner, &hourly(360), &oracle, &CancellationToken::new(), 4).unwrap();
    assert_eq!(seq.len(), 12);
    assert_eq!(par, seq);
    assert!(par.windows(2).all(|w| w[0].moment.time < w[1].moment.time));
}

#[test]
fn transit_entry_repeated_when_chunk_starts_inside_first_degree() {
    // A quarter degree per hour: Vrishabha starts at hour 120 and its first
    // whole degree lasts until hour 124.
    let oracle = HourlyOracle::new(|_, h| Ok((0.25 * h as f64).rem_euclid(360.0)));
    let scanner = TransitScanner::new(Body::Sun, TransitTarget::All(SectorKind::Rashi));
    let entries = |events: &[TransitEvent]| -> Vec<_> {
        events.iter().map(|e| (e.moment.time, e.sector)).collect()
    };

    let seq = run(&scanner, &sequential(244), &oracle).unwrap();
    assert_eq!(
        entries(&seq),
        vec![
            (at_hour(0), Sector::Rashi(Rashi::Mesha)),
            (at_hour(120), Sector::Rashi(Rashi::Vrishabha)),
            (at_hour(240), Sector::Rashi(Rashi::Mithuna)),
        ]
    );

    // Two chunks: [0h, 122h) and [122h, 244h). The second starts at 30.5 deg,
    // still in the first degree of Vrishabha, and reports the entry again.
    let par = run_on_workers(&scanner, &hourly(244), &oracle, &CancellationToken::new(), 2).unwrap();
    assert_eq!(
        entries(&par),
        vec![
            (at_hour(0), Sector::Rashi(Rashi::Mesha)),
            (at_hour(120), Sector::Rashi(Rashi::Vrishabha)),
            (at_hour(122), Sector::Rashi(Rashi::Vrishabha)),
            (at_hour(240), Sector::Rashi(Rashi::Mithuna)),
        ]
    );
}

#[test]
fn oracle_failure_in_one_chunk_fails_the_run() {
    let oracle = HourlyOracle::new(|_, h| {
        if h == 70 {
            Err(OracleError::EpochOutOfRange { jd: h as f64 })
        } else {
            Ok(0.0)
        }
    });
    let scanner = ConjunctionScanner::new(Body::Sun, Body::Moon);
    let caller = CancellationToken::new();
    let err = run_on_workers(&scanner, &hourly(100), &oracle, &caller, 4).unwrap_err();
    assert_eq!(
        err,
        SearchError::Oracle(OracleError::EpochOutOfRange { jd: 70.0 })
    );
    assert!(!caller.is_cancelled());
}

#[test]
fn cancelled_before_start() {
    let oracle = HourlyOracle::new(|_, _| Ok(0.0));
    let scanner = ConjunctionScanner::new(Body::Sun, Body::Moon);
    let cancel = CancellationToken::new();
    cancel.cancel();
    for workers in [1, 3] {
        let err = run_on_workers(&scanner, &hourly(30), &oracle, &cancel, workers).unwrap_err();
        assert_eq!(err, SearchError::Cancelled);
    }
}

#[test]
fn cancel_during_scan_stops_it() {
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    let oracle = HourlyOracle::new(move |_, h| {
        if h >= 5 {
            trigger.cancel();
        }
        Ok(0.0)
    });
    let scanner = ConjunctionScanner::new(Body::Sun, Body::Moon);
    let err = run_on_workers(&scanner, &hourly(1000), &oracle, &cancel, 1).unwrap_err();
    assert_eq!(err, SearchError::Cancelled);
}

#[test]
fn degenerate_range_returns_nothing() {
    let oracle = HourlyOracle::new(|_, _| Ok(0.0));
    let scanner = ConjunctionScanner::new(Body::Sun, Body::Moon);
    let mut config = hourly(10);
    config.range = TimeRange::new(at_hour(10), epoch());
    for workers in [1, 4] {
        let events = run_on_workers(&scanner, &config, &oracle, &CancellationToken::new(), workers);
        assert_eq!(events, Ok(Vec::new()));
    }
}

#[test]
fn fewer_samples_than_workers() {
    let oracle = HourlyOracle::new(|_, _| Ok(0.0));
    let scanner = ConjunctionScanner::new(Body::Sun, Body::Moon);
    let events = run_on_workers(&scanner, &hourly(3), &oracle, &CancellationToken::new(), 8).unwrap();
    let times: Vec<_> = events.iter().map(|e| e.moment1.time).collect();
    assert_eq!(times, vec![at_hour(0), at_hour(1), at_hour(2)]);
}

#[test]
fn invalid_config_rejected_before_scanning() {
    let oracle = HourlyOracle::new(|_, _| -> Result<f64, OracleError> {
        panic!("oracle must not be called")
    });
    let scanner = ConjunctionScanner::new(Body::Sun, Body::Moon).with_accuracy(-1.0);
    assert!(matches!(
        run(&scanner, &hourly(10), &oracle),
        Err(SearchError::InvalidConfig(_))
    ));
    let mut config = hourly(10);
    config.step = chrono::TimeDelta::zero();
    let scanner = ConjunctionScanner::new(Body::Sun, Body::Moon);
    assert!(matches!(
        run(&scanner, &config, &oracle),
        Err(SearchError::InvalidConfig(_))
    ));
}
