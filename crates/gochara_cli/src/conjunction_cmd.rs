//! Conjunction command: samples where two bodies share a longitude.

use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use gochara_ephem::AnalyticEphemeris;
use gochara_search::{AngleMode, ConjunctionScanner, Scanner};
use tracing::{info, info_span};

use crate::cli::ConjunctionArgs;
use crate::config::{Settings, parse_body};
use crate::display;

/// Run the conjunction search and print the matches.
pub fn run(args: ConjunctionArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("conjunction").entered();

    let body1 = parse_body(&args.planet1)?;
    let body2 = parse_body(&args.planet2)?;
    let config = settings.scan_config(&args.range, Utc::now())?;
    let accuracy = args.accuracy.unwrap_or(settings.accuracy);
    let mode = if args.circular {
        AngleMode::Circular
    } else {
        AngleMode::Legacy
    };
    let scanner = ConjunctionScanner::new(body1, body2)
        .with_accuracy(accuracy)
        .with_mode(mode);
    scanner.validate()?;

    let oracle = AnalyticEphemeris::new(settings.ayanamsa);
    println!(
        "{}",
        display::starting_line(&settings.timezone, config.parallel.enabled)
    );
    info!(%body1, %body2, accuracy, ?mode, "searching conjunctions");

    let started = Instant::now();
    let events =
        gochara_search::run(&scanner, &config, &oracle).context("conjunction search failed")?;
    let elapsed = started.elapsed();

    let header = display::conjunction_header(
        body1,
        body2,
        &config.range,
        config.step,
        accuracy,
        &settings.timezone,
    );
    display::print_events(&header, &events, |e| {
        display::conjunction_line(e, &settings.timezone)
    });
    println!("{}", display::summary_line(events.len(), elapsed));
    Ok(())
}
