//! Retrograde command: samples where a body reverses direction.

use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use gochara_ephem::AnalyticEphemeris;
use gochara_search::{AngleMode, RetrogradeScanner};
use tracing::{info, info_span};

use crate::cli::RetrogradeArgs;
use crate::config::{Settings, parse_body};
use crate::display;

/// Run the retrograde search and print the edges.
pub fn run(args: RetrogradeArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("retrograde").entered();

    let body = parse_body(&args.planet)?;
    let config = settings.scan_config(&args.range, Utc::now())?;
    let mode = if args.circular {
        AngleMode::Circular
    } else {
        AngleMode::Legacy
    };
    let scanner = RetrogradeScanner::new(body).with_mode(mode);

    let oracle = AnalyticEphemeris::new(settings.ayanamsa);
    println!(
        "{}",
        display::starting_line(&settings.timezone, config.parallel.enabled)
    );
    info!(%body, ?mode, "searching retrograde edges");

    let started = Instant::now();
    let events =
        gochara_search::run(&scanner, &config, &oracle).context("retrograde search failed")?;
    let elapsed = started.elapsed();

    let header = display::retrograde_header(body, &config.range, config.step, &settings.timezone);
    display::print_events(&header, &events, |e| {
        display::retrograde_line(e, &settings.timezone)
    });
    println!("{}", display::summary_line(events.len(), elapsed));
    Ok(())
}
