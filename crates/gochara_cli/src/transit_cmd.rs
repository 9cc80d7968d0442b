//! Transit command: entries of a body into a sign or nakshatra.

use std::time::Instant;

use anyhow::{Context, Result};
use chrono::Utc;
use gochara_ephem::AnalyticEphemeris;
use gochara_search::{SearchError, TransitScanner, TransitTarget};
use gochara_vedic::{Rashi, SectorKind};
use tracing::{info, info_span};

use crate::cli::TransitArgs;
use crate::config::{Settings, parse_body};
use crate::display;

/// Run the transit search and print the entries.
pub fn run(args: TransitArgs, settings: &Settings) -> Result<()> {
    let _cmd = info_span!("transit").entered();

    let body = parse_body(&args.planet)?;
    let target = resolve_target(&args)?;
    let config = settings.scan_config(&args.range, Utc::now())?;
    let scanner = TransitScanner::new(body, target);

    let oracle = AnalyticEphemeris::new(settings.ayanamsa);
    println!(
        "{}",
        display::starting_line(&settings.timezone, config.parallel.enabled)
    );
    info!(%body, ?target, "searching transits");

    let started = Instant::now();
    let events =
        gochara_search::run(&scanner, &config, &oracle).context("transit search failed")?;
    let elapsed = started.elapsed();

    let header = display::transit_header(
        body,
        &target_label(&target),
        &config.range,
        config.step,
        &settings.timezone,
    );
    display::print_events(&header, &events, |e| {
        display::transit_line(e, &settings.timezone)
    });
    println!("{}", display::summary_line(events.len(), elapsed));
    Ok(())
}

/// `--all` watches every sign, `-n all` every nakshatra. Without a
/// nakshatra the sign defaults to Aries.
fn resolve_target(args: &TransitArgs) -> Result<TransitTarget, SearchError> {
    if args.all {
        return Ok(TransitTarget::All(SectorKind::Rashi));
    }
    if let Some(name) = args.nakshatra.as_deref() {
        if name.trim().eq_ignore_ascii_case("all") {
            return Ok(TransitTarget::All(SectorKind::Nakshatra));
        }
        return Ok(TransitTarget::Single(SectorKind::Nakshatra.parse(name)?));
    }
    let sign = args
        .sign
        .as_deref()
        .unwrap_or(Rashi::Mesha.western_name());
    Ok(TransitTarget::Single(SectorKind::Rashi.parse(sign)?))
}

fn target_label(target: &TransitTarget) -> String {
    match target {
        TransitTarget::Single(sector) => format!("{} {sector}", sector.kind()),
        TransitTarget::All(SectorKind::Rashi) => "every sign".to_string(),
        TransitTarget::All(SectorKind::Nakshatra) => "every nakshatra".to_string(),
    }
}
