use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Sidereal event scanner.
#[derive(Parser)]
#[command(
    name = "gochara",
    version,
    about = "Find conjunctions, sign/nakshatra transits and retrograde edges in the sidereal zodiac"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [./gochara.toml when present].
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Display offset for printed times, e.g. +07:00 or -05:30.
    #[arg(long, global = true, allow_hyphen_values = true)]
    pub timezone: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Samples where two bodies share a longitude.
    #[command(name = "conjunction-search", visible_alias = "conjuction")]
    Conjunction(ConjunctionArgs),
    /// Entries of a body into a sign or nakshatra.
    #[command(name = "transit-search", visible_alias = "transit")]
    Transit(TransitArgs),
    /// Retrograde start and end samples of a body.
    #[command(name = "retrograde-search", visible_alias = "retro")]
    Retrograde(RetrogradeArgs),
    /// List supported bodies.
    #[command(name = "list-bodies", visible_alias = "planet")]
    ListBodies,
}

/// Interval, step and threading flags shared by the search commands.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct RangeArgs {
    /// Start time, "YYYY-MM-DD HH:MM:SS" in UTC [now].
    #[arg(long)]
    pub start: Option<String>,

    /// End time, "YYYY-MM-DD HH:MM:SS" in UTC [start + 365 days].
    #[arg(short, long)]
    pub end: Option<String>,

    /// Sampling step in minutes [1].
    #[arg(short, long)]
    pub step: Option<i64>,

    /// Scan on a single thread.
    #[arg(long)]
    pub no_threads: bool,

    /// Upper bound on worker threads [CPU count].
    #[arg(long)]
    pub threads_max: Option<usize>,
}

/// Arguments for `conjunction-search`.
#[derive(clap::Args, Debug)]
pub struct ConjunctionArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Maximum separation in degrees [0.001].
    #[arg(short, long)]
    pub accuracy: Option<f64>,

    /// First body.
    #[arg(long, default_value = "SUN")]
    pub planet1: String,

    /// Second body.
    #[arg(long, default_value = "MOON")]
    pub planet2: String,

    /// Measure separation along the shortest arc, across 0/360 deg.
    #[arg(long)]
    pub circular: bool,
}

/// Arguments for `transit-search`.
#[derive(clap::Args, Debug)]
pub struct TransitArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Target sign in English, Russian or Sanskrit [Aries].
    #[arg(long, conflicts_with = "nakshatra")]
    pub sign: Option<String>,

    /// Target nakshatra, or "all" for every nakshatra.
    #[arg(short, long)]
    pub nakshatra: Option<String>,

    /// Body to follow.
    #[arg(short, long, default_value = "SUN")]
    pub planet: String,

    /// Watch all 12 signs.
    #[arg(short, long, conflicts_with_all = ["sign", "nakshatra"])]
    pub all: bool,
}

/// Arguments for `retrograde-search`.
#[derive(clap::Args, Debug)]
pub struct RetrogradeArgs {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Body to follow.
    #[arg(short, long, default_value = "MERCURY")]
    pub planet: String,

    /// Detect direction along the shortest arc, across 0/360 deg.
    #[arg(long)]
    pub circular: bool,
}
