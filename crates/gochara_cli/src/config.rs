use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, SubsecRound, TimeDelta, Utc};
use gochara_ephem::{AyanamshaSystem, Body};
use gochara_search::{DEFAULT_ACCURACY_DEG, ParallelConfig, ScanConfig, SearchError, TimeRange};
use serde::Deserialize;

use crate::cli::RangeArgs;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "gochara.toml";

/// Input and output time format.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DEFAULT_TIMEZONE: &str = "+07:00";
const DEFAULT_STEP_MINUTES: i64 = 1;
const DEFAULT_SPAN_DAYS: i64 = 365;

/// Contents of `gochara.toml`. Every key is optional.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Display offset, e.g. "+07:00".
    pub timezone: Option<String>,
    /// Sampling step in minutes.
    pub step_minutes: Option<i64>,
    /// Conjunction threshold in degrees.
    pub accuracy: Option<f64>,
    /// Upper bound on worker threads.
    pub threads_max: Option<usize>,
    /// Scan in parallel chunks.
    pub parallel: Option<bool>,
    /// Ayanamsha system name.
    pub ayanamsa: Option<String>,
}

impl FileConfig {
    /// Load `explicit` if given, else `./gochara.toml` if it exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path: PathBuf = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    return Ok(Self::default());
                }
                p
            }
        };
        let toml_str = std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: FileConfig = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

/// Settings common to every command after merging flags, file and defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub timezone: FixedOffset,
    pub ayanamsa: AyanamshaSystem,
    pub accuracy: f64,
    file: FileConfig,
}

impl Settings {
    /// Merge the `--timezone` flag over the file over built-in defaults.
    pub fn resolve(file: FileConfig, timezone_flag: Option<&str>) -> Result<Self, SearchError> {
        let tz = timezone_flag
            .or(file.timezone.as_deref())
            .unwrap_or(DEFAULT_TIMEZONE);
        let timezone = parse_offset(tz)?;
        let ayanamsa = match file.ayanamsa.as_deref() {
            None => AyanamshaSystem::default(),
            Some(name) => AyanamshaSystem::from_name(name).ok_or_else(|| {
                let valid: Vec<_> = AyanamshaSystem::all().iter().map(|s| s.name()).collect();
                SearchError::ArgumentFormat(format!(
                    "unknown ayanamsa '{name}', valid: {}",
                    valid.join(", ")
                ))
            })?,
        };
        let accuracy = file.accuracy.unwrap_or(DEFAULT_ACCURACY_DEG);
        Ok(Self {
            timezone,
            ayanamsa,
            accuracy,
            file,
        })
    }

    /// Build the scan configuration from the range flags.
    ///
    /// `now` is the default start. Interval and step errors surface here,
    /// before any scanning.
    pub fn scan_config(
        &self,
        args: &RangeArgs,
        now: DateTime<Utc>,
    ) -> Result<ScanConfig, SearchError> {
        let start = match args.start.as_deref() {
            Some(s) => parse_utc(s)?,
            None => now.trunc_subsecs(0),
        };
        let end = match args.end.as_deref() {
            Some(s) => parse_utc(s)?,
            None => start + TimeDelta::days(DEFAULT_SPAN_DAYS),
        };
        let range = TimeRange::validated(start, end)?;

        let minutes = args
            .step
            .or(self.file.step_minutes)
            .unwrap_or(DEFAULT_STEP_MINUTES);
        if minutes <= 0 {
            return Err(SearchError::ArgumentFormat(format!(
                "step must be a positive number of minutes, got {minutes}"
            )));
        }
        let step = TimeDelta::try_minutes(minutes).ok_or_else(|| {
            SearchError::ArgumentFormat(format!("step of {minutes} minutes is too large"))
        })?;

        let parallel = ParallelConfig {
            enabled: !args.no_threads && self.file.parallel.unwrap_or(true),
            max_workers: args.threads_max.or(self.file.threads_max),
        };
        Ok(ScanConfig::new(range, step).with_parallel(parallel))
    }
}

/// Resolve a body by code, English or graha name.
pub fn parse_body(name: &str) -> Result<Body, SearchError> {
    Body::from_name(name).ok_or_else(|| SearchError::UnknownBody(name.to_string()))
}

/// Parse "YYYY-MM-DD HH:MM:SS" as a UTC instant.
pub fn parse_utc(s: &str) -> Result<DateTime<Utc>, SearchError> {
    NaiveDateTime::parse_from_str(s.trim(), TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| {
            SearchError::ArgumentFormat(format!(
                "invalid time '{s}' ({e}), expected YYYY-MM-DD HH:MM:SS"
            ))
        })
}

/// Parse a fixed UTC offset: "+07:00", "-0530", "Z" or "UTC".
pub fn parse_offset(s: &str) -> Result<FixedOffset, SearchError> {
    let t = s.trim();
    if t.eq_ignore_ascii_case("z") || t.eq_ignore_ascii_case("utc") {
        return Ok(Utc.fix());
    }
    t.parse::<FixedOffset>().map_err(|e| {
        SearchError::ArgumentFormat(format!(
            "invalid timezone offset '{s}' ({e}), expected ±HH:MM"
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    fn defaults() -> Settings {
        Settings::resolve(FileConfig::default(), None).unwrap()
    }

    #[test]
    fn parse_offsets() {
        assert_eq!(parse_offset("+07:00").unwrap().local_minus_utc(), 7 * 3600);
        assert_eq!(parse_offset("-05:30").unwrap().local_minus_utc(), -(5 * 3600 + 1800));
        assert_eq!(parse_offset("+0545").unwrap().local_minus_utc(), 5 * 3600 + 2700);
        assert_eq!(parse_offset(" +03:00 ").unwrap().local_minus_utc(), 3 * 3600);
        assert_eq!(parse_offset("UTC").unwrap().local_minus_utc(), 0);
        assert_eq!(parse_offset("z").unwrap().local_minus_utc(), 0);
        assert!(parse_offset("Asia/Krasnoyarsk").is_err());
        assert!(parse_offset("").is_err());
        assert!(parse_offset("+25:00").is_err());
        assert!(parse_offset("+07:99").is_err());
    }

    #[test]
    fn parse_bodies() {
        assert_eq!(parse_body("rahu"), Ok(Body::Rahu));
        assert_eq!(parse_body("TRUE_NODE"), Ok(Body::Rahu));
        assert_eq!(
            parse_body("PLUTO"),
            Err(SearchError::UnknownBody("PLUTO".into()))
        );
    }

    #[test]
    fn parse_times() {
        let t = parse_utc("2025-03-01 10:20:30").unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2025, 3, 1, 10, 20, 30).unwrap());
        assert!(matches!(
            parse_utc("2025-03-01T10:20:30Z"),
            Err(SearchError::ArgumentFormat(_))
        ));
    }

    #[test]
    fn defaults_span_a_year_at_one_minute() {
        let cfg = defaults().scan_config(&RangeArgs::default(), now()).unwrap();
        assert_eq!(cfg.range.start, now());
        assert_eq!(cfg.range.duration(), TimeDelta::days(365));
        assert_eq!(cfg.step, TimeDelta::minutes(1));
        assert!(cfg.parallel.enabled);
        assert_eq!(cfg.parallel.max_workers, None);
    }

    #[test]
    fn flags_override_file() {
        let file = FileConfig {
            step_minutes: Some(10),
            threads_max: Some(2),
            parallel: Some(true),
            ..FileConfig::default()
        };
        let settings = Settings::resolve(file, Some("+03:00")).unwrap();
        assert_eq!(settings.timezone.local_minus_utc(), 3 * 3600);

        let from_file = settings.scan_config(&RangeArgs::default(), now()).unwrap();
        assert_eq!(from_file.step, TimeDelta::minutes(10));
        assert_eq!(from_file.parallel.max_workers, Some(2));

        let args = RangeArgs {
            step: Some(5),
            no_threads: true,
            threads_max: Some(6),
            ..RangeArgs::default()
        };
        let from_flags = settings.scan_config(&args, now()).unwrap();
        assert_eq!(from_flags.step, TimeDelta::minutes(5));
        assert!(!from_flags.parallel.enabled);
        assert_eq!(from_flags.parallel.max_workers, Some(6));
    }

    #[test]
    fn reversed_interval_is_rejected() {
        let args = RangeArgs {
            start: Some("2025-02-01 00:00:00".into()),
            end: Some("2025-01-01 00:00:00".into()),
            ..RangeArgs::default()
        };
        assert_eq!(
            defaults().scan_config(&args, now()),
            Err(SearchError::InvalidInterval)
        );
    }

    #[test]
    fn non_positive_step_is_rejected() {
        let args = RangeArgs {
            step: Some(0),
            ..RangeArgs::default()
        };
        assert!(matches!(
            defaults().scan_config(&args, now()),
            Err(SearchError::ArgumentFormat(_))
        ));
    }

    #[test]
    fn file_config_parses_all_keys() {
        let cfg: FileConfig = toml::from_str(
            r#"
timezone = "+05:30"
step_minutes = 15
accuracy = 0.5
threads_max = 4
parallel = false
ayanamsa = "raman"
"#,
        )
        .unwrap();
        let settings = Settings::resolve(cfg, None).unwrap();
        assert_eq!(settings.ayanamsa, AyanamshaSystem::Raman);
        assert!((settings.accuracy - 0.5).abs() < 1e-12);
        assert_eq!(settings.timezone.local_minus_utc(), 5 * 3600 + 1800);
    }

    #[test]
    fn file_config_rejects_unknown_keys() {
        assert!(toml::from_str::<FileConfig>("colour = \"red\"").is_err());
    }

    #[test]
    fn unknown_ayanamsa() {
        let cfg = FileConfig {
            ayanamsa: Some("sidereal".into()),
            ..FileConfig::default()
        };
        assert!(Settings::resolve(cfg, None).is_err());
    }
}
