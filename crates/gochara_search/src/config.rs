//! Scan configuration shared by every scanner and the executor.

use chrono::TimeDelta;
use gochara_ephem::normalize_360;

use crate::range::TimeRange;

/// How longitude differences treat the 0/360 deg seam.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AngleMode {
    /// Plain subtraction. Separation is `|a - b|`; a drop counts as retrograde
    /// only when it is smaller than 180 deg.
    #[default]
    Legacy,
    /// Shortest arc. Separation is `min(|a - b|, 360 - |a - b|)`; direction
    /// comes from the signed delta in (-180, 180].
    Circular,
}

impl AngleMode {
    /// Angular separation used by the conjunction test.
    pub fn separation_deg(self, a: f64, b: f64) -> f64 {
        let d = (a - b).abs();
        match self {
            Self::Legacy => d,
            Self::Circular => {
                let d = normalize_360(d);
                d.min(360.0 - d)
            }
        }
    }

    /// True when moving from `prev` to `lon` is backward motion.
    pub fn is_decreasing(self, prev: f64, lon: f64) -> bool {
        match self {
            Self::Legacy => lon < prev && prev - lon < 180.0,
            Self::Circular => signed_delta_deg(prev, lon) < 0.0,
        }
    }

    /// True when moving from `prev` to `lon` is forward motion.
    pub fn is_increasing(self, prev: f64, lon: f64) -> bool {
        match self {
            Self::Legacy => lon > prev,
            Self::Circular => signed_delta_deg(prev, lon) > 0.0,
        }
    }
}

/// Signed shortest-arc change from `from` to `to`, in (-180, 180].
pub fn signed_delta_deg(from: f64, to: f64) -> f64 {
    let d = normalize_360(to - from);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Worker settings for a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Split the range into chunks scanned concurrently.
    pub enabled: bool,
    /// Upper bound on worker threads. `None` uses every CPU.
    pub max_workers: Option<usize>,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_workers: None,
        }
    }
}

impl ParallelConfig {
    /// Sequential scan on the calling thread.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            max_workers: None,
        }
    }

    /// Workers to use given the available CPUs: `min(cpus, max_workers)`.
    ///
    /// The cap only ever lowers the count.
    pub fn worker_count_for(&self, cpus: usize) -> usize {
        if !self.enabled {
            return 1;
        }
        let workers = match self.max_workers {
            Some(cap) => cpus.min(cap),
            None => cpus,
        };
        workers.max(1)
    }

    /// Workers to use on this machine.
    pub fn worker_count(&self) -> usize {
        self.worker_count_for(num_cpus::get())
    }
}

/// Interval, step and parallelism of one scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    pub range: TimeRange,
    pub step: TimeDelta,
    pub parallel: ParallelConfig,
}

impl ScanConfig {
    pub fn new(range: TimeRange, step: TimeDelta) -> Self {
        Self {
            range,
            step,
            parallel: ParallelConfig::default(),
        }
    }

    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if self.step < TimeDelta::seconds(1) {
            return Err("step must be at least one second");
        }
        if self.parallel.max_workers == Some(0) {
            return Err("max_workers must be > 0");
        }
        Ok(())
    }
}
