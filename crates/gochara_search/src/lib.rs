//! Fixed-step sidereal event scanners.
//!
//! This crate provides:
//! - [`TimeRange`] and the chunk [`partition`] used for parallel scans
//! - Conjunction, transit and retrograde scanners behind one [`Scanner`] trait
//! - The executor ([`run`], [`run_with_cancel`], [`run_on_workers`]) that
//!   fans scans out over a rayon pool and merges chunk results in time order
//! - [`CancellationToken`] for stopping long scans
//!
//! Scanners sample the oracle at `start, start + step, ...` strictly before
//! `end`. Events are reported at sample instants, never interpolated.

pub mod cancel;
pub mod config;
pub mod conjunction;
pub mod conjunction_types;
pub mod error;
pub mod executor;
pub mod partition;
pub mod range;
pub mod retrograde;
pub mod retrograde_types;
pub mod scanner;
pub mod transit;
pub mod transit_types;

#[cfg(test)]
pub(crate) mod testing;

pub use cancel::CancellationToken;
pub use config::{AngleMode, ParallelConfig, ScanConfig, signed_delta_deg};
pub use conjunction::ConjunctionScanner;
pub use conjunction_types::{ConjunctionEvent, DEFAULT_ACCURACY_DEG};
pub use error::{SearchError, valid_body_names};
pub use executor::{run, run_on_workers, run_with_cancel};
pub use partition::partition;
pub use range::TimeRange;
pub use retrograde::RetrogradeScanner;
pub use retrograde_types::{RetroEdge, RetrogradeEvent};
pub use scanner::{Moment, Scanner};
pub use transit::TransitScanner;
pub use transit_types::{TransitEvent, TransitTarget};
