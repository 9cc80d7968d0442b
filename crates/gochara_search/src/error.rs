//! Error types for scans.

use gochara_ephem::{ALL_BODIES, OracleError};
use gochara_vedic::{SectorKind, VedicError};

/// Errors from scan setup and execution.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Interval start is not before its end.
    #[error("invalid interval: start must be before end")]
    InvalidInterval,
    /// Sign or nakshatra name not found in any naming system.
    #[error("unknown {kind} '{name}', valid names: {names}", names = .kind.valid_names())]
    UnknownSector { kind: SectorKind, name: String },
    /// Body identifier not recognized.
    #[error("unknown body '{0}', valid bodies: {names}", names = valid_body_names())]
    UnknownBody(String),
    /// Malformed date, time or flag input.
    #[error("argument format: {0}")]
    ArgumentFormat(String),
    /// Invalid scan or scanner configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),
    /// The ephemeris oracle failed.
    #[error("ephemeris error: {0}")]
    Oracle(#[from] OracleError),
    /// The scan was stopped by a cancellation token.
    #[error("scan cancelled")]
    Cancelled,
    /// The worker pool could not be built.
    #[error("worker pool: {0}")]
    WorkerPool(String),
}

impl From<VedicError> for SearchError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::UnknownSector { kind, name } => Self::UnknownSector { kind, name },
            other => Self::ArgumentFormat(other.to_string()),
        }
    }
}

/// Comma-separated list of body codes.
pub fn valid_body_names() -> String {
    ALL_BODIES
        .iter()
        .map(|b| b.code())
        .collect::<Vec<_>>()
        .join(", ")
}
