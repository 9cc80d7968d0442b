//! Error types for ephemeris oracle calls.

use crate::body::Body;

/// Errors from an [`EphemerisOracle`](crate::EphemerisOracle) call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[non_exhaustive]
pub enum OracleError {
    /// The epoch lies outside the range the ephemeris can represent.
    #[error("epoch out of ephemeris range: JD {jd}")]
    EpochOutOfRange { jd: f64 },
    /// The oracle produced NaN or infinity.
    #[error("non-finite value computed for {what}")]
    NonFinite { what: &'static str },
    /// The oracle has no model for this body.
    #[error("unsupported body: {0:?}")]
    UnsupportedBody(Body),
}
