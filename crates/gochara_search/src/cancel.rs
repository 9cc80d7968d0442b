//! Cooperative cancellation for running scans.
//!
//! Scanners poll a [`CancellationToken`] once per sample. The executor hands
//! its workers a child token, so a failing chunk stops its siblings while the
//! caller's token stays untouched.

pub use tokio_util::sync::CancellationToken;

use crate::error::SearchError;

/// `Err(Cancelled)` once `token` has been cancelled.
pub(crate) fn checkpoint(token: &CancellationToken) -> Result<(), SearchError> {
    if token.is_cancelled() {
        Err(SearchError::Cancelled)
    } else {
        Ok(())
    }
}
