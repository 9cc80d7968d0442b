//! Error types for name lookup.

use crate::sector::SectorKind;

/// Errors from zodiac name resolution.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum VedicError {
    /// The name matched no sign or nakshatra in any naming system.
    #[error("unknown {kind} '{name}', valid names: {names}", names = .kind.valid_names())]
    UnknownSector { kind: SectorKind, name: String },
}
