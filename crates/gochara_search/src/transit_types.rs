//! Types for transit (sector entry) scans.

use gochara_ephem::Body;
use gochara_vedic::{NakshatraInfo, RashiInfo, Sector, SectorKind};

use crate::scanner::Moment;

/// Which sectors a transit scan watches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitTarget {
    /// One sign or nakshatra.
    Single(Sector),
    /// Every sector of the kind: 12 signs or 27 nakshatras.
    All(SectorKind),
}

impl TransitTarget {
    pub fn kind(&self) -> SectorKind {
        match self {
            Self::Single(s) => s.kind(),
            Self::All(kind) => *kind,
        }
    }

    /// Sectors tracked, in zodiacal order.
    pub fn sectors(&self) -> Vec<Sector> {
        match self {
            Self::Single(s) => vec![*s],
            Self::All(kind) => kind.sectors(),
        }
    }
}

/// A body observed entering a sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitEvent {
    pub body: Body,
    pub moment: Moment,
    /// The sector entered.
    pub sector: Sector,
    pub rashi: RashiInfo,
    pub nakshatra: NakshatraInfo,
}

/// Occupancy state for one watched sector.
///
/// An entry fires on the first sample inside the target whose whole degree
/// within the sector is 0. This proxy is only as precise as the step, and an
/// entry is missed when the body crosses the first degree between two samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TransitTracker {
    target: Sector,
    occupant: Option<Sector>,
}

impl TransitTracker {
    pub(crate) fn new(target: Sector) -> Self {
        Self {
            target,
            occupant: None,
        }
    }

    pub(crate) fn target(&self) -> Sector {
        self.target
    }

    /// Feed one sample; true when it is an entry into the target.
    pub(crate) fn observe(&mut self, sector: Sector, whole_degrees: u32) -> bool {
        if sector != self.target {
            self.occupant = None;
            false
        } else if self.occupant != Some(self.target) && whole_degrees == 0 {
            self.occupant = Some(self.target);
            true
        } else {
            false
        }
    }
}
