//! Sectors of the zodiac watched by a transit search.

use crate::error::VedicError;
use crate::nakshatra::{ALL_NAKSHATRAS, Nakshatra, nakshatra_from_longitude};
use crate::rashi::{ALL_RASHIS, Rashi, rashi_from_longitude};

/// Which division of the ecliptic a sector belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectorKind {
    /// 12 signs of 30 deg.
    Rashi,
    /// 27 mansions of 13 deg 20'.
    Nakshatra,
}

/// One sign or one nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sector {
    Rashi(Rashi),
    Nakshatra(Nakshatra),
}

/// Where a longitude falls within its sector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorPosition {
    pub sector: Sector,
    /// Decimal degrees from the start of the sector.
    pub degrees_within: f64,
}

impl SectorPosition {
    /// Whole degrees from the start of the sector.
    pub fn whole_degrees(&self) -> u32 {
        self.degrees_within.floor() as u32
    }
}

impl SectorKind {
    /// Classify a sidereal longitude into a sector of this kind.
    pub fn locate(self, sidereal_lon_deg: f64) -> SectorPosition {
        match self {
            Self::Rashi => {
                let info = rashi_from_longitude(sidereal_lon_deg);
                SectorPosition {
                    sector: Sector::Rashi(info.rashi),
                    degrees_within: info.degrees_in_rashi,
                }
            }
            Self::Nakshatra => {
                let info = nakshatra_from_longitude(sidereal_lon_deg);
                SectorPosition {
                    sector: Sector::Nakshatra(info.nakshatra),
                    degrees_within: info.degrees_in_nakshatra,
                }
            }
        }
    }

    /// Every sector of this kind in zodiacal order.
    pub fn sectors(self) -> Vec<Sector> {
        match self {
            Self::Rashi => ALL_RASHIS.iter().copied().map(Sector::Rashi).collect(),
            Self::Nakshatra => ALL_NAKSHATRAS
                .iter()
                .copied()
                .map(Sector::Nakshatra)
                .collect(),
        }
    }

    /// Resolve a user-supplied name into a sector of this kind.
    pub fn parse(self, name: &str) -> Result<Sector, VedicError> {
        let found = match self {
            Self::Rashi => Rashi::from_name(name).map(Sector::Rashi),
            Self::Nakshatra => Nakshatra::from_name(name).map(Sector::Nakshatra),
        };
        found.ok_or_else(|| VedicError::UnknownSector {
            kind: self,
            name: name.to_string(),
        })
    }

    /// Comma-separated list of the accepted names.
    pub fn valid_names(self) -> String {
        match self {
            Self::Rashi => ALL_RASHIS
                .iter()
                .map(|r| format!("{}|{}|{}", r.western_name(), r.russian_name(), r.name()))
                .collect::<Vec<_>>()
                .join(", "),
            Self::Nakshatra => ALL_NAKSHATRAS
                .iter()
                .map(|n| n.name())
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}

impl std::fmt::Display for SectorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Rashi => "sign",
            Self::Nakshatra => "nakshatra",
        })
    }
}

impl Sector {
    pub fn kind(self) -> SectorKind {
        match self {
            Self::Rashi(_) => SectorKind::Rashi,
            Self::Nakshatra(_) => SectorKind::Nakshatra,
        }
    }

    /// 0-based index within its kind.
    pub fn index(self) -> u8 {
        match self {
            Self::Rashi(r) => r.index(),
            Self::Nakshatra(n) => n.index(),
        }
    }

    /// Longitude at which the sector begins.
    pub fn start_deg(self) -> f64 {
        match self {
            Self::Rashi(r) => r.start_deg(),
            Self::Nakshatra(n) => n.start_deg(),
        }
    }
}

impl std::fmt::Display for Sector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rashi(r) => write!(f, "{r}"),
            Self::Nakshatra(n) => write!(f, "{n}"),
        }
    }
}
