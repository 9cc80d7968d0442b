//! Types for retrograde edge scans.

use gochara_ephem::Body;
use gochara_vedic::RashiInfo;

use crate::config::AngleMode;
use crate::scanner::Moment;

/// Direction reversal kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RetroEdge {
    /// Longitude starts decreasing.
    RetroStart,
    /// Longitude resumes increasing.
    RetroEnd,
}

impl std::fmt::Display for RetroEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::RetroStart => "retro start",
            Self::RetroEnd => "retro end",
        })
    }
}

/// A sample where the body's apparent motion reversed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetrogradeEvent {
    pub body: Body,
    pub moment: Moment,
    pub rashi: RashiInfo,
    pub kind: RetroEdge,
}

/// Direction state across consecutive samples.
///
/// A reversal is reported only after the opposite motion has been seen,
/// so the direction the scan starts in never produces an edge.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub(crate) struct RetroTracker {
    previous: Option<f64>,
    retro_started: bool,
    retro_ended: bool,
}

impl RetroTracker {
    /// Feed one longitude; returns the edge this sample completes, if any.
    pub(crate) fn observe(&mut self, lon: f64, mode: AngleMode) -> Option<RetroEdge> {
        let mut edge = None;
        if let Some(prev) = self.previous {
            if mode.is_decreasing(prev, lon) && !self.retro_started {
                if self.retro_ended {
                    edge = Some(RetroEdge::RetroStart);
                }
                self.retro_started = true;
                self.retro_ended = false;
            } else if mode.is_increasing(prev, lon) && !self.retro_ended {
                if self.retro_started {
                    edge = Some(RetroEdge::RetroEnd);
                }
                self.retro_ended = true;
                self.retro_started = false;
            }
        }
        self.previous = Some(lon);
        edge
    }
}
