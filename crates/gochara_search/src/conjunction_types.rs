//! Types for conjunction scans.

use gochara_ephem::Body;

use crate::scanner::Moment;

/// Default maximum separation for a conjunction, in degrees.
pub const DEFAULT_ACCURACY_DEG: f64 = 0.001;

/// Two bodies within the accuracy threshold at the same sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConjunctionEvent {
    pub body1: Body,
    pub body2: Body,
    pub moment1: Moment,
    pub moment2: Moment,
}
