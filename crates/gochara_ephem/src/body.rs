//! Bodies the scanners can follow.
//!
//! Rahu is the true ascending lunar node. Ketu is not computed by the oracle:
//! it is requested as Rahu and shifted by 180 deg before normalization.

/// A body whose sidereal longitude can be sampled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Mars,
    Venus,
    Saturn,
    Jupiter,
    /// True ascending lunar node.
    Rahu,
    /// Descending lunar node, always Rahu + 180 deg.
    Ketu,
}

/// All supported bodies in listing order.
pub const ALL_BODIES: [Body; 9] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Mars,
    Body::Venus,
    Body::Saturn,
    Body::Jupiter,
    Body::Rahu,
    Body::Ketu,
];

impl Body {
    /// Command-line identifier of the body.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Sun => "SUN",
            Self::Moon => "MOON",
            Self::Mercury => "MERCURY",
            Self::Mars => "MARS",
            Self::Venus => "VENUS",
            Self::Saturn => "SATURN",
            Self::Jupiter => "JUPITER",
            Self::Rahu => "TRUE_NODE",
            Self::Ketu => "KETU",
        }
    }

    /// Sanskrit (graha) name.
    pub const fn graha_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
            Self::Mercury => "Buddh",
            Self::Mars => "Mangal",
            Self::Venus => "Shukra",
            Self::Saturn => "Shani",
            Self::Jupiter => "Guru",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Parse a body from its code, English name or graha name (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "sun" | "surya" => Some(Self::Sun),
            "moon" | "chandra" => Some(Self::Moon),
            "mercury" | "buddh" | "budha" => Some(Self::Mercury),
            "mars" | "mangal" => Some(Self::Mars),
            "venus" | "shukra" => Some(Self::Venus),
            "saturn" | "shani" => Some(Self::Saturn),
            "jupiter" | "guru" => Some(Self::Jupiter),
            "true_node" | "rahu" => Some(Self::Rahu),
            "ketu" => Some(Self::Ketu),
            _ => None,
        }
    }

    /// The body the oracle is actually asked for.
    pub const fn source(self) -> Self {
        match self {
            Self::Ketu => Self::Rahu,
            other => other,
        }
    }

    /// Longitude offset applied to the source body's longitude.
    pub const fn phase_shift_deg(self) -> f64 {
        match self {
            Self::Ketu => 180.0,
            _ => 0.0,
        }
    }

    /// All supported bodies.
    pub const fn all() -> &'static [Body; 9] {
        &ALL_BODIES
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
