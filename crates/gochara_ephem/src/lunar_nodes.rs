//! Lunar ascending node (Rahu) longitude.
//!
//! Mean node: the 5th Delaunay argument Ω. True node: mean node plus the
//! 13 short-period terms of Meeus, *Astronomical Algorithms* (2nd ed.),
//! Table 47.B. Ketu is handled by [`Body::phase_shift_deg`](crate::Body::phase_shift_deg).

use crate::normalize_360;
use crate::precession::fundamental_arguments;

/// Mean node longitude in degrees [0, 360) from `[l, l', F, D, Ω]`.
fn mean_node_deg(args: &[f64; 5]) -> f64 {
    normalize_360(args[4].to_degrees())
}

/// Short-period correction for the true node, in degrees.
///
/// `args` = `[l, l', F, D, Ω]` in radians.
fn node_perturbation_deg(args: &[f64; 5]) -> f64 {
    #[rustfmt::skip]
    static TERMS: [[f64; 6]; 13] = [
        // nl   nl'   nF    nD    nOm   amplitude (deg)
        [ 0.0,  0.0,  0.0,  0.0,  1.0, -1.4979],
        [ 0.0,  0.0,  2.0, -2.0,  0.0,  0.1500],
        [ 0.0,  0.0,  2.0,  0.0,  0.0, -0.1226],
        [ 0.0,  0.0,  0.0,  0.0,  2.0,  0.1176],
        [ 1.0,  0.0,  0.0,  0.0,  0.0, -0.0801],
        [ 0.0,  1.0,  0.0,  0.0,  0.0,  0.0056],
        [ 0.0,  0.0,  2.0,  0.0, -2.0, -0.0047],
        [ 1.0,  0.0,  2.0,  0.0,  0.0, -0.0043],
        [ 0.0,  0.0,  2.0, -2.0,  2.0,  0.0040],
        [ 0.0,  1.0,  0.0,  0.0, -1.0,  0.0037],
        [ 0.0,  0.0,  0.0,  2.0,  0.0, -0.0030],
        [ 2.0,  0.0,  0.0,  0.0,  0.0, -0.0020],
        [ 0.0,  1.0,  2.0, -2.0,  0.0,  0.0015],
    ];

    TERMS
        .iter()
        .map(|term| {
            let angle = term[0] * args[0]
                + term[1] * args[1]
                + term[2] * args[2]
                + term[3] * args[3]
                + term[4] * args[4];
            term[5] * angle.sin()
        })
        .sum()
}

/// True Rahu ecliptic longitude in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn true_rahu_deg(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    normalize_360(mean_node_deg(&args) + node_perturbation_deg(&args))
}
