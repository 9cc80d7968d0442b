//! Geocentric planetary longitudes from Keplerian mean elements.
//!
//! Elements and rates per century: Standish, "Keplerian Elements for
//! Approximate Positions of the Major Planets", Table 1 (1800 AD - 2050 AD),
//! referred to the J2000 ecliptic and equinox.

use crate::body::Body;
use crate::error::OracleError;
use crate::normalize_360;
use crate::precession::general_precession_longitude_deg;

/// Osculating-style mean elements at J2000 and their rates per century.
#[derive(Debug, Clone, Copy)]
struct Elements {
    /// Semi-major axis (au).
    a: [f64; 2],
    /// Eccentricity.
    e: [f64; 2],
    /// Inclination (deg).
    i: [f64; 2],
    /// Mean longitude (deg).
    l: [f64; 2],
    /// Longitude of perihelion (deg).
    peri: [f64; 2],
    /// Longitude of the ascending node (deg).
    node: [f64; 2],
}

#[rustfmt::skip]
const MERCURY: Elements = Elements {
    a: [0.38709927, 0.00000037], e: [0.20563593, 0.00001906], i: [7.00497902, -0.00594749],
    l: [252.25032350, 149472.67411175], peri: [77.45779628, 0.16047689], node: [48.33076593, -0.12534081],
};
#[rustfmt::skip]
const VENUS: Elements = Elements {
    a: [0.72333566, 0.00000390], e: [0.00677672, -0.00004107], i: [3.39467605, -0.00078890],
    l: [181.97909950, 58517.81538729], peri: [131.60246718, 0.00268329], node: [76.67984255, -0.27769418],
};
#[rustfmt::skip]
const EARTH_MOON_BARYCENTER: Elements = Elements {
    a: [1.00000261, 0.00000562], e: [0.01671123, -0.00004392], i: [-0.00001531, -0.01294668],
    l: [100.46457166, 35999.37244981], peri: [102.93768193, 0.32327364], node: [0.0, 0.0],
};
#[rustfmt::skip]
const MARS: Elements = Elements {
    a: [1.52371034, 0.00001847], e: [0.09339410, 0.00007882], i: [1.84969142, -0.00813131],
    l: [-4.55343205, 19140.30268499], peri: [-23.94362959, 0.44441088], node: [49.55953891, -0.29257343],
};
#[rustfmt::skip]
const JUPITER: Elements = Elements {
    a: [5.20288700, -0.00011607], e: [0.04838624, -0.00013253], i: [1.30439695, -0.00183714],
    l: [34.39644051, 3034.74612775], peri: [14.72847983, 0.21252668], node: [100.47390909, 0.20469106],
};
#[rustfmt::skip]
const SATURN: Elements = Elements {
    a: [9.53667594, -0.00125060], e: [0.05386179, -0.00050991], i: [2.48599187, 0.00193609],
    l: [49.95424423, 1222.49362201], peri: [92.59887831, -0.41897216], node: [113.66242448, -0.28867794],
};

fn elements_for(body: Body) -> Option<&'static Elements> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        _ => None,
    }
}

/// Solve Kepler's equation `E - e sin E = M` (radians).
fn eccentric_anomaly(m: f64, e: f64) -> f64 {
    let mut ea = m + e * m.sin();
    for _ in 0..30 {
        let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
        ea -= delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ea
}

/// Heliocentric ecliptic (J2000) rectangular coordinates in au.
fn heliocentric_xyz(el: &Elements, t: f64) -> [f64; 3] {
    let at = |v: [f64; 2]| v[0] + v[1] * t;
    let a = at(el.a);
    let e = at(el.e);
    let i = at(el.i).to_radians();
    let l = at(el.l);
    let peri = at(el.peri);
    let node = at(el.node);

    let omega = (peri - node).to_radians();
    let node = node.to_radians();
    // Mean anomaly folded into [-180, 180) before solving.
    let m = (normalize_360(l - peri + 180.0) - 180.0).to_radians();
    let ea = eccentric_anomaly(m, e);

    let xp = a * (ea.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ea.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = i.sin_cos();

    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        (so * si) * xp + (co * si) * yp,
    ]
}

/// Geocentric ecliptic longitude in degrees, equinox of date.
pub(crate) fn geocentric_longitude_deg(body: Body, t: f64) -> Result<f64, OracleError> {
    let el = elements_for(body).ok_or(OracleError::UnsupportedBody(body))?;
    let p = heliocentric_xyz(el, t);
    let earth = heliocentric_xyz(&EARTH_MOON_BARYCENTER, t);
    let dx = p[0] - earth[0];
    let dy = p[1] - earth[1];
    let lon_j2000 = dy.atan2(dx).to_degrees();
    Ok(normalize_360(lon_j2000 + general_precession_longitude_deg(t)))
}
