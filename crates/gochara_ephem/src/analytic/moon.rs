//! Lunar longitude from the principal terms of Meeus, *Astronomical
//! Algorithms* (2nd ed.), ch. 47, Table 47.A.

use crate::normalize_360;

/// Longitude terms: `[D, M, M', F, coefficient in 1e-6 deg]`.
#[rustfmt::skip]
static LONGITUDE_TERMS: [[f64; 5]; 34] = [
    [0.0,  0.0,  1.0,  0.0,  6_288_774.0],
    [2.0,  0.0, -1.0,  0.0,  1_274_027.0],
    [2.0,  0.0,  0.0,  0.0,    658_314.0],
    [0.0,  0.0,  2.0,  0.0,    213_618.0],
    [0.0,  1.0,  0.0,  0.0,   -185_116.0],
    [0.0,  0.0,  0.0,  2.0,   -114_332.0],
    [2.0,  0.0, -2.0,  0.0,     58_793.0],
    [2.0, -1.0, -1.0,  0.0,     57_066.0],
    [2.0,  0.0,  1.0,  0.0,     53_322.0],
    [2.0, -1.0,  0.0,  0.0,     45_758.0],
    [0.0,  1.0, -1.0,  0.0,    -40_923.0],
    [1.0,  0.0,  0.0,  0.0,    -34_720.0],
    [0.0,  1.0,  1.0,  0.0,    -30_383.0],
    [2.0,  0.0,  0.0, -2.0,     15_327.0],
    [0.0,  0.0,  1.0,  2.0,    -12_528.0],
    [0.0,  0.0,  1.0, -2.0,     10_980.0],
    [4.0,  0.0, -1.0,  0.0,     10_675.0],
    [0.0,  0.0,  3.0,  0.0,     10_034.0],
    [4.0,  0.0, -2.0,  0.0,      8_548.0],
    [2.0,  1.0, -1.0,  0.0,     -7_888.0],
    [2.0,  1.0,  0.0,  0.0,     -6_766.0],
    [1.0,  0.0, -1.0,  0.0,     -5_163.0],
    [1.0,  1.0,  0.0,  0.0,      4_987.0],
    [2.0, -1.0,  1.0,  0.0,      4_036.0],
    [2.0,  0.0,  2.0,  0.0,      3_994.0],
    [4.0,  0.0,  0.0,  0.0,      3_861.0],
    [2.0,  0.0, -3.0,  0.0,      3_665.0],
    [0.0,  1.0, -2.0,  0.0,     -2_689.0],
    [2.0,  0.0, -1.0,  2.0,     -2_602.0],
    [2.0, -1.0, -2.0,  0.0,      2_390.0],
    [1.0,  0.0,  1.0,  0.0,     -2_348.0],
    [2.0, -2.0,  0.0,  0.0,      2_236.0],
    [0.0,  1.0,  2.0,  0.0,     -2_120.0],
    [0.0,  2.0,  0.0,  0.0,     -2_069.0],
];

/// Geocentric ecliptic longitude of the Moon, degrees, mean equinox of date.
///
/// `t` = Julian centuries since J2000.0.
pub(crate) fn longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let lp = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24_490_000.0;
    let mp = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    // Eccentricity of Earth's orbit damps the terms involving M.
    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;

    let (d_r, m_r, mp_r, f_r) = (
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
    );

    let mut sum: f64 = LONGITUDE_TERMS
        .iter()
        .map(|term| {
            let arg = term[0] * d_r + term[1] * m_r + term[2] * mp_r + term[3] * f_r;
            let damp = match term[1].abs() as u8 {
                1 => e,
                2 => e * e,
                _ => 1.0,
            };
            term[4] * damp * arg.sin()
        })
        .sum();

    // Venus, Jupiter and Earth-flattening additive terms.
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    sum += 3958.0 * a1.sin() + 1962.0 * (lp.to_radians() - f_r).sin() + 318.0 * a2.sin();

    normalize_360(lp + sum / 1_000_000.0)
}
