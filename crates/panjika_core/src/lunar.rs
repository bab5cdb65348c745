//! Geocentric lunar coordinates from the truncated ELP-2000/82 series.
//!
//! Source: Meeus, "Astronomical Algorithms", ch. 47. The full 60-term
//! longitude/distance table and the 30 largest latitude terms give about
//! 10″ in longitude, well inside one minute of tithi timing.

/// Geometric lunar coordinates referred to the mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarCoords {
    /// Geocentric ecliptic longitude in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Geocentric ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Earth-Moon center distance in km.
    pub distance_km: f64,
}

/// Periodic terms for longitude and distance.
///
/// Each row: `[D, M, M', F, Σl (1e-6 deg), Σr (1e-3 km)]`.
#[rustfmt::skip]
static LON_DIST_TERMS: [[i32; 6]; 60] = [
    [0,  0,  1,  0,  6288774, -20905355],
    [2,  0, -1,  0,  1274027,  -3699111],
    [2,  0,  0,  0,   658314,  -2955968],
    [0,  0,  2,  0,   213618,   -569925],
    [0,  1,  0,  0,  -185116,     48888],
    [0,  0,  0,  2,  -114332,     -3149],
    [2,  0, -2,  0,    58793,    246158],
    [2, -1, -1,  0,    57066,   -152138],
    [2,  0,  1,  0,    53322,   -170733],
    [2, -1,  0,  0,    45758,   -204586],
    [0,  1, -1,  0,   -40923,   -129620],
    [1,  0,  0,  0,   -34720,    108743],
    [0,  1,  1,  0,   -30383,    104755],
    [2,  0,  0, -2,    15327,     10321],
    [0,  0,  1,  2,   -12528,         0],
    [0,  0,  1, -2,    10980,     79661],
    [4,  0, -1,  0,    10675,    -34782],
    [0,  0,  3,  0,    10034,    -23210],
    [4,  0, -2,  0,     8548,    -21636],
    [2,  1, -1,  0,    -7888,     24208],
    [2,  1,  0,  0,    -6766,     30824],
    [1,  0, -1,  0,    -5163,     -8379],
    [1,  1,  0,  0,     4987,    -16675],
    [2, -1,  1,  0,     4036,    -12831],
    [2,  0,  2,  0,     3994,    -10445],
    [4,  0,  0,  0,     3861,    -11650],
    [2,  0, -3,  0,     3665,     14403],
    [0,  1, -2,  0,    -2689,     -7003],
    [2,  0, -1,  2,    -2602,         0],
    [2, -1, -2,  0,     2390,     10056],
    [1,  0,  1,  0,    -2348,      6322],
    [2, -2,  0,  0,     2236,     -9884],
    [0,  1,  2,  0,    -2120,      5751],
    [0,  2,  0,  0,    -2069,         0],
    [2, -2, -1,  0,     2048,     -4950],
    [2,  0,  1, -2,    -1773,      4130],
    [2,  0,  0,  2,    -1595,         0],
    [4, -1, -1,  0,     1215,     -3958],
    [0,  0,  2,  2,    -1110,         0],
    [3,  0, -1,  0,     -892,      3258],
    [2,  1,  1,  0,     -810,      2616],
    [4, -1, -2,  0,      759,     -1897],
    [0,  2, -1,  0,     -713,     -2117],
    [2,  2, -1,  0,     -700,      2354],
    [2,  1, -2,  0,      691,         0],
    [2, -1,  0, -2,      596,         0],
    [4,  0,  1,  0,      549,     -1423],
    [0,  0,  4,  0,      537,     -1117],
    [4, -1,  0,  0,      520,     -1571],
    [1,  0, -2,  0,     -487,     -1739],
    [2,  1,  0, -2,     -399,         0],
    [0,  0,  2, -2,     -381,     -4421],
    [1,  1,  1,  0,      351,         0],
    [3,  0, -2,  0,     -340,         0],
    [4,  0, -3,  0,      330,         0],
    [2, -1,  2,  0,      327,         0],
    [0,  2,  1,  0,     -323,      1165],
    [1,  1, -1,  0,      299,         0],
    [2,  0,  3,  0,      294,         0],
    [2,  0, -1, -2,        0,      8752],
];

/// Leading periodic terms for latitude.
///
/// Each row: `[D, M, M', F, Σb (1e-6 deg)]`.
#[rustfmt::skip]
static LAT_TERMS: [[i32; 5]; 30] = [
    [0,  0,  0,  1,  5128122],
    [0,  0,  1,  1,   280602],
    [0,  0,  1, -1,   277693],
    [2,  0,  0, -1,   173237],
    [2,  0, -1,  1,    55413],
    [2,  0, -1, -1,    46271],
    [2,  0,  0,  1,    32573],
    [0,  0,  2,  1,    17198],
    [2,  0,  1, -1,     9266],
    [0,  0,  2, -1,     8822],
    [2, -1,  0, -1,     8216],
    [2,  0, -2, -1,     4324],
    [2,  0,  1,  1,     4200],
    [2,  1,  0, -1,    -3359],
    [2, -1, -1,  1,     2463],
    [2, -1,  0,  1,     2211],
    [2, -1, -1, -1,     2065],
    [0,  1, -1, -1,    -1870],
    [4,  0, -1, -1,     1828],
    [0,  1,  0,  1,    -1794],
    [0,  0,  0,  3,    -1749],
    [0,  1, -1,  1,    -1565],
    [1,  0,  0,  1,    -1491],
    [0,  1,  1,  1,    -1475],
    [0,  1,  1, -1,    -1410],
    [0,  1,  0, -1,    -1344],
    [1,  0,  0, -1,    -1335],
    [0,  0,  3,  1,     1107],
    [4,  0,  0, -1,     1021],
    [4,  0, -1,  1,      833],
];

/// Geometric lunar coordinates.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn lunar_coords(t: f64) -> LunarCoords {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // Mean longitude and the Delaunay-style arguments (degrees).
    let lp = 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0
        - t4 / 65194000.0;
    let d = 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0
        - t4 / 113065000.0;
    let m = 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0;
    let mp = 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0
        - t4 / 14712000.0;
    let f = 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0
        + t4 / 863310000.0;

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    let a3 = (313.45 + 481266.484 * t).to_radians();

    // Eccentricity of Earth's orbit scales every term containing M.
    let e = 1.0 - 0.002516 * t - 0.0000074 * t2;
    let e_factor = |n_m: i32| match n_m.abs() {
        1 => e,
        2 => e * e,
        _ => 1.0,
    };

    let (d_r, m_r, mp_r, f_r) = (
        d.to_radians(),
        m.to_radians(),
        mp.to_radians(),
        f.to_radians(),
    );
    let argument = |row: &[i32]| {
        row[0] as f64 * d_r + row[1] as f64 * m_r + row[2] as f64 * mp_r + row[3] as f64 * f_r
    };

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for row in &LON_DIST_TERMS {
        let arg = argument(row);
        let scale = e_factor(row[1]);
        sum_l += row[4] as f64 * scale * arg.sin();
        sum_r += row[5] as f64 * scale * arg.cos();
    }

    let mut sum_b = 0.0;
    for row in &LAT_TERMS {
        sum_b += row[4] as f64 * e_factor(row[1]) * argument(row).sin();
    }

    let lp_r = lp.to_radians();
    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp_r - f_r).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp_r.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f_r).sin()
        + 175.0 * (a1 + f_r).sin()
        + 127.0 * (lp_r - mp_r).sin()
        - 115.0 * (lp_r + mp_r).sin();

    LunarCoords {
        longitude_deg: (lp + sum_l / 1e6).rem_euclid(360.0),
        latitude_deg: sum_b / 1e6,
        distance_km: 385_000.56 + sum_r / 1000.0,
    }
}
