//! Truncated IAU 2000B nutation.
//!
//! The 20 largest lunisolar terms of IAU 2000B reproduce the full series to
//! a few hundredths of an arcsecond, far below what an almanac quantised
//! into 12° tithis and 13°20' nakshatras can resolve.
//!
//! Source: IERS Conventions 2010, Chapter 5, Tables 5.2e and 5.3b.

use std::f64::consts::TAU;

/// Arcseconds to radians conversion factor.
const AS2RAD: f64 = TAU / 1_296_000.0;

/// The five Delaunay arguments `[l, l', F, D, Ω]` in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    // l: mean anomaly of the Moon (arcsec)
    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;

    // l': mean anomaly of the Sun (arcsec)
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;

    // F: mean argument of latitude of the Moon (arcsec)
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;

    // D: mean elongation of the Moon from the Sun (arcsec)
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;

    // Ω: mean longitude of the ascending node of the Moon (arcsec)
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// Leading IAU 2000B lunisolar terms.
///
/// Each row: `[nl, nl', nF, nD, nΩ, S_i, S'_i, C_i, C'_i]`, amplitudes in
/// units of 0.1 μas.
#[rustfmt::skip]
static NUTATION_COEFFS: [[i64; 9]; 20] = [
    //  nl  nl'  nF   nD   nΩ       S_i         S'_i         C_i         C'_i
    [   0,   0,   0,   0,   1, -172064161,  -174666,   92052331,    9086],
    [   0,   0,   2,  -2,   2,  -13170906,    -1675,    5730336,   -3015],
    [   0,   0,   2,   0,   2,   -2276413,     -234,     978459,    -485],
    [   0,   0,   0,   0,   2,    2074554,      207,    -897492,     470],
    [   0,   1,   0,   0,   0,    1475877,    -3633,      73871,    -184],
    [   0,   1,   2,  -2,   2,    -516821,     1226,     224386,    -677],
    [   1,   0,   0,   0,   0,     711159,       73,      -6750,       0],
    [   0,   0,   2,   0,   1,    -387298,     -367,     200728,      18],
    [   1,   0,   2,   0,   2,    -301461,      -36,     129025,     -63],
    [   0,  -1,   2,  -2,   2,     215829,     -494,     -95929,     299],
    [   0,   0,   2,  -2,   1,     128227,      137,     -68982,      -9],
    [  -1,   0,   2,   0,   2,     123457,       11,     -53311,      32],
    [  -1,   0,   0,   2,   0,     156994,       10,      -1235,       0],
    [   1,   0,   0,   0,   1,      63110,       63,     -33228,       0],
    [  -1,   0,   0,   0,   1,     -57976,      -63,      31429,       0],
    [  -1,   0,   2,   2,   2,     -59641,      -11,      25543,     -11],
    [   1,   0,   2,   0,   1,     -51613,      -42,      26366,       0],
    [  -2,   0,   2,   0,   1,      45893,       50,     -24236,     -10],
    [   0,   0,   0,   2,   0,      63384,       11,      -1220,       0],
    [   0,   0,   2,   2,   2,     -38571,       -1,      16452,     -11],
];

/// Nutation `(Δψ, Δε)` in arcseconds from the leading IAU 2000B terms.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_iau2000b_truncated(t: f64) -> (f64, f64) {
    let args = fundamental_arguments(t);

    let mut dpsi = 0.0;
    let mut deps = 0.0;
    for row in &NUTATION_COEFFS {
        let arg: f64 = row[..5]
            .iter()
            .zip(args.iter())
            .map(|(&n, &a)| n as f64 * a)
            .sum();
        dpsi += (row[5] as f64 + row[6] as f64 * t) * arg.sin();
        deps += (row[7] as f64 + row[8] as f64 * t) * arg.cos();
    }

    (dpsi * 1e-7, deps * 1e-7)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_22a() {
        // 1987-Apr-10 0h TT: Δψ = -3.788″, Δε = +9.443″
        let t = (2_446_895.5 - 2_451_545.0) / 36525.0;
        let (dpsi, deps) = nutation_iau2000b_truncated(t);
        assert!((dpsi + 3.788).abs() < 0.05, "Δψ = {dpsi}");
        assert!((deps - 9.443).abs() < 0.05, "Δε = {deps}");
    }

    #[test]
    fn typical_amplitude() {
        for i in 0..40 {
            let t = -1.0 + i as f64 * 0.05;
            let (dpsi, deps) = nutation_iau2000b_truncated(t);
            assert!(dpsi.abs() < 20.0, "|Δψ| = {dpsi} at T={t}");
            assert!(deps.abs() < 11.0, "|Δε| = {deps} at T={t}");
        }
    }
}
