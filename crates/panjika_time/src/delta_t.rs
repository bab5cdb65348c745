//! ΔT = TT − UT, the Earth-rotation clock error.
//!
//! Polynomial expressions of Espenak & Meeus (NASA Five Millennium Canon,
//! 2006) for 1900..2150. The almanac never needs anything outside that
//! span: the analytic ephemeris rejects epochs beyond its coverage first.

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1920.0 {
        let t = year - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if year < 1941.0 {
        let t = year - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if year < 1961.0 {
        let t = year - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if year < 1986.0 {
        let t = year - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if year < 2005.0 {
        let t = year - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if year < 2050.0 {
        let t = year - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else {
        let u = (year - 1820.0) / 100.0;
        -20.0 + 32.0 * u.powi(2) - 0.5628 * (2150.0 - year)
    }
}

/// Decimal year for a Julian Date (mean Gregorian year length).
pub fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - crate::julian::J2000_JD) / 365.2425
}

/// Convert a UTC Julian Date to a TT Julian Date (UT1 ≈ UTC).
pub fn jd_utc_to_jd_tt(jd_utc: f64) -> f64 {
    jd_utc + delta_t_seconds(decimal_year(jd_utc)) / crate::julian::SECONDS_PER_DAY
}
