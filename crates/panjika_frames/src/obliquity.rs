//! Obliquity of the ecliptic.

/// Mean obliquity of the ecliptic in degrees (IAU 2006, Capitaine 2003).
///
/// `t` is Julian centuries of TT since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 84381.406 - 46.836769 * t - 0.0001831 * t * t + 0.00200340 * t.powi(3)
        - 0.000000576 * t.powi(4)
        - 0.0000000434 * t.powi(5);
    arcsec / 3600.0
}

/// True obliquity: mean obliquity plus nutation in obliquity.
pub fn true_obliquity_deg(t: f64, delta_eps_arcsec: f64) -> f64 {
    mean_obliquity_deg(t) + delta_eps_arcsec / 3600.0
}
