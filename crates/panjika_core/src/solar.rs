//! Low-precision solar coordinates.
//!
//! Source: Meeus, "Astronomical Algorithms", ch. 25 (accuracy ~0.01°).

/// Astronomical unit in km.
pub const AU_KM: f64 = 149_597_870.7;

/// Geometric solar coordinates referred to the mean equinox of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarCoords {
    /// True geometric longitude in degrees, [0, 360).
    pub true_longitude_deg: f64,
    /// Sun-Earth distance in AU.
    pub radius_au: f64,
}

/// True longitude and radius vector of the Sun.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn solar_coords(t: f64) -> SolarCoords {
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t * t;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).to_radians();
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;

    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let nu = m + c.to_radians();
    let radius_au = 1.000_001_018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    SolarCoords {
        true_longitude_deg: (l0 + c).rem_euclid(360.0),
        radius_au,
    }
}

/// Annual aberration in longitude, degrees (always negative).
pub fn aberration_deg(radius_au: f64) -> f64 {
    -0.005_691_611 / radius_au
}
