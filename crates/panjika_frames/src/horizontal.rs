//! Ecliptic → equatorial → horizontal rotations and topocentric parallax.
//!
//! Sources: Meeus, "Astronomical Algorithms", ch. 11 (observer geocentric
//! coordinates), ch. 13 (coordinate transformations), ch. 40 (parallax).

/// Equatorial Earth radius in km (IAU 1976, as used by Meeus).
pub const EARTH_EQUATORIAL_RADIUS_KM: f64 = 6378.14;

/// Polar/equatorial axis ratio b/a.
const AXIS_RATIO: f64 = 0.996_647_19;

/// Convert ecliptic (λ, β) to equatorial (α, δ), all in degrees.
///
/// Returns right ascension in [0, 360) and declination in [-90, 90].
pub fn ecliptic_to_equatorial(lon_deg: f64, lat_deg: f64, obliquity_deg: f64) -> (f64, f64) {
    let (l, b, e) = (
        lon_deg.to_radians(),
        lat_deg.to_radians(),
        obliquity_deg.to_radians(),
    );
    let ra = (l.sin() * e.cos() - b.tan() * e.sin()).atan2(l.cos());
    let dec = (b.sin() * e.cos() + b.cos() * e.sin() * l.sin()).asin();
    (ra.to_degrees().rem_euclid(360.0), dec.to_degrees())
}

/// Convert local hour angle and declination to `(altitude, azimuth)`.
///
/// Azimuth is measured from north through east, in [0, 360).
pub fn equatorial_to_horizontal(hour_angle_deg: f64, dec_deg: f64, lat_deg: f64) -> (f64, f64) {
    let (h, d, p) = (
        hour_angle_deg.to_radians(),
        dec_deg.to_radians(),
        lat_deg.to_radians(),
    );
    let alt = (p.sin() * d.sin() + p.cos() * d.cos() * h.cos()).asin();
    let az = (-d.cos() * h.sin()).atan2(d.sin() * p.cos() - d.cos() * p.sin() * h.cos());
    (alt.to_degrees(), az.to_degrees().rem_euclid(360.0))
}

/// Observer's geocentric offsets ρ sin φ′ and ρ cos φ′ (Earth radii).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopocentricOffsets {
    pub rho_sin_phi: f64,
    pub rho_cos_phi: f64,
}

/// Geocentric offsets for a geodetic latitude and height above sea level.
pub fn observer_offsets(lat_deg: f64, height_m: f64) -> TopocentricOffsets {
    let phi = lat_deg.to_radians();
    let u = (AXIS_RATIO * phi.tan()).atan();
    let h = height_m / (EARTH_EQUATORIAL_RADIUS_KM * 1000.0);
    TopocentricOffsets {
        rho_sin_phi: AXIS_RATIO * u.sin() + h * phi.sin(),
        rho_cos_phi: u.cos() + h * phi.cos(),
    }
}

/// Shift geocentric (α, δ) to the observer's position.
///
/// `hour_angle_deg` is the geocentric local hour angle; `distance_km` the
/// geocentric distance of the body. Returns `(α′, δ′, H′)` in degrees.
pub fn topocentric_equatorial(
    ra_deg: f64,
    dec_deg: f64,
    distance_km: f64,
    hour_angle_deg: f64,
    offsets: TopocentricOffsets,
) -> (f64, f64, f64) {
    let sin_pi = EARTH_EQUATORIAL_RADIUS_KM / distance_km;
    let h = hour_angle_deg.to_radians();
    let d = dec_deg.to_radians();

    let den = d.cos() - offsets.rho_cos_phi * sin_pi * h.cos();
    let d_ra = (-offsets.rho_cos_phi * sin_pi * h.sin()).atan2(den);
    let dec_top = ((d.sin() - offsets.rho_sin_phi * sin_pi) * d_ra.cos()).atan2(den);

    let d_ra_deg = d_ra.to_degrees();
    (
        (ra_deg + d_ra_deg).rem_euclid(360.0),
        dec_top.to_degrees(),
        hour_angle_deg - d_ra_deg,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_13a_equatorial() {
        // Pollux: λ = 113.215630°, β = 6.684170°, ε = 23.4392911°
        let (ra, dec) = ecliptic_to_equatorial(113.215630, 6.684170, 23.4392911);
        assert!((ra - 116.328942).abs() < 1e-5, "α = {ra}");
        assert!((dec - 28.026183).abs() < 1e-5, "δ = {dec}");
    }

    #[test]
    fn meeus_example_13b_horizontal() {
        // Venus from Washington: H = 64.352133°, δ = -6.719892°, φ = 38.921389°
        let (alt, az) = equatorial_to_horizontal(64.352133, -6.719892, 38.921389);
        assert!((alt - 15.1249).abs() < 1e-3, "h = {alt}");
        // Meeus measures from south: 68.0337° -> 248.0337° from north.
        assert!((az - 248.0337).abs() < 1e-3, "A = {az}");
    }

    #[test]
    fn meeus_example_40a_parallax() {
        // Mars from Palomar, 2003-Aug-28 3h17m UT.
        let offsets = observer_offsets(33.356111, 1706.0);
        assert!((offsets.rho_sin_phi - 0.546861).abs() < 1e-6);
        assert!((offsets.rho_cos_phi - 0.836339).abs() < 1e-6);

        let distance_km = 0.37276 * 149_597_870.7;
        let (ra, dec, _) = topocentric_equatorial(339.530208, -15.771083, distance_km, 288.7958, offsets);
        assert!((ra - 339.535583).abs() < 5e-5, "α′ = {ra}");
        assert!((dec + 15.775).abs() < 5e-5, "δ′ = {dec}");
    }

    #[test]
    fn moon_on_horizon_drops_by_parallax() {
        // Hour angle 90° from the equator with δ = 0: geocentric altitude 0.
        let offsets = observer_offsets(0.0, 0.0);
        let (_, dec, ha) = topocentric_equatorial(0.0, 0.0, 384_400.0, 90.0, offsets);
        let (alt, _) = equatorial_to_horizontal(ha, dec, 0.0);
        assert!((alt + 0.95).abs() < 0.01, "topocentric altitude = {alt}");
    }
}
