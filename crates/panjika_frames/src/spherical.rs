//! Cartesian ↔ spherical conversion and great-circle separation.

use std::f64::consts::TAU;

/// Spherical coordinates: longitude, latitude, distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SphericalCoords {
    /// Longitude in degrees, range [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees, range [-90, 90].
    pub lat_deg: f64,
    /// Distance from origin, in the caller's unit.
    pub distance: f64,
}

/// Convert Cartesian `[x, y, z]` to spherical coordinates.
///
/// Longitude is measured in the x-y plane from +x toward +y.
pub fn cartesian_to_spherical(xyz: &[f64; 3]) -> SphericalCoords {
    let [x, y, z] = *xyz;
    let r = (x * x + y * y + z * z).sqrt();
    if r == 0.0 {
        return SphericalCoords {
            lon_deg: 0.0,
            lat_deg: 0.0,
            distance: 0.0,
        };
    }
    SphericalCoords {
        lon_deg: y.atan2(x).rem_euclid(TAU).to_degrees(),
        lat_deg: (z / r).asin().to_degrees(),
        distance: r,
    }
}

/// Convert spherical coordinates to Cartesian `[x, y, z]`.
pub fn spherical_to_cartesian(s: &SphericalCoords) -> [f64; 3] {
    let lon = s.lon_deg.to_radians();
    let lat = s.lat_deg.to_radians();
    let cl = lat.cos();
    [
        s.distance * cl * lon.cos(),
        s.distance * cl * lon.sin(),
        s.distance * lat.sin(),
    ]
}

/// Great-circle separation between two directions, in degrees [0, 180].
///
/// Works for any longitude/latitude pair (ecliptic, equatorial, or
/// azimuth/altitude). Uses the Vincenty form, which stays accurate near 0°
/// and 180° where the plain cosine rule loses precision.
pub fn angular_separation_deg(lon1_deg: f64, lat1_deg: f64, lon2_deg: f64, lat2_deg: f64) -> f64 {
    let (l1, b1) = (lon1_deg.to_radians(), lat1_deg.to_radians());
    let (l2, b2) = (lon2_deg.to_radians(), lat2_deg.to_radians());
    let dl = l2 - l1;

    let num_a = b2.cos() * dl.sin();
    let num_b = b1.cos() * b2.sin() - b1.sin() * b2.cos() * dl.cos();
    let den = b1.sin() * b2.sin() + b1.cos() * b2.cos() * dl.cos();
    (num_a.hypot(num_b)).atan2(den).to_degrees()
}
