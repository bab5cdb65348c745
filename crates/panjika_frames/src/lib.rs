//! Frame and coordinate helpers for apparent Sun/Moon positions.
//!
//! Provides the Earth-orientation quantities the analytic ephemeris needs
//! (mean obliquity, truncated nutation, general precession) and the
//! rotations from ecliptic coordinates down to an observer's horizon.

pub mod horizontal;
pub mod nutation;
pub mod obliquity;
pub mod precession;
pub mod spherical;

pub use horizontal::{
    TopocentricOffsets, ecliptic_to_equatorial, equatorial_to_horizontal, observer_offsets,
    topocentric_equatorial,
};
pub use nutation::{fundamental_arguments, nutation_iau2000b_truncated};
pub use obliquity::{mean_obliquity_deg, true_obliquity_deg};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
pub use spherical::{
    SphericalCoords, angular_separation_deg, cartesian_to_spherical, spherical_to_cartesian,
};
