//! Horizon configuration for rise/set searches.

use std::f64::consts::PI;

use panjika_core::Body;
use serde::Serialize;

/// Mean Earth radius in meters (for geometric dip).
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiseSetConfig {
    /// Atmospheric refraction at the horizon in arcminutes. Default: 34.0.
    pub refraction_arcmin: f64,
    /// Solar angular semi-diameter in arcminutes. Default: 16.0.
    pub sun_semidiameter_arcmin: f64,
    /// Mean lunar angular semi-diameter in arcminutes. Default: 15.5.
    pub moon_semidiameter_arcmin: f64,
    /// Whether to apply geometric dip for observer altitude.
    /// Approximation: dip = sqrt(2h/R) radians. Default: true.
    pub altitude_correction: bool,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            refraction_arcmin: 34.0,
            sun_semidiameter_arcmin: 16.0,
            moon_semidiameter_arcmin: 15.5,
            altitude_correction: true,
        }
    }
}

impl RiseSetConfig {
    /// Semidiameter of `body` in arcminutes.
    pub fn semidiameter_arcmin(&self, body: Body) -> f64 {
        match body {
            Body::Sun => self.sun_semidiameter_arcmin,
            Body::Moon => self.moon_semidiameter_arcmin,
        }
    }

    /// Altitude (degrees, negative below the geometric horizon) of the body's
    /// center when its upper limb touches the apparent horizon.
    ///
    /// `h0 = -((refraction + semidiameter) / 60 + dip_deg)`
    pub fn horizon_altitude_deg(&self, body: Body, altitude_m: f64) -> f64 {
        let base = (self.refraction_arcmin + self.semidiameter_arcmin(body)) / 60.0;
        let dip = if self.altitude_correction && altitude_m > 0.0 {
            (2.0 * altitude_m / EARTH_RADIUS_M).sqrt() * (180.0 / PI)
        } else {
            0.0
        };
        -(base + dip)
    }
}
