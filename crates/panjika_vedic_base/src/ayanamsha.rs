//! Sidereal correction (ayanamsha).
//!
//! The almanac subtracts a single offset from tropical longitudes before
//! indexing nakshatra, yoga and rashi tables. The default is a fixed
//! 24.25 degrees; `Lahiri` follows the moving equinox via IAU 2006 general
//! precession in longitude.

use panjika_frames::general_precession_longitude_deg;
use panjika_time::centuries_since_j2000;
use serde::Serialize;

/// Lahiri (Chitrapaksha) ayanamsha at J2000.0, degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.853;

/// Fixed offset used when nothing else is configured.
pub const DEFAULT_FIXED_AYANAMSHA_DEG: f64 = 24.25;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "degrees")]
pub enum Ayanamsha {
    /// Constant offset in degrees, independent of epoch.
    Fixed(f64),
    /// Lahiri: J2000 reference plus accumulated general precession.
    Lahiri,
}

impl Default for Ayanamsha {
    fn default() -> Self {
        Self::Fixed(DEFAULT_FIXED_AYANAMSHA_DEG)
    }
}

impl Ayanamsha {
    /// Offset in degrees at the given JD (TT).
    pub fn degrees(self, jd_tt: f64) -> f64 {
        match self {
            Self::Fixed(deg) => deg,
            Self::Lahiri => {
                LAHIRI_J2000_DEG + general_precession_longitude_deg(centuries_since_j2000(jd_tt))
            }
        }
    }
}
