//! Time handling for the panjika almanac.
//!
//! This crate provides:
//! - `Instant`, the UTC time point every component compares on
//! - Julian Date <-> calendar conversions
//! - ΔT and the UTC -> TT step needed by the position series
//! - sidereal time for horizontal coordinates
//! - `LocalDay`, the local-midnight-to-local-midnight search window

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod sidereal;
pub mod utc_time;
pub mod zone;

use std::cmp::Ordering;

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

pub use delta_t::{delta_t_seconds, jd_utc_to_jd_tt};
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, centuries_since_j2000,
    jd_to_calendar,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
pub use utc_time::UtcTime;
pub use zone::{LocalDay, parse_zone};

/// A UTC time point stored as a Julian Date.
///
/// This is the primary time type used throughout the almanac. Local civil
/// time only appears when a [`LocalDay`] window is built or when a result
/// is rendered.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Instant {
    jd_utc: f64,
}

impl Instant {
    /// Create an instant from a Julian Date on the UTC scale.
    pub fn from_jd_utc(jd_utc: f64) -> Self {
        Self { jd_utc }
    }

    pub fn from_utc(utc: UtcTime) -> Self {
        Self {
            jd_utc: utc.to_jd_utc(),
        }
    }

    pub fn from_datetime<Z: TimeZone>(dt: &DateTime<Z>) -> Self {
        let secs = dt.timestamp() as f64 + dt.timestamp_subsec_nanos() as f64 * 1e-9;
        Self {
            jd_utc: UNIX_EPOCH_JD + secs / SECONDS_PER_DAY,
        }
    }

    /// The current system time.
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now())
    }

    /// Julian Date on the UTC scale.
    pub fn jd_utc(self) -> f64 {
        self.jd_utc
    }

    /// Julian Date on the TT scale (UTC + ΔT).
    pub fn jd_tt(self) -> f64 {
        jd_utc_to_jd_tt(self.jd_utc)
    }

    pub fn to_utc(self) -> UtcTime {
        UtcTime::from_jd_utc(self.jd_utc)
    }

    /// Millisecond-resolution chrono timestamp.
    pub fn to_datetime(self) -> Result<DateTime<Utc>, TimeError> {
        let millis = ((self.jd_utc - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
        if !millis.is_finite() {
            return Err(TimeError::Unrepresentable(self.jd_utc));
        }
        DateTime::from_timestamp_millis(millis as i64)
            .ok_or(TimeError::Unrepresentable(self.jd_utc))
    }

    /// Civil time of this instant in `zone`.
    pub fn in_zone(self, zone: Tz) -> Result<DateTime<Tz>, TimeError> {
        Ok(self.to_datetime()?.with_timezone(&zone))
    }

    pub fn add_days(self, days: f64) -> Self {
        Self {
            jd_utc: self.jd_utc + days,
        }
    }

    pub fn add_seconds(self, seconds: f64) -> Self {
        self.add_days(seconds / SECONDS_PER_DAY)
    }

    /// Signed interval `self - earlier` in days.
    pub fn days_since(self, earlier: Instant) -> f64 {
        self.jd_utc - earlier.jd_utc
    }

    pub fn midpoint(self, other: Instant) -> Self {
        Self {
            jd_utc: 0.5 * (self.jd_utc + other.jd_utc),
        }
    }

    /// Total order for sorting (NaN sorts last).
    pub fn total_cmp(&self, other: &Instant) -> Ordering {
        self.jd_utc.total_cmp(&other.jd_utc)
    }

    /// Bit pattern of the Julian Date, usable as an exact hash key.
    pub fn to_bits(self) -> u64 {
        self.jd_utc.to_bits()
    }

    /// Rounded to whole seconds since the Unix epoch.
    pub fn unix_seconds(self) -> i64 {
        ((self.jd_utc - UNIX_EPOCH_JD) * SECONDS_PER_DAY).round() as i64
    }
}

impl std::fmt::Display for Instant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let utc = self.to_utc();
        // Reports carry whole seconds.
        let rounded = UtcTime {
            second: utc.second.floor(),
            ..utc
        };
        write!(f, "{rounded}")
    }
}

impl Serialize for Instant {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instant_from_utc_roundtrip() {
        let utc = UtcTime::new(2024, 4, 13, 21, 15, 30.0);
        let t = Instant::from_utc(utc);
        assert_eq!(t.to_utc(), utc);
        assert_eq!(t.to_string(), "2024-04-13T21:15:30Z");
    }

    #[test]
    fn datetime_conversion_agrees_with_jd() {
        let dt = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let t = Instant::from_datetime(&dt);
        assert_eq!(t.to_datetime().unwrap(), dt);
        assert_eq!(t.unix_seconds(), 1_700_000_000);
    }

    #[test]
    fn in_zone_applies_offset() {
        let t = Instant::from_utc(UtcTime::new(2025, 1, 1, 0, 0, 0.0));
        let local = t.in_zone(chrono_tz::Asia::Kolkata).unwrap();
        assert_eq!(local.to_rfc3339(), "2025-01-01T05:30:00+05:30");
    }

    #[test]
    fn tt_is_ahead_of_utc() {
        let t = Instant::from_jd_utc(J2000_JD);
        let dt_s = (t.jd_tt() - t.jd_utc()) * SECONDS_PER_DAY;
        assert!((dt_s - 63.8).abs() < 0.5, "ΔT at J2000 = {dt_s}");
    }

    #[test]
    fn ordering_and_midpoint() {
        let a = Instant::from_jd_utc(2_460_000.0);
        let b = a.add_seconds(3600.0);
        assert!(a < b);
        assert!((b.days_since(a) * 24.0 - 1.0).abs() < 1e-9);
        assert!((a.midpoint(b).days_since(a) * 48.0 - 1.0).abs() < 1e-9);
        assert_eq!(a.total_cmp(&b), Ordering::Less);
    }

    #[test]
    fn serializes_as_iso_string() {
        let t = Instant::from_utc(UtcTime::new(2025, 9, 7, 17, 30, 0.0));
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"2025-09-07T17:30:00Z\"");
    }
}
