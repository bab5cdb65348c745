//! UTC calendar date/time with sub-second precision.
//!
//! `UtcTime` is the human-facing form of an [`Instant`](crate::Instant):
//! it parses the ISO-like strings accepted on the command line and renders
//! the canonical `YYYY-MM-DDThh:mm:ssZ` form used in reports and JSON.

use std::str::FromStr;

use chrono::NaiveDate;

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, jd_to_calendar};

/// UTC calendar date with sub-second precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtcTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: f64,
}

impl UtcTime {
    pub fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: f64) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Convert to a Julian Date on the UTC scale.
    pub fn to_jd_utc(&self) -> f64 {
        let day_frac = self.day as f64
            + self.hour as f64 / 24.0
            + self.minute as f64 / 1440.0
            + self.second / SECONDS_PER_DAY;
        calendar_to_jd(self.year, self.month, day_frac)
    }

    /// Convert from a UTC Julian Date, rounded to the millisecond.
    pub fn from_jd_utc(jd_utc: f64) -> Self {
        let millis = ((jd_utc - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round() as i64;
        let days = millis.div_euclid(86_400_000);
        let ms_of_day = millis.rem_euclid(86_400_000);
        // UNIX_EPOCH_JD + days is an exact half-integer, so the day is exact.
        let (year, month, day_frac) = jd_to_calendar(UNIX_EPOCH_JD + days as f64);
        let hour = (ms_of_day / 3_600_000) as u32;
        let minute = ((ms_of_day % 3_600_000) / 60_000) as u32;
        let second = (ms_of_day % 60_000) as f64 / 1000.0;
        Self {
            year,
            month,
            day: day_frac.floor() as u32,
            hour,
            minute,
            second,
        }
    }

    fn validate(self) -> Result<Self, TimeError> {
        if NaiveDate::from_ymd_opt(self.year, self.month, self.day).is_none() {
            return Err(TimeError::InvalidDate {
                year: self.year,
                month: self.month,
                day: self.day,
            });
        }
        if self.hour > 23 || self.minute > 59 || !(0.0..60.0).contains(&self.second) {
            return Err(TimeError::Parse(format!(
                "time of day out of range: {:02}:{:02}:{}",
                self.hour, self.minute, self.second
            )));
        }
        Ok(self)
    }
}

impl std::fmt::Display for UtcTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let whole = self.second as u32;
        let frac = self.second - whole as f64;
        if frac.abs() < 1e-9 {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}Z",
                self.year, self.month, self.day, self.hour, self.minute, whole
            )
        } else {
            write!(
                f,
                "{:04}-{:02}-{:02}T{:02}:{:02}:{:06.3}Z",
                self.year, self.month, self.day, self.hour, self.minute, self.second
            )
        }
    }
}

/// Parses `YYYY-MM-DD`, `YYYY-MM-DDThh:mm`, `YYYY-MM-DDThh:mm:ss[.fff]`,
/// each with an optional trailing `Z`. A space may replace the `T`.
impl FromStr for UtcTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bad = || TimeError::Parse(s.to_string());
        let trimmed = s.trim().trim_end_matches('Z');
        let (date_part, time_part) = match trimmed.split_once(['T', ' ']) {
            Some((d, t)) => (d, Some(t)),
            None => (trimmed, None),
        };

        let dp: Vec<&str> = date_part.split('-').collect();
        if dp.len() != 3 {
            return Err(bad());
        }
        let year: i32 = dp[0].parse().map_err(|_| bad())?;
        let month: u32 = dp[1].parse().map_err(|_| bad())?;
        let day: u32 = dp[2].parse().map_err(|_| bad())?;

        let (hour, minute, second) = match time_part {
            None => (0, 0, 0.0),
            Some(t) => {
                let tp: Vec<&str> = t.split(':').collect();
                if !(2..=3).contains(&tp.len()) {
                    return Err(bad());
                }
                let hour: u32 = tp[0].parse().map_err(|_| bad())?;
                let minute: u32 = tp[1].parse().map_err(|_| bad())?;
                let second: f64 = match tp.get(2) {
                    Some(sec) => sec.parse().map_err(|_| bad())?,
                    None => 0.0,
                };
                (hour, minute, second)
            }
        };

        Self::new(year, month, day, hour, minute, second).validate()
    }
}
