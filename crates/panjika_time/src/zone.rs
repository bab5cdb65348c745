//! Local calendar days in an IANA time zone.
//!
//! Every almanac search runs over a window bounded by local midnight and
//! the following local midnight, converted to UTC. Comparisons always
//! happen on the UTC side.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Timelike};
use chrono_tz::Tz;

use crate::Instant;
use crate::error::TimeError;

/// Parse an IANA zone identifier such as `Asia/Kolkata`.
pub fn parse_zone(name: &str) -> Result<Tz, TimeError> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| TimeError::UnknownZone(name.to_string()))
}

/// One civil calendar day in a given zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalDay {
    date: NaiveDate,
    zone: Tz,
}

impl LocalDay {
    pub fn new(date: NaiveDate, zone: Tz) -> Self {
        Self { date, zone }
    }

    pub fn from_ymd(year: i32, month: u32, day: u32, zone: Tz) -> Result<Self, TimeError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(|date| Self { date, zone })
            .ok_or(TimeError::InvalidDate { year, month, day })
    }

    /// The local day on which `instant` falls.
    pub fn containing(instant: Instant, zone: Tz) -> Result<Self, TimeError> {
        let local = instant.in_zone(zone)?;
        Ok(Self {
            date: local.date_naive(),
            zone,
        })
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// UTC instant of local midnight opening this day.
    ///
    /// Where a DST transition skips midnight, the first valid local time
    /// after it is used.
    pub fn start(&self) -> Instant {
        resolve_local(self.zone, self.date.and_time(NaiveTime::MIN))
    }

    /// UTC instant of the next local midnight (exclusive end).
    pub fn end(&self) -> Instant {
        self.succ().start()
    }

    /// True if `t` lies in `[start, end)`.
    pub fn contains(&self, t: Instant) -> bool {
        t >= self.start() && t < self.end()
    }

    pub fn succ(&self) -> Self {
        Self {
            date: self.date.checked_add_days(Days::new(1)).unwrap_or(self.date),
            zone: self.zone,
        }
    }

    pub fn pred(&self) -> Self {
        Self {
            date: self.date.checked_sub_days(Days::new(1)).unwrap_or(self.date),
            zone: self.zone,
        }
    }

    /// UTC instant of a wall-clock time on this day.
    pub fn at_local_time(&self, hour: u32, minute: u32) -> Result<Instant, TimeError> {
        let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
            TimeError::NonexistentLocalTime(format!("{} {hour:02}:{minute:02}", self.date))
        })?;
        Ok(resolve_local(self.zone, self.date.and_time(time)))
    }

    /// Local wall-clock `(hour, minute)` of `t` in this day's zone.
    pub fn local_hm(&self, t: Instant) -> Result<(u32, u32), TimeError> {
        let local = t.in_zone(self.zone)?;
        Ok((local.hour(), local.minute()))
    }
}

impl std::fmt::Display for LocalDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.date, self.zone.name())
    }
}

fn resolve_local(zone: Tz, naive: NaiveDateTime) -> Instant {
    if let Some(dt) = zone.from_local_datetime(&naive).earliest() {
        return Instant::from_datetime(&dt);
    }
    // Skipped by a forward DST jump; gaps never exceed one hour in practice.
    let shifted = naive + chrono::Duration::hours(1);
    match zone.from_local_datetime(&shifted).earliest() {
        Some(dt) => Instant::from_datetime(&dt),
        None => Instant::from_datetime(&chrono::Utc.from_utc_datetime(&naive)),
    }
}
