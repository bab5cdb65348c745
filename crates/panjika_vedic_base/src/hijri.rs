//! Hijri calendar conversion.
//!
//! `HijriConverter` is the seam for an external Islamic calendar source.
//! `TabularHijri` is the arithmetical (tabular) calendar: a 30-year cycle of
//! 10631 days with 11 leap years, odd months of 30 days and even months of
//! 29, and a 30-day twelfth month in leap years. Observed calendars based on
//! moon sighting can differ by a day or two; `day_offset` shifts the result
//! for a regional convention.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

/// Julian Day Number of 1 Muharram AH 1 (16 July 622, Julian calendar).
const HIJRI_EPOCH_JDN: i64 = 1_948_440;

/// JDN of 0001-01-01 (proleptic Gregorian) minus chrono's day count for it.
const CE_TO_JDN: i64 = 1_721_425;

/// Days in one 30-year cycle.
const CYCLE_DAYS: i64 = 10_631;

/// Positions of the leap years within the 30-year cycle.
const LEAP_YEARS_IN_CYCLE: [i32; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// Supported Hijri year range (roughly 1924-2077 CE).
pub const MIN_HIJRI_YEAR: i32 = 1343;
pub const MAX_HIJRI_YEAR: i32 = 1500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum HijriError {
    #[error("Gregorian date {year}-{month:02}-{day:02} does not exist")]
    InvalidDate { year: i32, month: u32, day: u32 },
    #[error("Hijri year {0} outside supported range {MIN_HIJRI_YEAR}..={MAX_HIJRI_YEAR}")]
    OutOfRange(i32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HijriDate {
    pub year: i32,
    /// 1 = Muharram .. 12 = Dhu al-Hijjah.
    pub month: u32,
    pub day: u32,
}

impl HijriDate {
    pub fn month_name(&self) -> &'static str {
        HIJRI_MONTH_NAMES[(self.month.clamp(1, 12) - 1) as usize]
    }
}

const HIJRI_MONTH_NAMES: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi al-Awwal",
    "Rabi al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Shaban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qadah",
    "Dhu al-Hijjah",
];

/// External Gregorian -> Hijri conversion.
pub trait HijriConverter: Send + Sync {
    fn gregorian_to_hijri(&self, year: i32, month: u32, day: u32) -> Result<HijriDate, HijriError>;
}

/// Arithmetical Islamic calendar with an optional whole-day shift.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabularHijri {
    /// Days added to the Gregorian date before conversion.
    pub day_offset: i32,
}

impl TabularHijri {
    pub fn new(day_offset: i32) -> Self {
        Self { day_offset }
    }

    pub fn is_leap_year(year: i32) -> bool {
        let position = (year - 1).rem_euclid(30) + 1;
        LEAP_YEARS_IN_CYCLE.contains(&position)
    }

    pub fn month_length(year: i32, month: u32) -> u32 {
        match month {
            12 if Self::is_leap_year(year) => 30,
            m if m % 2 == 1 => 30,
            _ => 29,
        }
    }
}

/// JDN of a Hijri calendar date.
fn hijri_to_jdn(year: i32, month: u32, day: u32) -> i64 {
    let y = year as i64;
    let m = month as i64;
    // ceil(29.5 * (m - 1)) days before the month
    let month_days = (59 * (m - 1) + 1) / 2;
    day as i64 + month_days + (y - 1) * 354 + (3 + 11 * y).div_euclid(30) + HIJRI_EPOCH_JDN - 1
}

fn jdn_to_hijri(jdn: i64) -> HijriDate {
    let year = (30 * (jdn - HIJRI_EPOCH_JDN) + 10_646).div_euclid(CYCLE_DAYS);
    let year = year as i32;
    let days_in = jdn - (29 + hijri_to_jdn(year, 1, 1));
    // ceil(days_in / 29.5) + 1, capped at 12
    let month = ((2 * days_in + 58).div_euclid(59) + 1).clamp(1, 12) as u32;
    let day = (jdn - hijri_to_jdn(year, month, 1) + 1) as u32;
    HijriDate { year, month, day }
}

impl HijriConverter for TabularHijri {
    fn gregorian_to_hijri(&self, year: i32, month: u32, day: u32) -> Result<HijriDate, HijriError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(HijriError::InvalidDate { year, month, day })?;
        let jdn = date.num_days_from_ce() as i64 + CE_TO_JDN + self.day_offset as i64;
        let hijri = jdn_to_hijri(jdn);
        if !(MIN_HIJRI_YEAR..=MAX_HIJRI_YEAR).contains(&hijri.year) {
            return Err(HijriError::OutOfRange(hijri.year));
        }
        Ok(hijri)
    }
}

impl<T: HijriConverter + ?Sized> HijriConverter for &T {
    fn gregorian_to_hijri(&self, year: i32, month: u32, day: u32) -> Result<HijriDate, HijriError> {
        (**self).gregorian_to_hijri(year, month, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn h(y: i32, m: u32, d: u32) -> HijriDate {
        TabularHijri::default().gregorian_to_hijri(y, m, d).unwrap()
    }

    #[test]
    fn eid_ul_fitr_1446() {
        assert_eq!(h(2025, 3, 31), HijriDate { year: 1446, month: 10, day: 1 });
        assert_eq!(h(2025, 3, 30), HijriDate { year: 1446, month: 9, day: 30 });
    }

    #[test]
    fn eid_ul_adha_1445() {
        assert_eq!(h(2024, 6, 17), HijriDate { year: 1445, month: 12, day: 10 });
    }

    #[test]
    fn islamic_new_year_1447() {
        assert_eq!(h(2025, 6, 27), HijriDate { year: 1447, month: 1, day: 1 });
    }

    #[test]
    fn day_offset_shifts_result() {
        let lagging = TabularHijri::new(-1).gregorian_to_hijri(2025, 4, 1).unwrap();
        assert_eq!(lagging, HijriDate { year: 1446, month: 10, day: 1 });
    }

    #[test]
    fn leap_years() {
        assert!(TabularHijri::is_leap_year(1442)); // 1442 mod 30 = 2
        assert!(!TabularHijri::is_leap_year(1443));
        assert!(!TabularHijri::is_leap_year(1440)); // cycle year 30
        assert_eq!(TabularHijri::month_length(1442, 12), 30);
        assert_eq!(TabularHijri::month_length(1443, 12), 29);
        assert_eq!(TabularHijri::month_length(1443, 9), 30);
    }

    #[test]
    fn out_of_range() {
        let c = TabularHijri::default();
        assert_eq!(c.gregorian_to_hijri(1900, 1, 1), Err(HijriError::OutOfRange(1317)));
        assert!(matches!(c.gregorian_to_hijri(2090, 1, 1), Err(HijriError::OutOfRange(_))));
    }

    #[test]
    fn invalid_gregorian_date() {
        let c = TabularHijri::default();
        assert_eq!(
            c.gregorian_to_hijri(2025, 2, 30),
            Err(HijriError::InvalidDate { year: 2025, month: 2, day: 30 })
        );
    }

    #[test]
    fn consecutive_days_advance_by_one() {
        let c = TabularHijri::default();
        let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut prev = c.gregorian_to_hijri(2024, 1, 1).unwrap();
        for _ in 0..800 {
            date = date.succ_opt().unwrap();
            let cur = c.gregorian_to_hijri(date.year(), date.month(), date.day()).unwrap();
            if cur.day == 1 {
                assert_eq!(prev.day, TabularHijri::month_length(prev.year, prev.month));
            } else {
                assert_eq!(cur.day, prev.day + 1);
                assert_eq!(cur.month, prev.month);
            }
            prev = cur;
        }
    }
}
