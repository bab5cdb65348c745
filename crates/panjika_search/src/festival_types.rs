//! Types for festival matching.

use chrono::NaiveDate;
use serde::Serialize;

use crate::tithi_types::TithiEvent;

/// Which kind of rule produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FestivalSource {
    Gregorian,
    Hijri,
    Lunar,
    /// The "None" sentinel.
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FestivalMatch {
    pub name: &'static str,
    /// Local date on which the match was found.
    pub date: NaiveDate,
    pub source: FestivalSource,
    /// Tithi events that satisfied a lunar rule.
    pub tithi_events: Option<Vec<TithiEvent>>,
}

/// Identity of one festival occurrence for de-duplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FestivalKey {
    /// Fixed-date rules: one occurrence per date.
    Dated { name: &'static str, date: NaiveDate },
    /// Lunar rules: one occurrence per owning tithi span, identified by
    /// the tithi and the lunation it falls in.
    Span {
        name: &'static str,
        raw: u8,
        lunation: i64,
    },
}

/// Mean new moon of 2000-01-06 (Meeus ch. 49, k = 0), JD.
const MEAN_NEW_MOON_JD: f64 = 2_451_550.097_66;
const SYNODIC_MONTH_DAYS: f64 = 29.530_588_861;

/// Lunation count of a tithi span.
///
/// The midpoint of tithi `raw` sits near fraction `(raw - 0.5) / 30` of its
/// lunation, within a few hundredths, so rounding is insensitive to the
/// sub-second differences between searches run over different windows.
pub fn lunation_of(event: &TithiEvent) -> i64 {
    let mid = event.start.midpoint(event.end).jd_utc();
    let phase = (f64::from(event.tithi.raw) - 0.5) / 30.0;
    ((mid - MEAN_NEW_MOON_JD) / SYNODIC_MONTH_DAYS - phase).round() as i64
}

impl FestivalMatch {
    pub const NONE_NAME: &'static str = "None";

    /// Sentinel for a day (or month) with no festival.
    pub fn none(date: NaiveDate) -> Self {
        Self {
            name: Self::NONE_NAME,
            date,
            source: FestivalSource::Nothing,
            tithi_events: None,
        }
    }

    pub fn is_none(&self) -> bool {
        self.source == FestivalSource::Nothing
    }

    pub fn key(&self) -> FestivalKey {
        match self.tithi_events.as_deref() {
            Some([first, ..]) => FestivalKey::Span {
                name: self.name,
                raw: first.tithi.raw,
                lunation: lunation_of(first),
            },
            _ => FestivalKey::Dated {
                name: self.name,
                date: self.date,
            },
        }
    }
}
