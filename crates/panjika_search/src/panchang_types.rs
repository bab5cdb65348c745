//! Types for the daily almanac record.

use chrono::NaiveDate;
use panjika_core::QueryStats;
use panjika_time::Instant;
use panjika_vedic_base::HijriDate;
use serde::Serialize;

use crate::eclipse_types::EclipseEvent;
use crate::elements::PanchangElements;
use crate::festival_types::FestivalMatch;
use crate::lunar_phase_types::LunarPhaseEvent;
use crate::riseset::RiseSetPair;
use crate::sankranti_types::MonthBoundary;
use crate::tithi_types::TithiEvent;

/// Everything the almanac reports for one instant and its local day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanchangSnapshot {
    pub place: String,
    pub zone: String,
    pub date: NaiveDate,
    pub instant: Instant,
    /// Elements at `instant`.
    pub elements: PanchangElements,
    /// Tithis beginning or ending on `date`.
    pub tithi_events: Vec<TithiEvent>,
    pub sun: RiseSetPair,
    pub moon: RiseSetPair,
    pub moon_phases: Vec<LunarPhaseEvent>,
    pub eclipses: Vec<EclipseEvent>,
    pub month: MonthBoundary,
    /// Absent when the Hijri converter cannot handle the date.
    pub hijri: Option<HijriDate>,
    pub festivals: Vec<FestivalMatch>,
    /// Provider evaluations and cache hits spent on this record.
    pub stats: QueryStats,
}
