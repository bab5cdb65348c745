//! Types for solar month resolution.

use chrono::NaiveDate;
use panjika_vedic_base::{BengaliMonth, LunarMonth, Rashi};
use serde::Serialize;

/// Solar month containing a query day, found by walking back to the most
/// recent sankranti.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthBoundary {
    pub rashi: Rashi,
    /// 0-based month index (Boishakh = 0).
    pub month_index: u8,
    pub bengali_month: BengaliMonth,
    pub lunar_month: LunarMonth,
    /// 1-based day of the solar month.
    pub day_of_month: u32,
    /// First local date of the month.
    pub month_start: NaiveDate,
    pub bengali_year: i32,
    /// Sidereal Sun longitude at the query day's sunrise.
    pub sidereal_sun_deg: f64,
    /// False when no boundary was found within the walk limit; then
    /// `day_of_month` is the full span walked.
    pub converged: bool,
}
