//! Almanac event search and aggregation.
//!
//! This crate provides:
//! - The Event Search Engine (`find_discrete`, `find_runs`)
//! - Rise/set of the Sun and Moon for a local day
//! - Panchang elements at an instant
//! - Tithi transitions overlapping a local day
//! - Principal moon phases within a day
//! - Solar and lunar eclipse visibility windows
//! - Solar month resolution by backward sankranti walk
//! - Festival matching against the static rule table
//! - Daily snapshot and parallel monthly festival scan
//!
//! All queries are pure functions of their inputs and an explicit
//! [`PanjikaContext`].

pub mod context;
pub mod eclipse;
pub mod eclipse_types;
pub mod elements;
pub mod error;
pub mod festival;
pub mod festival_types;
pub mod lunar_phase;
pub mod lunar_phase_types;
pub mod panchang;
pub mod panchang_types;
pub mod riseset;
pub mod sankranti;
pub mod sankranti_types;
pub mod search_util;
pub mod tithi_tracker;
pub mod tithi_types;

pub use context::{AlmanacSettings, Observer, PanjikaContext};
pub use eclipse::{EclipseVisible, eclipse_for_day, eclipses_for_day};
pub use eclipse_types::{EclipseConfig, EclipseEvent, EclipseKind};
pub use elements::{
    PanchangElements, elements_at, elements_from_longitudes, elongation_at, sidereal_longitude_at,
};
pub use error::SearchError;
pub use festival::{festivals_for_day, festivals_with_rules, merge_festivals};
pub use festival_types::{FestivalKey, FestivalMatch, FestivalSource, lunation_of};
pub use lunar_phase::moon_phases_for_day;
pub use lunar_phase_types::{LunarPhase, LunarPhaseEvent};
pub use panchang::{daily_panchang, days_of_month, festivals_on_day, monthly_festivals};
pub use panchang_types::PanchangSnapshot;
pub use riseset::{AboveHorizon, RiseSetPair, rise_set_for_day, sunrise_or_fallback};
pub use sankranti::{MAX_MONTH_WALK_DAYS, resolve_month, sidereal_sun_at_sunrise};
pub use sankranti_types::MonthBoundary;
pub use search_util::{
    DiscreteFunction, MINUTE_DAYS, Run, SECOND_DAYS, SearchOptions, Transition, find_discrete,
    find_runs,
};
pub use tithi_tracker::{TITHI_WINDOW_PAD_DAYS, tithi_events_for_day};
pub use tithi_types::TithiEvent;
