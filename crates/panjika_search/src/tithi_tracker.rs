//! Tithi Transition Tracker.
//!
//! A tithi lasts roughly 20 to 27 hours, so a local day holds zero, one or
//! two tithi boundaries and the tithi active at midnight usually began the
//! day before. The search window is widened by [`TITHI_WINDOW_PAD_DAYS`]
//! on each side so that both ends of every tithi touching the day are
//! found, then segments whose start or end falls inside the day are kept.

use panjika_core::PositionProvider;
use panjika_time::{Instant, LocalDay};
use panjika_vedic_base::{TithiPosition, tithi_bucket};
use tracing::{debug, warn};

use crate::elements::elongation_at;
use crate::error::SearchError;
use crate::search_util::{DiscreteFunction, Run, SearchOptions, find_runs};
use crate::tithi_types::TithiEvent;

/// Padding on each side of the local day (longest tithi is ~26.8 h).
pub const TITHI_WINDOW_PAD_DAYS: f64 = 1.25;

/// Sampling step, shorter than the shortest tithi.
pub const TITHI_STEP_DAYS: f64 = 0.25;

/// 0-based tithi bucket `floor(elongation / 12)` as a function of time.
pub struct TithiBucket<'a, P: ?Sized> {
    pub provider: &'a P,
    pub step_days: f64,
}

impl<P: PositionProvider + ?Sized> DiscreteFunction for TithiBucket<'_, P> {
    type Value = u8;

    fn step_days(&self) -> f64 {
        self.step_days
    }

    fn value_at(&self, at: Instant) -> Result<u8, SearchError> {
        Ok(tithi_bucket(elongation_at(self.provider, at)?))
    }
}

fn event_from_run(run: &Run<u8>, spans_full_day: bool) -> Result<TithiEvent, SearchError> {
    Ok(TithiEvent {
        tithi: TithiPosition::from_raw(run.value + 1)?,
        start: run.start,
        end: run.end,
        spans_full_day,
    })
}

/// Tithis that begin or end during `day`, in time order. Never empty.
///
/// Consecutive events share their boundary instant exactly. When no
/// boundary falls inside the day, the tithi active at local midnight is
/// returned alone with `spans_full_day` set.
pub fn tithi_events_for_day<P: PositionProvider + ?Sized>(
    provider: &P,
    day: LocalDay,
) -> Result<Vec<TithiEvent>, SearchError> {
    let (day_start, day_end) = (day.start(), day.end());
    let window_start = day_start.add_days(-TITHI_WINDOW_PAD_DAYS);
    let window_end = day_end.add_days(TITHI_WINDOW_PAD_DAYS);

    let f = TithiBucket {
        provider,
        step_days: TITHI_STEP_DAYS,
    };
    let runs = find_runs(&f, window_start, window_end, &SearchOptions::default())?;

    let starts_in_day = |r: &&Run<u8>| r.start >= day_start && r.start < day_end;
    let ends_in_day = |r: &&Run<u8>| r.end > day_start && r.end <= day_end;
    let events = runs
        .iter()
        .filter(|r| starts_in_day(r) || ends_in_day(r))
        .map(|r| event_from_run(r, false))
        .collect::<Result<Vec<_>, _>>()?;

    if !events.is_empty() {
        debug!(%day, count = events.len(), "tithi events");
        return Ok(events);
    }

    let Some(active) = runs
        .iter()
        .find(|r| r.start <= day_start && r.end > day_start)
    else {
        warn!(%day, runs = runs.len(), "no tithi segment covers local midnight");
        return Err(SearchError::NoConvergence(
            "no tithi segment covers local midnight",
        ));
    };
    debug!(%day, raw = active.value + 1, "no tithi boundary inside the day; reporting the tithi active at midnight");
    Ok(vec![event_from_run(active, true)?])
}
