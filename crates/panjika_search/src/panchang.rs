//! Daily and monthly aggregation.
//!
//! Each day is computed against its own [`CachedProvider`], created at the
//! start of the day's pipeline and dropped at the end. The monthly scan fans
//! days out with rayon; results are collected in date order.

use panjika_core::{Body, CachedProvider, PositionProvider};
use panjika_time::{Instant, LocalDay};
use rayon::prelude::*;
use tracing::debug;

use crate::context::PanjikaContext;
use crate::eclipse::eclipses_for_day;
use crate::elements::elements_at;
use crate::error::SearchError;
use crate::festival::{festivals_for_day, merge_festivals};
use crate::festival_types::FestivalMatch;
use crate::lunar_phase::moon_phases_for_day;
use crate::panchang_types::PanchangSnapshot;
use crate::riseset::rise_set_for_day;
use crate::sankranti::{MAX_MONTH_WALK_DAYS, resolve_month};
use crate::tithi_tracker::{TITHI_WINDOW_PAD_DAYS, tithi_events_for_day};

/// Reject queries whose searches would leave the provider's coverage.
fn check_coverage<P: PositionProvider + ?Sized>(
    provider: &P,
    first: LocalDay,
    last: LocalDay,
) -> Result<(), SearchError> {
    let from = first
        .start()
        .add_days(-(f64::from(MAX_MONTH_WALK_DAYS) + 1.0));
    let to = last.end().add_days(TITHI_WINDOW_PAD_DAYS);
    if provider.covers(from) && provider.covers(to) {
        Ok(())
    } else {
        Err(SearchError::OutOfCoverage {
            start_jd: from.jd_utc(),
            end_jd: to.jd_utc(),
        })
    }
}

/// Full almanac record for `at` and the observer's local day containing it.
pub fn daily_panchang<P: PositionProvider + ?Sized>(
    ctx: &PanjikaContext<'_, P>,
    at: Instant,
) -> Result<PanchangSnapshot, SearchError> {
    ctx.observer.location.validate()?;
    let day = ctx.local_day(at)?;
    check_coverage(ctx.provider, day, day)?;

    let cached = CachedProvider::new(ctx.provider);
    let c = ctx.with_provider(&cached);
    let location = &ctx.observer.location;
    let settings = ctx.settings;

    let elements = elements_at(&cached, at, settings.ayanamsha)?;
    let tithi_events = tithi_events_for_day(&cached, day)?;
    let sun = rise_set_for_day(&cached, Body::Sun, location, day, &settings.rise_set)?;
    let moon = rise_set_for_day(&cached, Body::Moon, location, day, &settings.rise_set)?;
    let moon_phases = moon_phases_for_day(&cached, day)?;
    let eclipses = eclipses_for_day(&cached, location, day, &settings.eclipse)?;
    let month = resolve_month(&c, day)?;
    let hijri = match ctx
        .hijri
        .gregorian_to_hijri(day.year(), day.month(), day.day())
    {
        Ok(h) => Some(h),
        Err(e) => {
            debug!(%day, error = %e, "no Hijri date");
            None
        }
    };
    let festivals = festivals_for_day(&c, day, month.lunar_month, &tithi_events)?;

    let stats = cached.stats();
    debug!(
        %day,
        evaluations = stats.evaluations,
        cache_hits = stats.cache_hits,
        "daily panchang computed"
    );
    Ok(PanchangSnapshot {
        place: ctx.observer.name.clone(),
        zone: ctx.observer.zone.name().to_string(),
        date: day.date(),
        instant: at,
        elements,
        tithi_events,
        sun,
        moon,
        moon_phases,
        eclipses,
        month,
        hijri,
        festivals,
        stats,
    })
}

/// Festival matches of one day, before any month-level merge.
pub fn festivals_on_day<P: PositionProvider + ?Sized>(
    ctx: &PanjikaContext<'_, P>,
    day: LocalDay,
) -> Result<Vec<FestivalMatch>, SearchError> {
    let cached = CachedProvider::new(ctx.provider);
    let c = ctx.with_provider(&cached);
    let month = resolve_month(&c, day)?;
    let tithi_events = tithi_events_for_day(&cached, day)?;
    festivals_for_day(&c, day, month.lunar_month, &tithi_events)
}

/// All local days of a Gregorian month in the observer's zone.
pub fn days_of_month<P: ?Sized>(
    ctx: &PanjikaContext<'_, P>,
    year: i32,
    month: u32,
) -> Result<Vec<LocalDay>, SearchError> {
    let first = ctx.day(year, month, 1)?;
    let mut days = vec![first];
    let mut current = first;
    loop {
        let next = current.succ();
        if next.month() != month || next == current {
            break;
        }
        days.push(next);
        current = next;
    }
    Ok(days)
}

/// Festivals of a Gregorian month, in date order, de-duplicated.
///
/// Days are evaluated in parallel; each builds its own cache.
pub fn monthly_festivals<P: PositionProvider + Sync + ?Sized>(
    ctx: &PanjikaContext<'_, P>,
    year: i32,
    month: u32,
) -> Result<Vec<FestivalMatch>, SearchError> {
    ctx.observer.location.validate()?;
    let days = days_of_month(ctx, year, month)?;
    let first = ctx.day(year, month, 1)?;
    let last = days.last().copied().unwrap_or(first);
    check_coverage(ctx.provider, first, last)?;

    let per_day = days
        .par_iter()
        .map(|&day| festivals_on_day(ctx, day))
        .collect::<Result<Vec<_>, _>>()?;
    let merged = merge_festivals(per_day, first.date());
    debug!(year, month, days = days.len(), festivals = merged.len(), "monthly festivals");
    Ok(merged)
}
