//! Month Resolver.
//!
//! The solar month is the rashi of the sidereal Sun at the query day's
//! sunrise (local 06:00 if the Sun does not rise). Walking back one day at
//! a time, the first day whose sunrise rashi differs marks the previous
//! month; the day after it is the first day of the current month.

use panjika_core::{Body, PositionProvider};
use panjika_time::LocalDay;
use panjika_vedic_base::{BengaliMonth, LunarMonth, bengali_year, rashi_from_sidereal_longitude};
use tracing::{debug, warn};

use crate::context::PanjikaContext;
use crate::elements::sidereal_longitude_at;
use crate::error::SearchError;
use crate::riseset::sunrise_or_fallback;
use crate::sankranti_types::MonthBoundary;

/// Safety limit for the backward walk. Solar months last 29-32 days.
pub const MAX_MONTH_WALK_DAYS: u32 = 50;

/// Sidereal Sun longitude at sunrise of `day`.
pub fn sidereal_sun_at_sunrise<P: PositionProvider + ?Sized>(
    ctx: &PanjikaContext<'_, P>,
    day: LocalDay,
) -> Result<f64, SearchError> {
    let sunrise = sunrise_or_fallback(
        ctx.provider,
        &ctx.observer.location,
        day,
        &ctx.settings.rise_set,
    )?;
    sidereal_longitude_at(ctx.provider, sunrise, Body::Sun, ctx.settings.ayanamsha)
}

/// Solar month, day of month and Bengali year for `day`.
///
/// Never cached: the walk starts from the query day every time.
pub fn resolve_month<P: PositionProvider + ?Sized>(
    ctx: &PanjikaContext<'_, P>,
    day: LocalDay,
) -> Result<MonthBoundary, SearchError> {
    let sidereal_sun_deg = sidereal_sun_at_sunrise(ctx, day)?;
    let rashi = rashi_from_sidereal_longitude(sidereal_sun_deg);

    let mut month_start = None;
    let mut cursor = day;
    for _ in 0..MAX_MONTH_WALK_DAYS {
        cursor = cursor.pred();
        let lon = sidereal_sun_at_sunrise(ctx, cursor)?;
        if rashi_from_sidereal_longitude(lon) != rashi {
            month_start = Some(cursor.succ());
            break;
        }
    }

    let converged = month_start.is_some();
    let month_start = match month_start {
        Some(start) => start,
        None => {
            warn!(
                %day,
                rashi = rashi.name(),
                limit = MAX_MONTH_WALK_DAYS,
                "no sankranti found within the walk limit"
            );
            // Day count becomes the full span walked.
            cursor.succ()
        }
    };

    let day_of_month = (day.date() - month_start.date()).num_days() as u32 + 1;
    let bengali_month = BengaliMonth::from_rashi(rashi);
    let boundary = MonthBoundary {
        rashi,
        month_index: rashi.index(),
        bengali_month,
        lunar_month: LunarMonth::from_rashi(rashi),
        day_of_month,
        month_start: month_start.date(),
        bengali_year: bengali_year(day.year(), day.month(), bengali_month),
        sidereal_sun_deg,
        converged,
    };
    debug!(
        %day,
        month = bengali_month.name(),
        day_of_month,
        start = %boundary.month_start,
        "month resolved"
    );
    Ok(boundary)
}

