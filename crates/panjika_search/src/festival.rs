//! Festival Rule Engine.
//!
//! For one local day: fixed Gregorian rules against the civil date, fixed
//! Hijri rules against the converted date, and lunar rules against every
//! tithi event of the day. A failed Hijri conversion only skips the Hijri
//! rules. Matches are unique by name within a day; a day with no match
//! yields the "None" sentinel.

use std::collections::HashSet;

use chrono::NaiveDate;
use panjika_core::{Body, PositionProvider};
use panjika_time::LocalDay;
use panjika_vedic_base::{
    FESTIVAL_RULES, FestivalRule, FestivalTrigger, LunarMonth, Nakshatra,
    nakshatra_from_sidereal_longitude,
};
use tracing::debug;

use crate::context::PanjikaContext;
use crate::elements::sidereal_longitude_at;
use crate::error::SearchError;
use crate::festival_types::{FestivalKey, FestivalMatch, FestivalSource};
use crate::tithi_types::TithiEvent;

/// Festivals for `day` using the built-in rule table.
pub fn festivals_for_day<P: PositionProvider + ?Sized>(
    ctx: &PanjikaContext<'_, P>,
    day: LocalDay,
    lunar_month: LunarMonth,
    tithi_events: &[TithiEvent],
) -> Result<Vec<FestivalMatch>, SearchError> {
    festivals_with_rules(ctx, day, lunar_month, tithi_events, FESTIVAL_RULES)
}

/// Festivals for `day` against an explicit rule table.
pub fn festivals_with_rules<P: PositionProvider + ?Sized>(
    ctx: &PanjikaContext<'_, P>,
    day: LocalDay,
    lunar_month: LunarMonth,
    tithi_events: &[TithiEvent],
    rules: &[FestivalRule],
) -> Result<Vec<FestivalMatch>, SearchError> {
    let date = day.date();
    let mut names = HashSet::new();
    let mut out = Vec::new();
    let mut push = |m: FestivalMatch| {
        if names.insert(m.name) {
            out.push(m);
        }
    };

    for rule in rules {
        if let FestivalTrigger::Gregorian { month, day: d } = rule.trigger {
            if month == day.month() && d == day.day() {
                push(fixed(rule, date, FestivalSource::Gregorian));
            }
        }
    }

    match ctx.hijri.gregorian_to_hijri(day.year(), day.month(), day.day()) {
        Ok(h) => {
            for rule in rules {
                if let FestivalTrigger::Hijri { month, day: d } = rule.trigger {
                    if month == h.month && d == h.day {
                        push(fixed(rule, date, FestivalSource::Hijri));
                    }
                }
            }
        }
        Err(e) => debug!(%day, error = %e, "Hijri conversion failed; Hijri rules skipped"),
    }

    let (day_start, day_end) = (day.start(), day.end());
    for event in tithi_events {
        let mut nakshatra: Option<Nakshatra> = None;
        for rule in rules {
            let FestivalTrigger::Lunar {
                month,
                paksha,
                tithi,
                nakshatra: wanted,
            } = rule.trigger
            else {
                continue;
            };
            if month != lunar_month || paksha != event.paksha() || tithi != event.number() {
                continue;
            }
            if let Some(wanted) = wanted {
                let actual = match nakshatra {
                    Some(n) => n,
                    None => {
                        let at = event.overlap_midpoint(day_start, day_end);
                        let lon =
                            sidereal_longitude_at(ctx.provider, at, Body::Moon, ctx.settings.ayanamsha)?;
                        let n = nakshatra_from_sidereal_longitude(lon).nakshatra;
                        nakshatra = Some(n);
                        n
                    }
                };
                if actual != wanted {
                    continue;
                }
            }
            push(FestivalMatch {
                name: rule.name,
                date,
                source: FestivalSource::Lunar,
                tithi_events: Some(vec![*event]),
            });
        }
    }

    if out.is_empty() {
        out.push(FestivalMatch::none(date));
    }
    Ok(out)
}

fn fixed(rule: &FestivalRule, date: NaiveDate, source: FestivalSource) -> FestivalMatch {
    FestivalMatch {
        name: rule.name,
        date,
        source,
        tithi_events: None,
    }
}

/// Merge per-day match lists (already in date order) into one list.
///
/// Fixed-date matches are unique per (name, date); lunar matches per
/// (name, tithi span), so a tithi seen on two consecutive days counts once.
/// Sentinels are dropped; an empty result becomes a single sentinel dated
/// `fallback_date`.
pub fn merge_festivals(
    days: impl IntoIterator<Item = Vec<FestivalMatch>>,
    fallback_date: NaiveDate,
) -> Vec<FestivalMatch> {
    let mut seen: HashSet<FestivalKey> = HashSet::new();
    let mut out: Vec<FestivalMatch> = days
        .into_iter()
        .flatten()
        .filter(|m| !m.is_none())
        .filter(|m| seen.insert(m.key()))
        .collect();
    if out.is_empty() {
        out.push(FestivalMatch::none(fallback_date));
    }
    out
}
