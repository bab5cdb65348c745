//! Plain-text rendering of almanac records.

use std::fmt::Write;

use anyhow::Result;
use chrono::{Month, NaiveDate};
use chrono_tz::Tz;
use panjika_search::{
    EclipseEvent, FestivalMatch, LunarPhaseEvent, PanchangElements, PanchangSnapshot, RiseSetPair,
};
use panjika_time::Instant;
use panjika_vedic_base::HijriDate;

const RULE: &str = "----------------------------";

/// Wall-clock time in `zone`, e.g. `06:16 AM IST`.
pub fn clock(t: Instant, zone: Tz) -> Result<String> {
    Ok(t.in_zone(zone)?.format("%I:%M %p %Z").to_string())
}

fn clock_or_na(t: Option<Instant>, zone: Tz) -> Result<String> {
    match t {
        Some(t) => clock(t, zone),
        None => Ok("N/A".to_string()),
    }
}

/// Date and time in `zone`, for instants that may fall on another day.
fn stamp(t: Instant, zone: Tz) -> Result<String> {
    Ok(t.in_zone(zone)?.format("%d-%m %I:%M %p").to_string())
}

pub fn rise_set_lines(rise_label: &str, set_label: &str, pair: &RiseSetPair, zone: Tz) -> Result<String> {
    Ok(format!(
        "{rise_label}: {}\n{set_label}: {}\n",
        clock_or_na(pair.rise, zone)?,
        clock_or_na(pair.set, zone)?
    ))
}

pub fn festival_line(festivals: &[FestivalMatch]) -> String {
    let names: Vec<&str> = festivals.iter().map(|m| m.name).collect();
    format!("Festivals: {}\n", names.join(", "))
}

pub fn phase_lines(phases: &[LunarPhaseEvent], zone: Tz) -> Result<String> {
    if phases.is_empty() {
        return Ok("No major moon phase event today !\n".to_string());
    }
    let mut out = String::new();
    for p in phases {
        writeln!(out, "{} at {}", p.phase.name(), clock(p.at, zone)?)?;
    }
    Ok(out)
}

pub fn eclipse_lines(eclipses: &[EclipseEvent], place: &str, zone: Tz) -> Result<String> {
    if eclipses.is_empty() {
        return Ok(format!("No eclipse visible today from {place}\n"));
    }
    let mut out = String::new();
    for e in eclipses {
        writeln!(out, "{}:", e.kind.name())?;
        writeln!(out, "   Start: {}", clock(e.start, zone)?)?;
        writeln!(out, "   Max:   {}", clock(e.peak, zone)?)?;
        writeln!(out, "   End:   {}", clock(e.end, zone)?)?;
    }
    Ok(out)
}

pub fn hijri_text(h: &HijriDate) -> String {
    format!("{} {} {} AH", h.day, h.month_name(), h.year)
}

pub fn elements_lines(e: &PanchangElements) -> Result<String> {
    let mut out = String::new();
    writeln!(
        out,
        "Tithi: {} {} ({} Paksha)",
        e.tithi_name,
        e.tithi.number,
        e.tithi.paksha.name()
    )?;
    writeln!(
        out,
        "Nakshatra: {} (pada {})",
        e.nakshatra.nakshatra.name(),
        e.nakshatra.pada
    )?;
    writeln!(out, "Yoga: {}", e.yoga.name())?;
    writeln!(out, "Karana: {}", e.karana.name())?;
    Ok(out)
}

pub fn day_report(snap: &PanchangSnapshot, zone: Tz) -> Result<String> {
    let local = snap.instant.in_zone(zone)?;
    let m = &snap.month;
    let mut out = String::new();

    writeln!(
        out,
        "Bengali Panchang for {}: ({}, at {})",
        snap.place,
        local.format("%A, %d-%m-%Y"),
        local.format("%I:%M %p %Z")
    )?;
    writeln!(out, "{RULE}")?;
    writeln!(
        out,
        "Today (Bengali): {} {}, {} Bangabda",
        m.bengali_month.name(),
        m.day_of_month,
        m.bengali_year
    )?;
    if !m.converged {
        writeln!(out, "  (month start not found; day count is a lower bound)")?;
    }
    if let Some(h) = &snap.hijri {
        writeln!(out, "Hijri: {}", hijri_text(h))?;
    }
    out.push_str(&elements_lines(&snap.elements)?);
    for ev in &snap.tithi_events {
        writeln!(
            out,
            "  {} ({}): {} to {}",
            ev.name(),
            ev.paksha().name(),
            stamp(ev.start, zone)?,
            stamp(ev.end, zone)?
        )?;
    }
    writeln!(out, "{RULE}")?;
    out.push_str(&rise_set_lines("Sunrise", "Sunset", &snap.sun, zone)?);
    out.push_str(&rise_set_lines("Moonrise", "Moonset", &snap.moon, zone)?);
    writeln!(out, "{RULE}")?;
    out.push_str(&festival_line(&snap.festivals));
    writeln!(out, "{RULE}")?;
    writeln!(out, "Moon phases today:")?;
    out.push_str(&phase_lines(&snap.moon_phases, zone)?);
    writeln!(out, "{RULE}")?;
    writeln!(out, "Eclipses visible today:")?;
    out.push_str(&eclipse_lines(&snap.eclipses, &snap.place, zone)?);
    writeln!(out, "{RULE}")?;
    Ok(out)
}

pub fn month_report(place: &str, year: i32, month: u32, festivals: &[FestivalMatch]) -> Result<String> {
    let month_name = u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map_or("?", |m| m.name());
    let mut out = String::new();
    writeln!(out, "Festivals in {month_name} {year} for {place}:")?;
    writeln!(out, "{RULE}")?;
    for f in festivals {
        if f.is_none() {
            writeln!(out, "None")?;
        } else {
            writeln!(out, "{}  {}", date_text(f.date), f.name)?;
        }
    }
    Ok(out)
}

fn date_text(d: NaiveDate) -> String {
    d.format("%d-%m-%Y %a").to_string()
}
