mod report;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;
use clap::{ArgAction, Parser, Subcommand};
use panjika_config::{ObserverOverrides, PanjikaConfig, load_or_default, resolve_observer};
use panjika_core::AnalyticEngine;
use panjika_search::{PanjikaContext, daily_panchang, elements_from_longitudes, monthly_festivals};
use panjika_time::Instant;
use panjika_vedic_base::{DEFAULT_FIXED_AYANAMSHA_DEG, HijriConverter};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "panjika", about = "Bengali panchang almanac")]
struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Observer latitude in degrees (north positive)
    #[arg(long, global = true, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Observer longitude in degrees (east positive)
    #[arg(long, global = true, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// IANA time zone, e.g. Asia/Dhaka
    #[arg(long, global = true)]
    tz: Option<String>,
    /// Place name shown in reports
    #[arg(long, global = true)]
    name: Option<String>,
    /// Log more (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full panchang for one local day
    Day {
        /// Local date/time (YYYY-MM-DD, YYYY-MM-DDThh:mm or YYYY-MM-DDThh:mm:ss); default now
        #[arg(long)]
        date: Option<String>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Festivals of one Gregorian month
    Month {
        #[arg(long)]
        year: i32,
        /// 1-12
        #[arg(long)]
        month: u32,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Tithi, nakshatra, yoga and karana from tropical longitudes
    Elements {
        /// Tropical Sun longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        sun: f64,
        /// Tropical Moon longitude in degrees
        #[arg(long, allow_hyphen_values = true)]
        moon: f64,
        /// Ayanamsha in degrees
        #[arg(long, default_value_t = DEFAULT_FIXED_AYANAMSHA_DEG)]
        ayanamsha: f64,
    },
    /// Gregorian date to Hijri
    Hijri {
        /// YYYY-MM-DD
        #[arg(long)]
        date: String,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Local wall-clock input in `zone`. A bare date means local noon.
fn parse_local(s: &str, zone: Tz) -> Result<Instant> {
    let naive = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M"))
        .or_else(|_| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map(|d| d.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()))
        })
        .with_context(|| format!("expected YYYY-MM-DD[Thh:mm[:ss]], got {s}"))?;
    let Some(local) = zone.from_local_datetime(&naive).earliest() else {
        bail!("{s} does not exist in {zone}");
    };
    Ok(Instant::from_datetime(&local))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut cfg = match &cli.config {
        Some(path) => load_or_default(path),
        None => PanjikaConfig::default(),
    };
    cfg.observer.apply(&ObserverOverrides {
        name: cli.name.clone(),
        latitude: cli.lat,
        longitude: cli.lon,
        timezone: cli.tz.clone(),
    });

    match cli.command {
        Commands::Elements {
            sun,
            moon,
            ayanamsha,
        } => {
            let e = elements_from_longitudes(sun, moon, ayanamsha)
                .context("longitudes must be finite")?;
            print!("{}", report::elements_lines(&e)?);
            println!("Elongation: {:.4} deg", e.elongation_deg);
        }

        Commands::Hijri { date } => {
            let d = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                .with_context(|| format!("expected YYYY-MM-DD, got {date}"))?;
            let converter = cfg.hijri.converter().context("invalid [hijri] section")?;
            let h = converter.gregorian_to_hijri(d.year(), d.month(), d.day())?;
            println!("{}", report::hijri_text(&h));
        }

        Commands::Day { date, json } => {
            let observer = resolve_observer(&cfg.observer);
            let settings = cfg.settings().context("invalid [almanac] or [eclipse] section")?;
            let hijri = cfg.hijri.converter().context("invalid [hijri] section")?;
            let engine = AnalyticEngine::new();
            let ctx = PanjikaContext::new(&engine, &observer, &settings, &hijri);

            let at = match &date {
                Some(s) => parse_local(s, observer.zone)?,
                None => Instant::now(),
            };
            info!(place = %observer.name, %at, "daily panchang");
            let snap = daily_panchang(&ctx, at)?;
            debug!(
                evaluations = snap.stats.evaluations,
                cache_hits = snap.stats.cache_hits,
                "position queries"
            );
            if json {
                println!("{}", serde_json::to_string_pretty(&snap)?);
            } else {
                print!("{}", report::day_report(&snap, observer.zone)?);
            }
        }

        Commands::Month { year, month, json } => {
            let observer = resolve_observer(&cfg.observer);
            let settings = cfg.settings().context("invalid [almanac] or [eclipse] section")?;
            let hijri = cfg.hijri.converter().context("invalid [hijri] section")?;
            let engine = AnalyticEngine::new();
            let ctx = PanjikaContext::new(&engine, &observer, &settings, &hijri);

            info!(place = %observer.name, year, month, "monthly festivals");
            let festivals = monthly_festivals(&ctx, year, month)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&festivals)?);
            } else {
                print!(
                    "{}",
                    report::month_report(&observer.name, year, month, &festivals)?
                );
            }
        }
    }
    Ok(())
}
