//! Shared fixtures for the search integration tests.
#![allow(dead_code)]

use chrono_tz::Asia::Kolkata;
use panjika_core::{Body, EngineError, GeoLocation, HorizontalPosition, PositionProvider};
use panjika_search::{AlmanacSettings, Observer};
use panjika_time::{Instant, LocalDay};
use panjika_vedic_base::{Ayanamsha, HijriConverter, HijriDate, HijriError};

type Curve = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// Provider whose every output is a scripted function of JD (UTC).
pub struct Synthetic {
    pub sun_lon: Curve,
    pub moon_lon: Curve,
    pub sun_alt: Curve,
    pub moon_alt: Curve,
    pub geo_sep: Curve,
    pub topo_sep: Curve,
}

impl Default for Synthetic {
    fn default() -> Self {
        Self {
            sun_lon: Box::new(|_| 0.0),
            moon_lon: Box::new(|_| 0.0),
            sun_alt: Box::new(|_| -10.0),
            moon_alt: Box::new(|_| -10.0),
            geo_sep: Box::new(|_| 90.0),
            topo_sep: Box::new(|_| 90.0),
        }
    }
}

impl Synthetic {
    pub fn sun_lon(mut self, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.sun_lon = Box::new(f);
        self
    }

    pub fn moon_lon(mut self, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.moon_lon = Box::new(f);
        self
    }

    pub fn sun_alt(mut self, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.sun_alt = Box::new(f);
        self
    }

    pub fn moon_alt(mut self, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.moon_alt = Box::new(f);
        self
    }

    pub fn geo_sep(mut self, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.geo_sep = Box::new(f);
        self
    }

    pub fn topo_sep(mut self, f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.topo_sep = Box::new(f);
        self
    }
}

impl PositionProvider for Synthetic {
    fn apparent_longitude(&self, at: Instant, body: Body) -> Result<f64, EngineError> {
        let f = match body {
            Body::Sun => &self.sun_lon,
            Body::Moon => &self.moon_lon,
        };
        Ok(f(at.jd_utc()).rem_euclid(360.0))
    }

    fn topocentric_alt_az(
        &self,
        at: Instant,
        body: Body,
        _observer: &GeoLocation,
    ) -> Result<HorizontalPosition, EngineError> {
        let f = match body {
            Body::Sun => &self.sun_alt,
            Body::Moon => &self.moon_alt,
        };
        Ok(HorizontalPosition {
            altitude_deg: f(at.jd_utc()),
            azimuth_deg: 90.0,
        })
    }

    fn angular_separation(&self, at: Instant, _a: Body, _b: Body) -> Result<f64, EngineError> {
        Ok((self.geo_sep)(at.jd_utc()))
    }

    fn coverage(&self) -> (Instant, Instant) {
        (Instant::from_jd_utc(2_400_000.5), Instant::from_jd_utc(2_500_000.5))
    }

    fn topocentric_separation(
        &self,
        at: Instant,
        _a: Body,
        _b: Body,
        _observer: &GeoLocation,
    ) -> Result<f64, EngineError> {
        Ok((self.topo_sep)(at.jd_utc()))
    }
}

/// Hijri converter that always fails.
pub struct NoHijri;

impl HijriConverter for NoHijri {
    fn gregorian_to_hijri(&self, year: i32, _month: u32, _day: u32) -> Result<HijriDate, HijriError> {
        Err(HijriError::OutOfRange(year))
    }
}

/// Hijri converter that answers the same date for every day.
pub struct FixedHijri(pub HijriDate);

impl HijriConverter for FixedHijri {
    fn gregorian_to_hijri(&self, _y: i32, _m: u32, _d: u32) -> Result<HijriDate, HijriError> {
        Ok(self.0)
    }
}

pub fn kolkata() -> Observer {
    Observer::new("Kolkata", GeoLocation::new(22.5726, 88.3639, 0.0), Kolkata)
}

pub fn kolkata_day(y: i32, m: u32, d: u32) -> LocalDay {
    LocalDay::from_ymd(y, m, d, Kolkata).unwrap()
}

/// Default settings with a zero ayanamsha, so sidereal equals tropical.
pub fn tropical_settings() -> AlmanacSettings {
    AlmanacSettings {
        ayanamsha: Ayanamsha::Fixed(0.0),
        ..AlmanacSettings::default()
    }
}

/// JD of `fraction` of the way through `day`.
pub fn day_fraction(day: LocalDay, fraction: f64) -> f64 {
    day.start().jd_utc() + fraction
}

/// True if the fractional day position of `jd` lies in `[from, to)`.
pub fn in_window(jd: f64, day: LocalDay, from: f64, to: f64) -> bool {
    let x = jd - day.start().jd_utc();
    x >= from && x < to
}

/// Assert two instants agree within `seconds`.
pub fn assert_close(actual: Instant, expected_jd: f64, seconds: f64, what: &str) {
    let diff = (actual.jd_utc() - expected_jd).abs() * 86_400.0;
    assert!(diff < seconds, "{what}: off by {diff:.1} s (got {actual})");
}
