//! Rise/Set Locator.
//!
//! Rise and set are sign changes of the body's topocentric altitude
//! relative to the apparent horizon, searched over exactly one local day
//! (local midnight to the next local midnight).

use panjika_core::{Body, GeoLocation, PositionProvider};
use panjika_time::{Instant, LocalDay};
use panjika_vedic_base::RiseSetConfig;
use serde::Serialize;
use tracing::debug;

use crate::error::SearchError;
use crate::search_util::{DiscreteFunction, MINUTE_DAYS, SearchOptions, find_discrete};

/// Rise/set sampling step: 10 minutes.
pub const RISE_SET_STEP_DAYS: f64 = 10.0 * MINUTE_DAYS;

/// Local wall-clock time used when the Sun does not rise.
pub const FALLBACK_SUNRISE_HM: (u32, u32) = (6, 0);

/// Rise and set of one body on one local day. Either may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct RiseSetPair {
    pub rise: Option<Instant>,
    pub set: Option<Instant>,
}

impl RiseSetPair {
    pub const ABSENT: Self = Self {
        rise: None,
        set: None,
    };

    pub fn is_absent(&self) -> bool {
        self.rise.is_none() && self.set.is_none()
    }
}

/// `altitude(t) > h0` for one body and observer.
pub struct AboveHorizon<'a, P: ?Sized> {
    pub provider: &'a P,
    pub body: Body,
    pub observer: &'a GeoLocation,
    pub horizon_deg: f64,
    pub step_days: f64,
}

impl<P: PositionProvider + ?Sized> DiscreteFunction for AboveHorizon<'_, P> {
    type Value = bool;

    fn step_days(&self) -> f64 {
        self.step_days
    }

    fn value_at(&self, at: Instant) -> Result<bool, SearchError> {
        let pos = self.provider.topocentric_alt_az(at, self.body, self.observer)?;
        Ok(pos.altitude_deg > self.horizon_deg)
    }
}

/// Rise and set of `body` during `day`.
///
/// Only the first rise and the first set in the day are kept. No crossing
/// (body circumpolar or never up) yields [`RiseSetPair::ABSENT`].
pub fn rise_set_for_day<P: PositionProvider + ?Sized>(
    provider: &P,
    body: Body,
    observer: &GeoLocation,
    day: LocalDay,
    config: &RiseSetConfig,
) -> Result<RiseSetPair, SearchError> {
    let f = AboveHorizon {
        provider,
        body,
        observer,
        horizon_deg: config.horizon_altitude_deg(body, observer.altitude_m),
        step_days: RISE_SET_STEP_DAYS,
    };
    let transitions = find_discrete(&f, day.start(), day.end(), &SearchOptions::default())?;

    let mut pair = RiseSetPair::ABSENT;
    for tr in &transitions {
        match (tr.value, pair.rise, pair.set) {
            (true, None, _) => pair.rise = Some(tr.at),
            (false, _, None) => pair.set = Some(tr.at),
            _ => {}
        }
    }
    debug!(
        body = body.name(),
        %day,
        crossings = transitions.len(),
        rise = ?pair.rise.map(|t| t.to_string()),
        set = ?pair.set.map(|t| t.to_string()),
        "rise/set search"
    );
    Ok(pair)
}

/// Sunrise on `day`, or local 06:00 when the Sun does not rise.
pub fn sunrise_or_fallback<P: PositionProvider + ?Sized>(
    provider: &P,
    observer: &GeoLocation,
    day: LocalDay,
    config: &RiseSetConfig,
) -> Result<Instant, SearchError> {
    match rise_set_for_day(provider, Body::Sun, observer, day, config)?.rise {
        Some(rise) => Ok(rise),
        None => {
            let (h, m) = FALLBACK_SUNRISE_HM;
            Ok(day.at_local_time(h, m)?)
        }
    }
}
