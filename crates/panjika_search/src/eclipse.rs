//! Eclipse Detector.
//!
//! Two boolean predicates are sampled over the local day:
//!
//! - solar: topocentric Sun-Moon separation below the solar threshold while
//!   the Sun is above the horizon;
//! - lunar: geocentric separation within the lunar threshold of 180° while
//!   the Moon is above the horizon.
//!
//! Solar visibility is a parallax effect, so the solar test uses the
//! observer's view. The shadow axis is geocentric, so the lunar test uses
//! geocentric separation; the Moon's ~1° parallax would otherwise swamp
//! the threshold.

use panjika_core::{Body, GeoLocation, PositionProvider};
use panjika_time::{Instant, LocalDay};
use tracing::debug;

use crate::eclipse_types::{EclipseConfig, EclipseEvent, EclipseKind};
use crate::error::SearchError;
use crate::search_util::{DiscreteFunction, MINUTE_DAYS, Run, SearchOptions, find_runs};

/// Eclipse visibility predicate for one kind.
pub struct EclipseVisible<'a, P: ?Sized> {
    pub provider: &'a P,
    pub observer: &'a GeoLocation,
    pub kind: EclipseKind,
    pub config: &'a EclipseConfig,
}

impl<P: PositionProvider + ?Sized> DiscreteFunction for EclipseVisible<'_, P> {
    type Value = bool;

    fn step_days(&self) -> f64 {
        self.config.step_minutes * MINUTE_DAYS
    }

    fn value_at(&self, at: Instant) -> Result<bool, SearchError> {
        let p = self.provider;
        match self.kind {
            EclipseKind::Solar => {
                let sun = p.topocentric_alt_az(at, Body::Sun, self.observer)?;
                if sun.altitude_deg <= 0.0 {
                    return Ok(false);
                }
                let sep = p.topocentric_separation(at, Body::Sun, Body::Moon, self.observer)?;
                Ok(sep < self.config.solar_threshold_deg)
            }
            EclipseKind::Lunar => {
                let moon = p.topocentric_alt_az(at, Body::Moon, self.observer)?;
                if moon.altitude_deg <= 0.0 {
                    return Ok(false);
                }
                let sep = p.angular_separation(at, Body::Sun, Body::Moon)?;
                Ok(sep > 180.0 - self.config.lunar_threshold_deg)
            }
        }
    }
}

/// First true run spanning more than one sample.
fn first_visible_run(runs: &[Run<bool>]) -> Option<&Run<bool>> {
    runs.iter().find(|r| r.value && r.samples > 1)
}

/// Eclipse of one kind visible during `day`, if any.
pub fn eclipse_for_day<P: PositionProvider + ?Sized>(
    provider: &P,
    observer: &GeoLocation,
    day: LocalDay,
    kind: EclipseKind,
    config: &EclipseConfig,
) -> Result<Option<EclipseEvent>, SearchError> {
    config.validate().map_err(SearchError::InvalidConfig)?;
    let f = EclipseVisible {
        provider,
        observer,
        kind,
        config,
    };
    let runs = find_runs(&f, day.start(), day.end(), &SearchOptions::default())?;
    let event = first_visible_run(&runs).map(|r| EclipseEvent {
        kind,
        start: r.start,
        peak: r.midpoint(),
        end: r.end,
    });
    debug!(kind = kind.name(), %day, visible = event.is_some(), "eclipse search");
    Ok(event)
}

/// Solar then lunar eclipse windows visible during `day`.
pub fn eclipses_for_day<P: PositionProvider + ?Sized>(
    provider: &P,
    observer: &GeoLocation,
    day: LocalDay,
    config: &EclipseConfig,
) -> Result<Vec<EclipseEvent>, SearchError> {
    let mut out = Vec::new();
    for kind in [EclipseKind::Solar, EclipseKind::Lunar] {
        if let Some(event) = eclipse_for_day(provider, observer, day, kind, config)? {
            out.push(event);
        }
    }
    Ok(out)
}
