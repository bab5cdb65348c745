//! Explicit, immutable query context.
//!
//! Every high-level query receives the provider, the observer, the almanac
//! settings and the Hijri converter through a [`PanjikaContext`]. Nothing is
//! global, so per-day evaluations can run concurrently.

use std::fmt;

use chrono_tz::Tz;
use panjika_core::GeoLocation;
use panjika_time::{Instant, LocalDay};
use panjika_vedic_base::{Ayanamsha, HijriConverter, RiseSetConfig};
use serde::Serialize;

use crate::eclipse_types::EclipseConfig;
use crate::error::SearchError;

/// Where the almanac is computed for.
#[derive(Debug, Clone, PartialEq)]
pub struct Observer {
    /// Display name, e.g. "Agartala, Tripura".
    pub name: String,
    pub location: GeoLocation,
    pub zone: Tz,
}

impl Observer {
    pub fn new(name: impl Into<String>, location: GeoLocation, zone: Tz) -> Self {
        Self {
            name: name.into(),
            location,
            zone,
        }
    }
}

/// Computation settings shared by all queries of a run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct AlmanacSettings {
    pub ayanamsha: Ayanamsha,
    pub rise_set: RiseSetConfig,
    pub eclipse: EclipseConfig,
}

pub struct PanjikaContext<'a, P: ?Sized> {
    pub provider: &'a P,
    pub observer: &'a Observer,
    pub settings: &'a AlmanacSettings,
    pub hijri: &'a dyn HijriConverter,
}

impl<P: ?Sized> Clone for PanjikaContext<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: ?Sized> Copy for PanjikaContext<'_, P> {}

impl<P: ?Sized> fmt::Debug for PanjikaContext<'_, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanjikaContext")
            .field("observer", self.observer)
            .field("settings", self.settings)
            .finish_non_exhaustive()
    }
}

impl<'a, P: ?Sized> PanjikaContext<'a, P> {
    pub fn new(
        provider: &'a P,
        observer: &'a Observer,
        settings: &'a AlmanacSettings,
        hijri: &'a dyn HijriConverter,
    ) -> Self {
        Self {
            provider,
            observer,
            settings,
            hijri,
        }
    }

    /// The same context reading positions from another provider.
    pub fn with_provider<'b, Q: ?Sized>(&self, provider: &'b Q) -> PanjikaContext<'b, Q>
    where
        'a: 'b,
    {
        PanjikaContext {
            provider,
            observer: self.observer,
            settings: self.settings,
            hijri: self.hijri,
        }
    }

    /// Local day in the observer's zone containing `at`.
    pub fn local_day(&self, at: Instant) -> Result<LocalDay, SearchError> {
        Ok(LocalDay::containing(at, self.observer.zone)?)
    }

    pub fn day(&self, year: i32, month: u32, day: u32) -> Result<LocalDay, SearchError> {
        Ok(LocalDay::from_ymd(year, month, day, self.observer.zone)?)
    }
}
