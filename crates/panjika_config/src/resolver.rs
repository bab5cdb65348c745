//! Observer location resolution with a fixed fallback.

use std::path::Path;

use chrono_tz::Asia::Kolkata;
use panjika_core::GeoLocation;
use panjika_search::Observer;
use tracing::warn;

use crate::error::ConfigError;
use crate::sections::{
    DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG, DEFAULT_PLACE, ObserverSection, PanjikaConfig,
};

/// Source of the observer's location, e.g. a config file or a lookup
/// service.
pub trait LocationResolver {
    fn resolve(&self) -> Result<Observer, ConfigError>;
}

impl LocationResolver for ObserverSection {
    fn resolve(&self) -> Result<Observer, ConfigError> {
        self.to_observer()
    }
}

/// Fixed observer, always resolves.
impl LocationResolver for Observer {
    fn resolve(&self) -> Result<Observer, ConfigError> {
        Ok(self.clone())
    }
}

/// Agartala, Tripura in `Asia/Kolkata`.
pub fn default_observer() -> Observer {
    Observer::new(
        DEFAULT_PLACE,
        GeoLocation::new(DEFAULT_LATITUDE_DEG, DEFAULT_LONGITUDE_DEG, 0.0),
        Kolkata,
    )
}

/// Resolve the observer, falling back to [`default_observer`] on failure.
pub fn resolve_observer(resolver: &dyn LocationResolver) -> Observer {
    match resolver.resolve() {
        Ok(observer) => observer,
        Err(e) => {
            warn!(error = %e, fallback = DEFAULT_PLACE, "location unavailable; using default observer");
            default_observer()
        }
    }
}

/// Read and parse a TOML configuration file.
pub fn load_config(path: &Path) -> Result<PanjikaConfig, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    PanjikaConfig::from_toml_str(&text)
}

/// [`load_config`], or all defaults when the file is missing or malformed.
pub fn load_or_default(path: &Path) -> PanjikaConfig {
    match load_config(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "config unreadable; using defaults");
            PanjikaConfig::default()
        }
    }
}
