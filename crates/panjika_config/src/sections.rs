//! TOML sections and their conversion into runtime settings.

use panjika_core::GeoLocation;
use panjika_search::{AlmanacSettings, EclipseConfig, Observer};
use panjika_time::parse_zone;
use panjika_vedic_base::{
    Ayanamsha, DEFAULT_FIXED_AYANAMSHA_DEG, RiseSetConfig, TabularHijri,
};
use serde::Deserialize;

use crate::error::ConfigError;

pub const DEFAULT_PLACE: &str = "Agartala, Tripura";
pub const DEFAULT_LATITUDE_DEG: f64 = 23.8315;
pub const DEFAULT_LONGITUDE_DEG: f64 = 91.2868;
pub const DEFAULT_ZONE: &str = "Asia/Kolkata";

/// Largest accepted Hijri sighting adjustment, in days.
pub const MAX_HIJRI_DAY_OFFSET: i32 = 3;

/// Whole configuration file. Every section and field is optional.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PanjikaConfig {
    pub observer: ObserverSection,
    pub almanac: AlmanacSection,
    pub eclipse: EclipseSection,
    pub hijri: HijriSection,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ObserverSection {
    pub display_name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_m: f64,
    /// IANA zone name.
    pub timezone: String,
}

impl Default for ObserverSection {
    fn default() -> Self {
        Self {
            display_name: DEFAULT_PLACE.to_string(),
            latitude: DEFAULT_LATITUDE_DEG,
            longitude: DEFAULT_LONGITUDE_DEG,
            altitude_m: 0.0,
            timezone: DEFAULT_ZONE.to_string(),
        }
    }
}

/// Command-line values that replace file values when present.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObserverOverrides {
    pub name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
}

impl ObserverSection {
    pub fn apply(&mut self, overrides: &ObserverOverrides) {
        if let Some(name) = &overrides.name {
            self.display_name.clone_from(name);
        }
        if let Some(lat) = overrides.latitude {
            self.latitude = lat;
        }
        if let Some(lon) = overrides.longitude {
            self.longitude = lon;
        }
        if let Some(tz) = &overrides.timezone {
            self.timezone.clone_from(tz);
        }
    }

    /// Validated observer; out-of-range coordinates or an unknown zone fail.
    pub fn to_observer(&self) -> Result<Observer, ConfigError> {
        let location = GeoLocation::new(self.latitude, self.longitude, self.altitude_m);
        location.validate()?;
        let zone = parse_zone(&self.timezone)?;
        Ok(Observer::new(self.display_name.clone(), location, zone))
    }
}

/// `{ kind = "fixed", degrees = 24.25 }` or `{ kind = "lahiri" }`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AyanamshaSetting {
    Fixed { degrees: f64 },
    Lahiri,
}

impl Default for AyanamshaSetting {
    fn default() -> Self {
        Self::Fixed {
            degrees: DEFAULT_FIXED_AYANAMSHA_DEG,
        }
    }
}

impl AyanamshaSetting {
    pub fn to_ayanamsha(self) -> Result<Ayanamsha, ConfigError> {
        match self {
            Self::Fixed { degrees } if !degrees.is_finite() || !(0.0..60.0).contains(&degrees) => {
                Err(ConfigError::Invalid("almanac.ayanamsha.degrees must be in [0, 60)"))
            }
            Self::Fixed { degrees } => Ok(Ayanamsha::Fixed(degrees)),
            Self::Lahiri => Ok(Ayanamsha::Lahiri),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlmanacSection {
    pub ayanamsha: AyanamshaSetting,
    pub refraction_arcmin: f64,
    /// Lower the horizon for the observer's altitude.
    pub altitude_correction: bool,
}

impl Default for AlmanacSection {
    fn default() -> Self {
        let rs = RiseSetConfig::default();
        Self {
            ayanamsha: AyanamshaSetting::default(),
            refraction_arcmin: rs.refraction_arcmin,
            altitude_correction: rs.altitude_correction,
        }
    }
}

impl AlmanacSection {
    pub fn rise_set(&self) -> Result<RiseSetConfig, ConfigError> {
        if !self.refraction_arcmin.is_finite() || !(0.0..=120.0).contains(&self.refraction_arcmin) {
            return Err(ConfigError::Invalid("almanac.refraction_arcmin must be in [0, 120]"));
        }
        Ok(RiseSetConfig {
            refraction_arcmin: self.refraction_arcmin,
            altitude_correction: self.altitude_correction,
            ..RiseSetConfig::default()
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EclipseSection {
    pub solar_threshold_deg: f64,
    pub lunar_threshold_deg: f64,
    pub step_minutes: f64,
}

impl Default for EclipseSection {
    fn default() -> Self {
        let c = EclipseConfig::default();
        Self {
            solar_threshold_deg: c.solar_threshold_deg,
            lunar_threshold_deg: c.lunar_threshold_deg,
            step_minutes: c.step_minutes,
        }
    }
}

impl EclipseSection {
    pub fn to_config(self) -> Result<EclipseConfig, ConfigError> {
        let config = EclipseConfig {
            solar_threshold_deg: self.solar_threshold_deg,
            lunar_threshold_deg: self.lunar_threshold_deg,
            step_minutes: self.step_minutes,
        };
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HijriSection {
    /// Days added to the tabular date for local moon sighting.
    pub day_offset: i32,
}

impl HijriSection {
    pub fn converter(self) -> Result<TabularHijri, ConfigError> {
        if self.day_offset.abs() > MAX_HIJRI_DAY_OFFSET {
            return Err(ConfigError::Invalid("hijri.day_offset must be within [-3, 3]"));
        }
        Ok(TabularHijri::new(self.day_offset))
    }
}

impl PanjikaConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Computation settings from the `[almanac]` and `[eclipse]` sections.
    pub fn settings(&self) -> Result<AlmanacSettings, ConfigError> {
        Ok(AlmanacSettings {
            ayanamsha: self.almanac.ayanamsha.to_ayanamsha()?,
            rise_set: self.almanac.rise_set()?,
            eclipse: self.eclipse.to_config()?,
        })
    }
}
