//! Error types for configuration loading.

use panjika_core::EngineError;
use panjika_time::TimeError;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid observer location: {0}")]
    Location(#[from] EngineError),
    #[error("invalid time zone: {0}")]
    Zone(#[from] TimeError),
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_section() {
        let e = ConfigError::Invalid("hijri.day_offset must be within [-3, 3]");
        assert_eq!(e.to_string(), "invalid config: hijri.day_offset must be within [-3, 3]");
    }

    #[test]
    fn zone_error_converts() {
        let e: ConfigError = TimeError::UnknownZone("Mars/Olympus".into()).into();
        assert!(matches!(e, ConfigError::Zone(_)));
    }
}
