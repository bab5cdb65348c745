//! Types for eclipse visibility windows.

use panjika_time::Instant;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EclipseKind {
    Solar,
    Lunar,
}

impl EclipseKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Solar => "Solar Eclipse",
            Self::Lunar => "Lunar Eclipse",
        }
    }
}

/// A visible eclipse window.
///
/// `peak` is the midpoint of the window, not the instant of minimum
/// separation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EclipseEvent {
    pub kind: EclipseKind,
    pub start: Instant,
    pub peak: Instant,
    pub end: Instant,
}

/// Thresholds and sampling for eclipse detection.
///
/// The thresholds are separation proxies for "Moon over the Sun's disk" and
/// "Moon inside Earth's shadow"; they do not model penumbra or umbra cones.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EclipseConfig {
    /// Solar: topocentric Sun-Moon separation below this (degrees).
    pub solar_threshold_deg: f64,
    /// Lunar: geocentric separation above `180 - lunar_threshold_deg`.
    pub lunar_threshold_deg: f64,
    /// Sampling step in minutes.
    pub step_minutes: f64,
}

impl Default for EclipseConfig {
    fn default() -> Self {
        Self {
            solar_threshold_deg: 0.5,
            lunar_threshold_deg: 0.7,
            step_minutes: 1.0,
        }
    }
}

impl EclipseConfig {
    pub fn validate(&self) -> Result<(), &'static str> {
        if !self.solar_threshold_deg.is_finite() || self.solar_threshold_deg <= 0.0 {
            return Err("solar_threshold_deg must be positive");
        }
        if !self.lunar_threshold_deg.is_finite()
            || self.lunar_threshold_deg <= 0.0
            || self.lunar_threshold_deg >= 180.0
        {
            return Err("lunar_threshold_deg must be in (0, 180)");
        }
        if !self.step_minutes.is_finite() || self.step_minutes <= 0.0 || self.step_minutes > 60.0 {
            return Err("step_minutes must be in (0, 60]");
        }
        Ok(())
    }
}
