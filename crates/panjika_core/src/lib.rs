//! Position provider contract and the built-in analytic engine.
//!
//! Every almanac search consumes Sun and Moon positions through the
//! [`PositionProvider`] trait. The crate ships one implementation,
//! [`AnalyticEngine`], and a per-query memo, [`CachedProvider`], that
//! wraps any provider for the lifetime of a single computation.

pub mod analytic;
pub mod cache;
pub mod lunar;
pub mod solar;

use serde::Serialize;
use thiserror::Error;

use panjika_frames::angular_separation_deg;
use panjika_time::Instant;

pub use analytic::{AnalyticEngine, ApparentPosition};
pub use cache::{CachedProvider, QueryStats};

/// Bodies the almanac needs positions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Body {
    Sun,
    Moon,
}

impl Body {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }
}

/// Geographic location on Earth's surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    /// Geodetic latitude in degrees, north positive. Range: [-90, 90].
    pub latitude_deg: f64,
    /// Geodetic longitude in degrees, east positive. Range: [-180, 180].
    pub longitude_deg: f64,
    /// Altitude above mean sea level in meters.
    pub altitude_m: f64,
}

impl GeoLocation {
    pub fn new(latitude_deg: f64, longitude_deg: f64, altitude_m: f64) -> Self {
        Self {
            latitude_deg,
            longitude_deg,
            altitude_m,
        }
    }

    /// Latitude in radians.
    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }

    /// Longitude in radians (east positive).
    pub fn longitude_rad(&self) -> f64 {
        self.longitude_deg.to_radians()
    }

    /// Reject non-finite or out-of-range coordinates.
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.latitude_deg.is_finite() || self.latitude_deg.abs() > 90.0 {
            return Err(EngineError::InvalidQuery("latitude must be within [-90, 90]"));
        }
        if !self.longitude_deg.is_finite() || self.longitude_deg.abs() > 180.0 {
            return Err(EngineError::InvalidQuery("longitude must be within [-180, 180]"));
        }
        if !self.altitude_m.is_finite() {
            return Err(EngineError::InvalidQuery("altitude must be finite"));
        }
        Ok(())
    }
}

/// Topocentric horizontal coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalPosition {
    /// Geometric altitude above the horizon in degrees (no refraction).
    pub altitude_deg: f64,
    /// Azimuth in degrees, north through east, [0, 360).
    pub azimuth_deg: f64,
}

/// Position provider errors.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EngineError {
    #[error("invalid query: {0}")]
    InvalidQuery(&'static str),
    #[error("epoch JD {jd_utc} outside provider coverage [{start_jd}, {end_jd}]")]
    EpochOutOfRange {
        jd_utc: f64,
        start_jd: f64,
        end_jd: f64,
    },
}

/// Source of apparent Sun and Moon positions.
///
/// Implementations must be pure functions of their inputs: the search
/// layer samples them many times and assumes repeat calls agree. All
/// instants are UTC and all angles are degrees.
pub trait PositionProvider {
    /// Apparent geocentric ecliptic longitude (of date), [0, 360).
    fn apparent_longitude(&self, at: Instant, body: Body) -> Result<f64, EngineError>;

    /// Apparent topocentric altitude/azimuth as seen by `observer`.
    fn topocentric_alt_az(
        &self,
        at: Instant,
        body: Body,
        observer: &GeoLocation,
    ) -> Result<HorizontalPosition, EngineError>;

    /// Geocentric angular separation between two bodies, [0, 180].
    fn angular_separation(&self, at: Instant, a: Body, b: Body) -> Result<f64, EngineError>;

    /// Inclusive time span the provider can answer for.
    fn coverage(&self) -> (Instant, Instant);

    /// Separation between two bodies as seen by `observer`, [0, 180].
    fn topocentric_separation(
        &self,
        at: Instant,
        a: Body,
        b: Body,
        observer: &GeoLocation,
    ) -> Result<f64, EngineError> {
        let pa = self.topocentric_alt_az(at, a, observer)?;
        let pb = self.topocentric_alt_az(at, b, observer)?;
        Ok(angular_separation_deg(
            pa.azimuth_deg,
            pa.altitude_deg,
            pb.azimuth_deg,
            pb.altitude_deg,
        ))
    }

    /// True if `at` lies inside [`coverage`](Self::coverage).
    fn covers(&self, at: Instant) -> bool {
        let (start, end) = self.coverage();
        at >= start && at <= end
    }
}

impl<P: PositionProvider + ?Sized> PositionProvider for &P {
    fn apparent_longitude(&self, at: Instant, body: Body) -> Result<f64, EngineError> {
        (**self).apparent_longitude(at, body)
    }

    fn topocentric_alt_az(
        &self,
        at: Instant,
        body: Body,
        observer: &GeoLocation,
    ) -> Result<HorizontalPosition, EngineError> {
        (**self).topocentric_alt_az(at, body, observer)
    }

    fn angular_separation(&self, at: Instant, a: Body, b: Body) -> Result<f64, EngineError> {
        (**self).angular_separation(at, a, b)
    }

    fn coverage(&self) -> (Instant, Instant) {
        (**self).coverage()
    }

    fn topocentric_separation(
        &self,
        at: Instant,
        a: Body,
        b: Body,
        observer: &GeoLocation,
    ) -> Result<f64, EngineError> {
        (**self).topocentric_separation(at, a, b, observer)
    }
}
