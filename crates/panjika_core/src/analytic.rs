//! Built-in analytic Sun/Moon ephemeris.
//!
//! Chains the low-precision solar and lunar series with nutation,
//! aberration, sidereal time and topocentric parallax. Accuracy is a few
//! arcseconds for the Sun and ~10″ for the Moon, which places tithi and
//! nakshatra boundaries within a minute or two of a full JPL reduction.

use panjika_frames::{
    ecliptic_to_equatorial, equatorial_to_horizontal, nutation_iau2000b_truncated,
    observer_offsets, topocentric_equatorial, true_obliquity_deg,
};
use panjika_time::{Instant, calendar_to_jd, centuries_since_j2000, gmst_rad};

use crate::lunar::lunar_coords;
use crate::solar::{AU_KM, aberration_deg, solar_coords};
use crate::{Body, EngineError, GeoLocation, HorizontalPosition, PositionProvider};

/// Apparent geocentric place of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApparentPosition {
    /// Apparent ecliptic longitude of date, [0, 360).
    pub lon_deg: f64,
    /// Ecliptic latitude.
    pub lat_deg: f64,
    /// Geocentric distance in km.
    pub distance_km: f64,
    /// Apparent right ascension, [0, 360).
    pub ra_deg: f64,
    /// Apparent declination.
    pub dec_deg: f64,
    /// Greenwich apparent sidereal time, degrees.
    pub gast_deg: f64,
}

/// Analytic position provider (Meeus ch. 25 Sun, ch. 47 Moon).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalyticEngine {
    start: Instant,
    end: Instant,
}

impl Default for AnalyticEngine {
    /// Coverage 1900-01-01 to 2100-01-01 UTC.
    fn default() -> Self {
        Self {
            start: Instant::from_jd_utc(calendar_to_jd(1900, 1, 1.0)),
            end: Instant::from_jd_utc(calendar_to_jd(2100, 1, 1.0)),
        }
    }
}

impl AnalyticEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict the accepted span; must lie inside the default coverage.
    pub fn with_coverage(start: Instant, end: Instant) -> Result<Self, EngineError> {
        let full = Self::default();
        if !(start.jd_utc().is_finite() && end.jd_utc().is_finite()) || start >= end {
            return Err(EngineError::InvalidQuery("coverage must be a finite, non-empty span"));
        }
        if start < full.start || end > full.end {
            return Err(EngineError::InvalidQuery(
                "coverage must lie within 1900-01-01..2100-01-01",
            ));
        }
        Ok(Self { start, end })
    }

    fn check(&self, at: Instant) -> Result<(), EngineError> {
        let jd = at.jd_utc();
        if !jd.is_finite() {
            return Err(EngineError::InvalidQuery("epoch must be finite"));
        }
        if at < self.start || at > self.end {
            return Err(EngineError::EpochOutOfRange {
                jd_utc: jd,
                start_jd: self.start.jd_utc(),
                end_jd: self.end.jd_utc(),
            });
        }
        Ok(())
    }

    /// Apparent geocentric position of `body` at `at`.
    pub fn apparent_position(&self, at: Instant, body: Body) -> Result<ApparentPosition, EngineError> {
        self.check(at)?;
        let t = centuries_since_j2000(at.jd_tt());
        let (dpsi_arcsec, deps_arcsec) = nutation_iau2000b_truncated(t);
        let dpsi = dpsi_arcsec / 3600.0;
        let eps = true_obliquity_deg(t, deps_arcsec);

        let (lon, lat, distance_km) = match body {
            Body::Sun => {
                let sun = solar_coords(t);
                (
                    sun.true_longitude_deg + dpsi + aberration_deg(sun.radius_au),
                    0.0,
                    sun.radius_au * AU_KM,
                )
            }
            Body::Moon => {
                let moon = lunar_coords(t);
                (moon.longitude_deg + dpsi, moon.latitude_deg, moon.distance_km)
            }
        };
        let lon_deg = lon.rem_euclid(360.0);
        let (ra_deg, dec_deg) = ecliptic_to_equatorial(lon_deg, lat, eps);

        // Equation of the equinoxes turns GMST into apparent sidereal time.
        let gast_deg = gmst_rad(at.jd_utc()).to_degrees() + dpsi * eps.to_radians().cos();

        Ok(ApparentPosition {
            lon_deg,
            lat_deg: lat,
            distance_km,
            ra_deg,
            dec_deg,
            gast_deg: gast_deg.rem_euclid(360.0),
        })
    }
}

impl PositionProvider for AnalyticEngine {
    fn apparent_longitude(&self, at: Instant, body: Body) -> Result<f64, EngineError> {
        Ok(self.apparent_position(at, body)?.lon_deg)
    }

    fn topocentric_alt_az(
        &self,
        at: Instant,
        body: Body,
        observer: &GeoLocation,
    ) -> Result<HorizontalPosition, EngineError> {
        observer.validate()?;
        let pos = self.apparent_position(at, body)?;
        let hour_angle = pos.gast_deg + observer.longitude_deg - pos.ra_deg;
        let offsets = observer_offsets(observer.latitude_deg, observer.altitude_m);
        let (_, dec_top, ha_top) =
            topocentric_equatorial(pos.ra_deg, pos.dec_deg, pos.distance_km, hour_angle, offsets);
        let (altitude_deg, azimuth_deg) =
            equatorial_to_horizontal(ha_top, dec_top, observer.latitude_deg);
        Ok(HorizontalPosition {
            altitude_deg,
            azimuth_deg,
        })
    }

    fn angular_separation(&self, at: Instant, a: Body, b: Body) -> Result<f64, EngineError> {
        let pa = self.apparent_position(at, a)?;
        let pb = self.apparent_position(at, b)?;
        Ok(panjika_frames::angular_separation_deg(
            pa.lon_deg, pa.lat_deg, pb.lon_deg, pb.lat_deg,
        ))
    }

    fn coverage(&self) -> (Instant, Instant) {
        (self.start, self.end)
    }
}
