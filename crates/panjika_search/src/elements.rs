//! Panchang Element Calculator: tithi, nakshatra, yoga and karana at one
//! instant.

use panjika_core::{Body, PositionProvider};
use panjika_time::Instant;
use panjika_vedic_base::{
    Ayanamsha, Karana, NakshatraInfo, TithiPosition, VedicError, Yoga, karana_from_raw_tithi,
    nakshatra_from_sidereal_longitude, normalize_360, tithi_from_elongation, yoga_from_sum,
};
use serde::Serialize;

use crate::error::SearchError;

/// The five almanac elements (paksha lives in `tithi`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PanchangElements {
    /// Tropical apparent longitudes, degrees.
    pub sun_longitude_deg: f64,
    pub moon_longitude_deg: f64,
    /// Moon minus Sun, [0, 360).
    pub elongation_deg: f64,
    pub ayanamsha_deg: f64,
    pub tithi: TithiPosition,
    pub tithi_name: &'static str,
    pub nakshatra: NakshatraInfo,
    pub yoga: Yoga,
    pub karana: Karana,
}

/// Elements from tropical Sun and Moon longitudes and a sidereal offset.
pub fn elements_from_longitudes(
    sun_lon_deg: f64,
    moon_lon_deg: f64,
    ayanamsha_deg: f64,
) -> Result<PanchangElements, VedicError> {
    let sun = normalize_360(sun_lon_deg);
    let moon = normalize_360(moon_lon_deg);
    let elongation = normalize_360(moon - sun);
    let tithi = tithi_from_elongation(elongation);

    let sid_sun = normalize_360(sun - ayanamsha_deg);
    let sid_moon = normalize_360(moon - ayanamsha_deg);

    Ok(PanchangElements {
        sun_longitude_deg: sun,
        moon_longitude_deg: moon,
        elongation_deg: elongation,
        ayanamsha_deg,
        tithi,
        tithi_name: tithi.name(),
        nakshatra: nakshatra_from_sidereal_longitude(sid_moon),
        yoga: yoga_from_sum(normalize_360(sid_sun + sid_moon)),
        karana: karana_from_raw_tithi(tithi.raw)?,
    })
}

/// Elements at `at`, using the provider's apparent longitudes.
pub fn elements_at<P: PositionProvider + ?Sized>(
    provider: &P,
    at: Instant,
    ayanamsha: Ayanamsha,
) -> Result<PanchangElements, SearchError> {
    let sun = provider.apparent_longitude(at, Body::Sun)?;
    let moon = provider.apparent_longitude(at, Body::Moon)?;
    Ok(elements_from_longitudes(sun, moon, ayanamsha.degrees(at.jd_tt()))?)
}

/// Moon-minus-Sun elongation at `at`, [0, 360).
pub fn elongation_at<P: PositionProvider + ?Sized>(
    provider: &P,
    at: Instant,
) -> Result<f64, SearchError> {
    let sun = provider.apparent_longitude(at, Body::Sun)?;
    let moon = provider.apparent_longitude(at, Body::Moon)?;
    Ok(normalize_360(moon - sun))
}

/// Sidereal longitude of `body` at `at`, [0, 360).
pub fn sidereal_longitude_at<P: PositionProvider + ?Sized>(
    provider: &P,
    at: Instant,
    body: Body,
    ayanamsha: Ayanamsha,
) -> Result<f64, SearchError> {
    let tropical = provider.apparent_longitude(at, body)?;
    Ok(normalize_360(tropical - ayanamsha.degrees(at.jd_tt())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use panjika_vedic_base::{Nakshatra, Paksha};

    #[test]
    fn opposition_gives_krishna_pratipada() {
        let e = elements_from_longitudes(10.0, 190.0, 24.25).unwrap();
        assert_eq!(e.tithi.raw, 16);
        assert_eq!(e.tithi.number, 1);
        assert_eq!(e.tithi.paksha, Paksha::Krishna);
        assert_eq!(e.tithi_name, "Pratipada");
    }

    #[test]
    fn ayanamsha_cancels_moon_longitude() {
        let e = elements_from_longitudes(0.0, 24.25, 24.25).unwrap();
        assert_eq!(e.nakshatra.nakshatra, Nakshatra::Ashwini);
        assert_eq!(e.nakshatra.nakshatra.index(), 0);
    }

    #[test]
    fn yoga_uses_sidereal_sum() {
        // sidereal sun 100, sidereal moon 200: sum 300 -> index 22 (Shubha)
        let e = elements_from_longitudes(124.25, 224.25, 24.25).unwrap();
        assert_eq!(e.yoga, Yoga::Shubha);
    }

    #[test]
    fn karana_uses_raw_tithi() {
        // elongation 6 deg -> raw 1 -> Bava
        let e = elements_from_longitudes(100.0, 106.0, 24.25).unwrap();
        assert_eq!(e.karana, Karana::Bava);
        // elongation 186 deg -> raw 16 -> half 31 -> Kaulava
        let e = elements_from_longitudes(100.0, 286.0, 24.25).unwrap();
        assert_eq!(e.karana, Karana::Kaulava);
    }

    #[test]
    fn negative_longitudes_normalized() {
        let e = elements_from_longitudes(-10.0, -20.0, 24.25).unwrap();
        assert!((e.elongation_deg - 350.0).abs() < 1e-9);
        assert_eq!(e.tithi.raw, 30);
        assert_eq!(e.tithi_name, "Amavasya");
    }
}
