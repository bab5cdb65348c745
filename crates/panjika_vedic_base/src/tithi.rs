//! Tithi (lunar day) and paksha.
//!
//! A tithi is a 12° band of the Moon-minus-Sun elongation. The 30 tithis of
//! a synodic month split into the waxing (Shukla) and waning (Krishna)
//! halves of 15 each.

use serde::Serialize;

use crate::error::VedicError;
use crate::util::sector_index;

/// Width of one tithi in elongation degrees.
pub const TITHI_SEGMENT_DEG: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half, raw tithi 1..=15.
    Shukla,
    /// Waning half, raw tithi 16..=30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

const TITHI_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// Position of a tithi in the synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TithiPosition {
    /// Raw count from the new moon, 1..=30.
    pub raw: u8,
    /// Number within the paksha, 1..=15.
    pub number: u8,
    pub paksha: Paksha,
}

impl TithiPosition {
    pub fn from_raw(raw: u8) -> Result<Self, VedicError> {
        if !(1..=30).contains(&raw) {
            return Err(VedicError::InvalidTithi(raw));
        }
        let (number, paksha) = if raw <= 15 {
            (raw, Paksha::Shukla)
        } else {
            (raw - 15, Paksha::Krishna)
        };
        Ok(Self {
            raw,
            number,
            paksha,
        })
    }

    /// Traditional name: Pratipada .. Chaturdashi, then Purnima/Amavasya.
    pub fn name(&self) -> &'static str {
        match (self.number, self.paksha) {
            (15, Paksha::Shukla) => "Purnima",
            (15, Paksha::Krishna) => "Amavasya",
            (n, _) => TITHI_NAMES[(n as usize - 1).min(13)],
        }
    }
}

/// 0-based tithi bucket (0..=29) for an elongation in degrees.
pub fn tithi_bucket(elongation_deg: f64) -> u8 {
    sector_index(elongation_deg, 30) as u8
}

/// Tithi position for a Moon-minus-Sun elongation in degrees.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let raw = tithi_bucket(elongation_deg) + 1;
    let (number, paksha) = if raw <= 15 {
        (raw, Paksha::Shukla)
    } else {
        (raw - 15, Paksha::Krishna)
    };
    TithiPosition {
        raw,
        number,
        paksha,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposition_is_krishna_pratipada() {
        let t = tithi_from_elongation(180.0);
        assert_eq!(t.raw, 16);
        assert_eq!(t.number, 1);
        assert_eq!(t.paksha, Paksha::Krishna);
        assert_eq!(t.name(), "Pratipada");
    }

    #[test]
    fn conjunction_is_shukla_pratipada() {
        let t = tithi_from_elongation(0.0);
        assert_eq!((t.raw, t.number, t.paksha), (1, 1, Paksha::Shukla));
    }

    #[test]
    fn purnima_and_amavasya() {
        assert_eq!(tithi_from_elongation(179.9).name(), "Purnima");
        assert_eq!(tithi_from_elongation(359.9).name(), "Amavasya");
    }

    #[test]
    fn paksha_flips_at_raw_16() {
        let before = tithi_from_elongation(179.999);
        let after = tithi_from_elongation(180.001);
        assert_eq!(before.paksha, Paksha::Shukla);
        assert_eq!(before.number, 15);
        assert_eq!(after.paksha, Paksha::Krishna);
        assert_eq!(after.number, 1);
    }

    #[test]
    fn numbers_cycle_twice_per_month() {
        let mut seen = Vec::new();
        for i in 0..30 {
            let t = tithi_from_elongation(i as f64 * 12.0 + 6.0);
            assert_eq!(t.raw, i + 1);
            seen.push(t.number);
        }
        let expected: Vec<u8> = (1..=15).chain(1..=15).collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn from_raw_validates() {
        assert!(TithiPosition::from_raw(0).is_err());
        assert!(TithiPosition::from_raw(31).is_err());
        assert_eq!(TithiPosition::from_raw(30).unwrap().name(), "Amavasya");
        assert_eq!(TithiPosition::from_raw(20), Ok(tithi_from_elongation(230.0)));
    }

    #[test]
    fn negative_elongation_wraps() {
        assert_eq!(tithi_from_elongation(-6.0).raw, 30);
    }
}
