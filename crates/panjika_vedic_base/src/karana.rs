//! Karana: half-tithi units cycling through a 7-entry table.

use crate::error::VedicError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
}

pub const ALL_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
        }
    }
}

/// Karana from the raw (1..=30) tithi count.
///
/// `raw * 2 - 1` is the 1-based half-tithi count; reduced mod 7 it is a
/// 1-based position in the cycle, so raw 1 is Bava and raw 4 is Vishti.
/// Takes the raw count, not the 1..=15 number within the paksha.
pub fn karana_from_raw_tithi(raw: u8) -> Result<Karana, VedicError> {
    if !(1..=30).contains(&raw) {
        return Err(VedicError::InvalidTithi(raw));
    }
    let half = raw as usize * 2 - 1;
    Ok(ALL_KARANAS[(half - 1) % 7])
}
