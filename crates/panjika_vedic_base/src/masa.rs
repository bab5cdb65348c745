//! Solar month tables: rashi, Bengali month, lunar month, Bengali year.
//!
//! A solar month is the time the sidereal Sun spends in one 30° rashi. The
//! Bengali month and the lunar month name are two parallel tables indexed by
//! that rashi, both starting at Mesha.

use crate::error::VedicError;
use crate::util::sector_index;

/// The 12 rashis (zodiac signs) starting from Mesha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrischika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// 0-based index (Mesha=0 .. Meena=11).
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Result<Self, VedicError> {
        ALL_RASHIS
            .get(index as usize)
            .copied()
            .ok_or(VedicError::InvalidMonthIndex(index))
    }
}

/// Rashi containing a sidereal longitude: `floor(lon / 30)`.
pub fn rashi_from_sidereal_longitude(sidereal_lon_deg: f64) -> Rashi {
    ALL_RASHIS[sector_index(sidereal_lon_deg, 12)]
}

/// Bengali solar months, Boishakh (Sun in Mesha) to Chaitra (Sun in Meena).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BengaliMonth {
    Boishakh,
    Jyoishtho,
    Asharh,
    Shraban,
    Bhadro,
    Ashwin,
    Kartik,
    Ogrohayon,
    Poush,
    Magh,
    Falgun,
    Chaitra,
}

const BENGALI_MONTHS: [BengaliMonth; 12] = [
    BengaliMonth::Boishakh,
    BengaliMonth::Jyoishtho,
    BengaliMonth::Asharh,
    BengaliMonth::Shraban,
    BengaliMonth::Bhadro,
    BengaliMonth::Ashwin,
    BengaliMonth::Kartik,
    BengaliMonth::Ogrohayon,
    BengaliMonth::Poush,
    BengaliMonth::Magh,
    BengaliMonth::Falgun,
    BengaliMonth::Chaitra,
];

impl BengaliMonth {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Boishakh => "Boishakh",
            Self::Jyoishtho => "Jyoishtho",
            Self::Asharh => "Asharh",
            Self::Shraban => "Shraban",
            Self::Bhadro => "Bhadro",
            Self::Ashwin => "Ashwin",
            Self::Kartik => "Kartik",
            Self::Ogrohayon => "Ogrohayon",
            Self::Poush => "Poush",
            Self::Magh => "Magh",
            Self::Falgun => "Falgun",
            Self::Chaitra => "Chaitra",
        }
    }

    pub fn from_rashi(rashi: Rashi) -> Self {
        BENGALI_MONTHS[rashi.index() as usize]
    }
}

/// Lunar (amanta) month names, parallel to the Bengali table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LunarMonth {
    Vaishakha,
    Jyeshtha,
    Ashadha,
    Shravana,
    Bhadrapada,
    Ashwin,
    Kartika,
    Margashirsha,
    Pausha,
    Magha,
    Phalguna,
    Chaitra,
}

const LUNAR_MONTHS: [LunarMonth; 12] = [
    LunarMonth::Vaishakha,
    LunarMonth::Jyeshtha,
    LunarMonth::Ashadha,
    LunarMonth::Shravana,
    LunarMonth::Bhadrapada,
    LunarMonth::Ashwin,
    LunarMonth::Kartika,
    LunarMonth::Margashirsha,
    LunarMonth::Pausha,
    LunarMonth::Magha,
    LunarMonth::Phalguna,
    LunarMonth::Chaitra,
];

impl LunarMonth {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vaishakha => "Vaishakha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Ashadha => "Ashadha",
            Self::Shravana => "Shravana",
            Self::Bhadrapada => "Bhadrapada",
            Self::Ashwin => "Ashwin",
            Self::Kartika => "Kartika",
            Self::Margashirsha => "Margashirsha",
            Self::Pausha => "Pausha",
            Self::Magha => "Magha",
            Self::Phalguna => "Phalguna",
            Self::Chaitra => "Chaitra",
        }
    }

    pub fn from_rashi(rashi: Rashi) -> Self {
        LUNAR_MONTHS[rashi.index() as usize]
    }
}

/// Bangabda year for a Gregorian date whose solar month is `month`.
///
/// The year turns over at Boishakh 1 (mid-April): `year - 593` from then
/// until the end of December, `year - 594` before it. Keyed on the solar
/// month, so the April days still in Chaitra belong to the old year.
pub fn bengali_year(gregorian_year: i32, gregorian_month: u32, month: BengaliMonth) -> i32 {
    let new_year_started = match gregorian_month {
        1..=3 => false,
        4 => month != BengaliMonth::Chaitra,
        _ => true,
    };
    if new_year_started {
        gregorian_year - 593
    } else {
        gregorian_year - 594
    }
}
