//! Almanac arithmetic and reference tables.
//!
//! This crate provides:
//! - Angle normalization and equal-sector indexing
//! - Tithi, paksha, nakshatra, yoga and karana lookups
//! - Rashi, Bengali and lunar month tables, Bengali year
//! - Ayanamsha (fixed offset or Lahiri)
//! - Rise/set horizon configuration
//! - Hijri conversion seam with a tabular implementation
//! - The static festival rule table
//!
//! Everything here is pure: no provider calls, no searching.

pub mod ayanamsha;
pub mod error;
pub mod festival_table;
pub mod hijri;
pub mod karana;
pub mod masa;
pub mod nakshatra;
pub mod riseset_types;
pub mod tithi;
pub mod util;
pub mod yoga;

pub use ayanamsha::{Ayanamsha, DEFAULT_FIXED_AYANAMSHA_DEG, LAHIRI_J2000_DEG};
pub use error::VedicError;
pub use festival_table::{FESTIVAL_RULES, FestivalRule, FestivalTrigger, validate_rules};
pub use hijri::{HijriConverter, HijriDate, HijriError, TabularHijri};
pub use karana::{ALL_KARANAS, Karana, karana_from_raw_tithi};
pub use masa::{
    ALL_RASHIS, BengaliMonth, LunarMonth, Rashi, bengali_year, rashi_from_sidereal_longitude,
};
pub use nakshatra::{
    ALL_NAKSHATRAS_27, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo,
    nakshatra_from_sidereal_longitude,
};
pub use riseset_types::RiseSetConfig;
pub use tithi::{Paksha, TITHI_SEGMENT_DEG, TithiPosition, tithi_bucket, tithi_from_elongation};
pub use util::{normalize_360, normalize_to_pm180, sector_index};
pub use yoga::{ALL_YOGAS, Yoga, yoga_from_sum};

/// Table enums serialize as their display name.
macro_rules! serialize_by_name {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl serde::Serialize for $ty {
                fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_str(self.name())
                }
            }
        )+
    };
}

serialize_by_name!(Paksha, Nakshatra, Yoga, Karana, Rashi, BengaliMonth, LunarMonth);
