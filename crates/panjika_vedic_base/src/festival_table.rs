//! Static festival rule table.
//!
//! Lunar rules are keyed on the lunar month name that the almanac derives
//! from the Sun's sidereal rashi, the paksha and the tithi number (1..=15),
//! optionally qualified by the Moon's nakshatra. Fixed-date rules match a
//! Gregorian or Hijri (month, day) pair.

use crate::error::VedicError;
use crate::masa::LunarMonth;
use crate::masa::LunarMonth as M;
use crate::nakshatra::Nakshatra;
use crate::tithi::Paksha;
use crate::tithi::Paksha::{Krishna, Shukla};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FestivalTrigger {
    Lunar {
        month: LunarMonth,
        paksha: Paksha,
        tithi: u8,
        nakshatra: Option<Nakshatra>,
    },
    Gregorian {
        month: u32,
        day: u32,
    },
    Hijri {
        month: u32,
        day: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FestivalRule {
    pub name: &'static str,
    pub trigger: FestivalTrigger,
}

const fn lunar(name: &'static str, month: LunarMonth, paksha: Paksha, tithi: u8) -> FestivalRule {
    FestivalRule {
        name,
        trigger: FestivalTrigger::Lunar {
            month,
            paksha,
            tithi,
            nakshatra: None,
        },
    }
}

const fn lunar_in(
    name: &'static str,
    month: LunarMonth,
    paksha: Paksha,
    tithi: u8,
    nakshatra: Nakshatra,
) -> FestivalRule {
    FestivalRule {
        name,
        trigger: FestivalTrigger::Lunar {
            month,
            paksha,
            tithi,
            nakshatra: Some(nakshatra),
        },
    }
}

const fn gregorian(name: &'static str, month: u32, day: u32) -> FestivalRule {
    FestivalRule {
        name,
        trigger: FestivalTrigger::Gregorian { month, day },
    }
}

const fn hijri(name: &'static str, month: u32, day: u32) -> FestivalRule {
    FestivalRule {
        name,
        trigger: FestivalTrigger::Hijri { month, day },
    }
}

pub static FESTIVAL_RULES: &[FestivalRule] = &[
    // Gregorian fixed dates
    gregorian("English New Year", 1, 1),
    gregorian("Poush Sankranti", 1, 14),
    gregorian("Netaji Jayanti", 1, 23),
    gregorian("Republic Day", 1, 26),
    gregorian("International Mother Language Day", 2, 21),
    gregorian("Independence Day (Bangladesh)", 3, 26),
    gregorian("Pahela Boishakh", 4, 14),
    gregorian("May Day", 5, 1),
    gregorian("Rabindra Jayanti", 5, 9),
    gregorian("Independence Day (India)", 8, 15),
    gregorian("Gandhi Jayanti", 10, 2),
    gregorian("Victory Day", 12, 16),
    gregorian("Christmas", 12, 25),
    // Hijri fixed dates
    hijri("Islamic New Year", 1, 1),
    hijri("Ashura", 1, 10),
    hijri("Mawlid an-Nabi", 3, 12),
    hijri("Shab-e-Barat", 8, 15),
    hijri("Ramadan Begins", 9, 1),
    hijri("Eid ul-Fitr", 10, 1),
    hijri("Eid ul-Adha", 12, 10),
    // Lunar
    lunar("Ram Navami", M::Chaitra, Shukla, 9),
    lunar("Buddha Purnima", M::Vaishakha, Shukla, 15),
    lunar("Rath Yatra", M::Ashadha, Shukla, 2),
    lunar("Guru Purnima", M::Ashadha, Shukla, 15),
    lunar("Rakhi Purnima", M::Shravana, Shukla, 15),
    lunar("Janmashtami", M::Shravana, Krishna, 8),
    lunar("Ganesh Chaturthi", M::Bhadrapada, Shukla, 4),
    lunar("Mahalaya", M::Ashwin, Krishna, 15),
    lunar("Durga Saptami", M::Ashwin, Shukla, 7),
    lunar("Durga Ashtami", M::Ashwin, Shukla, 8),
    lunar("Maha Navami", M::Ashwin, Shukla, 9),
    lunar("Bijoya Dashami", M::Ashwin, Shukla, 10),
    lunar("Kojagari Lakshmi Puja", M::Ashwin, Shukla, 15),
    lunar("Kali Puja", M::Kartika, Krishna, 15),
    lunar("Bhai Phonta", M::Kartika, Shukla, 2),
    lunar("Jagaddhatri Puja", M::Kartika, Shukla, 9),
    lunar("Rash Purnima", M::Kartika, Shukla, 15),
    lunar_in("Pushya Purnima", M::Pausha, Shukla, 15, Nakshatra::Pushya),
    lunar("Saraswati Puja", M::Magha, Shukla, 5),
    lunar("Maha Shivaratri", M::Phalguna, Krishna, 14),
    lunar("Dol Purnima", M::Phalguna, Shukla, 15),
];

fn gregorian_month_days(month: u32) -> Option<u32> {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => Some(29),
        _ => None,
    }
}

/// Check a rule table for impossible calendar fields.
pub fn validate_rules(rules: &[FestivalRule]) -> Result<(), VedicError> {
    for rule in rules {
        let reason = match rule.trigger {
            FestivalTrigger::Lunar { tithi, .. } if !(1..=15).contains(&tithi) => {
                Some("tithi number must be 1..=15")
            }
            FestivalTrigger::Gregorian { month, day } => match gregorian_month_days(month) {
                None => Some("Gregorian month must be 1..=12"),
                Some(max) if day == 0 || day > max => Some("Gregorian day out of range"),
                Some(_) => None,
            },
            FestivalTrigger::Hijri { month, day } => {
                if !(1..=12).contains(&month) {
                    Some("Hijri month must be 1..=12")
                } else if !(1..=30).contains(&day) {
                    Some("Hijri day must be 1..=30")
                } else {
                    None
                }
            }
            FestivalTrigger::Lunar { .. } => None,
        };
        if let Some(reason) = reason {
            return Err(VedicError::InvalidRule {
                name: rule.name,
                reason,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_table_is_valid() {
        assert_eq!(validate_rules(FESTIVAL_RULES), Ok(()));
    }

    #[test]
    fn names_are_unique() {
        let mut names: Vec<_> = FESTIVAL_RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        let before = names.len();
        names.dedup();
        assert_eq!(names.len(), before);
    }

    #[test]
    fn rejects_bad_tithi() {
        let rules = [lunar("Bad", M::Magha, Shukla, 16)];
        assert_eq!(
            validate_rules(&rules),
            Err(VedicError::InvalidRule {
                name: "Bad",
                reason: "tithi number must be 1..=15"
            })
        );
    }

    #[test]
    fn rejects_bad_dates() {
        assert!(validate_rules(&[gregorian("Bad", 4, 31)]).is_err());
        assert!(validate_rules(&[gregorian("Bad", 13, 1)]).is_err());
        assert!(validate_rules(&[hijri("Bad", 0, 1)]).is_err());
        assert!(validate_rules(&[hijri("Bad", 9, 31)]).is_err());
        assert!(validate_rules(&[gregorian("Leap", 2, 29)]).is_ok());
    }

    #[test]
    fn contains_core_festivals() {
        let has = |n: &str| FESTIVAL_RULES.iter().any(|r| r.name == n);
        assert!(has("Christmas"));
        assert!(has("Eid ul-Fitr"));
        assert!(has("Guru Purnima"));
        assert!(has("Durga Ashtami"));
    }
}
