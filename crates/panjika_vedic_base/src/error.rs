//! Error types for almanac arithmetic.

use thiserror::Error;

/// Errors from table lookups and element construction.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// A raw tithi count outside 1..=30.
    #[error("invalid raw tithi {0}, expected 1..=30")]
    InvalidTithi(u8),
    /// A month index outside 0..=11.
    #[error("invalid month index {0}, expected 0..=11")]
    InvalidMonthIndex(u8),
    /// A festival rule with impossible calendar fields.
    #[error("invalid festival rule '{name}': {reason}")]
    InvalidRule {
        name: &'static str,
        reason: &'static str,
    },
}
