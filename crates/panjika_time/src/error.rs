//! Error types for time-scale and calendar conversions.

use thiserror::Error;

/// Errors from calendar parsing, zone lookup, or instant conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// A date/time string did not match the expected layout.
    #[error("invalid date/time: {0}")]
    Parse(String),
    /// The IANA time zone identifier is unknown.
    #[error("unknown time zone: {0}")]
    UnknownZone(String),
    /// Calendar fields do not form a valid date.
    #[error("invalid calendar date {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// The instant cannot be represented as a chrono timestamp.
    #[error("instant out of representable range (JD {0})")]
    Unrepresentable(f64),
    /// No valid local time exists for the requested wall-clock time.
    #[error("no valid local time for {0}")]
    NonexistentLocalTime(String),
}
