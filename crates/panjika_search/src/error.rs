//! Error type for almanac searches.

use panjika_core::EngineError;
use panjika_time::TimeError;
use panjika_vedic_base::VedicError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// The position provider rejected a query.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// Local-time or calendar conversion failed.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// A table lookup received an impossible value.
    #[error(transparent)]
    Vedic(#[from] VedicError),
    /// Search parameters are unusable.
    #[error("invalid search configuration: {0}")]
    InvalidConfig(&'static str),
    /// A search exhausted its iteration budget without an answer.
    #[error("search did not converge: {0}")]
    NoConvergence(&'static str),
    /// The caller's deadline passed before the search finished.
    #[error("search deadline exceeded after {evaluations} evaluations")]
    DeadlineExceeded { evaluations: usize },
    /// The query needs positions outside the provider's coverage.
    #[error("query window JD [{start_jd}, {end_jd}] outside provider coverage")]
    OutOfCoverage { start_jd: f64, end_jd: f64 },
}
