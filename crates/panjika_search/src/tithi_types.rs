//! Types for tithi transition tracking.

use panjika_time::Instant;
use panjika_vedic_base::{Paksha, TithiPosition};
use serde::Serialize;

/// One tithi overlapping a local day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiEvent {
    pub tithi: TithiPosition,
    pub start: Instant,
    pub end: Instant,
    /// Set on the fallback event reported when no tithi boundary touches
    /// the day: the tithi active at local midnight covers the whole day.
    pub spans_full_day: bool,
}

impl TithiEvent {
    /// Number within the paksha, 1..=15.
    pub fn number(&self) -> u8 {
        self.tithi.number
    }

    pub fn paksha(&self) -> Paksha {
        self.tithi.paksha
    }

    pub fn name(&self) -> &'static str {
        self.tithi.name()
    }

    pub fn duration_days(&self) -> f64 {
        self.end.days_since(self.start)
    }

    /// Midpoint of the part of this tithi inside `[from, to)`.
    pub fn overlap_midpoint(&self, from: Instant, to: Instant) -> Instant {
        let start = if self.start > from { self.start } else { from };
        let end = if self.end < to { self.end } else { to };
        if end > start {
            start.midpoint(end)
        } else {
            self.start.midpoint(self.end)
        }
    }
}
