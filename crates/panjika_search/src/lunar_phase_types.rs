//! Types for lunar phase events.

use panjika_time::Instant;
use serde::Serialize;

/// Principal phases: elongation 0, 90, 180 and 270 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LunarPhase {
    NewMoon,
    FirstQuarter,
    FullMoon,
    LastQuarter,
}

impl LunarPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::NewMoon => "New Moon",
            Self::FirstQuarter => "First Quarter",
            Self::FullMoon => "Full Moon",
            Self::LastQuarter => "Last Quarter",
        }
    }

    /// Phase reached when the elongation enters quadrant `q` (0..=3).
    pub fn from_quadrant(q: u8) -> Self {
        match q % 4 {
            0 => Self::NewMoon,
            1 => Self::FirstQuarter,
            2 => Self::FullMoon,
            _ => Self::LastQuarter,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LunarPhaseEvent {
    pub phase: LunarPhase,
    pub at: Instant,
}
