//! Principal moon phases within a local day.

use panjika_core::PositionProvider;
use panjika_time::{Instant, LocalDay};
use panjika_vedic_base::sector_index;

use crate::elements::elongation_at;
use crate::error::SearchError;
use crate::lunar_phase_types::{LunarPhase, LunarPhaseEvent};
use crate::search_util::{DiscreteFunction, SearchOptions, find_discrete};

/// Elongation quadrant sampling step (a quadrant lasts ~7.4 days).
pub const PHASE_STEP_DAYS: f64 = 0.25;

/// Elongation quadrant 0..=3 as a function of time.
pub struct ElongationQuadrant<'a, P: ?Sized> {
    pub provider: &'a P,
}

impl<P: PositionProvider + ?Sized> DiscreteFunction for ElongationQuadrant<'_, P> {
    type Value = u8;

    fn step_days(&self) -> f64 {
        PHASE_STEP_DAYS
    }

    fn value_at(&self, at: Instant) -> Result<u8, SearchError> {
        Ok(sector_index(elongation_at(self.provider, at)?, 4) as u8)
    }
}

/// New/full moon and quarter instants falling inside `day`.
pub fn moon_phases_for_day<P: PositionProvider + ?Sized>(
    provider: &P,
    day: LocalDay,
) -> Result<Vec<LunarPhaseEvent>, SearchError> {
    let f = ElongationQuadrant { provider };
    let found = find_discrete(&f, day.start(), day.end(), &SearchOptions::default())?;
    Ok(found
        .into_iter()
        .map(|tr| LunarPhaseEvent {
            phase: LunarPhase::from_quadrant(tr.value),
            at: tr.at,
        })
        .collect())
}
