//! Event Search Engine.
//!
//! Finds the instants where a piecewise-constant function of time changes
//! value. The window is sampled uniformly at the function's own step hint
//! (the last sample lands exactly on the window end), and every value change
//! between neighbouring samples is refined by bisection to the requested
//! tolerance. Nothing is retained between calls.

use std::fmt;
use std::time::Instant as WallClock;

use panjika_time::Instant;
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::SearchError;

/// One second in days.
pub const SECOND_DAYS: f64 = 1.0 / 86_400.0;

/// One minute in days.
pub const MINUTE_DAYS: f64 = 1.0 / 1_440.0;

/// Upper bound on distinct value changes resolved inside one sample step.
const MAX_TRANSITIONS_PER_STEP: usize = 64;

/// A sampled, piecewise-constant function of time.
///
/// Implementations carry their own step size: the step must be shorter than
/// the shortest interval the caller cares about, or changes can be missed.
pub trait DiscreteFunction {
    type Value: Copy + PartialEq + fmt::Debug;

    /// Sampling step in days.
    fn step_days(&self) -> f64;

    fn value_at(&self, at: Instant) -> Result<Self::Value, SearchError>;
}

/// Limits and precision for one search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Bisection stops when the bracket is narrower than this (days).
    pub tolerance_days: f64,
    /// Maximum bisection halvings per transition.
    pub max_bisections: u32,
    /// Maximum number of grid samples in one window.
    pub max_samples: usize,
    /// Optional wall-clock deadline; checked before every evaluation.
    pub deadline: Option<WallClock>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            tolerance_days: SECOND_DAYS,
            max_bisections: 64,
            max_samples: 20_000,
            deadline: None,
        }
    }
}

impl SearchOptions {
    pub fn with_tolerance_seconds(mut self, seconds: f64) -> Self {
        self.tolerance_days = seconds * SECOND_DAYS;
        self
    }

    pub fn with_deadline(mut self, deadline: WallClock) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.tolerance_days.is_finite() || self.tolerance_days <= 0.0 {
            return Err("tolerance_days must be positive");
        }
        if self.max_bisections == 0 {
            return Err("max_bisections must be > 0");
        }
        if self.max_samples < 2 {
            return Err("max_samples must be >= 2");
        }
        Ok(())
    }
}

/// A change of value: `value` holds from `at` onward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Transition<V> {
    pub at: Instant,
    pub value: V,
}

/// A maximal interval of constant value inside a search window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Run<V> {
    pub value: V,
    /// Refined start, or the window start for the first run.
    pub start: Instant,
    /// Refined end, or the window end for the last run.
    pub end: Instant,
    /// Number of grid samples that fell inside the run.
    pub samples: usize,
}

impl<V> Run<V> {
    pub fn midpoint(&self) -> Instant {
        self.start.midpoint(self.end)
    }

    pub fn duration_days(&self) -> f64 {
        self.end.days_since(self.start)
    }
}

struct Evaluator<'f, F: ?Sized> {
    f: &'f F,
    opts: &'f SearchOptions,
    evaluations: usize,
}

impl<F: DiscreteFunction + ?Sized> Evaluator<'_, F> {
    fn eval(&mut self, at: Instant) -> Result<F::Value, SearchError> {
        if let Some(deadline) = self.opts.deadline {
            if WallClock::now() >= deadline {
                return Err(SearchError::DeadlineExceeded {
                    evaluations: self.evaluations,
                });
            }
        }
        self.evaluations += 1;
        self.f.value_at(at)
    }

    /// Resolve every change between two neighbouring samples with different
    /// values, pushing transitions in time order.
    fn refine(
        &mut self,
        t_a: Instant,
        v_a: F::Value,
        t_b: Instant,
        v_b: F::Value,
        out: &mut Vec<Transition<F::Value>>,
    ) -> Result<(), SearchError> {
        let (mut lo, mut lo_v) = (t_a, v_a);
        for _ in 0..MAX_TRANSITIONS_PER_STEP {
            let (mut a, mut b, mut b_v) = (lo, t_b, v_b);
            let mut halvings = 0;
            while b.days_since(a) > self.opts.tolerance_days {
                if halvings == self.opts.max_bisections {
                    return Err(SearchError::NoConvergence(
                        "bisection exhausted max_bisections",
                    ));
                }
                halvings += 1;
                let mid = a.midpoint(b);
                if mid <= a || mid >= b {
                    break;
                }
                let mid_v = self.eval(mid)?;
                if mid_v == lo_v {
                    a = mid;
                } else {
                    b = mid;
                    b_v = mid_v;
                }
            }
            trace!(at = %b, value = ?b_v, halvings, "transition refined");
            out.push(Transition { at: b, value: b_v });
            if b_v == v_b {
                return Ok(());
            }
            lo = b;
            lo_v = b_v;
        }
        Err(SearchError::NoConvergence(
            "too many value changes inside one sample step",
        ))
    }
}

struct Scan<V> {
    initial: V,
    transitions: Vec<Transition<V>>,
    grid: Vec<Instant>,
}

fn sample_grid(
    t0: Instant,
    t1: Instant,
    step_days: f64,
    max_samples: usize,
) -> Result<Vec<Instant>, SearchError> {
    if !step_days.is_finite() || step_days <= 0.0 {
        return Err(SearchError::InvalidConfig("step_days must be positive"));
    }
    let span = t1.days_since(t0);
    if !span.is_finite() || span <= 0.0 {
        return Err(SearchError::InvalidConfig("window end must be after start"));
    }
    let intervals = (span / step_days).ceil().max(1.0);
    if intervals + 1.0 > max_samples as f64 {
        return Err(SearchError::InvalidConfig(
            "window needs more samples than max_samples",
        ));
    }
    let intervals = intervals as usize;
    let mut grid: Vec<Instant> = (0..intervals)
        .map(|i| t0.add_days(i as f64 * step_days))
        .collect();
    grid.push(t1);
    Ok(grid)
}

fn scan<F: DiscreteFunction + ?Sized>(
    f: &F,
    t0: Instant,
    t1: Instant,
    opts: &SearchOptions,
) -> Result<Scan<F::Value>, SearchError> {
    opts.validate().map_err(SearchError::InvalidConfig)?;
    let grid = sample_grid(t0, t1, f.step_days(), opts.max_samples)?;

    let mut ev = Evaluator {
        f,
        opts,
        evaluations: 0,
    };
    let initial = ev.eval(grid[0])?;
    let mut transitions = Vec::new();
    let (mut prev_t, mut prev_v) = (grid[0], initial);
    for &t in &grid[1..] {
        let v = ev.eval(t)?;
        if v != prev_v {
            ev.refine(prev_t, prev_v, t, v, &mut transitions)?;
        }
        prev_t = t;
        prev_v = v;
    }

    debug!(
        samples = grid.len(),
        evaluations = ev.evaluations,
        transitions = transitions.len(),
        "discrete search finished"
    );
    Ok(Scan {
        initial,
        transitions,
        grid,
    })
}

/// All interior value changes of `f` in `[t0, t1]`, in time order.
///
/// A change within `tolerance_days` of `t0` is not reported: callers that
/// need the value at the window start query `f` there directly. Returns an
/// empty list when the value never changes.
pub fn find_discrete<F: DiscreteFunction + ?Sized>(
    f: &F,
    t0: Instant,
    t1: Instant,
    opts: &SearchOptions,
) -> Result<Vec<Transition<F::Value>>, SearchError> {
    let mut transitions = scan(f, t0, t1, opts)?.transitions;
    transitions.retain(|tr| tr.at.days_since(t0) > opts.tolerance_days);
    Ok(transitions)
}

/// Partition `[t0, t1]` into constant-value runs with refined boundaries.
///
/// The first run starts at `t0` and the last ends at `t1`; each run records
/// how many grid samples it covered.
pub fn find_runs<F: DiscreteFunction + ?Sized>(
    f: &F,
    t0: Instant,
    t1: Instant,
    opts: &SearchOptions,
) -> Result<Vec<Run<F::Value>>, SearchError> {
    let Scan {
        initial,
        transitions,
        grid,
    } = scan(f, t0, t1, opts)?;

    let mut runs = Vec::with_capacity(transitions.len() + 1);
    let (mut start, mut value) = (t0, initial);
    for tr in &transitions {
        runs.push(Run {
            value,
            start,
            end: tr.at,
            samples: 0,
        });
        start = tr.at;
        value = tr.value;
    }
    runs.push(Run {
        value,
        start,
        end: t1,
        samples: 0,
    });

    let mut idx = 0;
    for t in grid {
        while idx + 1 < runs.len() && t >= runs[idx].end {
            idx += 1;
        }
        runs[idx].samples += 1;
    }
    Ok(runs)
}
