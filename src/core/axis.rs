use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::core::project::EntityPointPair;

/// Both metrics share a nominal 0..=100 range; the upper bound is never
/// assumed to be exceeded.
pub const AXIS_MAX: f64 = 100.0;

/// Tick sequences stay small enough to live inline.
pub type TickSequence = SmallVec<[f64; 8]>;

/// Numeric range and tick positions for one axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub domain: (f64, f64),
    pub ticks: TickSequence,
}

/// Axis specs for the whole chart, recomputed from the full pair set
/// whenever the dataset changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartAxes {
    pub habit: AxisSpec,
    pub trust: AxisSpec,
}

impl Default for ChartAxes {
    fn default() -> Self {
        compute_axes(&[])
    }
}

/// Pure function of the current pair set, not incrementally maintained.
#[must_use]
pub fn compute_axes(pairs: &[EntityPointPair]) -> ChartAxes {
    ChartAxes {
        habit: habit_axis(pairs),
        trust: trust_axis(),
    }
}

/// Habit Index (X) axis.
///
/// The lower bound is the floor of the minimum x across both scans of all
/// pairs; the upper bound is pinned at 100. Ticks start at the lower bound
/// and advance by `ceil((100 - lower) / 5)` until reaching or passing 100,
/// with 100 appended when the last generated tick falls short of it. The
/// step is clamped to at least 1 so a degenerate lower bound at or above
/// 100 still terminates.
#[must_use]
pub fn habit_axis(pairs: &[EntityPointPair]) -> AxisSpec {
    let lower = habit_lower_bound(pairs);
    let step = ((AXIS_MAX - lower) / 5.0).ceil().max(1.0);

    let mut ticks = TickSequence::new();
    let mut tick = lower;
    while tick <= AXIS_MAX {
        ticks.push(tick);
        tick += step;
    }
    if ticks.last().copied() != Some(AXIS_MAX) {
        ticks.push(AXIS_MAX);
    }

    AxisSpec {
        domain: (lower, AXIS_MAX),
        ticks,
    }
}

/// Trust NPS (Y) axis: fixed domain and ticks regardless of data.
#[must_use]
pub fn trust_axis() -> AxisSpec {
    AxisSpec {
        domain: (0.0, AXIS_MAX),
        ticks: smallvec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0],
    }
}

/// Floor of the minimum finite x value; 0 when no finite value exists.
fn habit_lower_bound(pairs: &[EntityPointPair]) -> f64 {
    pairs
        .iter()
        .flat_map(|pair| [pair.first_scan.x, pair.latest_scan.x])
        .filter(|value| value.is_finite())
        .map(OrderedFloat)
        .min()
        .map_or(0.0, |minimum| minimum.into_inner().floor())
}
