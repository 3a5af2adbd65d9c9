// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Feasible next states for one checkpoint.

use crate::context::PlanContext;
use crate::cost::{transition_cost, CostMetric};
use crate::statistics::Counters;
use crate::units::Units;

/// A candidate next state with the cost of reaching it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOption {
    pub candidate: Units,
    pub count_cost: u64,
    pub weight_cost: u64,
}

/// Every state reachable from `current` that sums to `target`.
///
/// Candidates are drawn from `current` together with `available`. An
/// unreachable `target` yields an empty list. Callers must not rely on the
/// order of the result.
pub fn transition_options(
    ctx: &mut PlanContext,
    current: &Units,
    available: &Units,
    target: u64,
) -> Vec<TransitionOption> {
    let pool = current.merged(available);
    let Some(candidates) = ctx.memo.ways(&pool, &mut ctx.statistics).get(target) else {
        return Vec::new();
    };

    let options: Vec<TransitionOption> = candidates
        .iter()
        .map(|candidate| TransitionOption {
            candidate: candidate.clone(),
            count_cost: transition_cost(current, candidate, CostMetric::Count),
            weight_cost: transition_cost(current, candidate, CostMetric::Weight),
        })
        .collect();
    ctx.statistics.add(Counters::OptionsFound, options.len() as u64);
    options
}
