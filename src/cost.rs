// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Transition cost model.
//!
//! The cost of moving from one state to another is measured by aligning the two
//! sorted multisets at their high end and cancelling the common suffix: those
//! units stay on. Whatever remains must be taken off (`prev`) or put on (`next`).
//!
//! This is positional, not a true multiset symmetric difference. `(5,10)` to
//! `(5,10,10)` cancels the trailing 10 and then stops at 5 vs 10, costing 3
//! units rather than the single 10 actually added. Costs computed elsewhere
//! depend on this exact behaviour.

use crate::error::PlanError;
use crate::units::Units;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a transition is charged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostMetric {
    /// Number of units moved.
    Count,
    /// Total value of units moved.
    Weight,
}

impl CostMetric {
    /// The metric used as a tie-breaker when ranking by `self`.
    pub fn other(self) -> Self {
        match self {
            CostMetric::Count => CostMetric::Weight,
            CostMetric::Weight => CostMetric::Count,
        }
    }
}

impl FromStr for CostMetric {
    type Err = PlanError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "count" => Ok(CostMetric::Count),
            "weight" => Ok(CostMetric::Weight),
            other => Err(PlanError::UnknownMetric(other.to_string())),
        }
    }
}

impl fmt::Display for CostMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CostMetric::Count => write!(f, "count"),
            CostMetric::Weight => write!(f, "weight"),
        }
    }
}

/// Cost of replacing `prev` with `next` under `metric`.
///
/// Each side is bounded by the inventory total, but the two together may not
/// be, so the weight saturates at `u64::MAX`.
pub fn transition_cost(prev: &Units, next: &Units, metric: CostMetric) -> u64 {
    let mut prev_q = prev.as_slice();
    let mut next_q = next.as_slice();

    // Common suffix stays in place.
    while let (Some((p, prev_rest)), Some((n, next_rest))) =
        (prev_q.split_last(), next_q.split_last())
    {
        if p != n {
            break;
        }
        prev_q = prev_rest;
        next_q = next_rest;
    }

    match metric {
        CostMetric::Count => (prev_q.len() + next_q.len()) as u64,
        CostMetric::Weight => prev_q
            .iter()
            .sum::<u64>()
            .saturating_add(next_q.iter().sum::<u64>()),
    }
}
