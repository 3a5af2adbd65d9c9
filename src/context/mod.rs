// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Planning context.
//!
//! The PlanContext carries the state that lives for one run:
//! - the decomposition memo, reused across layers and option queries
//! - statistics counters describing the work done
//!
//! Inputs (inventory, targets) are passed separately and never stored here, so
//! a context can be dropped or reset without touching them.

use crate::memo::WaysMemo;
use crate::statistics::Statistics;

/// Per-run state threaded through graph construction and path enumeration.
#[derive(Debug, Default)]
pub struct PlanContext {
    /// Decompositions computed so far in this run.
    pub memo: WaysMemo,

    pub statistics: Statistics,
}

impl PlanContext {
    pub fn new() -> Self {
        Self::default()
    }
}
