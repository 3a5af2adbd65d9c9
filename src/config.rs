// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Run configuration.
//!
//! A run needs an inventory and a checkpoint sequence; reporting needs to know
//! how many plans to show and which metrics to rank by. All of it can come from
//! a TOML file, with any missing field falling back to the defaults below.
//!
//! ```toml
//! inventory = [5, 10, 10, 10, 25, 25, 45, 45]
//! targets = [15, 25, 35, 55, 60]
//! top_k = 10
//! rank_by = ["count", "weight"]
//! ```

use crate::cost::CostMetric;
use crate::error::{PlanError, Result};
use crate::units::{Inventory, Unit};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of ranked plans shown per metric.
pub const DEFAULT_TOP_K: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PlannerConfig {
    /// Units available for the whole run; repeats allowed.
    pub inventory: Vec<Unit>,

    /// Cumulative sums required at each checkpoint (not deltas).
    pub targets: Vec<u64>,

    pub top_k: usize,

    /// Metrics to rank plans by, each producing its own table.
    pub rank_by: Vec<CostMetric>,
}

impl Default for PlannerConfig {
    /// A standard plate set and a warm-up sequence.
    fn default() -> Self {
        Self {
            inventory: vec![5, 10, 10, 10, 25, 25, 45, 45],
            targets: vec![15, 25, 35, 55, 60],
            top_k: DEFAULT_TOP_K,
            rank_by: vec![CostMetric::Count, CostMetric::Weight],
        }
    }
}

impl PlannerConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|err| PlanError::Config(err.to_string()))
    }

    /// Load a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Validate and build the inventory.
    pub fn inventory(&self) -> Result<Inventory> {
        Inventory::new(self.inventory.clone())
    }
}
