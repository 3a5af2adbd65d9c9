// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for planning.
//!
//! An unreachable checkpoint is deliberately absent here: it yields an empty
//! layer and an empty path list, not an error.

use crate::units::Unit;
use thiserror::Error;

/// Errors that can occur while building or reporting a plan.
#[derive(Error, Debug)]
pub enum PlanError {
    /// A state claims units the inventory does not hold (or holds fewer copies of).
    #[error("State uses unit {unit} {missing} more time(s) than the inventory holds")]
    SubMultisetViolation { unit: Unit, missing: usize },

    /// A cost metric name other than `count` or `weight`.
    #[error("Unrecognized cost metric: {0}")]
    UnknownMetric(String),

    /// Inventories hold positive units only.
    #[error("Inventory unit at position {position} is zero")]
    NonPositiveUnit { position: usize },

    /// The inventory's total does not fit in a `u64`, so sums over it would wrap.
    #[error("Inventory total overflows at unit position {position}")]
    InventoryTooLarge { position: usize },

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
