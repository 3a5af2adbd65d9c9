// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Unit values and the multisets built from them.
//!
//! - Unit: one indivisible value (a plate's weight, say)
//! - Units: canonical multiset of units, used for every state in the graph
//! - Inventory: the fixed multiset available for a run

pub mod inventory;
pub mod multiset;

pub use inventory::Inventory;
pub use multiset::Units;

/// One indivisible unit value. Inventories hold positive values only.
pub type Unit = u64;
