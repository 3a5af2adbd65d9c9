// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Minimum-cost plans for hitting a sequence of target sums from a fixed
//! inventory of reusable units.
//!
//! The motivating case is a loaded bar: given the plates on the rack and a
//! sequence of target loads, which plates go on and come off at each step so
//! that the fewest plates (or the least weight) are moved overall?
//!
//! # Architecture
//!
//! ## Building blocks
//!
//! - [`units`]: canonical multisets and the inventory's multiset difference
//! - [`memo`]: exhaustive subset-sum decomposition, memoized per input multiset
//! - [`cost`]: transition cost under the `count` and `weight` metrics
//!
//! ## Search
//!
//! 1. [`graph`]: walk the checkpoints, building a layered graph of states
//!    (one layer per checkpoint sum) joined by costed transitions
//! 2. [`paths`]: enumerate every chain of transitions spanning all checkpoints
//!    whose states line up end to start
//!
//! Both phases share a [`PlanContext`] holding the memo and the run statistics.
//!
//! ## Reporting
//!
//! [`report`] ranks the enumerated paths by total cost and renders the top
//! plans as text or JSON. [`config`] supplies run inputs from TOML.
//!
//! # Limits
//!
//! Decomposition is exponential in the number of distinct combinations, so
//! inventories should stay in the tens of units.
//!
//! # Example
//!
//! ```
//! use plate_planner::{build_transition_graph, enumerate_paths, CostMetric, Inventory, PlanContext};
//!
//! let inventory = Inventory::new(vec![5, 10, 10, 10, 25, 25, 45, 45]).unwrap();
//! let mut ctx = PlanContext::new();
//!
//! let graph = build_transition_graph(&mut ctx, &inventory, &[15, 25, 35, 55, 60]).unwrap();
//! let paths = enumerate_paths(&mut ctx, graph.layers(), graph.edges());
//!
//! assert_eq!(paths.len(), 36);
//! let cheapest = paths
//!     .iter()
//!     .map(|p| p.total_cost(graph.edges(), CostMetric::Count))
//!     .min();
//! assert_eq!(cheapest, Some(9));
//! ```

pub mod config;
pub mod context;
pub mod cost;
pub mod error;
pub mod graph;
pub mod memo;
pub mod paths;
pub mod report;
pub mod statistics;
pub mod units;

// Re-export commonly used types
pub use config::PlannerConfig;
pub use context::PlanContext;
pub use cost::{transition_cost, CostMetric};
pub use error::{PlanError, Result};
pub use graph::{build_transition_graph, Edge, EdgeId, Layers, TransitionGraph};
pub use paths::{enumerate_paths, Path};
pub use report::Report;
pub use units::{Inventory, Unit, Units};
