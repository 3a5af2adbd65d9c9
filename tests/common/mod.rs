// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use plate_planner::{
    build_transition_graph, enumerate_paths, Inventory, Path, PlanContext, TransitionGraph,
};

/// The standard plate rack: one 5, three 10s, two 25s, two 45s.
pub const PLATES: [u64; 8] = [5, 10, 10, 10, 25, 25, 45, 45];

/// A warm-up sequence of cumulative loads.
pub const WARMUP: [u64; 5] = [15, 25, 35, 55, 60];

/// Everything one planning run produces.
pub struct Plan {
    pub ctx: PlanContext,
    pub graph: TransitionGraph,
    pub paths: Vec<Path>,
}

/// Build the graph and enumerate paths, panicking on error.
pub fn plan(inventory: &[u64], targets: &[u64]) -> Plan {
    let inventory = Inventory::new(inventory.to_vec()).expect("valid inventory");
    let mut ctx = PlanContext::new();
    let graph = build_transition_graph(&mut ctx, &inventory, targets).expect("graph builds");
    let paths = enumerate_paths(&mut ctx, graph.layers(), graph.edges());
    Plan { ctx, graph, paths }
}

/// Render a path as its visited states.
pub fn chain(plan: &Plan, path: &Path) -> Vec<String> {
    let mut states: Vec<String> = path
        .edges(plan.graph.edges())
        .take(1)
        .map(|edge| edge.source.to_string())
        .collect();
    states.extend(path.edges(plan.graph.edges()).map(|edge| edge.dest.to_string()));
    states
}
