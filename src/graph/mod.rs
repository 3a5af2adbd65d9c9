// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Layered transition graph across the checkpoint sequence.
//!
//! - Node: a state (a [`Units`] multiset); its sum is its layer key
//! - Edge: a feasible transition between consecutive checkpoints, with both costs
//! - Layers: nodes grouped by checkpoint sum, plus the order checkpoints visit them
//!
//! Layer 0 always holds the empty state. Every edge leaves the layer of one
//! checkpoint and enters the layer of the next.

pub mod builder;
pub mod options;

pub use builder::build_transition_graph;
pub use options::{transition_options, TransitionOption};

use crate::cost::CostMetric;
use crate::units::Units;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// An edge ID (index into the graph's edge list).
pub type EdgeId = usize;

/// One feasible transition between the states of two consecutive checkpoints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Edge {
    pub source: Units,
    pub dest: Units,
    pub count_cost: u64,
    pub weight_cost: u64,
}

impl Edge {
    /// This edge's cost under `metric`.
    pub fn cost(&self, metric: CostMetric) -> u64 {
        match metric {
            CostMetric::Count => self.count_cost,
            CostMetric::Weight => self.weight_cost,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} [count {}, weight {}]",
            self.source, self.dest, self.count_cost, self.weight_cost
        )
    }
}

/// Nodes partitioned by checkpoint sum.
///
/// `order` lists the sums in the order the checkpoints visit them, starting
/// at 0. A checkpoint equal to the one before it is a hold and adds nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layers {
    nodes: BTreeMap<u64, Vec<Units>>,
    order: Vec<u64>,
}

impl Layers {
    pub(crate) fn new(nodes: BTreeMap<u64, Vec<Units>>, order: Vec<u64>) -> Self {
        Self { nodes, order }
    }

    /// Nodes in the layer for `sum`, or `None` if no checkpoint has that sum.
    pub fn get(&self, sum: u64) -> Option<&[Units]> {
        self.nodes.get(&sum).map(Vec::as_slice)
    }

    /// Visited sums, root first.
    pub fn order(&self) -> &[u64] {
        &self.order
    }

    /// Consecutive (from, to) sums, one per transition a path must make.
    pub fn stages(&self) -> impl Iterator<Item = (u64, u64)> + '_ {
        self.order.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Layers in ascending sum order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &[Units])> {
        self.nodes.iter().map(|(&sum, nodes)| (sum, nodes.as_slice()))
    }

    /// Number of distinct layers.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// The three outputs of graph construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionGraph {
    nodes: Vec<Units>,
    edges: Vec<Edge>,
    layers: Layers,
}

impl TransitionGraph {
    /// Every node, sorted by sum and then lexicographically.
    pub fn nodes(&self) -> &[Units] {
        &self.nodes
    }

    /// Every edge, in discovery order. [`EdgeId`]s index this slice.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn layers(&self) -> &Layers {
        &self.layers
    }

    pub fn into_parts(self) -> (Vec<Units>, Vec<Edge>, Layers) {
        (self.nodes, self.edges, self.layers)
    }
}
