// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Enumeration of complete plans through the transition graph.
//!
//! A path picks one edge per stage. Because several distinct states can share
//! one layer's sum, belonging to the right layer is not enough: each edge must
//! start at the exact state the previous edge ended on, like dominoes.
//!
//! The enumeration is a bounded state machine run breadth-first with an
//! explicit worklist, one stage at a time:
//!
//! ```text
//! worklist = [ [] ]
//! for each stage (from, to):
//!     worklist = [ p + e  for p in worklist
//!                         for e in edges(from -> to)
//!                         if p is empty or last(p).dest == e.source ]
//! ```
//!
//! An empty worklist at any stage means the checkpoints are infeasible.

use crate::context::PlanContext;
use crate::cost::CostMetric;
use crate::graph::{Edge, EdgeId, Layers};
use crate::statistics::Counters;
use crate::units::Units;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// A chain of edges spanning every stage, stored as indices into the edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
    edges: Vec<EdgeId>,
}

impl Path {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge_ids(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Resolve this path's edges against the edge list it was enumerated from.
    pub fn edges<'a>(&'a self, edges: &'a [Edge]) -> impl Iterator<Item = &'a Edge> + 'a {
        self.edges.iter().map(move |&id| &edges[id])
    }

    /// Sum of edge costs under `metric`, saturating at `u64::MAX`.
    pub fn total_cost(&self, edges: &[Edge], metric: CostMetric) -> u64 {
        self.edges(edges)
            .fold(0, |total: u64, edge| total.saturating_add(edge.cost(metric)))
    }

    /// State the path ends on, or `None` for the empty path.
    pub fn last_state<'a>(&self, edges: &'a [Edge]) -> Option<&'a Units> {
        self.edges.last().map(|&id| &edges[id].dest)
    }

    fn extended(&self, id: EdgeId) -> Self {
        let mut edges = Vec::with_capacity(self.edges.len() + 1);
        edges.extend_from_slice(&self.edges);
        edges.push(id);
        Self { edges }
    }
}

/// Every complete path through `layers` using `edges`.
///
/// Returns one empty path when there are no stages, and no paths when some
/// checkpoint cannot be reached.
pub fn enumerate_paths(ctx: &mut PlanContext, layers: &Layers, edges: &[Edge]) -> Vec<Path> {
    let mut by_stage: BTreeMap<(u64, u64), Vec<EdgeId>> = BTreeMap::new();
    for (id, edge) in edges.iter().enumerate() {
        by_stage
            .entry((edge.source.sum(), edge.dest.sum()))
            .or_default()
            .push(id);
    }

    let mut worklist = vec![Path::default()];
    for (stage, (from, to)) in layers.stages().enumerate() {
        let candidates = by_stage.get(&(from, to)).map(Vec::as_slice).unwrap_or(&[]);

        let mut next_worklist = Vec::new();
        let mut rejected = 0;
        for partial in &worklist {
            let last = partial.last_state(edges);
            for &id in candidates {
                if last.is_some_and(|state| *state != edges[id].source) {
                    rejected += 1;
                    continue;
                }
                next_worklist.push(partial.extended(id));
            }
        }

        ctx.statistics.add(Counters::DominoRejections, rejected);
        ctx.statistics.add(Counters::PartialPathsExtended, next_worklist.len() as u64);
        debug!(
            stage,
            from,
            to,
            partial_paths = next_worklist.len(),
            rejected,
            "Extended paths"
        );

        worklist = next_worklist;
        if worklist.is_empty() {
            debug!(stage, to, "No path reaches checkpoint");
            break;
        }
    }

    ctx.statistics.add(Counters::CompletePaths, worklist.len() as u64);
    info!(paths = worklist.len(), "Paths enumerated");
    worklist
}
