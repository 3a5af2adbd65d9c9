// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Graph construction across the checkpoint sequence.
//!
//! # Algorithm
//!
//! Walk consecutive pairs of `[0] + targets`. For each pair `(prev, next)`:
//!
//! 1. Snapshot the nodes of layer `prev`
//! 2. For each node, compute the units still in the inventory
//! 3. Ask for every option reaching `next` from that node
//! 4. Record an edge per option and add the option's state to layer `next`
//!
//! A checkpoint equal to the previous one is a hold: the state stays put, so
//! the pair contributes no edges and no stage. When a sequence revisits a sum,
//! the layer for that sum grows and edges already recorded are not repeated.

use crate::context::PlanContext;
use crate::error::Result;
use crate::graph::{transition_options, Edge, Layers, TransitionGraph};
use crate::statistics::Counters;
use crate::units::{Inventory, Units};
use ahash::AHashSet;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info, trace};

/// Build the layered transition graph for `targets` over `inventory`.
///
/// Fails only if a state is not drawn from the inventory, which would be a
/// bug in option generation. Unreachable checkpoints produce empty layers.
pub fn build_transition_graph(
    ctx: &mut PlanContext,
    inventory: &Inventory,
    targets: &[u64],
) -> Result<TransitionGraph> {
    let mut layers: BTreeMap<u64, BTreeSet<Units>> = BTreeMap::new();
    layers.entry(0).or_default().insert(Units::empty());
    let mut order = vec![0];

    let mut edges = Vec::new();
    let mut recorded: AHashSet<(Units, Units)> = AHashSet::new();

    let mut prev_sum = 0;
    for (checkpoint, &next_sum) in targets.iter().enumerate() {
        if next_sum == prev_sum {
            debug!(checkpoint, sum = next_sum, "Holding state");
            continue;
        }

        let sources: Vec<Units> = layers
            .get(&prev_sum)
            .map(|layer| layer.iter().cloned().collect())
            .unwrap_or_default();

        let mut discovered = BTreeSet::new();
        for source in &sources {
            let available = inventory.available(source)?;
            for option in transition_options(ctx, source, &available, next_sum) {
                if !recorded.insert((source.clone(), option.candidate.clone())) {
                    ctx.statistics.increment(Counters::DuplicateEdges);
                    continue;
                }
                let edge = Edge {
                    source: source.clone(),
                    dest: option.candidate.clone(),
                    count_cost: option.count_cost,
                    weight_cost: option.weight_cost,
                };
                trace!(%edge, "Edge");
                edges.push(edge);
                ctx.statistics.increment(Counters::EdgesAdded);
                discovered.insert(option.candidate);
            }
        }

        debug!(
            checkpoint,
            from = prev_sum,
            to = next_sum,
            sources = sources.len(),
            discovered = discovered.len(),
            "Built layer"
        );
        layers.entry(next_sum).or_default().extend(discovered);
        order.push(next_sum);
        prev_sum = next_sum;
    }

    let mut nodes: Vec<Units> = layers
        .values()
        .flatten()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    nodes.sort_by_key(Units::sum);

    info!(
        nodes = nodes.len(),
        edges = edges.len(),
        layers = layers.len(),
        "Transition graph built"
    );

    let layers = layers
        .into_iter()
        .map(|(sum, layer)| (sum, layer.into_iter().collect()))
        .collect();

    Ok(TransitionGraph {
        nodes,
        edges,
        layers: Layers::new(layers, order),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plates() -> Inventory {
        Inventory::new(vec![5, 10, 10, 10, 25, 25, 45, 45]).unwrap()
    }

    fn layer_strings(graph: &TransitionGraph, sum: u64) -> Vec<String> {
        graph
            .layers()
            .get(sum)
            .unwrap()
            .iter()
            .map(|n| n.to_string())
            .collect()
    }

    #[test]
    fn test_root_layer_is_empty_state() {
        let mut ctx = PlanContext::new();
        let graph = build_transition_graph(&mut ctx, &plates(), &[15]).unwrap();
        assert_eq!(layer_strings(&graph, 0), vec!["()"]);
    }

    #[test]
    fn test_first_layer_from_root() {
        let mut ctx = PlanContext::new();
        let graph = build_transition_graph(&mut ctx, &plates(), &[15, 25]).unwrap();

        assert_eq!(layer_strings(&graph, 15), vec!["(5,10)"]);
        assert_eq!(layer_strings(&graph, 25), vec!["(5,10,10)", "(25)"]);
        assert_eq!(graph.edges().len(), 3);
        assert_eq!(graph.layers().order(), &[0, 15, 25]);

        let first = &graph.edges()[0];
        assert_eq!(first.source, Units::empty());
        assert_eq!(first.dest, Units::new(vec![5, 10]));
        assert_eq!((first.count_cost, first.weight_cost), (2, 15));
    }

    #[test]
    fn test_nodes_sorted_by_sum() {
        let mut ctx = PlanContext::new();
        let graph = build_transition_graph(&mut ctx, &plates(), &[15, 25, 35]).unwrap();
        let sums: Vec<u64> = graph.nodes().iter().map(Units::sum).collect();
        assert_eq!(sums, vec![0, 15, 25, 25, 35, 35]);
    }

    #[test]
    fn test_unreachable_checkpoint_leaves_empty_layer() {
        let mut ctx = PlanContext::new();
        let inventory = Inventory::new(vec![5, 10]).unwrap();
        let graph = build_transition_graph(&mut ctx, &inventory, &[7, 15]).unwrap();

        assert!(graph.layers().get(7).unwrap().is_empty());
        assert!(graph.layers().get(15).unwrap().is_empty());
        assert!(graph.edges().is_empty());
        assert_eq!(graph.nodes(), &[Units::empty()]);
    }

    #[test]
    fn test_hold_adds_no_stage() {
        let mut ctx = PlanContext::new();
        let graph = build_transition_graph(&mut ctx, &plates(), &[15, 15, 25]).unwrap();
        assert_eq!(graph.layers().order(), &[0, 15, 25]);
        assert_eq!(graph.edges().len(), 3);
    }

    #[test]
    fn test_descending_checkpoint() {
        let mut ctx = PlanContext::new();
        let graph = build_transition_graph(&mut ctx, &plates(), &[25, 15]).unwrap();
        assert_eq!(graph.layers().order(), &[0, 25, 15]);
        assert_eq!(layer_strings(&graph, 15), vec!["(5,10)"]);
        // Both states at 25 step down to (5,10).
        assert_eq!(graph.edges().len(), 4);
    }

    #[test]
    fn test_revisited_sum_does_not_repeat_edges() {
        let mut ctx = PlanContext::new();
        let graph = build_transition_graph(&mut ctx, &plates(), &[15, 25, 15, 25]).unwrap();
        // 0->15: 1, 15->25: 2, 25->15: 2, second 15->25 adds nothing new.
        assert_eq!(graph.edges().len(), 5);
        assert_eq!(ctx.statistics.get(Counters::DuplicateEdges), 2);
        assert_eq!(graph.layers().order(), &[0, 15, 25, 15, 25]);
    }

    #[test]
    fn test_memo_computes_inventory_once() {
        let mut ctx = PlanContext::new();
        build_transition_graph(&mut ctx, &plates(), &[15, 25, 35, 55, 60]).unwrap();
        assert_eq!(ctx.memo.len(), 1);
        assert_eq!(ctx.statistics.get(Counters::WaysComputed), 1);
    }
}
