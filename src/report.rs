// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Ranking and rendering of enumerated plans.
//!
//! The report only reads the core outputs (nodes, edges, paths). Paths are
//! ranked ascending by total cost under one metric, with the other metric and
//! then enumeration order breaking ties, so rankings are deterministic.

use crate::cost::CostMetric;
use crate::error::Result;
use crate::graph::Edge;
use crate::paths::Path;
use crate::units::Units;
use serde::Serialize;
use std::fmt;

/// A path with its totals under the ranking metric and the other one.
#[derive(Debug, Clone, Serialize)]
pub struct RankedPath<'a> {
    pub primary: u64,
    pub secondary: u64,
    pub edges: Vec<&'a Edge>,
}

impl RankedPath<'_> {
    /// The states visited, root first: `() -> (5,10) -> (25)`.
    pub fn chain(&self) -> String {
        chain(self.edges.iter().copied())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Ranking<'a> {
    pub metric: CostMetric,
    pub paths: Vec<RankedPath<'a>>,
}

/// Machine-readable summary of a run.
#[derive(Debug, Clone, Serialize)]
pub struct PlanSummary<'a> {
    pub total_paths: usize,
    pub nodes: usize,
    pub edges: usize,
    pub rankings: Vec<Ranking<'a>>,
}

/// Read-only view over the three core outputs.
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    nodes: &'a [Units],
    edges: &'a [Edge],
    paths: &'a [Path],
}

impl<'a> Report<'a> {
    pub fn new(nodes: &'a [Units], edges: &'a [Edge], paths: &'a [Path]) -> Self {
        Self {
            nodes,
            edges,
            paths,
        }
    }

    /// At most `top_k` paths, cheapest first under `metric`.
    pub fn ranked(&self, metric: CostMetric, top_k: usize) -> Vec<RankedPath<'a>> {
        let mut scored: Vec<(u64, u64, usize)> = self
            .paths
            .iter()
            .enumerate()
            .map(|(index, path)| {
                (
                    path.total_cost(self.edges, metric),
                    path.total_cost(self.edges, metric.other()),
                    index,
                )
            })
            .collect();
        scored.sort_unstable();

        scored
            .into_iter()
            .take(top_k)
            .map(|(primary, secondary, index)| RankedPath {
                primary,
                secondary,
                edges: self.paths[index].edges(self.edges).collect(),
            })
            .collect()
    }

    pub fn summary(&self, rank_by: &[CostMetric], top_k: usize) -> PlanSummary<'a> {
        PlanSummary {
            total_paths: self.paths.len(),
            nodes: self.nodes.len(),
            edges: self.edges.len(),
            rankings: rank_by
                .iter()
                .map(|&metric| Ranking {
                    metric,
                    paths: self.ranked(metric, top_k),
                })
                .collect(),
        }
    }

    pub fn to_json(&self, rank_by: &[CostMetric], top_k: usize) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.summary(rank_by, top_k))?)
    }

    /// Plain-text report: totals, a sample plan, the top plans per metric and
    /// optionally one `source dest` line per edge.
    pub fn render_text(&self, rank_by: &[CostMetric], top_k: usize, show_graph: bool) -> String {
        TextReport {
            report: *self,
            rank_by,
            top_k,
            show_graph,
        }
        .to_string()
    }
}

/// Display adapter for [`Report::render_text`].
struct TextReport<'r, 'a> {
    report: Report<'a>,
    rank_by: &'r [CostMetric],
    top_k: usize,
    show_graph: bool,
}

impl fmt::Display for TextReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = &self.report;
        writeln!(f, "Total ways: {}", report.paths.len())?;
        match report.paths.first() {
            Some(path) => writeln!(f, "Sample way: {}", chain(path.edges(report.edges)))?,
            None => writeln!(f, "Sample way: none")?,
        }

        for &metric in self.rank_by {
            writeln!(f, "Sequences that minimize {}:", describe(metric))?;
            for ranked in report.ranked(metric, self.top_k) {
                writeln!(f, "{} {} {}", ranked.primary, ranked.secondary, ranked.chain())?;
            }
        }

        if self.show_graph {
            writeln!(f, "Graph:")?;
            for edge in report.edges {
                writeln!(f, "{} {}", edge.source, edge.dest)?;
            }
        }
        Ok(())
    }
}

fn describe(metric: CostMetric) -> &'static str {
    match metric {
        CostMetric::Count => "number of units moved",
        CostMetric::Weight => "total weight of units moved",
    }
}

fn chain<'e>(mut edges: impl Iterator<Item = &'e Edge>) -> String {
    let Some(first) = edges.next() else {
        return Units::empty().to_string();
    };
    let states: Vec<String> = std::iter::once(&first.source)
        .chain(std::iter::once(&first.dest))
        .chain(edges.map(|edge| &edge.dest))
        .map(Units::to_string)
        .collect();
    states.join(" -> ")
}
