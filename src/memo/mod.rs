// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Memoized decomposition data.
//!
//! Subset-sum decompositions depend only on the input multiset, and the graph
//! builder asks for the same pool over and over (every state's pool is the whole
//! inventory, reordered). [`WaysMemo`] computes each distinct pool once per run.

pub mod ways;

pub use ways::{enumerate_ways, WaysOfSum};

use crate::statistics::{Counters, Statistics};
use crate::units::Units;
use ahash::AHashMap;
use std::collections::hash_map::Entry;
use tracing::debug;

/// Cache of decompositions keyed by canonical input multiset.
#[derive(Debug, Default)]
pub struct WaysMemo {
    cache: AHashMap<Units, WaysOfSum>,
}

impl WaysMemo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decomposition of `pool`, computed on first request.
    pub fn ways(&mut self, pool: &Units, stats: &mut Statistics) -> &WaysOfSum {
        match self.cache.entry(pool.clone()) {
            Entry::Occupied(entry) => {
                stats.increment(Counters::WaysReused);
                entry.into_mut()
            }
            Entry::Vacant(entry) => {
                let ways = enumerate_ways(pool);
                debug!(
                    pool = %pool,
                    sums = ways.sums().count(),
                    ways = ways.way_count(),
                    "Computed decomposition"
                );
                stats.increment(Counters::WaysComputed);
                entry.insert(ways)
            }
        }
    }

    /// Number of distinct pools decomposed so far.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
