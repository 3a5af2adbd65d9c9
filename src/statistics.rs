// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Statistics are stored in the context and incremented by the memo, the graph
//! builder and the path enumerator as they work.

use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount as EnumCountMacro, EnumIter};

#[derive(EnumCountMacro, EnumIter, Display, Debug, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Counters {
    /// Decompositions computed from scratch.
    WaysComputed,
    /// Decompositions answered from the memo.
    WaysReused,
    OptionsFound,
    EdgesAdded,
    /// Options whose (source, dest) edge already existed.
    DuplicateEdges,
    PartialPathsExtended,
    /// Edges skipped because they did not continue the partial path's last state.
    DominoRejections,
    CompletePaths,
}

const COUNT: usize = Counters::COUNT;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub fn increment(&mut self, counter: Counters) {
        self.add(counter, 1);
    }

    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// All counters with their values, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Counters, u64)> + '_ {
        Counters::iter().map(move |counter| (counter, self.get(counter)))
    }
}
