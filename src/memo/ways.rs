// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive subset-sum decomposition.
//!
//! For a multiset of units, find every distinct sub-multiset ("way") reaching
//! every achievable sum.
//!
//! # Algorithm
//!
//! A dynamic program over achievable sums, one unit at a time:
//!
//! ```text
//! ways[0] = { () }
//! for each unit w:
//!     next = copy of ways                 // write generation
//!     for each (s, set) in ways:          // frozen snapshot
//!         for each way in set:
//!             next[s + w] += way ∪ {w}
//!     ways = next
//! ```
//!
//! Reading from the snapshot while writing into `next` means a unit is used at
//! most once per way. Extending the empty way at sum 0 is what registers the
//! singleton `(w)` at sum `w`.
//!
//! # Complexity
//!
//! Exponential in the number of distinct combinations. Only suitable for small
//! inventories (tens of units).
//!
//! # Example
//!
//! ```
//! use plate_planner::memo::enumerate_ways;
//! use plate_planner::units::Units;
//!
//! let ways = enumerate_ways(&Units::new(vec![5, 10, 10]));
//!
//! let fifteen: Vec<String> = ways.get(15).unwrap().iter().map(|w| w.to_string()).collect();
//! assert_eq!(fifteen, vec!["(5,10)"]);
//! assert_eq!(ways.sums().collect::<Vec<_>>(), vec![0, 5, 10, 15, 20, 25]);
//! ```

use crate::units::Units;
use std::collections::{BTreeMap, BTreeSet};

/// Every way of reaching every achievable sum.
///
/// Sums with no way are absent. Sum 0 always maps to `{()}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaysOfSum {
    ways: BTreeMap<u64, BTreeSet<Units>>,
}

impl WaysOfSum {
    /// The ways reaching `sum`, or `None` if the sum is unreachable.
    pub fn get(&self, sum: u64) -> Option<&BTreeSet<Units>> {
        self.ways.get(&sum)
    }

    pub fn contains_sum(&self, sum: u64) -> bool {
        self.ways.contains_key(&sum)
    }

    /// Achievable sums in ascending order.
    pub fn sums(&self) -> impl Iterator<Item = u64> + '_ {
        self.ways.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u64, &BTreeSet<Units>)> {
        self.ways.iter().map(|(&sum, ways)| (sum, ways))
    }

    /// Total number of ways across all sums.
    pub fn way_count(&self) -> usize {
        self.ways.values().map(BTreeSet::len).sum()
    }
}

/// Enumerate every distinct way of reaching every achievable sum from `weights`.
pub fn enumerate_ways(weights: &Units) -> WaysOfSum {
    let mut ways: BTreeMap<u64, BTreeSet<Units>> = BTreeMap::new();
    ways.entry(0).or_default().insert(Units::empty());

    for weight in weights.iter() {
        let mut next = ways.clone();
        for (&sum, ways_of_sum) in &ways {
            let combined = next.entry(sum + weight).or_default();
            for way in ways_of_sum {
                combined.insert(way.with(weight));
            }
        }
        ways = next;
    }

    WaysOfSum { ways }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(set: &BTreeSet<Units>) -> Vec<String> {
        set.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_empty_input_has_only_root() {
        let ways = enumerate_ways(&Units::empty());
        assert_eq!(ways.sums().collect::<Vec<_>>(), vec![0]);
        assert_eq!(strings(ways.get(0).unwrap()), vec!["()"]);
    }

    #[test]
    fn test_each_unit_used_once_per_way() {
        // A single 5 must never produce (5,5).
        let ways = enumerate_ways(&Units::new(vec![5]));
        assert_eq!(ways.sums().collect::<Vec<_>>(), vec![0, 5]);
        assert!(ways.get(10).is_none());
    }

    #[test]
    fn test_repeated_units_collapse_permutations() {
        let ways = enumerate_ways(&Units::new(vec![10, 10, 10]));
        assert_eq!(strings(ways.get(10).unwrap()), vec!["(10)"]);
        assert_eq!(strings(ways.get(20).unwrap()), vec!["(10,10)"]);
        assert_eq!(strings(ways.get(30).unwrap()), vec!["(10,10,10)"]);
        assert_eq!(ways.way_count(), 4);
    }

    #[test]
    fn test_multiple_ways_for_one_sum() {
        let ways = enumerate_ways(&Units::new(vec![5, 10, 10, 10, 25, 25, 45, 45]));
        assert_eq!(strings(ways.get(25).unwrap()), vec!["(5,10,10)", "(25)"]);
        assert_eq!(strings(ways.get(15).unwrap()), vec!["(5,10)"]);
        assert!(!ways.contains_sum(7));
    }

    #[test]
    fn test_total_sum_is_whole_input() {
        let weights = Units::new(vec![5, 10, 25]);
        let ways = enumerate_ways(&weights);
        assert_eq!(ways.get(40).unwrap().iter().collect::<Vec<_>>(), vec![&weights]);
    }

    #[test]
    fn test_input_order_irrelevant() {
        let a = enumerate_ways(&Units::new(vec![25, 5, 10, 10]));
        let b = enumerate_ways(&Units::new(vec![10, 5, 10, 25]));
        assert_eq!(a, b);
    }
}
