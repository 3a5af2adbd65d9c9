// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Units type: a canonical multiset of unit values.
//!
//! A multiset is stored as a sorted sequence, so two multisets holding the same
//! values compare, order and hash identically regardless of how they were built.
//! This is what lets layers and way-sets deduplicate states by plain equality.
//!
//! # Examples
//!
//! ```
//! use plate_planner::units::Units;
//!
//! let a = Units::new(vec![10, 5, 10]);
//! let b: Units = [10, 10, 5].into_iter().collect();
//!
//! assert_eq!(a, b);
//! assert_eq!(a.sum(), 25);
//! assert_eq!(format!("{}", a), "(5,10,10)");
//! assert_eq!(format!("{}", Units::empty()), "()");
//! ```

use crate::units::Unit;
use serde::Serialize;
use std::fmt;

/// A multiset of units in canonical (ascending) order.
///
/// Ordering is lexicographic over the sorted values, which gives way-sets and
/// layers a deterministic iteration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "Vec<Unit>")]
pub struct Units(Vec<Unit>);

impl Units {
    /// The empty multiset (the root state).
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Create a multiset from values in any order.
    pub fn new(mut values: Vec<Unit>) -> Self {
        values.sort_unstable();
        Self(values)
    }

    /// Number of units, counting repeats.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total value of all units.
    pub fn sum(&self) -> u64 {
        self.0.iter().sum()
    }

    /// The units in ascending order.
    pub fn as_slice(&self) -> &[Unit] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Unit> + '_ {
        self.0.iter().copied()
    }

    /// Return a new multiset with one more copy of `unit`.
    ///
    /// The insertion point keeps the sequence sorted, so no re-sort is needed.
    pub fn with(&self, unit: Unit) -> Self {
        let pos = self.0.partition_point(|&u| u <= unit);
        let mut values = Vec::with_capacity(self.0.len() + 1);
        values.extend_from_slice(&self.0[..pos]);
        values.push(unit);
        values.extend_from_slice(&self.0[pos..]);
        Self(values)
    }

    /// Multiset union keeping all copies from both sides.
    pub fn merged(&self, other: &Units) -> Self {
        self.iter().chain(other.iter()).collect()
    }
}

impl From<Vec<Unit>> for Units {
    fn from(values: Vec<Unit>) -> Self {
        Self::new(values)
    }
}

impl From<Units> for Vec<Unit> {
    fn from(units: Units) -> Self {
        units.0
    }
}

impl FromIterator<Unit> for Units {
    fn from_iter<I: IntoIterator<Item = Unit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, unit) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", unit)?;
        }
        write!(f, ")")
    }
}
