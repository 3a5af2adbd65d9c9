// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The fixed inventory of units for a run, and multiset difference against it.

use crate::error::{PlanError, Result};
use crate::units::{Unit, Units};
use std::collections::BTreeMap;

/// The fixed multiset of units available for the whole run.
///
/// Never mutated after construction; every state in the transition graph is a
/// sub-multiset of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inventory {
    units: Units,
}

impl Inventory {
    /// Create an inventory, rejecting zero-valued units and totals that do not
    /// fit in a `u64`.
    ///
    /// Every state and every decomposition sum is bounded by the total, so once
    /// it fits no sum over inventory units can overflow.
    pub fn new(values: Vec<Unit>) -> Result<Self> {
        if let Some(position) = values.iter().position(|&u| u == 0) {
            return Err(PlanError::NonPositiveUnit { position });
        }
        let mut total: u64 = 0;
        for (position, &unit) in values.iter().enumerate() {
            total = total
                .checked_add(unit)
                .ok_or(PlanError::InventoryTooLarge { position })?;
        }
        Ok(Self {
            units: Units::new(values),
        })
    }

    pub fn units(&self) -> &Units {
        &self.units
    }

    pub fn total(&self) -> u64 {
        self.units.sum()
    }

    /// Units still usable once `current` is active: the multiset difference
    /// `inventory \ current`.
    ///
    /// Each occurrence in `current` cancels exactly one occurrence in the
    /// inventory. Fails with [`PlanError::SubMultisetViolation`] if `current`
    /// is not a sub-multiset of the inventory.
    pub fn available(&self, current: &Units) -> Result<Units> {
        let mut to_cancel: BTreeMap<Unit, usize> = BTreeMap::new();
        for unit in current.iter() {
            *to_cancel.entry(unit).or_insert(0) += 1;
        }

        let mut remaining = Vec::with_capacity(self.units.len());
        for unit in self.units.iter() {
            match to_cancel.get_mut(&unit) {
                Some(count) if *count > 0 => *count -= 1,
                _ => remaining.push(unit),
            }
        }

        if let Some((&unit, &missing)) = to_cancel.iter().find(|(_, &count)| count > 0) {
            return Err(PlanError::SubMultisetViolation { unit, missing });
        }
        Ok(Units::new(remaining))
    }
}
