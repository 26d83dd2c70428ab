use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::models::MealSlot;

/// Weekly-scope bookkeeping of which meal names each slot type has
/// already consumed, keyed case-insensitively.
///
/// Local to one weekly run; resetting one slot type never touches the
/// others.
#[derive(Debug, Default)]
pub struct UsageTracker {
    used: HashMap<MealSlot, HashSet<String>>,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_used(&self, slot: MealSlot, name: &str) -> bool {
        self.used
            .get(&slot)
            .is_some_and(|names| names.contains(&name.to_lowercase()))
    }

    pub fn mark_used(&mut self, slot: MealSlot, name: &str) {
        self.used
            .entry(slot)
            .or_default()
            .insert(name.to_lowercase());
    }

    /// Clear usage for one exhausted slot type only.
    pub fn reset_slot(&mut self, slot: MealSlot) {
        debug!(slot = %slot, "slot type exhausted, resetting usage");
        self.used.remove(&slot);
    }

    pub fn used_count(&self, slot: MealSlot) -> usize {
        self.used.get(&slot).map_or(0, HashSet::len)
    }
}
