//! The tab state registry: group id to active tab index.
//!
//! This is the one piece of mutable shared state in the system. Multiple
//! independent callback invocations (render, reconcile, click, global sweep)
//! must agree on one authoritative active index per group, so the mapping
//! lives behind a lock and is passed to every handler rather than living in an
//! ambient global.
//!
//! Invariant: an entry exists if and only if a corresponding header strip
//! currently exists in the tree, eventually. An entry may transiently outlive
//! a just-removed header until the next global change notification triggers
//! the orphan sweep.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::properties::GroupId;

#[derive(Debug, Default)]
pub struct TabRegistry {
    slots: RwLock<BTreeMap<GroupId, usize>>,
}

impl TabRegistry {
    /// The stored active index for `group`, recording and returning 0 when
    /// absent. Never fails.
    pub fn get(&self, group: &GroupId) -> usize {
        *self.slots.write().entry(group.clone()).or_insert(0)
    }

    /// Unconditional overwrite. No bounds validation here: an out-of-range
    /// index simply fails to match any content pane downstream, which is an
    /// accepted degraded state rather than an error.
    pub fn set(&self, group: &GroupId, index: usize) {
        self.slots.write().insert(group.clone(), index);
    }

    /// Remove the entry for `group`; idempotent.
    pub fn evict(&self, group: &GroupId) {
        self.slots.write().remove(group);
    }

    /// Snapshot of the current entries for a sweep. Each call re-enumerates
    /// current state; no ordering is guaranteed to callers.
    pub fn entries(&self) -> Vec<(GroupId, usize)> {
        self.slots
            .read()
            .iter()
            .map(|(group, index)| (group.clone(), *index))
            .collect()
    }

    pub fn contains(&self, group: &GroupId) -> bool {
        self.slots.read().contains_key(group)
    }

    pub fn len(&self) -> usize {
        self.slots.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.read().is_empty()
    }
}
