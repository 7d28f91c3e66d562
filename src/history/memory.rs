//! MemoryHistory - In-memory change log
//!
//! A provider backend with no durability, suitable for tests, tooling, and
//! embedding. Stores one change set per (type, reference) pair; append is
//! the only write operation, mirroring the append-only discipline of a real
//! change log.

use std::collections::HashMap;

use crate::change::{Change, ChangeSet, Timestamp};
use crate::schema::{SubjectType, TypeKey};

use super::{HistoryProvider, ReferenceId};

/// An in-memory, append-only change log.
#[derive(Debug, Default)]
pub struct MemoryHistory {
    chains: HashMap<(TypeKey, ReferenceId), ChangeSet>,
}

impl MemoryHistory {
    /// Creates an empty change log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a snapshot of a subject at the given instant.
    pub fn append<T: SubjectType>(&mut self, reference: &ReferenceId, value: T, at: Timestamp) {
        self.append_change(T::TYPE_KEY, reference, Change::of(value, at));
    }

    /// Records an already-built change.
    pub fn append_change(&mut self, subject: TypeKey, reference: &ReferenceId, change: Change) {
        self.chains
            .entry((subject, reference.clone()))
            .or_default()
            .push(change);
    }

    /// Returns the number of subjects with recorded history.
    #[inline]
    pub fn subject_count(&self) -> usize {
        self.chains.len()
    }

    /// Returns the number of changes recorded for one subject.
    pub fn change_count(&self, subject: TypeKey, reference: &ReferenceId) -> usize {
        self.chains
            .get(&(subject, reference.clone()))
            .map_or(0, ChangeSet::len)
    }
}

impl HistoryProvider for MemoryHistory {
    fn changes_for(&self, subject: TypeKey, reference: &ReferenceId) -> Vec<Change> {
        self.chains
            .get(&(subject, reference.clone()))
            .map_or_else(Vec::new, |set| set.changes().to_vec())
    }
}
