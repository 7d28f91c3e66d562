//! ChangeSet - Recorded history of one subject
//!
//! Per REHYDRATION.md §1-2:
//! - The changes recorded for one subject form an unordered set
//! - Ordering and selection are the selector's job, never the container's
//!
//! This is a PURE DATA CONTAINER with NO behavior.
//! - No time filtering
//! - No "select at" logic
//! - No ordering guarantees beyond insertion order

use super::Change;

/// The complete recorded history of a single subject.
///
/// Insertion order is preserved but carries no meaning other than acting as
/// the stable tie-break order during selection (REHYDRATION.md §2.2).
#[derive(Debug, Clone, Default)]
pub struct ChangeSet {
    changes: Vec<Change>,
}

impl ChangeSet {
    /// Creates an empty change set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a change set with initial changes.
    pub fn with_changes(changes: Vec<Change>) -> Self {
        Self { changes }
    }

    /// Appends a change.
    ///
    /// This is a structural operation only. No ordering enforcement.
    pub fn push(&mut self, change: Change) {
        self.changes.push(change);
    }

    /// Returns the number of recorded changes.
    #[inline]
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Returns true if nothing has been recorded.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Returns a slice of all recorded changes.
    ///
    /// This is a raw accessor. No time filtering is performed.
    #[inline]
    pub fn changes(&self) -> &[Change] {
        &self.changes
    }

    /// Consumes the set, returning the recorded changes.
    pub fn into_changes(self) -> Vec<Change> {
        self.changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::Timestamp;
    use crate::schema::{SubjectType, TypeKey};
    use chrono::DateTime;

    #[derive(Debug, Clone, Default, PartialEq, Hash)]
    struct Doc {
        body: String,
    }

    impl SubjectType for Doc {
        const TYPE_KEY: TypeKey = TypeKey::new("doc");
    }

    fn ts(secs: i64) -> Timestamp {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_change_set_starts_empty() {
        let set = ChangeSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }

    #[test]
    fn test_push_preserves_insertion_order() {
        let mut set = ChangeSet::new();
        set.push(Change::of(Doc::default(), ts(20)));
        set.push(Change::of(Doc::default(), ts(10)));

        // The container never reorders; later timestamps may come first.
        assert_eq!(set.len(), 2);
        assert_eq!(set.changes()[0].timestamp(), ts(20));
        assert_eq!(set.changes()[1].timestamp(), ts(10));
    }
}
