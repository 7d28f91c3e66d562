//! HistoryProvider / ReferenceResolver - External boundaries
//!
//! Per REHYDRATION.md §1:
//! - The change log is owned by an external store
//! - The provider returns the complete, unordered change set; ordering and
//!   selection happen in the selector, never at this boundary

use crate::change::Change;
use crate::schema::{Subject, TypeKey};

use super::ReferenceId;

/// The external change-log boundary.
///
/// Implementations return every change recorded for the subject, in any
/// order. They never filter by time.
pub trait HistoryProvider {
    /// Returns the complete change set recorded for one subject.
    fn changes_for(&self, subject: TypeKey, reference: &ReferenceId) -> Vec<Change>;
}

/// Durable-identity lookup for live subjects.
///
/// A subject without a durable reference has no history and is compared
/// structurally during deduplication (REHYDRATION.md §5).
pub trait ReferenceResolver {
    /// Returns the subject's durable reference, if it has one.
    fn reference_of(&self, subject: &dyn Subject) -> Option<ReferenceId>;

    /// Returns true if the subject carries a durable reference.
    fn has_reference(&self, subject: &dyn Subject) -> bool {
        self.reference_of(subject)
            .map_or(false, |reference| !reference.is_empty())
    }
}
