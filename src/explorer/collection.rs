//! Collection rehydration
//!
//! Per REHYDRATION.md §4 - the collection rule:
//!
//! 1. A member already in the visited set is dropped from the rebuilt
//!    membership; it was rehydrated elsewhere in this traversal
//! 2. Every remaining member is snapshot-selected and recursively
//!    rehydrated
//! 3. The policy decides what is inserted: the rehydrated member, or the
//!    pre-rehydration one (legacy behavior, in which plural members keep
//!    their live state while singular relationships are rewritten)

use crate::change::Timestamp;
use crate::identity::VisitedSet;
use crate::schema::Subject;

use super::HistoryExplorer;

/// How a plural relationship's membership is rebuilt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollectionPolicy {
    /// Insert each member's fully rehydrated point-in-time state.
    #[default]
    RehydrateMembers,
    /// Insert the pre-rehydration members unchanged: plural members keep
    /// their live state while singular relationships are rewritten. The
    /// selection work still runs, but its result is discarded. A documented
    /// limitation, not a default.
    PreserveOriginalMembers,
}

impl<'a> HistoryExplorer<'a> {
    /// Rebuilds a plural relationship's membership at `at`.
    ///
    /// Membership NOT in the result: members whose identity was already
    /// visited in this traversal. Member order is otherwise preserved.
    pub(super) fn rehydrate_collection(
        &self,
        members: Vec<Box<dyn Subject>>,
        at: Timestamp,
        visited: &mut VisitedSet<'_>,
    ) -> Vec<Box<dyn Subject>> {
        let mut rebuilt = Vec::with_capacity(members.len());
        for member in members {
            if visited.contains(member.as_ref()) {
                continue;
            }
            let snapshot = self.snapshot_at(member.as_ref(), at);
            // Marks the member's identity visited as a side effect.
            let rehydrated = self.rehydrate_children(snapshot, at, visited);
            match self.collection_policy {
                CollectionPolicy::RehydrateMembers => rebuilt.push(rehydrated),
                CollectionPolicy::PreserveOriginalMembers => rebuilt.push(member),
            }
        }
        rebuilt
    }
}
