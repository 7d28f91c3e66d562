//! Recursive graph rehydration
//!
//! Per REHYDRATION.md §3 - the traversal rules:
//!
//! 1. A root already in the visited set is returned unchanged
//! 2. A root whose type is not registered has no walkable relationships
//! 3. A relationship is skipped when its target is unregistered or its
//!    current value is absent; an absent value is never constructed
//! 4. A singular relationship is rewritten with the fully rehydrated
//!    snapshot of its current value
//! 5. A plural relationship is rebuilt by the collection rule
//!
//! The change log versions only a subject's own fields. Relationships are
//! structural facts the live store manages independently, so a consistent
//! historical graph requires this separate rewrite pass, driven by the
//! registered relationship metadata rather than by change records.

use crate::change::Timestamp;
use crate::identity::VisitedSet;
use crate::observability::{RehydrationEvent, SkipReason};
use crate::schema::{RelationshipKind, Subject};
use crate::select::VersionSelector;

use super::HistoryExplorer;

impl<'a> HistoryExplorer<'a> {
    /// Rewrites every reachable relationship slot of `root` to its state at
    /// `at`. Returns the (owned, possibly rewritten) root.
    pub(super) fn rehydrate_children(
        &self,
        root: Box<dyn Subject>,
        at: Timestamp,
        visited: &mut VisitedSet<'_>,
    ) -> Box<dyn Subject> {
        if !visited.insert(root.as_ref()) {
            self.emit(RehydrationEvent::CycleDetected {
                subject: root.type_key().name(),
            });
            return root;
        }
        let Some(descriptor) = self.schema.descriptor(root.type_key()) else {
            return root;
        };

        let mut root = root;
        for relationship in descriptor.relationships() {
            if !self.schema.is_rehydratable(relationship.target()) {
                self.emit(RehydrationEvent::RelationshipSkipped {
                    subject: descriptor.key().name(),
                    relationship: relationship.name(),
                    reason: SkipReason::TargetNotRehydratable,
                });
                continue;
            }
            match relationship.kind() {
                RelationshipKind::Plural => {
                    let Some(members) = relationship.get_plural(root.as_ref()) else {
                        self.emit(RehydrationEvent::RelationshipSkipped {
                            subject: descriptor.key().name(),
                            relationship: relationship.name(),
                            reason: SkipReason::ValueAbsent,
                        });
                        continue;
                    };
                    let rebuilt = self.rehydrate_collection(members, at, visited);
                    self.emit(RehydrationEvent::CollectionRebuilt {
                        subject: descriptor.key().name(),
                        relationship: relationship.name(),
                        members: rebuilt.len(),
                    });
                    relationship.set_plural(root.as_mut(), rebuilt);
                }
                RelationshipKind::Singular => {
                    let Some(value) = relationship.get_singular(root.as_ref()) else {
                        self.emit(RehydrationEvent::RelationshipSkipped {
                            subject: descriptor.key().name(),
                            relationship: relationship.name(),
                            reason: SkipReason::ValueAbsent,
                        });
                        continue;
                    };
                    let snapshot = self.snapshot_at(value.as_ref(), at);
                    let child = self.rehydrate_children(snapshot, at, visited);
                    relationship.set_singular(root.as_mut(), child);
                }
            }
        }
        root
    }

    /// Shallow point-in-time snapshot of an erased subject: the selected
    /// change's value, or a deep clone of the subject itself when no change
    /// predates `at`.
    pub(super) fn snapshot_at(&self, subject: &dyn Subject, at: Timestamp) -> Box<dyn Subject> {
        let changes = self.resolver().changes_for_subject(subject);
        match VersionSelector::select(&changes, at) {
            Some(change) => {
                self.emit(RehydrationEvent::SnapshotSelected {
                    subject: subject.type_key().name(),
                    timestamp: change.timestamp(),
                });
                change.value().deep_clone()
            }
            None => {
                self.emit(RehydrationEvent::NoHistoryFallback {
                    subject: subject.type_key().name(),
                });
                subject.deep_clone()
            }
        }
    }
}
