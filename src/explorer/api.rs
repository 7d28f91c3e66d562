//! HistoryExplorer - Public query and rehydration surface
//!
//! Constructed over the three external boundaries: the history provider,
//! the reference resolver, and the navigation schema. All methods are
//! read-only with respect to the caller's live graph; results are owned by
//! the caller and have no further connection to the history.

use crate::change::{Change, FieldChange, Timestamp};
use crate::history::{ChangeResolver, HistoryProvider, ReferenceId, ReferenceResolver};
use crate::identity::VisitedSet;
use crate::observability::{EventSink, RehydrationEvent};
use crate::schema::{NavigationSchema, Subject, SubjectType};
use crate::select::{SelectorFn, VersionSelector};

use super::CollectionPolicy;

/// Point-in-time queries over a subject's change history.
pub struct HistoryExplorer<'a> {
    pub(super) provider: &'a dyn HistoryProvider,
    pub(super) references: &'a dyn ReferenceResolver,
    pub(super) schema: &'a NavigationSchema,
    pub(super) collection_policy: CollectionPolicy,
    pub(super) events: Option<&'a dyn EventSink>,
}

impl<'a> HistoryExplorer<'a> {
    /// Creates an explorer over the given boundaries.
    ///
    /// Collections rebuild under `CollectionPolicy::RehydrateMembers`; no
    /// events are emitted until a sink is attached.
    pub fn new(
        provider: &'a dyn HistoryProvider,
        references: &'a dyn ReferenceResolver,
        schema: &'a NavigationSchema,
    ) -> Self {
        Self {
            provider,
            references,
            schema,
            collection_policy: CollectionPolicy::RehydrateMembers,
            events: None,
        }
    }

    /// Overrides how plural memberships are rebuilt.
    pub fn with_collection_policy(mut self, policy: CollectionPolicy) -> Self {
        self.collection_policy = policy;
        self
    }

    /// Attaches an event sink for traversal observability.
    pub fn with_events(mut self, sink: &'a dyn EventSink) -> Self {
        self.events = Some(sink);
        self
    }

    /// Returns the complete, unordered change set for a live subject.
    pub fn changes_to<T: SubjectType>(&self, model: &T) -> Vec<Change> {
        self.resolver().changes_for_subject(model)
    }

    /// Returns the complete, unordered change set for a durable reference.
    ///
    /// An empty reference has no history.
    pub fn changes_to_reference<T: SubjectType>(&self, reference: &ReferenceId) -> Vec<Change> {
        self.resolver().changes_for_reference(T::TYPE_KEY, reference)
    }

    /// Returns the history of one field, ascending by timestamp.
    ///
    /// Every snapshot is projected through `project`; consecutive changes
    /// that left the field untouched collapse into one entry.
    pub fn changes_to_field<T, V>(&self, model: &T, project: fn(&T) -> V) -> Vec<FieldChange<V>>
    where
        T: SubjectType,
        V: Clone + PartialEq,
    {
        let mut changes = self.changes_to(model);
        changes.sort_by_key(Change::timestamp);

        let mut field_changes: Vec<FieldChange<V>> = Vec::new();
        for change in &changes {
            let value = project(expect_snapshot::<T>(change));
            let repeated = field_changes
                .last()
                .map_or(false, |last| last.value() == &value);
            if !repeated {
                field_changes.push(FieldChange::new(value, change.timestamp()));
            }
        }
        field_changes
    }

    /// Returns the change that created the subject: the earliest recorded one.
    pub fn creation<T: SubjectType>(&self, model: &T) -> Option<Change> {
        let changes = self.changes_to(model);
        changes.iter().min_by_key(|change| change.timestamp()).cloned()
    }

    /// Reconstructs a live subject as it was at `at`.
    ///
    /// If no change predates `at`, the result is the live state. With
    /// `recursive` unset the result is shallow: relationship slots hold
    /// whatever the snapshot carried, which may be inconsistent with `at`.
    /// With `recursive` set, every reachable registered subject is replaced
    /// by its own point-in-time snapshot.
    pub fn object_at<T: SubjectType>(
        &self,
        model: &T,
        at: Timestamp,
        policy: Option<SelectorFn<'_>>,
        recursive: bool,
    ) -> T {
        let changes = self.changes_to(model);
        let snapshot = match VersionSelector::select_with(&changes, at, policy) {
            Some(change) => {
                self.emit(RehydrationEvent::SnapshotSelected {
                    subject: T::TYPE_KEY.name(),
                    timestamp: change.timestamp(),
                });
                change.value().deep_clone()
            }
            None => {
                self.emit(RehydrationEvent::NoHistoryFallback {
                    subject: T::TYPE_KEY.name(),
                });
                (model as &dyn Subject).deep_clone()
            }
        };
        let snapshot = if recursive {
            let mut visited = VisitedSet::new(self.references);
            self.rehydrate_children(snapshot, at, &mut visited)
        } else {
            snapshot
        };
        extract::<T>(snapshot)
    }

    /// Reconstructs a subject by durable reference as it was at `at`.
    ///
    /// There is no live fallback in this mode: an empty reference, or a
    /// history with no change at or before `at`, yields nothing. The
    /// provider is not consulted for an empty reference.
    pub fn object_at_reference<T: SubjectType>(
        &self,
        reference: &ReferenceId,
        at: Timestamp,
        policy: Option<SelectorFn<'_>>,
        recursive: bool,
    ) -> Option<T> {
        if reference.is_empty() {
            return None;
        }
        let changes = self.resolver().changes_for_reference(T::TYPE_KEY, reference);
        let change = VersionSelector::select_with(&changes, at, policy)?;
        self.emit(RehydrationEvent::SnapshotSelected {
            subject: T::TYPE_KEY.name(),
            timestamp: change.timestamp(),
        });

        let snapshot = change.value().deep_clone();
        let snapshot = if recursive {
            let mut visited = VisitedSet::new(self.references);
            self.rehydrate_children(snapshot, at, &mut visited)
        } else {
            snapshot
        };
        Some(extract::<T>(snapshot))
    }

    pub(super) fn resolver(&self) -> ChangeResolver<'_> {
        ChangeResolver::new(self.provider, self.references)
    }

    pub(super) fn emit(&self, event: RehydrationEvent) {
        if let Some(sink) = self.events {
            sink.emit(&event);
        }
    }
}

fn expect_snapshot<T: SubjectType>(change: &Change) -> &T {
    change.value_of::<T>().unwrap_or_else(|| {
        panic!(
            "change history for '{}' holds a snapshot of type '{}'",
            T::TYPE_KEY,
            change.value().type_key()
        )
    })
}

fn extract<T: SubjectType>(snapshot: Box<dyn Subject>) -> T {
    let found = snapshot.type_key();
    match snapshot.into_any().downcast::<T>() {
        Ok(snapshot) => *snapshot,
        Err(_) => panic!(
            "rehydrated subject for '{}' has type '{}'",
            T::TYPE_KEY,
            found
        ),
    }
}
