//! retrospect - A strict, deterministic point-in-time object graph
//! reconstruction library
//!
//! Given an append-only log of timestamped value snapshots per subject,
//! `retrospect` rebuilds the state of a subject - and, recursively, of every
//! subject reachable from it through navigable relationships - as it existed
//! at an arbitrary point in time.
//!
//! The change log versions only a subject's own fields. Relationships are
//! structural facts of the live store, so a recursive, cycle-safe rewrite
//! pass (REHYDRATION.md §3) reconstructs a consistent historical graph on
//! top of the point-in-time selection rule (REHYDRATION.md §2).
//!
//! The storage engine behind the change log, the live object store, and the
//! derivation of durable references are external collaborators, consumed
//! through the `HistoryProvider`, `ReferenceResolver`, and
//! `NavigationSchema` boundaries.

pub mod change;
pub mod explorer;
pub mod history;
pub mod identity;
pub mod observability;
pub mod schema;
pub mod select;

pub use change::{Change, ChangeSet, FieldChange, Timestamp};
pub use explorer::{CollectionPolicy, HistoryExplorer};
pub use history::{ChangeResolver, HistoryProvider, MemoryHistory, ReferenceId, ReferenceResolver};
pub use identity::{IdentityComparer, VisitedSet};
pub use observability::{EventSink, JsonLogger, NullSink, RehydrationEvent, Severity, SkipReason};
pub use schema::{
    NavigationSchema, RelationshipDescriptor, RelationshipKind, SchemaError, SchemaResult,
    Subject, SubjectType, TypeDescriptor, TypeKey,
};
pub use select::{SelectorFn, VersionSelector};
