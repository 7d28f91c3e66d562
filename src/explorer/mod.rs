//! History Explorer
//!
//! The public surface of the crate: change history queries and point-in-time
//! reconstruction of a subject, shallow or recursive across its navigable
//! relationships.
//!
//! Per REHYDRATION.md §3, traversal is non-destructive: every result is an
//! owned graph built from deep clones; the caller's live objects are never
//! touched.
//!
//! This module provides:
//! - `HistoryExplorer` - The query and rehydration surface
//! - `CollectionPolicy` - How plural memberships are rebuilt

mod api;
mod collection;
mod rehydrate;

pub use api::HistoryExplorer;
pub use collection::CollectionPolicy;
