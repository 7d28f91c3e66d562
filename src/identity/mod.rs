//! Subject Identity
//!
//! Per REHYDRATION.md §5:
//! - Durable reference identity is preferred over structural identity
//! - The identity hash is derived from the same source as identity equality
//!
//! This module provides:
//! - `IdentityComparer` - Identity equality and hashing over erased subjects
//! - `VisitedSet` - Per-traversal cycle guard keyed by comparer identity

mod comparer;
mod visited;

pub use comparer::IdentityComparer;
pub use visited::VisitedSet;
