//! History Boundary
//!
//! The change log itself lives outside this crate; any persistent append-only
//! store can back it. This module defines the boundary and the two entry
//! modes for resolving a subject's history (by live object, by durable
//! reference), plus an in-memory backend for tests and tooling.
//!
//! This module provides:
//! - `ReferenceId` - Durable, storage-independent subject identifier
//! - `HistoryProvider` - The external change-log boundary
//! - `ReferenceResolver` - Durable-identity lookup for live subjects
//! - `ChangeResolver` - Entry modes over the provider
//! - `MemoryHistory` - In-memory provider

mod memory;
mod provider;
mod reference;
mod resolver;

pub use memory::MemoryHistory;
pub use provider::{HistoryProvider, ReferenceResolver};
pub use reference::ReferenceId;
pub use resolver::ChangeResolver;
