//! Version Selection
//!
//! Per REHYDRATION.md §2:
//! - Selection picks the change that was current at a target time
//! - Evaluated identically every time for identical inputs
//!
//! This module provides:
//! - `VersionSelector` - Stateless point-in-time selection
//! - `SelectorFn` - Caller-supplied override of the default policy

mod selector;

pub use selector::{SelectorFn, VersionSelector};
