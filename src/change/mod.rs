//! Change Domain Types
//!
//! Per REHYDRATION.md §1:
//! - A change is an immutable timestamped snapshot of a subject's own field values
//! - Changes never record relationships
//! - The changes recorded for one subject form an unordered set
//!
//! This module provides:
//! - `Timestamp` - The wall-clock time axis of the change log
//! - `Change` - Immutable snapshot record
//! - `FieldChange` - A single field's value at a point in time
//! - `ChangeSet` - The recorded history of one subject

mod record;
mod set;

pub use record::{Change, FieldChange, Timestamp};
pub use set::ChangeSet;
