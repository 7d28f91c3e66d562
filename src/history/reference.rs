//! ReferenceId - Durable subject identifier
//!
//! Per REHYDRATION.md §1:
//! - A reference identifies a subject independently of any live instance
//! - An empty reference denotes an absent subject
//!
//! This is a PURE TYPE with NO behavior beyond construction and access.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A durable, storage-independent identifier for a subject.
///
/// The payload is opaque to this crate; whatever string the backing store
/// uses to key its change log is acceptable. The empty string is reserved
/// for "no subject".
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReferenceId(String);

impl ReferenceId {
    /// Creates a reference from an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Mints a fresh random reference.
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the identifier string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this reference denotes no subject.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ReferenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ReferenceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ReferenceId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_reference_denotes_no_subject() {
        assert!(ReferenceId::new("").is_empty());
        assert!(!ReferenceId::new("staff/42").is_empty());
    }

    #[test]
    fn test_random_references_are_distinct() {
        assert_ne!(ReferenceId::random(), ReferenceId::random());
    }

    #[test]
    fn test_equality_is_by_payload() {
        assert_eq!(ReferenceId::new("a"), ReferenceId::from("a"));
        assert_ne!(ReferenceId::new("a"), ReferenceId::new("b"));
    }
}
