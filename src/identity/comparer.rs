//! IdentityComparer - Reference-first subject identity
//!
//! Per REHYDRATION.md §5 - the EXACT identity rule:
//!
//! Two subjects are the same identity when:
//! 1. both are absent, or
//! 2. both have the same type key, and
//!    - both carry a durable reference and the references are equal, or
//!    - at least one carries no reference and the subjects are
//!      structurally equal
//!
//! The hash is derived from the same source as equality: the reference when
//! present, the structural hash otherwise. Hash and equality never diverge
//! for two subjects hashed under the same source.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::history::{ReferenceId, ReferenceResolver};
use crate::schema::Subject;

/// Identity equality and hashing over erased subjects.
///
/// Stateless apart from the resolver it consults; evaluated identically
/// every time for identical inputs.
pub struct IdentityComparer<'a> {
    references: &'a dyn ReferenceResolver,
}

impl<'a> IdentityComparer<'a> {
    /// Creates a comparer over the given resolver.
    pub fn new(references: &'a dyn ReferenceResolver) -> Self {
        Self { references }
    }

    /// Decides whether two possibly-absent subjects are the same identity.
    pub fn eq(&self, a: Option<&dyn Subject>, b: Option<&dyn Subject>) -> bool {
        match (a, b) {
            (None, None) => true,
            (None, Some(_)) | (Some(_), None) => false,
            (Some(a), Some(b)) => {
                if a.type_key() != b.type_key() {
                    return false;
                }
                match (self.durable(a), self.durable(b)) {
                    (Some(ra), Some(rb)) => ra == rb,
                    _ => a.value_eq(b),
                }
            }
        }
    }

    /// Returns the identity hash of a subject.
    ///
    /// A subject's hash is stable only while its reference presence is
    /// stable: assigning a reference to a previously unsaved subject moves
    /// it to the reference-derived hash.
    pub fn hash(&self, subject: &dyn Subject) -> u64 {
        let mut hasher = DefaultHasher::new();
        subject.type_key().hash(&mut hasher);
        match self.durable(subject) {
            Some(reference) => reference.hash(&mut hasher),
            None => subject.value_hash().hash(&mut hasher),
        }
        hasher.finish()
    }

    fn durable(&self, subject: &dyn Subject) -> Option<ReferenceId> {
        self.references
            .reference_of(subject)
            .filter(|reference| !reference.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SubjectType, TypeKey};

    #[derive(Debug, Clone, Default, PartialEq, Hash)]
    struct Doc {
        reference: Option<ReferenceId>,
        body: String,
    }

    impl SubjectType for Doc {
        const TYPE_KEY: TypeKey = TypeKey::new("doc");
    }

    #[derive(Debug, Clone, Default, PartialEq, Hash)]
    struct Tag {
        reference: Option<ReferenceId>,
    }

    impl SubjectType for Tag {
        const TYPE_KEY: TypeKey = TypeKey::new("tag");
    }

    struct Refs;

    impl ReferenceResolver for Refs {
        fn reference_of(&self, subject: &dyn Subject) -> Option<ReferenceId> {
            if let Some(doc) = subject.as_any().downcast_ref::<Doc>() {
                return doc.reference.clone();
            }
            subject
                .as_any()
                .downcast_ref::<Tag>()
                .and_then(|tag| tag.reference.clone())
        }
    }

    fn saved(reference: &str, body: &str) -> Doc {
        Doc {
            reference: Some(ReferenceId::new(reference)),
            body: body.to_string(),
        }
    }

    fn unsaved(body: &str) -> Doc {
        Doc {
            reference: None,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_both_absent_are_equal() {
        let comparer = IdentityComparer::new(&Refs);
        assert!(comparer.eq(None, None));
    }

    #[test]
    fn test_one_absent_is_unequal() {
        let comparer = IdentityComparer::new(&Refs);
        let doc = unsaved("x");
        assert!(!comparer.eq(Some(&doc), None));
        assert!(!comparer.eq(None, Some(&doc)));
    }

    #[test]
    fn test_different_types_are_unequal() {
        let comparer = IdentityComparer::new(&Refs);
        let doc = saved("shared", "x");
        let tag = Tag {
            reference: Some(ReferenceId::new("shared")),
        };
        // Same reference payload, different type: never the same identity.
        assert!(!comparer.eq(Some(&doc), Some(&tag as &dyn Subject)));
    }

    #[test]
    fn test_reference_identity_wins_over_structure() {
        let comparer = IdentityComparer::new(&Refs);
        let v1 = saved("doc/1", "old body");
        let v2 = saved("doc/1", "new body");
        let other = saved("doc/2", "old body");

        // Same subject, different field values: same identity.
        assert!(comparer.eq(Some(&v1), Some(&v2)));
        // Identical field values, different subject: different identity.
        assert!(!comparer.eq(Some(&v1), Some(&other)));
    }

    #[test]
    fn test_structural_fallback_without_references() {
        let comparer = IdentityComparer::new(&Refs);
        let a = unsaved("same");
        let b = unsaved("same");
        let c = unsaved("different");

        assert!(comparer.eq(Some(&a), Some(&b)));
        assert!(!comparer.eq(Some(&a), Some(&c)));
    }

    #[test]
    fn test_hash_follows_the_equality_source() {
        let comparer = IdentityComparer::new(&Refs);

        // Reference-equal subjects hash equal even with different fields.
        let v1 = saved("doc/1", "old");
        let v2 = saved("doc/1", "new");
        assert_eq!(comparer.hash(&v1), comparer.hash(&v2));

        // Structurally-equal unsaved subjects hash equal.
        let a = unsaved("same");
        let b = unsaved("same");
        assert_eq!(comparer.hash(&a), comparer.hash(&b));
    }
}
