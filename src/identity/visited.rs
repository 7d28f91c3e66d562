//! VisitedSet - Per-traversal cycle guard
//!
//! Per REHYDRATION.md §3 and §7:
//! - No subject identity is rehydrated twice within one traversal
//! - Each top-level recursive call owns one fresh set; sets are never
//!   shared or reused across traversals
//!
//! Membership is decided by the identity comparer, so two distinct
//! snapshot instances of the same stored subject count as one visit.

use std::collections::HashMap;

use crate::history::ReferenceResolver;
use crate::schema::Subject;

use super::IdentityComparer;

/// A set of already-visited subject identities.
///
/// Hash-bucketed by comparer hash; entries within a bucket are deduplicated
/// by comparer equality. Inserted subjects are retained as deep clones, so
/// the set never borrows from the graph under traversal.
pub struct VisitedSet<'a> {
    comparer: IdentityComparer<'a>,
    buckets: HashMap<u64, Vec<Box<dyn Subject>>>,
    len: usize,
}

impl<'a> VisitedSet<'a> {
    /// Creates an empty set resolving identities through `references`.
    pub fn new(references: &'a dyn ReferenceResolver) -> Self {
        Self {
            comparer: IdentityComparer::new(references),
            buckets: HashMap::new(),
            len: 0,
        }
    }

    /// Marks a subject visited. Returns false if it already was.
    pub fn insert(&mut self, subject: &dyn Subject) -> bool {
        let hash = self.comparer.hash(subject);
        let bucket = self.buckets.entry(hash).or_default();
        if bucket
            .iter()
            .any(|seen| self.comparer.eq(Some(seen.as_ref()), Some(subject)))
        {
            return false;
        }
        bucket.push(subject.deep_clone());
        self.len += 1;
        true
    }

    /// Returns true if the subject's identity has been visited.
    pub fn contains(&self, subject: &dyn Subject) -> bool {
        let hash = self.comparer.hash(subject);
        self.buckets.get(&hash).map_or(false, |bucket| {
            bucket
                .iter()
                .any(|seen| self.comparer.eq(Some(seen.as_ref()), Some(subject)))
        })
    }

    /// Returns the number of visited identities.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if nothing has been visited.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::ReferenceId;
    use crate::schema::{SubjectType, TypeKey};

    #[derive(Debug, Clone, Default, PartialEq, Hash)]
    struct Doc {
        reference: Option<ReferenceId>,
        body: String,
    }

    impl SubjectType for Doc {
        const TYPE_KEY: TypeKey = TypeKey::new("doc");
    }

    struct Refs;

    impl ReferenceResolver for Refs {
        fn reference_of(&self, subject: &dyn Subject) -> Option<ReferenceId> {
            subject
                .as_any()
                .downcast_ref::<Doc>()
                .and_then(|doc| doc.reference.clone())
        }
    }

    fn saved(reference: &str, body: &str) -> Doc {
        Doc {
            reference: Some(ReferenceId::new(reference)),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_first_insert_succeeds_second_fails() {
        let mut visited = VisitedSet::new(&Refs);
        let doc = saved("doc/1", "x");

        assert!(visited.insert(&doc));
        assert!(!visited.insert(&doc));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_distinct_snapshots_of_one_subject_count_once() {
        let mut visited = VisitedSet::new(&Refs);
        let live = saved("doc/1", "live state");
        let snapshot = saved("doc/1", "historical state");

        assert!(visited.insert(&live));
        // A different instance with different fields but the same reference.
        assert!(visited.contains(&snapshot));
        assert!(!visited.insert(&snapshot));
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_distinct_subjects_count_separately() {
        let mut visited = VisitedSet::new(&Refs);
        assert!(visited.insert(&saved("doc/1", "a")));
        assert!(visited.insert(&saved("doc/2", "a")));
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn test_unsaved_subjects_deduplicate_structurally() {
        let mut visited = VisitedSet::new(&Refs);
        let a = Doc {
            reference: None,
            body: "same".to_string(),
        };
        let b = a.clone();

        assert!(visited.insert(&a));
        assert!(!visited.insert(&b));
    }

    #[test]
    fn test_fresh_set_is_empty() {
        let visited = VisitedSet::new(&Refs);
        assert!(visited.is_empty());
        assert!(!visited.contains(&saved("doc/1", "x")));
    }
}
