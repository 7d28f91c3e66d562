//! Subject - Type identity and erased subject values
//!
//! Per REHYDRATION.md §1 and §3:
//! - A rehydratable type can be deep-copied and default-constructed
//! - Both capabilities are declared at compile time, never probed at runtime
//!
//! `SubjectType` is the typed capability; `Subject` is its object-safe
//! erasure, which is what flows through the provider boundary and the
//! traversal. The blanket impl is the only `Subject` implementation.

use std::any::Any;
use std::collections::hash_map::DefaultHasher;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A registration-time type identity.
///
/// Two subjects with different keys are never the same identity and never
/// share a change history. Keys are `&'static str` so they can be declared
/// as associated constants.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeKey(&'static str);

impl TypeKey {
    /// Creates a type key with the given name.
    #[inline]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the key's name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The rehydration capability of a domain type.
///
/// The bounds are the capability contract:
/// - `Clone` - an independent deep copy (owned data has no aliasing in Rust)
/// - `Default` - construction with no arguments
/// - `PartialEq` + `Hash` - structural identity for subjects without a
///   durable reference (REHYDRATION.md §5)
///
/// A type that cannot meet these bounds cannot take part in rehydration,
/// and relationships targeting it are skipped during traversal.
pub trait SubjectType: Clone + Default + PartialEq + Hash + fmt::Debug + 'static {
    /// The type's registration key. Must be unique within one schema.
    const TYPE_KEY: TypeKey;
}

/// The object-safe erasure of `SubjectType`.
///
/// Implemented once, for every `SubjectType`, by the blanket impl below.
/// Do not implement this trait directly.
pub trait Subject: Any + fmt::Debug {
    /// Returns the subject's type key.
    fn type_key(&self) -> TypeKey;

    /// Returns an independent deep copy of the subject.
    fn deep_clone(&self) -> Box<dyn Subject>;

    /// Structural equality against another erased subject.
    ///
    /// Subjects of different concrete types are never equal.
    fn value_eq(&self, other: &dyn Subject) -> bool;

    /// Structural hash, consistent with `value_eq`.
    fn value_hash(&self) -> u64;

    /// Upcast for concrete-type inspection.
    fn as_any(&self) -> &dyn Any;

    /// Mutable upcast for concrete-type mutation.
    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Consuming upcast for concrete-type extraction.
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: SubjectType> Subject for T {
    fn type_key(&self) -> TypeKey {
        T::TYPE_KEY
    }

    fn deep_clone(&self) -> Box<dyn Subject> {
        Box::new(self.clone())
    }

    fn value_eq(&self, other: &dyn Subject) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .map_or(false, |other| self == other)
    }

    fn value_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        Hash::hash(self, &mut hasher);
        hasher.finish()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq, Hash)]
    struct Doc {
        body: String,
    }

    impl SubjectType for Doc {
        const TYPE_KEY: TypeKey = TypeKey::new("doc");
    }

    #[derive(Debug, Clone, Default, PartialEq, Hash)]
    struct Tag {
        label: String,
    }

    impl SubjectType for Tag {
        const TYPE_KEY: TypeKey = TypeKey::new("tag");
    }

    #[test]
    fn test_type_key_equality() {
        assert_eq!(TypeKey::new("doc"), TypeKey::new("doc"));
        assert_ne!(TypeKey::new("doc"), TypeKey::new("tag"));
    }

    #[test]
    fn test_erased_type_key_matches_constant() {
        let doc = Doc::default();
        let erased: &dyn Subject = &doc;
        assert_eq!(erased.type_key(), Doc::TYPE_KEY);
    }

    #[test]
    fn test_value_eq_is_structural() {
        let a = Doc {
            body: "x".to_string(),
        };
        let b = Doc {
            body: "x".to_string(),
        };
        let c = Doc {
            body: "y".to_string(),
        };

        assert!(Subject::value_eq(&a, &b));
        assert!(!Subject::value_eq(&a, &c));
    }

    #[test]
    fn test_value_eq_rejects_foreign_type() {
        let doc = Doc::default();
        let tag = Tag::default();
        assert!(!Subject::value_eq(&doc, &tag as &dyn Subject));
    }

    #[test]
    fn test_value_hash_consistent_with_value_eq() {
        let a = Doc {
            body: "same".to_string(),
        };
        let b = Doc {
            body: "same".to_string(),
        };
        assert_eq!(Subject::value_hash(&a), Subject::value_hash(&b));
    }

    #[test]
    fn test_deep_clone_downcasts_back() {
        let doc = Doc {
            body: "copy me".to_string(),
        };
        let erased: &dyn Subject = &doc;
        let copy = erased.deep_clone();
        let copy = copy.into_any().downcast::<Doc>().unwrap();
        assert_eq!(*copy, doc);
    }
}
