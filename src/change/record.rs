//! Change - Immutable snapshot record
//!
//! Per REHYDRATION.md §1:
//! - A change captures a subject's own field values at one instant
//! - Once created, a change never changes
//! - Relationships are structural facts of the live store and are never
//!   part of a change
//!
//! All fields are private to enforce immutability.

use chrono::{DateTime, Utc};

use crate::schema::{Subject, SubjectType};

/// The time axis of the change log.
///
/// Selection (REHYDRATION.md §2) is defined purely in terms of this type's
/// total order.
pub type Timestamp = DateTime<Utc>;

/// A single immutable snapshot of a subject.
///
/// The snapshot value is type-erased so that change sets for different
/// subject types flow through one provider boundary. Cloning a change
/// deep-clones the snapshot; two clones share no state.
#[derive(Debug)]
pub struct Change {
    /// The fully-populated snapshot value.
    value: Box<dyn Subject>,
    /// The instant the snapshot was recorded.
    timestamp: Timestamp,
}

impl Change {
    /// Creates a change from an already-erased snapshot.
    pub fn new(value: Box<dyn Subject>, timestamp: Timestamp) -> Self {
        Self { value, timestamp }
    }

    /// Creates a change from a typed snapshot.
    pub fn of<T: SubjectType>(value: T, timestamp: Timestamp) -> Self {
        Self::new(Box::new(value), timestamp)
    }

    /// Returns the snapshot value.
    #[inline]
    pub fn value(&self) -> &dyn Subject {
        self.value.as_ref()
    }

    /// Returns the snapshot value as its concrete type, if it is one.
    pub fn value_of<T: SubjectType>(&self) -> Option<&T> {
        self.value.as_any().downcast_ref::<T>()
    }

    /// Returns the instant the snapshot was recorded.
    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Consumes the change, returning the owned snapshot.
    pub fn into_value(self) -> Box<dyn Subject> {
        self.value
    }
}

impl Clone for Change {
    fn clone(&self) -> Self {
        Self {
            value: self.value.deep_clone(),
            timestamp: self.timestamp,
        }
    }
}

/// One field's value at a point in time, projected out of a change.
///
/// Produced by `HistoryExplorer::changes_to_field`. Consecutive changes that
/// left the field untouched collapse into one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChange<V> {
    value: V,
    timestamp: Timestamp,
}

impl<V> FieldChange<V> {
    /// Creates a field change.
    pub fn new(value: V, timestamp: Timestamp) -> Self {
        Self { value, timestamp }
    }

    /// Returns the field value.
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns the instant the value was recorded.
    #[inline]
    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::TypeKey;

    #[derive(Debug, Clone, Default, PartialEq, Hash)]
    struct Doc {
        body: String,
    }

    impl SubjectType for Doc {
        const TYPE_KEY: TypeKey = TypeKey::new("doc");
    }

    fn ts(secs: i64) -> Timestamp {
        DateTime::from_timestamp(secs, 0).unwrap()
    }

    #[test]
    fn test_change_holds_value_and_timestamp() {
        let change = Change::of(
            Doc {
                body: "first".to_string(),
            },
            ts(10),
        );
        assert_eq!(change.timestamp(), ts(10));
        assert_eq!(change.value_of::<Doc>().unwrap().body, "first");
    }

    #[test]
    fn test_value_of_rejects_foreign_type() {
        #[derive(Debug, Clone, Default, PartialEq, Hash)]
        struct Other;
        impl SubjectType for Other {
            const TYPE_KEY: TypeKey = TypeKey::new("other");
        }

        let change = Change::of(Doc::default(), ts(1));
        assert!(change.value_of::<Other>().is_none());
    }

    #[test]
    fn test_clone_is_a_deep_copy() {
        let change = Change::of(
            Doc {
                body: "original".to_string(),
            },
            ts(5),
        );
        let copy = change.clone();

        assert_eq!(copy.timestamp(), change.timestamp());
        assert_eq!(copy.value_of::<Doc>(), change.value_of::<Doc>());
        // Distinct allocations: dropping one leaves the other intact.
        drop(change);
        assert_eq!(copy.value_of::<Doc>().unwrap().body, "original");
    }
}
