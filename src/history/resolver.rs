//! ChangeResolver - Entry modes over the history provider
//!
//! Two ways to reach the same change history: a live subject (identity
//! resolved through the reference resolver) or a bare durable reference
//! (for subjects not currently materialized). The resolver performs no
//! filtering or ordering; that is the selector's job.

use crate::change::Change;
use crate::schema::{Subject, TypeKey};

use super::{HistoryProvider, ReferenceId, ReferenceResolver};

/// Resolves the change set for a subject, by live object or by reference.
pub struct ChangeResolver<'a> {
    provider: &'a dyn HistoryProvider,
    references: &'a dyn ReferenceResolver,
}

impl<'a> ChangeResolver<'a> {
    /// Creates a resolver over the given boundaries.
    pub fn new(
        provider: &'a dyn HistoryProvider,
        references: &'a dyn ReferenceResolver,
    ) -> Self {
        Self {
            provider,
            references,
        }
    }

    /// Returns the change set for a live subject.
    ///
    /// A subject without a durable reference has no history.
    pub fn changes_for_subject(&self, subject: &dyn Subject) -> Vec<Change> {
        match self.references.reference_of(subject) {
            Some(reference) if !reference.is_empty() => {
                self.provider.changes_for(subject.type_key(), &reference)
            }
            _ => Vec::new(),
        }
    }

    /// Returns the change set for a durable reference.
    ///
    /// An empty reference has no history and the provider is not consulted.
    pub fn changes_for_reference(&self, subject: TypeKey, reference: &ReferenceId) -> Vec<Change> {
        if reference.is_empty() {
            return Vec::new();
        }
        self.provider.changes_for(subject, reference)
    }
}
