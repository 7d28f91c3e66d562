//! # Schema Errors
//!
//! Registration and validation failures per REHYDRATION.md §6.
//!
//! These are programmer errors surfaced at startup, when the schema is
//! built, never during traversal.

use thiserror::Error;

use super::TypeKey;

/// Result type for schema operations
pub type SchemaResult<T> = Result<T, SchemaError>;

/// Schema registration and validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The type key is already present in the registry
    #[error("type '{0}' is already registered")]
    DuplicateType(TypeKey),

    /// A relationship built for one owner was registered under another
    #[error("relationship '{relationship}' belongs to type '{owner}', registered under '{registered}'")]
    ForeignRelationship {
        /// The relationship name
        relationship: &'static str,
        /// The type the relationship was built for
        owner: TypeKey,
        /// The type it was registered under
        registered: TypeKey,
    },

    /// A registered relationship targets a type the registry does not know
    #[error("relationship '{owner}.{relationship}' targets unregistered type '{target}'")]
    UnregisteredTarget {
        /// The owning type
        owner: TypeKey,
        /// The relationship name
        relationship: &'static str,
        /// The missing target type
        target: TypeKey,
    },
}
