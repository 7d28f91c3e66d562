//! Navigation Schema
//!
//! No runtime reflection: each domain type declares its rehydration
//! capability through the `SubjectType` bounds and registers its navigable
//! relationships once, at startup. Traversal is then driven entirely by the
//! registry; nothing is probed per call.
//!
//! This module provides:
//! - `TypeKey` - Registration-time type identity
//! - `SubjectType` - Compile-time rehydration capability
//! - `Subject` - Type-erased subject object trait
//! - `RelationshipDescriptor` - One navigable relationship with erased accessors
//! - `RelationshipKind` - Singular vs plural
//! - `TypeDescriptor` - All relationships of one registered type
//! - `NavigationSchema` - The registry
//! - `SchemaError` - Registration and validation failures

mod descriptor;
mod errors;
mod registry;
mod subject;

pub use descriptor::{RelationshipDescriptor, RelationshipKind};
pub use errors::{SchemaError, SchemaResult};
pub use registry::{NavigationSchema, TypeDescriptor};
pub use subject::{Subject, SubjectType, TypeKey};
