//! NavigationSchema - The relationship registry
//!
//! Per REHYDRATION.md §3:
//! - A type is rehydratable at runtime exactly when it is registered
//! - Relationships targeting unregistered types are skipped during traversal
//!
//! Registration happens once, at startup. The registry is read-only during
//! traversal.

use std::collections::HashMap;

use super::{RelationshipDescriptor, SchemaError, SchemaResult, SubjectType, TypeKey};

/// All navigable relationships of one registered type.
///
/// Relationship order is registration order, and traversal walks
/// relationships in this order.
#[derive(Debug)]
pub struct TypeDescriptor {
    key: TypeKey,
    relationships: Vec<RelationshipDescriptor>,
}

impl TypeDescriptor {
    /// Returns the described type's key.
    #[inline]
    pub fn key(&self) -> TypeKey {
        self.key
    }

    /// Returns the type's relationships in registration order.
    #[inline]
    pub fn relationships(&self) -> &[RelationshipDescriptor] {
        &self.relationships
    }
}

/// The registry of rehydratable types and their navigable relationships.
#[derive(Debug, Default)]
pub struct NavigationSchema {
    types: HashMap<TypeKey, TypeDescriptor>,
}

impl NavigationSchema {
    /// Creates an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` with its navigable relationships.
    ///
    /// A type with no relationships registers an empty vec; registration is
    /// still what declares it rehydratable. Every descriptor must have been
    /// built for `T`.
    pub fn register<T: SubjectType>(
        &mut self,
        relationships: Vec<RelationshipDescriptor>,
    ) -> SchemaResult<()> {
        for relationship in &relationships {
            if relationship.owner() != T::TYPE_KEY {
                return Err(SchemaError::ForeignRelationship {
                    relationship: relationship.name(),
                    owner: relationship.owner(),
                    registered: T::TYPE_KEY,
                });
            }
        }
        if self.types.contains_key(&T::TYPE_KEY) {
            return Err(SchemaError::DuplicateType(T::TYPE_KEY));
        }
        self.types.insert(
            T::TYPE_KEY,
            TypeDescriptor {
                key: T::TYPE_KEY,
                relationships,
            },
        );
        Ok(())
    }

    /// Returns the descriptor for a type, if registered.
    pub fn descriptor(&self, key: TypeKey) -> Option<&TypeDescriptor> {
        self.types.get(&key)
    }

    /// Returns true if the type is registered, i.e. rehydratable.
    pub fn is_rehydratable(&self, key: TypeKey) -> bool {
        self.types.contains_key(&key)
    }

    /// Checks that every relationship targets a registered type.
    ///
    /// Call after all registrations. A dangling target is a wiring mistake
    /// that would otherwise surface only as silently skipped relationships.
    pub fn validate(&self) -> SchemaResult<()> {
        for descriptor in self.types.values() {
            for relationship in descriptor.relationships() {
                if !self.types.contains_key(&relationship.target()) {
                    return Err(SchemaError::UnregisteredTarget {
                        owner: descriptor.key(),
                        relationship: relationship.name(),
                        target: relationship.target(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Returns the number of registered types.
    #[inline]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if nothing is registered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
