//! RelationshipDescriptor - One navigable relationship
//!
//! Per REHYDRATION.md §1 and §3:
//! - A navigable relationship is a named, schema-registered link from one
//!   subject type to another subject (singular) or collection (plural)
//! - Traversal reads and writes relationship slots only through these
//!   descriptors
//!
//! Accessors are captured as typed functions at construction and erased
//! here. A descriptor applied to the wrong concrete type is a programmer
//! error and panics with the owner and relationship name (REHYDRATION.md §6).

use std::fmt;

use super::{Subject, SubjectType, TypeKey};

/// Whether a relationship points at one subject or a collection of subjects.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum RelationshipKind {
    /// Zero or one related subject.
    Singular,
    /// A collection of related subjects.
    Plural,
}

type SingularGet = Box<dyn Fn(&dyn Subject) -> Option<Box<dyn Subject>>>;
type SingularSet = Box<dyn Fn(&mut dyn Subject, Box<dyn Subject>)>;
type PluralGet = Box<dyn Fn(&dyn Subject) -> Option<Vec<Box<dyn Subject>>>>;
type PluralSet = Box<dyn Fn(&mut dyn Subject, Vec<Box<dyn Subject>>)>;

enum Accessor {
    Singular { get: SingularGet, set: SingularSet },
    Plural { get: PluralGet, set: PluralSet },
}

/// A named navigable relationship of a registered type.
///
/// Holds the owner and target type keys plus erased accessors over the
/// relationship slot. Values returned by the getters are deep copies of the
/// current slot contents; setters replace the slot wholesale.
pub struct RelationshipDescriptor {
    name: &'static str,
    owner: TypeKey,
    target: TypeKey,
    accessor: Accessor,
}

impl RelationshipDescriptor {
    /// Declares a singular relationship of `T` targeting `R`.
    ///
    /// `get` returns the current related value, if any; an absent value is
    /// never constructed. `set` replaces the slot.
    pub fn singular<T, R>(
        name: &'static str,
        get: fn(&T) -> Option<&R>,
        set: fn(&mut T, R),
    ) -> Self
    where
        T: SubjectType,
        R: SubjectType,
    {
        Self {
            name,
            owner: T::TYPE_KEY,
            target: R::TYPE_KEY,
            accessor: Accessor::Singular {
                get: Box::new(move |subject| {
                    let subject = expect_owner::<T>(subject, name);
                    get(subject).map(|related| Box::new(related.clone()) as Box<dyn Subject>)
                }),
                set: Box::new(move |subject, value| {
                    let value = expect_target::<R>(value, T::TYPE_KEY, name);
                    let subject = expect_owner_mut::<T>(subject, name);
                    set(subject, *value);
                }),
            },
        }
    }

    /// Declares a plural relationship of `T` targeting a collection of `R`.
    ///
    /// `get` returns the current membership, if the collection is present at
    /// all; `set` replaces the whole membership.
    pub fn plural<T, R>(
        name: &'static str,
        get: fn(&T) -> Option<&Vec<R>>,
        set: fn(&mut T, Vec<R>),
    ) -> Self
    where
        T: SubjectType,
        R: SubjectType,
    {
        Self {
            name,
            owner: T::TYPE_KEY,
            target: R::TYPE_KEY,
            accessor: Accessor::Plural {
                get: Box::new(move |subject| {
                    let subject = expect_owner::<T>(subject, name);
                    get(subject).map(|members| {
                        members
                            .iter()
                            .map(|member| Box::new(member.clone()) as Box<dyn Subject>)
                            .collect()
                    })
                }),
                set: Box::new(move |subject, members| {
                    let members = members
                        .into_iter()
                        .map(|member| *expect_target::<R>(member, T::TYPE_KEY, name))
                        .collect();
                    let subject = expect_owner_mut::<T>(subject, name);
                    set(subject, members);
                }),
            },
        }
    }

    /// Returns the relationship name.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the owning type's key.
    #[inline]
    pub fn owner(&self) -> TypeKey {
        self.owner
    }

    /// Returns the target type's key.
    #[inline]
    pub fn target(&self) -> TypeKey {
        self.target
    }

    /// Returns whether the relationship is singular or plural.
    #[inline]
    pub fn kind(&self) -> RelationshipKind {
        match self.accessor {
            Accessor::Singular { .. } => RelationshipKind::Singular,
            Accessor::Plural { .. } => RelationshipKind::Plural,
        }
    }

    /// Reads the current related value of a singular relationship.
    ///
    /// Panics if the relationship is plural.
    pub(crate) fn get_singular(&self, subject: &dyn Subject) -> Option<Box<dyn Subject>> {
        match &self.accessor {
            Accessor::Singular { get, .. } => get(subject),
            Accessor::Plural { .. } => panic!(
                "relationship '{}.{}' is plural, not singular",
                self.owner, self.name
            ),
        }
    }

    /// Replaces the related value of a singular relationship.
    ///
    /// Panics if the relationship is plural.
    pub(crate) fn set_singular(&self, subject: &mut dyn Subject, value: Box<dyn Subject>) {
        match &self.accessor {
            Accessor::Singular { set, .. } => set(subject, value),
            Accessor::Plural { .. } => panic!(
                "relationship '{}.{}' is plural, not singular",
                self.owner, self.name
            ),
        }
    }

    /// Reads the current membership of a plural relationship.
    ///
    /// Panics if the relationship is singular.
    pub(crate) fn get_plural(&self, subject: &dyn Subject) -> Option<Vec<Box<dyn Subject>>> {
        match &self.accessor {
            Accessor::Plural { get, .. } => get(subject),
            Accessor::Singular { .. } => panic!(
                "relationship '{}.{}' is singular, not plural",
                self.owner, self.name
            ),
        }
    }

    /// Replaces the membership of a plural relationship.
    ///
    /// Panics if the relationship is singular.
    pub(crate) fn set_plural(&self, subject: &mut dyn Subject, members: Vec<Box<dyn Subject>>) {
        match &self.accessor {
            Accessor::Plural { set, .. } => set(subject, members),
            Accessor::Singular { .. } => panic!(
                "relationship '{}.{}' is singular, not plural",
                self.owner, self.name
            ),
        }
    }
}

impl fmt::Debug for RelationshipDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RelationshipDescriptor")
            .field("name", &self.name)
            .field("owner", &self.owner)
            .field("target", &self.target)
            .field("kind", &self.kind())
            .finish()
    }
}

fn expect_owner<'s, T: SubjectType>(subject: &'s dyn Subject, name: &str) -> &'s T {
    subject.as_any().downcast_ref::<T>().unwrap_or_else(|| {
        panic!(
            "relationship '{}.{}' applied to subject of type '{}'",
            T::TYPE_KEY,
            name,
            subject.type_key()
        )
    })
}

fn expect_owner_mut<'s, T: SubjectType>(subject: &'s mut dyn Subject, name: &str) -> &'s mut T {
    let found = subject.type_key();
    subject.as_any_mut().downcast_mut::<T>().unwrap_or_else(|| {
        panic!(
            "relationship '{}.{}' applied to subject of type '{}'",
            T::TYPE_KEY,
            name,
            found
        )
    })
}

fn expect_target<R: SubjectType>(
    value: Box<dyn Subject>,
    owner: TypeKey,
    name: &str,
) -> Box<R> {
    let found = value.type_key();
    value.into_any().downcast::<R>().unwrap_or_else(|_| {
        panic!(
            "relationship '{}.{}' assigned a value of type '{}', expected '{}'",
            owner,
            name,
            found,
            R::TYPE_KEY
        )
    })
}
