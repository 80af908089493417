//! Base contracts shared by every survey entity.
//!
//! - [`Identified`]: a stable, non-empty [`Identifier`] fixed at creation.
//! - [`Described`]: mutable name and description text, both defaulting to `""`.
//! - [`Entity`]: ties a type to its [`EntityKind`] for error reporting and arenas.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ids::Identifier;

/// Kind of entity stored in the object graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Study,
    Questionnaire,
    VariableFamily,
    GlobalVariable,
    StatisticalObjectType,
    ObjectVariable,
    DataElement,
    Register,
    RegisterData,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Study => "study",
            EntityKind::Questionnaire => "questionnaire",
            EntityKind::VariableFamily => "variable family",
            EntityKind::GlobalVariable => "global variable",
            EntityKind::StatisticalObjectType => "statistical object type",
            EntityKind::ObjectVariable => "object variable",
            EntityKind::DataElement => "data element",
            EntityKind::Register => "register",
            EntityKind::RegisterData => "register data",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entity addressed by a stable identifier.
///
/// No setter: the identifier is the lookup key of the
/// entity for its whole lifetime.
pub trait Identified {
    fn identifier(&self) -> &Identifier;
}

/// An identified entity with a fixed kind.
pub trait Entity: Identified {
    const KIND: EntityKind;
}

/// Name and description text of a descriptive entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Descriptor {
    pub name: String,
    pub description: String,
}

/// Mutable name/description contract.
///
/// Empty strings are valid and reset the field; there is no "unset" state.
pub trait Described {
    fn descriptor(&self) -> &Descriptor;
    fn descriptor_mut(&mut self) -> &mut Descriptor;

    fn name(&self) -> &str {
        &self.descriptor().name
    }

    fn set_name(&mut self, name: impl Into<String>)
    where
        Self: Sized,
    {
        self.descriptor_mut().name = name.into();
    }

    fn description(&self) -> &str {
        &self.descriptor().description
    }

    fn set_description(&mut self, description: impl Into<String>)
    where
        Self: Sized,
    {
        self.descriptor_mut().description = description.into();
    }
}

/// Implements [`Identified`], [`Entity`] and [`Described`] for a struct with
/// `identifier` and `descriptor` fields.
macro_rules! impl_entity {
    ($ty:ty, $kind:expr) => {
        impl $crate::entity::Identified for $ty {
            fn identifier(&self) -> &$crate::ids::Identifier {
                &self.identifier
            }
        }

        impl $crate::entity::Entity for $ty {
            const KIND: $crate::entity::EntityKind = $kind;
        }

        impl $crate::entity::Described for $ty {
            fn descriptor(&self) -> &$crate::entity::Descriptor {
                &self.descriptor
            }

            fn descriptor_mut(&mut self) -> &mut $crate::entity::Descriptor {
                &mut self.descriptor
            }
        }
    };
}

pub(crate) use impl_entity;
