use serde::Serialize;

use crate::entity::{Descriptor, EntityKind, impl_entity};
use crate::error::Result;
use crate::ids::{Handle, Identifier};
use crate::metadata::ObjectVariable;

/// Concrete data item collected for an object variable.
#[derive(Debug, Clone, Serialize)]
pub struct DataElement {
    identifier: Identifier,
    #[serde(flatten)]
    descriptor: Descriptor,
    object_variable: Handle<ObjectVariable>,
}

impl DataElement {
    pub(crate) fn new(
        identifier: impl Into<String>,
        object_variable: Handle<ObjectVariable>,
    ) -> Result<Self> {
        Ok(Self {
            identifier: Identifier::new(EntityKind::DataElement, identifier)?,
            descriptor: Descriptor::default(),
            object_variable,
        })
    }

    pub fn object_variable(&self) -> Handle<ObjectVariable> {
        self.object_variable
    }

    pub(crate) fn link_object_variable(&mut self, object_variable: Handle<ObjectVariable>) {
        self.object_variable = object_variable;
    }
}

impl_entity!(DataElement, EntityKind::DataElement);
