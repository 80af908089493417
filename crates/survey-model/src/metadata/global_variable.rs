use serde::Serialize;

use crate::entity::{Descriptor, EntityKind, impl_entity};
use crate::error::Result;
use crate::ids::{Handle, Identifier};
use crate::metadata::VariableFamily;

/// General concept of a statistical variable (e.g. income).
///
/// More specific definitions are made by combining a global variable with a
/// statistical object type into an [`ObjectVariable`](crate::ObjectVariable).
/// Global variables may be grouped by a [`VariableFamily`].
#[derive(Debug, Clone, Serialize)]
pub struct GlobalVariable {
    identifier: Identifier,
    #[serde(flatten)]
    descriptor: Descriptor,
    variable_family: Option<Handle<VariableFamily>>,
}

impl GlobalVariable {
    pub fn new(identifier: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifier: Identifier::new(EntityKind::GlobalVariable, identifier)?,
            descriptor: Descriptor::default(),
            variable_family: None,
        })
    }

    /// Family the variable belongs to, if any.
    pub fn variable_family(&self) -> Option<Handle<VariableFamily>> {
        self.variable_family
    }

    pub(crate) fn link_family(&mut self, family: Option<Handle<VariableFamily>>) {
        self.variable_family = family;
    }
}

impl_entity!(GlobalVariable, EntityKind::GlobalVariable);
