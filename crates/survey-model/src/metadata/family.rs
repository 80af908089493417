use serde::Serialize;

use crate::association::{Members, Owner};
use crate::entity::{Descriptor, EntityKind, impl_entity};
use crate::error::Result;
use crate::ids::Identifier;
use crate::metadata::GlobalVariable;

/// Named grouping of global variables.
///
/// Membership is changed only by assigning a family to a global variable.
#[derive(Debug, Clone, Serialize)]
pub struct VariableFamily {
    identifier: Identifier,
    #[serde(flatten)]
    descriptor: Descriptor,
    global_variables: Members<GlobalVariable>,
}

impl VariableFamily {
    pub fn new(identifier: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifier: Identifier::new(EntityKind::VariableFamily, identifier)?,
            descriptor: Descriptor::default(),
            global_variables: Members::new(),
        })
    }

    pub fn global_variables(&self) -> &Members<GlobalVariable> {
        &self.global_variables
    }
}

impl Owner<GlobalVariable> for VariableFamily {
    fn members_mut(&mut self) -> &mut Members<GlobalVariable> {
        &mut self.global_variables
    }
}

impl_entity!(VariableFamily, EntityKind::VariableFamily);
