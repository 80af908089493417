use serde::Serialize;

use crate::association::{Members, Owner};
use crate::entity::{Descriptor, EntityKind, impl_entity};
use crate::error::Result;
use crate::ids::Identifier;
use crate::metadata::ObjectVariable;

/// Type of statistical object or unit (e.g. person, household, enterprise).
#[derive(Debug, Clone, Serialize)]
pub struct StatisticalObjectType {
    identifier: Identifier,
    #[serde(flatten)]
    descriptor: Descriptor,
    object_variables: Members<ObjectVariable>,
}

impl StatisticalObjectType {
    pub fn new(identifier: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifier: Identifier::new(EntityKind::StatisticalObjectType, identifier)?,
            descriptor: Descriptor::default(),
            object_variables: Members::new(),
        })
    }

    /// Object variables defined in the context of this type.
    pub fn object_variables(&self) -> &Members<ObjectVariable> {
        &self.object_variables
    }
}

impl Owner<ObjectVariable> for StatisticalObjectType {
    fn members_mut(&mut self) -> &mut Members<ObjectVariable> {
        &mut self.object_variables
    }
}

impl_entity!(StatisticalObjectType, EntityKind::StatisticalObjectType);
