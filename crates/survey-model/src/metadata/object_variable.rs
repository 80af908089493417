use serde::Serialize;

use crate::association::{Members, Owner};
use crate::entity::{Descriptor, EntityKind, impl_entity};
use crate::error::Result;
use crate::ids::{Handle, Identifier};
use crate::metadata::{DataElement, GlobalVariable, StatisticalObjectType};

/// A variable in connection with a statistical object (e.g. the income of a
/// person).
///
/// The object type is fixed at creation and can be replaced but never
/// cleared. The global variable link is optional until first assigned and
/// can likewise never be cleared afterwards;
/// [`Catalog::validate`](crate::Catalog::validate) reports variables still
/// missing it.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectVariable {
    identifier: Identifier,
    #[serde(flatten)]
    descriptor: Descriptor,
    statistical_object_type: Handle<StatisticalObjectType>,
    global_variable: Option<Handle<GlobalVariable>>,
    data_elements: Members<DataElement>,
}

impl ObjectVariable {
    pub(crate) fn new(
        identifier: impl Into<String>,
        statistical_object_type: Handle<StatisticalObjectType>,
    ) -> Result<Self> {
        Ok(Self {
            identifier: Identifier::new(EntityKind::ObjectVariable, identifier)?,
            descriptor: Descriptor::default(),
            statistical_object_type,
            global_variable: None,
            data_elements: Members::new(),
        })
    }

    pub fn statistical_object_type(&self) -> Handle<StatisticalObjectType> {
        self.statistical_object_type
    }

    pub fn global_variable(&self) -> Option<Handle<GlobalVariable>> {
        self.global_variable
    }

    /// Data elements based on this object variable.
    pub fn data_elements(&self) -> &Members<DataElement> {
        &self.data_elements
    }

    pub(crate) fn link_object_type(&mut self, object_type: Handle<StatisticalObjectType>) {
        self.statistical_object_type = object_type;
    }

    pub(crate) fn link_global_variable(&mut self, global_variable: Handle<GlobalVariable>) {
        self.global_variable = Some(global_variable);
    }
}

impl Owner<DataElement> for ObjectVariable {
    fn members_mut(&mut self) -> &mut Members<DataElement> {
        &mut self.data_elements
    }
}

impl_entity!(ObjectVariable, EntityKind::ObjectVariable);
