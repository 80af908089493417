use serde::Serialize;

use crate::entity::{Descriptor, EntityKind, impl_entity};
use crate::error::{ModelError, Result};
use crate::ids::Identifier;

/// Schema of a register: the ordered field identifiers of its rows.
#[derive(Debug, Clone, Serialize)]
pub struct Register {
    identifier: Identifier,
    #[serde(flatten)]
    descriptor: Descriptor,
    elements: Vec<Identifier>,
}

impl Register {
    pub fn new(identifier: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifier: Identifier::new(EntityKind::Register, identifier)?,
            descriptor: Descriptor::default(),
            elements: Vec::new(),
        })
    }

    /// Builds a register from field identifiers in order.
    pub fn with_elements<I, S>(identifier: impl Into<String>, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut register = Self::new(identifier)?;
        for element in elements {
            register.add_element(element)?;
        }
        Ok(register)
    }

    /// Appends a field. Returns its position.
    pub fn add_element(&mut self, element: impl Into<String>) -> Result<usize> {
        let element = Identifier::new(EntityKind::DataElement, element)?;
        if self.elements.contains(&element) {
            return Err(ModelError::DuplicateField {
                register: self.identifier.to_string(),
                field: element.to_string(),
            });
        }
        self.elements.push(element);
        Ok(self.elements.len() - 1)
    }

    pub fn elements(&self) -> &[Identifier] {
        &self.elements
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Zero-based position of the field, or `None` when the register lacks it.
    pub fn element_index(&self, element: &str) -> Option<usize> {
        self.elements
            .iter()
            .position(|candidate| candidate.as_str() == element)
    }
}

impl_entity!(Register, EntityKind::Register);
