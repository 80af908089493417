use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::data::{Register, RowData};
use crate::entity::Identified;
use crate::error::{ModelError, Result};

/// One record of a register, one [`RowData`] per field in schema order.
#[derive(Debug, Clone, Serialize)]
pub struct Row {
    #[serde(skip)]
    register: Arc<Register>,
    row_datas: Vec<RowData>,
}

impl Row {
    /// Creates a row with every field [`RowData::Missing`].
    pub(crate) fn new(register: Arc<Register>) -> Self {
        let row_datas = vec![RowData::Missing; register.element_count()];
        Self {
            register,
            row_datas,
        }
    }

    pub fn register(&self) -> &Register {
        &self.register
    }

    pub(crate) fn shares_register(&self, register: &Arc<Register>) -> bool {
        Arc::ptr_eq(&self.register, register)
    }

    /// Writes `value` into the field named `element`.
    ///
    /// Fails with [`ModelError::FieldNotFound`] when the register has no such
    /// field; the row is left unchanged.
    pub fn set_field(&mut self, element: &str, value: impl Into<RowData>) -> Result<()> {
        let index = self.resolve(element)?;
        self.row_datas[index] = value.into();
        debug!(
            register = %self.register.identifier(),
            field = element,
            index,
            "row field set"
        );
        Ok(())
    }

    pub fn field(&self, element: &str) -> Result<&RowData> {
        let index = self.resolve(element)?;
        Ok(&self.row_datas[index])
    }

    /// All values in schema order.
    pub fn row_datas(&self) -> &[RowData] {
        &self.row_datas
    }

    /// Field identifiers paired with their values.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &RowData)> + '_ {
        self.register
            .elements()
            .iter()
            .map(|element| element.as_str())
            .zip(self.row_datas.iter())
    }

    fn resolve(&self, element: &str) -> Result<usize> {
        self.register
            .element_index(element)
            .filter(|index| *index < self.row_datas.len())
            .ok_or_else(|| ModelError::FieldNotFound {
                register: self.register.identifier().to_string(),
                field: element.to_string(),
            })
    }
}
