use std::sync::Arc;

use serde::Serialize;

use crate::data::{Register, Row};
use crate::entity::{EntityKind, Identified};
use crate::error::{ModelError, Result};
use crate::ids::Identifier;

/// The rows recorded for one frozen [`Register`].
#[derive(Debug, Clone, Serialize)]
pub struct RegisterData {
    identifier: Identifier,
    register: Arc<Register>,
    rows: Vec<Row>,
}

impl RegisterData {
    pub fn new(identifier: impl Into<String>, register: Register) -> Result<Self> {
        Ok(Self {
            identifier: Identifier::new(EntityKind::RegisterData, identifier)?,
            register: Arc::new(register),
            rows: Vec::new(),
        })
    }

    pub fn register(&self) -> &Register {
        &self.register
    }

    /// Creates an empty row sized to the register. The row is not stored
    /// until passed to [`RegisterData::push_row`].
    pub fn new_row(&self) -> Row {
        Row::new(Arc::clone(&self.register))
    }

    /// Stores a row built by [`RegisterData::new_row`] on this register data.
    pub fn push_row(&mut self, row: Row) -> Result<usize> {
        if !row.shares_register(&self.register) {
            return Err(ModelError::RegisterMismatch {
                expected: self.register.identifier().to_string(),
                actual: row.register().identifier().to_string(),
            });
        }
        self.rows.push(row);
        Ok(self.rows.len() - 1)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl Identified for RegisterData {
    fn identifier(&self) -> &Identifier {
        &self.identifier
    }
}
