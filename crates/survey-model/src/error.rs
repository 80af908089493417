//! Error types for the survey object model.

use std::fmt;

use thiserror::Error;

use crate::entity::EntityKind;

/// Broad failure category of a [`ModelError`].
///
/// Every model error is raised before any state is written, so callers can
/// match on the category and retry with corrected input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required value was missing, empty, duplicated or did not resolve.
    InvalidArgument,
    /// A field identifier did not resolve to a register position.
    NotFound,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::InvalidArgument => f.write_str("invalid argument"),
            ErrorKind::NotFound => f.write_str("not found"),
        }
    }
}

/// Errors raised by the survey object model.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    // === InvalidArgument ===
    /// Identifier was empty.
    #[error("{entity} identifier must not be empty")]
    EmptyIdentifier { entity: EntityKind },

    /// Another entity of the same kind already uses the identifier.
    #[error("{entity} '{identifier}' already exists")]
    DuplicateIdentifier {
        entity: EntityKind,
        identifier: String,
    },

    /// A handle does not point at an entity of this catalog.
    #[error("unknown {entity} reference #{index}")]
    UnknownReference { entity: EntityKind, index: usize },

    /// A register already declares the field.
    #[error("register '{register}' already has field '{field}'")]
    DuplicateField { register: String, field: String },

    /// A row was built for a different register.
    #[error("row belongs to register '{actual}', expected '{expected}'")]
    RegisterMismatch { expected: String, actual: String },

    // === NotFound ===
    /// Field identifier is not part of the register.
    #[error("field '{field}' not found in register '{register}'")]
    FieldNotFound { register: String, field: String },
}

impl ModelError {
    /// Returns the failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ModelError::EmptyIdentifier { .. }
            | ModelError::DuplicateIdentifier { .. }
            | ModelError::UnknownReference { .. }
            | ModelError::DuplicateField { .. }
            | ModelError::RegisterMismatch { .. } => ErrorKind::InvalidArgument,
            ModelError::FieldNotFound { .. } => ErrorKind::NotFound,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

pub type Result<T> = std::result::Result<T, ModelError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        let empty = ModelError::EmptyIdentifier {
            entity: EntityKind::GlobalVariable,
        };
        assert!(empty.is_invalid_argument());

        let missing = ModelError::FieldNotFound {
            register: "R1".to_string(),
            field: "age".to_string(),
        };
        assert!(missing.is_not_found());
        assert_eq!(missing.kind().to_string(), "not found");
    }

    #[test]
    fn messages_name_the_entity() {
        let err = ModelError::DuplicateIdentifier {
            entity: EntityKind::VariableFamily,
            identifier: "demography".to_string(),
        };
        assert_eq!(err.to_string(), "variable family 'demography' already exists");
    }
}
