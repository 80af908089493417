//! In-memory object model for statistical surveys.
//!
//! # Module Organization
//!
//! - [`entity`]: identifier and name/description contracts shared by all entities
//! - [`catalog`]: the object graph and every association setter
//! - [`metadata`]: global variables, variable families, object types, object variables, data elements
//! - [`survey`]: studies and questionnaires
//! - [`data`]: registers, register data and rows
//! - [`report`]: completeness/consistency checks over a catalog
//!
//! # Example
//!
//! ```
//! use survey_model::{Catalog, Described};
//!
//! let mut catalog = Catalog::new();
//! let income = catalog.add_global_variable("income").unwrap();
//! let economy = catalog.add_variable_family("economy").unwrap();
//! catalog.set_variable_family(income, Some(economy)).unwrap();
//! catalog.global_variable_mut(income).unwrap().set_name("Income");
//!
//! let family = catalog.variable_family(economy).unwrap();
//! assert!(family.global_variables().contains(income));
//! ```

mod arena;
pub mod association;
pub mod catalog;
pub mod data;
pub mod entity;
pub mod error;
pub mod ids;
pub mod metadata;
pub mod report;
pub mod survey;

pub use association::Members;
pub use catalog::Catalog;
pub use data::{Register, RegisterData, Row, RowData};
pub use entity::{Described, Descriptor, Entity, EntityKind, Identified};
pub use error::{ErrorKind, ModelError, Result};
pub use ids::{Handle, Identifier};
pub use metadata::{
    DataElement, GlobalVariable, ObjectVariable, StatisticalObjectType, VariableFamily,
};
pub use report::{CatalogIssue, CatalogReport, IssueSeverity};
pub use survey::{Questionnaire, Study};
