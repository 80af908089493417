//! Building a [`Catalog`] and its register data from a [`SurveyDocument`].

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info, info_span};

use survey_model::{
    Catalog, Described, EntityKind, Identified, ModelError, Register, RegisterData,
};

use crate::document::{SurveyDocument, TextField};

/// Errors raised while loading a survey description.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Failed to read the description file.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not a valid survey description.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A text field was given as `null`.
    #[error("{entity} '{identifier}': {field} must not be null")]
    NullField {
        entity: EntityKind,
        identifier: String,
        field: &'static str,
    },

    /// An identifier reference names no entity of the document.
    #[error("{entity} '{identifier}' references unknown {target} '{reference}'")]
    UnresolvedReference {
        entity: EntityKind,
        identifier: String,
        target: EntityKind,
        reference: String,
    },

    /// Strict loading requires the reference.
    #[error("{entity} '{identifier}' has no {target}")]
    MissingReference {
        entity: EntityKind,
        identifier: String,
        target: EntityKind,
    },

    /// The model rejected a value.
    #[error("{entity} '{identifier}': {source}")]
    Model {
        entity: EntityKind,
        identifier: String,
        #[source]
        source: ModelError,
    },
}

/// Options controlling how a survey description is turned into a model.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Require every object variable to name a global variable.
    pub strict: bool,
}

impl LoadOptions {
    #[must_use]
    pub fn strict(mut self, enable: bool) -> Self {
        self.strict = enable;
        self
    }
}

/// A loaded survey: the metadata graph plus register data.
#[derive(Debug, Clone, Default)]
pub struct Survey {
    pub catalog: Catalog,
    pub registers: Vec<RegisterData>,
}

impl Survey {
    pub fn register(&self, identifier: &str) -> Option<&RegisterData> {
        self.registers
            .iter()
            .find(|data| data.identifier().as_str() == identifier)
    }
}

/// Reads and builds the survey description at `path`.
pub fn load_survey(path: &Path, options: &LoadOptions) -> Result<Survey, LoadError> {
    let span = info_span!("load", path = %path.display());
    let _guard = span.enter();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let document: SurveyDocument =
        serde_json::from_str(&text).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    build_survey(&document, options)
}

/// Builds a survey from an already parsed document.
///
/// Entities are created owners first, so references only ever point at
/// entities defined in the document. The first failure aborts the build.
pub fn build_survey(document: &SurveyDocument, options: &LoadOptions) -> Result<Survey, LoadError> {
    let mut catalog = Catalog::new();

    for entry in &document.studies {
        let kind = EntityKind::Study;
        let text = Text::parse(kind, &entry.identifier, &entry.name, &entry.description)?;
        let handle = catalog
            .add_study(entry.identifier.as_str())
            .map_err(|source| model_error(kind, &entry.identifier, source))?;
        if let Some(study) = catalog.study_mut(handle) {
            text.apply(study);
        }
    }

    for entry in &document.questionnaires {
        let kind = EntityKind::Questionnaire;
        let study = catalog.find_study(&entry.study).ok_or_else(|| {
            unresolved(kind, &entry.identifier, EntityKind::Study, &entry.study)
        })?;
        let title = non_null(kind, &entry.identifier, "title", &entry.title)?;
        let description = non_null(kind, &entry.identifier, "description", &entry.description)?;
        let handle = catalog
            .add_questionnaire(entry.identifier.as_str(), study)
            .map_err(|source| model_error(kind, &entry.identifier, source))?;
        if let Some(questionnaire) = catalog.questionnaire_mut(handle) {
            if let Some(title) = title {
                questionnaire.set_title(title);
            }
            if let Some(description) = description {
                questionnaire.set_description(description);
            }
        }
    }

    for entry in &document.variable_families {
        let kind = EntityKind::VariableFamily;
        let text = Text::parse(kind, &entry.identifier, &entry.name, &entry.description)?;
        let handle = catalog
            .add_variable_family(entry.identifier.as_str())
            .map_err(|source| model_error(kind, &entry.identifier, source))?;
        if let Some(family) = catalog.variable_family_mut(handle) {
            text.apply(family);
        }
    }

    for entry in &document.global_variables {
        let kind = EntityKind::GlobalVariable;
        let text = Text::parse(kind, &entry.identifier, &entry.name, &entry.description)?;
        let family = match &entry.family {
            Some(family) => Some(catalog.find_variable_family(family).ok_or_else(|| {
                unresolved(kind, &entry.identifier, EntityKind::VariableFamily, family)
            })?),
            None => None,
        };
        let handle = catalog
            .add_global_variable(entry.identifier.as_str())
            .map_err(|source| model_error(kind, &entry.identifier, source))?;
        if let Some(variable) = catalog.global_variable_mut(handle) {
            text.apply(variable);
        }
        catalog
            .set_variable_family(handle, family)
            .map_err(|source| model_error(kind, &entry.identifier, source))?;
    }

    for entry in &document.object_types {
        let kind = EntityKind::StatisticalObjectType;
        let text = Text::parse(kind, &entry.identifier, &entry.name, &entry.description)?;
        let handle = catalog
            .add_object_type(entry.identifier.as_str())
            .map_err(|source| model_error(kind, &entry.identifier, source))?;
        if let Some(object_type) = catalog.object_type_mut(handle) {
            text.apply(object_type);
        }
    }

    for entry in &document.object_variables {
        let kind = EntityKind::ObjectVariable;
        let text = Text::parse(kind, &entry.identifier, &entry.name, &entry.description)?;
        let object_type = catalog.find_object_type(&entry.object_type).ok_or_else(|| {
            unresolved(
                kind,
                &entry.identifier,
                EntityKind::StatisticalObjectType,
                &entry.object_type,
            )
        })?;
        let global_variable = match &entry.global_variable {
            Some(global) => Some(catalog.find_global_variable(global).ok_or_else(|| {
                unresolved(kind, &entry.identifier, EntityKind::GlobalVariable, global)
            })?),
            None if options.strict => {
                return Err(LoadError::MissingReference {
                    entity: kind,
                    identifier: entry.identifier.clone(),
                    target: EntityKind::GlobalVariable,
                });
            }
            None => None,
        };
        let handle = catalog
            .add_object_variable(entry.identifier.as_str(), object_type)
            .map_err(|source| model_error(kind, &entry.identifier, source))?;
        if let Some(variable) = catalog.object_variable_mut(handle) {
            text.apply(variable);
        }
        if let Some(global_variable) = global_variable {
            catalog
                .set_global_variable(handle, global_variable)
                .map_err(|source| model_error(kind, &entry.identifier, source))?;
        }
    }

    for entry in &document.data_elements {
        let kind = EntityKind::DataElement;
        let text = Text::parse(kind, &entry.identifier, &entry.name, &entry.description)?;
        let object_variable = catalog
            .find_object_variable(&entry.object_variable)
            .ok_or_else(|| {
                unresolved(
                    kind,
                    &entry.identifier,
                    EntityKind::ObjectVariable,
                    &entry.object_variable,
                )
            })?;
        let handle = catalog
            .add_data_element(entry.identifier.as_str(), object_variable)
            .map_err(|source| model_error(kind, &entry.identifier, source))?;
        if let Some(element) = catalog.data_element_mut(handle) {
            text.apply(element);
        }
    }

    let mut registers = Vec::with_capacity(document.registers.len());
    for entry in &document.registers {
        let kind = EntityKind::Register;
        let text = Text::parse(kind, &entry.identifier, &entry.name, &entry.description)?;
        let mut register = Register::with_elements(entry.identifier.as_str(), &entry.elements)
            .map_err(|source| model_error(kind, &entry.identifier, source))?;
        text.apply(&mut register);
        if registers
            .iter()
            .any(|data: &RegisterData| data.identifier().as_str() == entry.identifier)
        {
            return Err(model_error(
                kind,
                &entry.identifier,
                ModelError::DuplicateIdentifier {
                    entity: kind,
                    identifier: entry.identifier.clone(),
                },
            ));
        }
        let mut data = RegisterData::new(entry.identifier.as_str(), register)
            .map_err(|source| model_error(EntityKind::RegisterData, &entry.identifier, source))?;
        for values in &entry.rows {
            let mut row = data.new_row();
            for (field, value) in values {
                row.set_field(field, value.clone())
                    .map_err(|source| model_error(kind, &entry.identifier, source))?;
            }
            data.push_row(row)
                .map_err(|source| model_error(kind, &entry.identifier, source))?;
        }
        debug!(register = %entry.identifier, rows = data.len(), "register loaded");
        registers.push(data);
    }

    info!(
        entities = catalog.len(),
        registers = registers.len(),
        "survey loaded"
    );
    Ok(Survey { catalog, registers })
}

/// Validated name/description of a document entry.
struct Text<'a> {
    name: Option<&'a str>,
    description: Option<&'a str>,
}

impl<'a> Text<'a> {
    fn parse(
        kind: EntityKind,
        identifier: &str,
        name: &'a TextField,
        description: &'a TextField,
    ) -> Result<Self, LoadError> {
        Ok(Self {
            name: non_null(kind, identifier, "name", name)?,
            description: non_null(kind, identifier, "description", description)?,
        })
    }

    fn apply<T: Described>(&self, target: &mut T) {
        if let Some(name) = self.name {
            target.set_name(name);
        }
        if let Some(description) = self.description {
            target.set_description(description);
        }
    }
}

/// `Ok(None)` when absent, the text when present, and an error for `null`.
fn non_null<'a>(
    kind: EntityKind,
    identifier: &str,
    field: &'static str,
    value: &'a TextField,
) -> Result<Option<&'a str>, LoadError> {
    match value {
        None => Ok(None),
        Some(Some(text)) => Ok(Some(text.as_str())),
        Some(None) => Err(LoadError::NullField {
            entity: kind,
            identifier: identifier.to_string(),
            field,
        }),
    }
}

fn unresolved(
    entity: EntityKind,
    identifier: &str,
    target: EntityKind,
    reference: &str,
) -> LoadError {
    LoadError::UnresolvedReference {
        entity,
        identifier: identifier.to_string(),
        target,
        reference: reference.to_string(),
    }
}

fn model_error(entity: EntityKind, identifier: &str, source: ModelError) -> LoadError {
    LoadError::Model {
        entity,
        identifier: identifier.to_string(),
        source,
    }
}
