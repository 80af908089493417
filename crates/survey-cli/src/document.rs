//! JSON survey description read by the CLI.
//!
//! Entities reference each other by identifier. Every list is optional:
//!
//! ```json
//! {
//!   "studies": [{ "identifier": "census", "name": "Census 2006" }],
//!   "questionnaires": [{ "identifier": "household", "study": "census", "title": "Household form" }],
//!   "variable_families": [{ "identifier": "economy" }],
//!   "global_variables": [{ "identifier": "income", "family": "economy" }],
//!   "object_types": [{ "identifier": "person" }],
//!   "object_variables": [{ "identifier": "person_income", "object_type": "person", "global_variable": "income" }],
//!   "data_elements": [{ "identifier": "q12", "object_variable": "person_income" }],
//!   "registers": [{ "identifier": "persons", "elements": ["age", "income"], "rows": [{ "age": 34 }] }]
//! }
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer};

use survey_model::RowData;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SurveyDocument {
    #[serde(default)]
    pub studies: Vec<EntityEntry>,
    #[serde(default)]
    pub questionnaires: Vec<QuestionnaireEntry>,
    #[serde(default)]
    pub variable_families: Vec<EntityEntry>,
    #[serde(default)]
    pub global_variables: Vec<GlobalVariableEntry>,
    #[serde(default)]
    pub object_types: Vec<EntityEntry>,
    #[serde(default)]
    pub object_variables: Vec<ObjectVariableEntry>,
    #[serde(default)]
    pub data_elements: Vec<DataElementEntry>,
    #[serde(default)]
    pub registers: Vec<RegisterEntry>,
}

/// Text field that tells "absent" (`None`) apart from an explicit `null`
/// (`Some(None)`).
pub type TextField = Option<Option<String>>;

fn explicit<'de, D>(deserializer: D) -> Result<TextField, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Identifier plus name/description, shared by entries without references.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EntityEntry {
    pub identifier: String,
    #[serde(default, deserialize_with = "explicit")]
    pub name: TextField,
    #[serde(default, deserialize_with = "explicit")]
    pub description: TextField,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuestionnaireEntry {
    pub identifier: String,
    pub study: String,
    #[serde(default, deserialize_with = "explicit")]
    pub title: TextField,
    #[serde(default, deserialize_with = "explicit")]
    pub description: TextField,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GlobalVariableEntry {
    pub identifier: String,
    #[serde(default, deserialize_with = "explicit")]
    pub name: TextField,
    #[serde(default, deserialize_with = "explicit")]
    pub description: TextField,
    /// Identifier of the variable family; absent or `null` leaves it unassigned.
    #[serde(default)]
    pub family: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectVariableEntry {
    pub identifier: String,
    #[serde(default, deserialize_with = "explicit")]
    pub name: TextField,
    #[serde(default, deserialize_with = "explicit")]
    pub description: TextField,
    pub object_type: String,
    #[serde(default)]
    pub global_variable: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataElementEntry {
    pub identifier: String,
    #[serde(default, deserialize_with = "explicit")]
    pub name: TextField,
    #[serde(default, deserialize_with = "explicit")]
    pub description: TextField,
    pub object_variable: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegisterEntry {
    pub identifier: String,
    #[serde(default, deserialize_with = "explicit")]
    pub name: TextField,
    #[serde(default, deserialize_with = "explicit")]
    pub description: TextField,
    pub elements: Vec<String>,
    /// Rows keyed by field identifier; fields left out stay missing.
    #[serde(default)]
    pub rows: Vec<BTreeMap<String, RowData>>,
}
