use std::fmt;

use serde::{Deserialize, Serialize};

/// One value of a row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowData {
    /// No value recorded.
    #[default]
    Missing,
    Boolean(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl RowData {
    pub fn is_missing(&self) -> bool {
        matches!(self, RowData::Missing)
    }
}

impl fmt::Display for RowData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowData::Missing => Ok(()),
            RowData::Boolean(value) => write!(f, "{value}"),
            RowData::Integer(value) => write!(f, "{value}"),
            RowData::Number(value) => write!(f, "{value}"),
            RowData::Text(value) => f.write_str(value),
        }
    }
}

impl From<&str> for RowData {
    fn from(value: &str) -> Self {
        RowData::Text(value.to_string())
    }
}

impl From<String> for RowData {
    fn from(value: String) -> Self {
        RowData::Text(value)
    }
}

impl From<i64> for RowData {
    fn from(value: i64) -> Self {
        RowData::Integer(value)
    }
}

impl From<f64> for RowData {
    fn from(value: f64) -> Self {
        RowData::Number(value)
    }
}

impl From<bool> for RowData {
    fn from(value: bool) -> Self {
        RowData::Boolean(value)
    }
}
