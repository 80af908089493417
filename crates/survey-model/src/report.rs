//! Completeness and consistency report for a [`Catalog`].

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::entity::{EntityKind, Identified};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Object variable without a linked global variable.
pub const MISSING_GLOBAL_VARIABLE: &str = "SF0001";
/// Owner collection and member reference disagree.
pub const ASSOCIATION_MISMATCH: &str = "SF0100";

/// A single finding about one entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogIssue {
    /// Issue code (e.g., "SF0001").
    pub code: String,
    pub message: String,
    pub severity: IssueSeverity,
    pub entity: EntityKind,
    pub identifier: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogReport {
    pub issues: Vec<CatalogIssue>,
}

impl CatalogReport {
    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == IssueSeverity::Warning)
            .count()
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    fn push(
        &mut self,
        code: &str,
        severity: IssueSeverity,
        entity: EntityKind,
        identifier: &str,
        message: String,
    ) {
        self.issues.push(CatalogIssue {
            code: code.to_string(),
            message,
            severity,
            entity,
            identifier: identifier.to_string(),
        });
    }
}

impl Catalog {
    /// Checks the graph for object variables without a global variable and
    /// for owner collections that disagree with member references.
    pub fn validate(&self) -> CatalogReport {
        let mut report = CatalogReport::default();

        for (_, variable) in self.object_variables() {
            if variable.global_variable().is_none() {
                report.push(
                    MISSING_GLOBAL_VARIABLE,
                    IssueSeverity::Warning,
                    EntityKind::ObjectVariable,
                    variable.identifier().as_str(),
                    format!(
                        "object variable '{}' is not linked to a global variable",
                        variable.identifier()
                    ),
                );
            }
        }

        for (handle, variable) in self.global_variables() {
            let listed: Vec<_> = self
                .variable_families()
                .filter(|(_, family)| family.global_variables().contains(handle))
                .map(|(family, _)| family)
                .collect();
            let expected: Vec<_> = variable.variable_family().into_iter().collect();
            if listed != expected {
                report.mismatch(EntityKind::GlobalVariable, variable.identifier().as_str());
            }
        }

        for (handle, variable) in self.object_variables() {
            let listed = self
                .object_types()
                .filter(|(_, object_type)| object_type.object_variables().contains(handle))
                .map(|(object_type, _)| object_type)
                .collect::<Vec<_>>();
            if listed != [variable.statistical_object_type()] {
                report.mismatch(EntityKind::ObjectVariable, variable.identifier().as_str());
            }
        }

        for (handle, element) in self.data_elements() {
            let listed = self
                .object_variables()
                .filter(|(_, variable)| variable.data_elements().contains(handle))
                .map(|(variable, _)| variable)
                .collect::<Vec<_>>();
            if listed != [element.object_variable()] {
                report.mismatch(EntityKind::DataElement, element.identifier().as_str());
            }
        }

        for (handle, questionnaire) in self.questionnaires() {
            let listed = self
                .studies()
                .filter(|(_, study)| study.questionnaires().contains(handle))
                .map(|(study, _)| study)
                .collect::<Vec<_>>();
            if listed != [questionnaire.study()] {
                report.mismatch(
                    EntityKind::Questionnaire,
                    questionnaire.identifier().as_str(),
                );
            }
        }

        report
    }
}

impl CatalogReport {
    fn mismatch(&mut self, entity: EntityKind, identifier: &str) {
        self.push(
            ASSOCIATION_MISMATCH,
            IssueSeverity::Error,
            entity,
            identifier,
            format!("{entity} '{identifier}' is not listed by exactly its owner"),
        );
    }
}
