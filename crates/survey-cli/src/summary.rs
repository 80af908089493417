//! Summaries and table rendering of a loaded survey.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde::Serialize;

use survey_model::{
    CatalogReport, Described, Identified, IssueSeverity, RegisterData, RowData,
};

use crate::load::Survey;

#[derive(Debug, Clone, Serialize)]
pub struct StudySummary {
    pub identifier: String,
    pub name: String,
    pub questionnaires: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FamilySummary {
    pub identifier: String,
    pub name: String,
    pub members: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ObjectVariableSummary {
    pub identifier: String,
    pub object_type: String,
    pub global_variable: Option<String>,
    pub data_elements: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterSummary {
    pub identifier: String,
    pub fields: Vec<String>,
    pub rows: usize,
}

/// Identifier-level overview of a survey, resolved from handles.
#[derive(Debug, Clone, Serialize)]
pub struct SurveySummary {
    pub studies: Vec<StudySummary>,
    pub families: Vec<FamilySummary>,
    /// Global variables without a family.
    pub unassigned_variables: Vec<String>,
    pub object_variables: Vec<ObjectVariableSummary>,
    pub registers: Vec<RegisterSummary>,
}

impl SurveySummary {
    pub fn from_survey(survey: &Survey) -> Self {
        let catalog = &survey.catalog;

        let studies = catalog
            .studies()
            .map(|(_, study)| StudySummary {
                identifier: study.identifier().to_string(),
                name: study.name().to_string(),
                questionnaires: study
                    .questionnaires()
                    .iter()
                    .filter_map(|handle| catalog.questionnaire(handle))
                    .map(|questionnaire| questionnaire.identifier().to_string())
                    .collect(),
            })
            .collect();

        let families = catalog
            .variable_families()
            .map(|(_, family)| FamilySummary {
                identifier: family.identifier().to_string(),
                name: family.name().to_string(),
                members: family
                    .global_variables()
                    .iter()
                    .filter_map(|handle| catalog.global_variable(handle))
                    .map(|variable| variable.identifier().to_string())
                    .collect(),
            })
            .collect();

        let unassigned_variables = catalog
            .global_variables()
            .filter(|(_, variable)| variable.variable_family().is_none())
            .map(|(_, variable)| variable.identifier().to_string())
            .collect();

        let object_variables = catalog
            .object_variables()
            .map(|(_, variable)| ObjectVariableSummary {
                identifier: variable.identifier().to_string(),
                object_type: catalog
                    .object_type(variable.statistical_object_type())
                    .map(|object_type| object_type.identifier().to_string())
                    .unwrap_or_default(),
                global_variable: variable
                    .global_variable()
                    .and_then(|handle| catalog.global_variable(handle))
                    .map(|global| global.identifier().to_string()),
                data_elements: variable.data_elements().len(),
            })
            .collect();

        let registers = survey
            .registers
            .iter()
            .map(|data| RegisterSummary {
                identifier: data.identifier().to_string(),
                fields: data
                    .register()
                    .elements()
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
                rows: data.len(),
            })
            .collect();

        Self {
            studies,
            families,
            unassigned_variables,
            object_variables,
            registers,
        }
    }
}

pub fn studies_table(summary: &SurveySummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Study"),
        header_cell("Name"),
        header_cell("Questionnaires"),
    ]);
    apply_table_style(&mut table);
    for study in &summary.studies {
        table.add_row(vec![
            identifier_cell(&study.identifier),
            Cell::new(&study.name),
            list_cell(&study.questionnaires),
        ]);
    }
    table
}

pub fn families_table(summary: &SurveySummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Family"),
        header_cell("Name"),
        header_cell("Global variables"),
    ]);
    apply_table_style(&mut table);
    for family in &summary.families {
        table.add_row(vec![
            identifier_cell(&family.identifier),
            Cell::new(&family.name),
            list_cell(&family.members),
        ]);
    }
    if !summary.unassigned_variables.is_empty() {
        table.add_row(vec![
            dim_cell("(none)"),
            dim_cell("-"),
            list_cell(&summary.unassigned_variables),
        ]);
    }
    table
}

pub fn object_variables_table(summary: &SurveySummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Object variable"),
        header_cell("Object type"),
        header_cell("Global variable"),
        header_cell("Data elements"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for variable in &summary.object_variables {
        let global = match &variable.global_variable {
            Some(global) => Cell::new(global),
            None => Cell::new("missing").fg(Color::Yellow),
        };
        table.add_row(vec![
            identifier_cell(&variable.identifier),
            Cell::new(&variable.object_type),
            global,
            Cell::new(variable.data_elements),
        ]);
    }
    table
}

/// One column per register field, one line per row.
pub fn rows_table(data: &RegisterData) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend(
        data.register()
            .elements()
            .iter()
            .map(|element| header_cell(element.as_str())),
    );
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, row) in data.rows().iter().enumerate() {
        let mut cells = vec![dim_cell(index + 1)];
        cells.extend(row.row_datas().iter().map(value_cell));
        table.add_row(cells);
    }
    table
}

pub fn report_table(report: &CatalogReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Code"),
        header_cell("Entity"),
        header_cell("Identifier"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    for issue in &report.issues {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(&issue.code),
            Cell::new(issue.entity.as_str()),
            identifier_cell(&issue.identifier),
            Cell::new(&issue.message),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn identifier_cell(identifier: &str) -> Cell {
    Cell::new(identifier)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn list_cell(values: &[String]) -> Cell {
    if values.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(values.join(", "))
    }
}

fn value_cell(value: &RowData) -> Cell {
    match value {
        RowData::Missing => dim_cell("."),
        RowData::Integer(_) | RowData::Number(_) => {
            Cell::new(value).set_alignment(CellAlignment::Right)
        }
        _ => Cell::new(value),
    }
}

fn severity_cell(severity: IssueSeverity) -> Cell {
    match severity {
        IssueSeverity::Error => Cell::new("ERROR").fg(Color::Red),
        IssueSeverity::Warning => Cell::new("WARN").fg(Color::Yellow),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
