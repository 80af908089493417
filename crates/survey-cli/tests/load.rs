use std::path::Path;

use serde_json::json;

use survey_cli::{LoadError, LoadOptions, SurveyDocument, SurveySummary, build_survey, load_survey};
use survey_model::{Described, EntityKind, ErrorKind, Identified, RowData};

fn document(value: serde_json::Value) -> SurveyDocument {
    serde_json::from_value(value).unwrap()
}

fn census() -> SurveyDocument {
    document(json!({
        "studies": [{ "identifier": "census", "name": "Census 2006" }],
        "questionnaires": [
            { "identifier": "household", "study": "census", "title": "Household form" }
        ],
        "variable_families": [{ "identifier": "economy" }],
        "global_variables": [{ "identifier": "income", "family": "economy" }],
        "object_types": [{ "identifier": "person" }],
        "object_variables": [
            { "identifier": "person_income", "object_type": "person", "global_variable": "income" }
        ],
        "data_elements": [{ "identifier": "q12", "object_variable": "person_income" }],
        "registers": [{
            "identifier": "persons",
            "elements": ["age", "income"],
            "rows": [{ "age": 34 }]
        }]
    }))
}

#[test]
fn builds_linked_catalog() {
    let survey = build_survey(&census(), &LoadOptions::default()).unwrap();
    let catalog = &survey.catalog;

    let study = catalog.find_study("census").unwrap();
    let household = catalog.find_questionnaire("household").unwrap();
    assert!(catalog.study(study).unwrap().questionnaires().contains(household));
    assert_eq!(catalog.questionnaire(household).unwrap().title(), "Household form");

    let economy = catalog.find_variable_family("economy").unwrap();
    let income = catalog.find_global_variable("income").unwrap();
    assert!(catalog.variable_family(economy).unwrap().global_variables().contains(income));

    let variable = catalog.find_object_variable("person_income").unwrap();
    let element = catalog.find_data_element("q12").unwrap();
    assert_eq!(catalog.data_element(element).unwrap().object_variable(), variable);
    assert!(catalog.validate().is_clean());

    let persons = survey.register("persons").unwrap();
    assert_eq!(persons.len(), 1);
    let row = &persons.rows()[0];
    assert_eq!(row.field("age").unwrap(), &RowData::Integer(34));
    assert!(row.field("income").unwrap().is_missing());
}

#[test]
fn null_description_is_rejected() {
    let doc = document(json!({
        "studies": [{ "identifier": "census", "description": null }]
    }));
    let error = build_survey(&doc, &LoadOptions::default()).unwrap_err();
    assert!(matches!(
        error,
        LoadError::NullField { entity: EntityKind::Study, field: "description", .. }
    ));
}

#[test]
fn absent_text_keeps_defaults() {
    let doc = document(json!({ "object_types": [{ "identifier": "person" }] }));
    let survey = build_survey(&doc, &LoadOptions::default()).unwrap();
    let handle = survey.catalog.find_object_type("person").unwrap();
    let object_type = survey.catalog.object_type(handle).unwrap();
    assert_eq!(object_type.name(), "");
    assert_eq!(object_type.description(), "");
}

#[test]
fn unknown_family_is_unresolved() {
    let doc = document(json!({
        "global_variables": [{ "identifier": "income", "family": "economy" }]
    }));
    let error = build_survey(&doc, &LoadOptions::default()).unwrap_err();
    match error {
        LoadError::UnresolvedReference { entity, identifier, target, reference } => {
            assert_eq!(entity, EntityKind::GlobalVariable);
            assert_eq!(identifier, "income");
            assert_eq!(target, EntityKind::VariableFamily);
            assert_eq!(reference, "economy");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn strict_loading_requires_global_variable() {
    let doc = document(json!({
        "object_types": [{ "identifier": "person" }],
        "object_variables": [{ "identifier": "person_age", "object_type": "person" }]
    }));

    let lenient = build_survey(&doc, &LoadOptions::default()).unwrap();
    let report = lenient.catalog.validate();
    assert_eq!(report.warning_count(), 1);
    assert!(!report.has_errors());

    let error = build_survey(&doc, &LoadOptions::default().strict(true)).unwrap_err();
    assert!(matches!(
        error,
        LoadError::MissingReference { target: EntityKind::GlobalVariable, .. }
    ));
}

#[test]
fn duplicate_identifier_is_a_model_error() {
    let doc = document(json!({
        "studies": [{ "identifier": "census" }, { "identifier": "census" }]
    }));
    match build_survey(&doc, &LoadOptions::default()).unwrap_err() {
        LoadError::Model { source, .. } => assert_eq!(source.kind(), ErrorKind::InvalidArgument),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn unknown_row_field_is_not_found() {
    let doc = document(json!({
        "registers": [{
            "identifier": "persons",
            "elements": ["age"],
            "rows": [{ "height": 180 }]
        }]
    }));
    match build_survey(&doc, &LoadOptions::default()).unwrap_err() {
        LoadError::Model { entity, source, .. } => {
            assert_eq!(entity, EntityKind::Register);
            assert_eq!(source.kind(), ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn missing_file_is_a_read_error() {
    let error = load_survey(Path::new("does/not/exist.json"), &LoadOptions::default()).unwrap_err();
    assert!(matches!(error, LoadError::Read { .. }));
}

#[test]
fn loads_from_file() {
    let path = std::env::temp_dir().join(format!("surveyforge-load-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "studies": [{ "identifier": "census" }] }"#).unwrap();
    let survey = load_survey(&path, &LoadOptions::default());
    std::fs::remove_file(&path).unwrap();
    let survey = survey.unwrap();
    let study = survey.catalog.find_study("census").unwrap();
    assert_eq!(survey.catalog.study(study).unwrap().identifier(), "census");
}

#[test]
fn malformed_file_is_a_parse_error() {
    let path = std::env::temp_dir().join(format!("surveyforge-parse-{}.json", std::process::id()));
    std::fs::write(&path, r#"{ "studies": "#).unwrap();
    let result = load_survey(&path, &LoadOptions::default());
    std::fs::remove_file(&path).unwrap();
    assert!(matches!(result.unwrap_err(), LoadError::Parse { .. }));
}

#[test]
fn summary_snapshot() {
    let survey = build_survey(&census(), &LoadOptions::default()).unwrap();
    let summary = SurveySummary::from_survey(&survey);
    insta::assert_json_snapshot!(summary, @r#"
    {
      "studies": [
        {
          "identifier": "census",
          "name": "Census 2006",
          "questionnaires": [
            "household"
          ]
        }
      ],
      "families": [
        {
          "identifier": "economy",
          "name": "",
          "members": [
            "income"
          ]
        }
      ],
      "unassigned_variables": [],
      "object_variables": [
        {
          "identifier": "person_income",
          "object_type": "person",
          "global_variable": "income",
          "data_elements": 1
        }
      ],
      "registers": [
        {
          "identifier": "persons",
          "fields": [
            "age",
            "income"
          ],
          "rows": 1
        }
      ]
    }
    "#);
}
