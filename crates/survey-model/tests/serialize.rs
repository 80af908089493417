//! Serialized shape of model entities.

use serde_json::json;

use survey_model::{Catalog, Described, Register, RegisterData};

#[test]
fn global_variable_serializes_flat_fields() {
    let mut catalog = Catalog::new();
    let economy = catalog.add_variable_family("economy").unwrap();
    let income = catalog.add_global_variable("income").unwrap();
    catalog.set_variable_family(income, Some(economy)).unwrap();
    catalog
        .global_variable_mut(income)
        .unwrap()
        .set_name("Income");

    let value = serde_json::to_value(catalog.global_variable(income).unwrap()).unwrap();

    assert_eq!(
        value,
        json!({
            "identifier": "income",
            "name": "Income",
            "description": "",
            "variable_family": 0
        })
    );
}

#[test]
fn family_serializes_member_handles() {
    let mut catalog = Catalog::new();
    let economy = catalog.add_variable_family("economy").unwrap();
    let income = catalog.add_global_variable("income").unwrap();
    let wealth = catalog.add_global_variable("wealth").unwrap();
    catalog.set_variable_family(income, Some(economy)).unwrap();
    catalog.set_variable_family(wealth, Some(economy)).unwrap();

    let value = serde_json::to_value(catalog.variable_family(economy).unwrap()).unwrap();

    assert_eq!(value["global_variables"], json!([0, 1]));
}

#[test]
fn questionnaire_serializes_title() {
    let mut catalog = Catalog::new();
    let census = catalog.add_study("census").unwrap();
    let household = catalog.add_questionnaire("household", census).unwrap();
    catalog
        .questionnaire_mut(household)
        .unwrap()
        .set_title("Household form");

    let value = serde_json::to_value(catalog.questionnaire(household).unwrap()).unwrap();

    assert_eq!(
        value,
        json!({
            "identifier": "household",
            "title": "Household form",
            "description": "",
            "study": 0
        })
    );
}

#[test]
fn register_data_serializes_rows_in_schema_order() {
    let register = Register::with_elements("persons", ["age", "income"]).unwrap();
    let mut data = RegisterData::new("persons-2006", register).unwrap();
    let mut row = data.new_row();
    row.set_field("age", 34_i64).unwrap();
    data.push_row(row).unwrap();

    let value = serde_json::to_value(&data).unwrap();

    assert_eq!(value["register"]["elements"], json!(["age", "income"]));
    assert_eq!(value["rows"], json!([{ "row_datas": [34, null] }]));
}
