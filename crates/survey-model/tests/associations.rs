//! Bidirectional association behaviour of the catalog.

use proptest::prelude::*;

use survey_model::{Catalog, Handle, IssueSeverity, VariableFamily};

fn occurrences(catalog: &Catalog, family: Handle<VariableFamily>, variable: &str) -> usize {
    let handle = catalog.find_global_variable(variable).unwrap();
    catalog
        .variable_family(family)
        .unwrap()
        .global_variables()
        .iter()
        .filter(|member| *member == handle)
        .count()
}

#[test]
fn assigning_same_family_twice_keeps_single_entry() {
    let mut catalog = Catalog::new();
    let income = catalog.add_global_variable("income").unwrap();
    let economy = catalog.add_variable_family("economy").unwrap();

    catalog.set_variable_family(income, Some(economy)).unwrap();
    catalog.set_variable_family(income, Some(economy)).unwrap();

    assert_eq!(occurrences(&catalog, economy, "income"), 1);
}

#[test]
fn reassignment_moves_variable_between_families() {
    let mut catalog = Catalog::new();
    let income = catalog.add_global_variable("income").unwrap();
    let economy = catalog.add_variable_family("economy").unwrap();
    let labour = catalog.add_variable_family("labour").unwrap();

    catalog.set_variable_family(income, Some(economy)).unwrap();
    catalog.set_variable_family(income, Some(labour)).unwrap();

    assert_eq!(occurrences(&catalog, economy, "income"), 0);
    assert_eq!(occurrences(&catalog, labour, "income"), 1);
    assert_eq!(
        catalog.global_variable(income).unwrap().variable_family(),
        Some(labour)
    );
}

#[test]
fn unassignment_clears_both_sides() {
    let mut catalog = Catalog::new();
    let income = catalog.add_global_variable("income").unwrap();
    let economy = catalog.add_variable_family("economy").unwrap();
    catalog.set_variable_family(income, Some(economy)).unwrap();

    catalog.set_variable_family(income, None).unwrap();

    assert!(
        catalog
            .variable_family(economy)
            .unwrap()
            .global_variables()
            .is_empty()
    );
    assert_eq!(catalog.global_variable(income).unwrap().variable_family(), None);
}

#[test]
fn unassigning_an_unassigned_variable_is_a_no_op() {
    let mut catalog = Catalog::new();
    let income = catalog.add_global_variable("income").unwrap();
    catalog.set_variable_family(income, None).unwrap();
    assert_eq!(catalog.global_variable(income).unwrap().variable_family(), None);
}

#[test]
fn family_members_keep_assignment_order() {
    let mut catalog = Catalog::new();
    let economy = catalog.add_variable_family("economy").unwrap();
    let income = catalog.add_global_variable("income").unwrap();
    let wealth = catalog.add_global_variable("wealth").unwrap();
    catalog.set_variable_family(wealth, Some(economy)).unwrap();
    catalog.set_variable_family(income, Some(economy)).unwrap();

    let members = catalog.variable_family(economy).unwrap().global_variables();
    assert_eq!(members.as_slice(), &[wealth, income]);
}

#[test]
fn object_variable_moves_between_types() {
    let mut catalog = Catalog::new();
    let person = catalog.add_object_type("person").unwrap();
    let household = catalog.add_object_type("household").unwrap();
    let income = catalog.add_object_variable("income_of", person).unwrap();

    catalog.set_statistical_object_type(income, household).unwrap();

    assert!(catalog.object_type(person).unwrap().object_variables().is_empty());
    assert!(
        catalog
            .object_type(household)
            .unwrap()
            .object_variables()
            .contains(income)
    );
    assert_eq!(
        catalog.object_variable(income).unwrap().statistical_object_type(),
        household
    );
}

#[test]
fn unknown_object_type_is_invalid_and_keeps_previous() {
    let mut catalog = Catalog::new();
    let person = catalog.add_object_type("person").unwrap();
    let income = catalog.add_object_variable("person_income", person).unwrap();

    let mut other = Catalog::new();
    let foreign = other.add_object_type("household").unwrap();
    assert_eq!(foreign.index(), person.index());

    let err = catalog
        .set_statistical_object_type(income, foreign)
        .unwrap_err();

    assert!(err.is_invalid_argument());
    assert_eq!(
        catalog.object_variable(income).unwrap().statistical_object_type(),
        person
    );
}

#[test]
fn family_from_another_catalog_is_not_linked() {
    let mut catalog = Catalog::new();
    let income = catalog.add_global_variable("income").unwrap();
    let economy = catalog.add_variable_family("economy").unwrap();

    let mut other = Catalog::new();
    let labour = other.add_variable_family("labour").unwrap();

    let err = catalog
        .set_variable_family(income, Some(labour))
        .unwrap_err();

    assert!(err.is_invalid_argument());
    assert_eq!(catalog.global_variable(income).unwrap().variable_family(), None);
    assert!(
        catalog
            .variable_family(economy)
            .unwrap()
            .global_variables()
            .is_empty()
    );
    assert!(catalog.variable_family(labour).is_none());
}

#[test]
fn member_from_another_catalog_is_rejected() {
    let mut catalog = Catalog::new();
    let person = catalog.add_object_type("person").unwrap();
    let income = catalog.add_global_variable("income").unwrap();

    let mut other = Catalog::new();
    let other_type = other.add_object_type("person").unwrap();
    let foreign = other.add_object_variable("person_income", other_type).unwrap();

    let err = catalog.set_global_variable(foreign, income).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(catalog.object_variable(foreign).is_none());
    assert!(catalog.object_type(person).unwrap().object_variables().is_empty());
}

#[test]
fn cloned_catalog_resolves_original_handles() {
    let mut catalog = Catalog::new();
    let income = catalog.add_global_variable("income").unwrap();
    let mut copy = catalog.clone();
    let economy = copy.add_variable_family("economy").unwrap();

    copy.set_variable_family(income, Some(economy)).unwrap();

    assert_eq!(copy.global_variable(income).unwrap().variable_family(), Some(economy));
    assert_eq!(catalog.global_variable(income).unwrap().variable_family(), None);
}

#[test]
fn object_variable_creation_requires_known_type() {
    let mut catalog = Catalog::new();
    let mut other = Catalog::new();
    let foreign = other.add_object_type("person").unwrap();

    let err = catalog
        .add_object_variable("person_income", foreign)
        .unwrap_err();

    assert!(err.is_invalid_argument());
    assert!(catalog.find_object_variable("person_income").is_none());
}

#[test]
fn global_variable_link_is_reported_until_set() {
    let mut catalog = Catalog::new();
    let person = catalog.add_object_type("person").unwrap();
    let person_income = catalog.add_object_variable("person_income", person).unwrap();
    assert_eq!(catalog.object_variable(person_income).unwrap().global_variable(), None);
    assert_eq!(catalog.validate().warning_count(), 1);

    let income = catalog.add_global_variable("income").unwrap();
    catalog.set_global_variable(person_income, income).unwrap();

    assert_eq!(
        catalog.object_variable(person_income).unwrap().global_variable(),
        Some(income)
    );
    assert_eq!(catalog.object_variables_of(income), vec![person_income]);
    assert!(catalog.validate().is_clean());
}

#[test]
fn data_element_moves_between_object_variables() {
    let mut catalog = Catalog::new();
    let person = catalog.add_object_type("person").unwrap();
    let gross = catalog.add_object_variable("gross_income", person).unwrap();
    let net = catalog.add_object_variable("net_income", person).unwrap();
    let q12 = catalog.add_data_element("q12", gross).unwrap();

    catalog.set_data_element_object_variable(q12, net).unwrap();
    catalog.set_data_element_object_variable(q12, net).unwrap();

    assert!(catalog.object_variable(gross).unwrap().data_elements().is_empty());
    assert_eq!(
        catalog.object_variable(net).unwrap().data_elements().as_slice(),
        &[q12]
    );
    assert_eq!(catalog.data_element(q12).unwrap().object_variable(), net);
}

#[test]
fn questionnaire_moves_between_studies() {
    let mut catalog = Catalog::new();
    let census = catalog.add_study("census").unwrap();
    let panel = catalog.add_study("panel").unwrap();
    let household = catalog.add_questionnaire("household", census).unwrap();

    catalog.set_questionnaire_study(household, panel).unwrap();

    assert!(catalog.study(census).unwrap().questionnaires().is_empty());
    assert!(catalog.study(panel).unwrap().questionnaires().contains(household));
    assert_eq!(catalog.questionnaire(household).unwrap().study(), panel);
}

#[derive(Debug, Clone)]
enum Step {
    Assign { variable: usize, family: usize },
    Unassign { variable: usize },
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (0..4usize, 0..3usize).prop_map(|(variable, family)| Step::Assign { variable, family }),
        (0..4usize).prop_map(|variable| Step::Unassign { variable }),
    ]
}

proptest! {
    #[test]
    fn every_variable_is_listed_by_exactly_its_family(steps in prop::collection::vec(step(), 0..40)) {
        let mut catalog = Catalog::new();
        let variables: Vec<_> = (0..4)
            .map(|index| catalog.add_global_variable(format!("v{index}")).unwrap())
            .collect();
        let families: Vec<_> = (0..3)
            .map(|index| catalog.add_variable_family(format!("f{index}")).unwrap())
            .collect();

        for step in steps {
            match step {
                Step::Assign { variable, family } => catalog
                    .set_variable_family(variables[variable], Some(families[family]))
                    .unwrap(),
                Step::Unassign { variable } => catalog
                    .set_variable_family(variables[variable], None)
                    .unwrap(),
            }
        }

        for variable in &variables {
            let owner = catalog.global_variable(*variable).unwrap().variable_family();
            for family in &families {
                let count = catalog
                    .variable_family(*family)
                    .unwrap()
                    .global_variables()
                    .iter()
                    .filter(|member| member == variable)
                    .count();
                let expected = usize::from(owner == Some(*family));
                prop_assert_eq!(count, expected);
            }
        }
        let report = catalog.validate();
        prop_assert!(report.issues.iter().all(|issue| issue.severity != IssueSeverity::Error));
    }
}
