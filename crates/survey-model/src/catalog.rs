//! The survey object graph.
//!
//! A [`Catalog`] owns every survey and metadata entity and hands out typed
//! [`Handle`]s. All association setters live here: each one validates its
//! inputs first, then updates the member's reference and both owner
//! collections, so a failed call never leaves a half-applied change.

use tracing::debug;

use crate::arena::Arena;
use crate::association::relink;
use crate::entity::Identified;
use crate::error::Result;
use crate::ids::{Handle, Origin};
use crate::metadata::{
    DataElement, GlobalVariable, ObjectVariable, StatisticalObjectType, VariableFamily,
};
use crate::survey::{Questionnaire, Study};

#[derive(Debug, Clone)]
pub struct Catalog {
    studies: Arena<Study>,
    questionnaires: Arena<Questionnaire>,
    variable_families: Arena<VariableFamily>,
    global_variables: Arena<GlobalVariable>,
    object_types: Arena<StatisticalObjectType>,
    object_variables: Arena<ObjectVariable>,
    data_elements: Arena<DataElement>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        let origin = Origin::next();
        Self {
            studies: Arena::new(origin),
            questionnaires: Arena::new(origin),
            variable_families: Arena::new(origin),
            global_variables: Arena::new(origin),
            object_types: Arena::new(origin),
            object_variables: Arena::new(origin),
            data_elements: Arena::new(origin),
        }
    }

    // =========================================================================
    // Survey
    // =========================================================================

    pub fn add_study(&mut self, identifier: impl Into<String>) -> Result<Handle<Study>> {
        self.studies.insert(Study::new(identifier)?)
    }

    pub fn study(&self, handle: Handle<Study>) -> Option<&Study> {
        self.studies.get(handle)
    }

    pub fn study_mut(&mut self, handle: Handle<Study>) -> Option<&mut Study> {
        self.studies.get_mut(handle)
    }

    pub fn find_study(&self, identifier: &str) -> Option<Handle<Study>> {
        self.studies.find(identifier)
    }

    pub fn studies(&self) -> impl Iterator<Item = (Handle<Study>, &Study)> + '_ {
        self.studies.iter()
    }

    /// Creates a questionnaire inside `study`.
    pub fn add_questionnaire(
        &mut self,
        identifier: impl Into<String>,
        study: Handle<Study>,
    ) -> Result<Handle<Questionnaire>> {
        self.studies.check(study)?;
        let handle = self
            .questionnaires
            .insert(Questionnaire::new(identifier, study)?)?;
        relink(&mut self.studies, handle, None, Some(study));
        Ok(handle)
    }

    pub fn questionnaire(&self, handle: Handle<Questionnaire>) -> Option<&Questionnaire> {
        self.questionnaires.get(handle)
    }

    pub fn questionnaire_mut(&mut self, handle: Handle<Questionnaire>) -> Option<&mut Questionnaire> {
        self.questionnaires.get_mut(handle)
    }

    pub fn find_questionnaire(&self, identifier: &str) -> Option<Handle<Questionnaire>> {
        self.questionnaires.find(identifier)
    }

    pub fn questionnaires(&self) -> impl Iterator<Item = (Handle<Questionnaire>, &Questionnaire)> + '_ {
        self.questionnaires.iter()
    }

    /// Moves a questionnaire to another study.
    pub fn set_questionnaire_study(
        &mut self,
        questionnaire: Handle<Questionnaire>,
        study: Handle<Study>,
    ) -> Result<()> {
        self.studies.check(study)?;
        let entry = self
            .questionnaires
            .get_mut(questionnaire)
            .ok_or_else(|| questionnaire.unknown())?;
        let old = entry.study();
        entry.link_study(study);
        relink(&mut self.studies, questionnaire, Some(old), Some(study));
        debug!(
            questionnaire = questionnaire.index(),
            study = study.index(),
            "questionnaire study assigned"
        );
        Ok(())
    }

    // =========================================================================
    // Global variables and families
    // =========================================================================

    pub fn add_variable_family(
        &mut self,
        identifier: impl Into<String>,
    ) -> Result<Handle<VariableFamily>> {
        self.variable_families
            .insert(VariableFamily::new(identifier)?)
    }

    pub fn variable_family(&self, handle: Handle<VariableFamily>) -> Option<&VariableFamily> {
        self.variable_families.get(handle)
    }

    pub fn variable_family_mut(
        &mut self,
        handle: Handle<VariableFamily>,
    ) -> Option<&mut VariableFamily> {
        self.variable_families.get_mut(handle)
    }

    pub fn find_variable_family(&self, identifier: &str) -> Option<Handle<VariableFamily>> {
        self.variable_families.find(identifier)
    }

    pub fn variable_families(
        &self,
    ) -> impl Iterator<Item = (Handle<VariableFamily>, &VariableFamily)> + '_ {
        self.variable_families.iter()
    }

    pub fn add_global_variable(
        &mut self,
        identifier: impl Into<String>,
    ) -> Result<Handle<GlobalVariable>> {
        self.global_variables
            .insert(GlobalVariable::new(identifier)?)
    }

    pub fn global_variable(&self, handle: Handle<GlobalVariable>) -> Option<&GlobalVariable> {
        self.global_variables.get(handle)
    }

    pub fn global_variable_mut(
        &mut self,
        handle: Handle<GlobalVariable>,
    ) -> Option<&mut GlobalVariable> {
        self.global_variables.get_mut(handle)
    }

    pub fn find_global_variable(&self, identifier: &str) -> Option<Handle<GlobalVariable>> {
        self.global_variables.find(identifier)
    }

    pub fn global_variables(
        &self,
    ) -> impl Iterator<Item = (Handle<GlobalVariable>, &GlobalVariable)> + '_ {
        self.global_variables.iter()
    }

    /// Assigns `variable` to `family`, or unassigns it when `family` is `None`.
    ///
    /// The variable leaves its previous family's member list and joins the new
    /// one exactly once, also when the family does not change.
    pub fn set_variable_family(
        &mut self,
        variable: Handle<GlobalVariable>,
        family: Option<Handle<VariableFamily>>,
    ) -> Result<()> {
        if let Some(family) = family {
            self.variable_families.check(family)?;
        }
        let entry = self
            .global_variables
            .get_mut(variable)
            .ok_or_else(|| variable.unknown())?;
        let old = entry.variable_family();
        entry.link_family(family);
        relink(&mut self.variable_families, variable, old, family);
        debug!(
            variable = %entry.identifier(),
            family = ?family.map(Handle::index),
            "variable family assigned"
        );
        Ok(())
    }

    // =========================================================================
    // Object types, object variables and data elements
    // =========================================================================

    pub fn add_object_type(
        &mut self,
        identifier: impl Into<String>,
    ) -> Result<Handle<StatisticalObjectType>> {
        self.object_types
            .insert(StatisticalObjectType::new(identifier)?)
    }

    pub fn object_type(
        &self,
        handle: Handle<StatisticalObjectType>,
    ) -> Option<&StatisticalObjectType> {
        self.object_types.get(handle)
    }

    pub fn object_type_mut(
        &mut self,
        handle: Handle<StatisticalObjectType>,
    ) -> Option<&mut StatisticalObjectType> {
        self.object_types.get_mut(handle)
    }

    pub fn find_object_type(&self, identifier: &str) -> Option<Handle<StatisticalObjectType>> {
        self.object_types.find(identifier)
    }

    pub fn object_types(
        &self,
    ) -> impl Iterator<Item = (Handle<StatisticalObjectType>, &StatisticalObjectType)> + '_ {
        self.object_types.iter()
    }

    /// Creates an object variable scoped to `object_type`.
    ///
    /// The global variable link is left unset; assign it with
    /// [`Catalog::set_global_variable`].
    pub fn add_object_variable(
        &mut self,
        identifier: impl Into<String>,
        object_type: Handle<StatisticalObjectType>,
    ) -> Result<Handle<ObjectVariable>> {
        self.object_types.check(object_type)?;
        let handle = self
            .object_variables
            .insert(ObjectVariable::new(identifier, object_type)?)?;
        relink(&mut self.object_types, handle, None, Some(object_type));
        Ok(handle)
    }

    pub fn object_variable(&self, handle: Handle<ObjectVariable>) -> Option<&ObjectVariable> {
        self.object_variables.get(handle)
    }

    pub fn object_variable_mut(
        &mut self,
        handle: Handle<ObjectVariable>,
    ) -> Option<&mut ObjectVariable> {
        self.object_variables.get_mut(handle)
    }

    pub fn find_object_variable(&self, identifier: &str) -> Option<Handle<ObjectVariable>> {
        self.object_variables.find(identifier)
    }

    pub fn object_variables(
        &self,
    ) -> impl Iterator<Item = (Handle<ObjectVariable>, &ObjectVariable)> + '_ {
        self.object_variables.iter()
    }

    /// Object variables linked to `global_variable`, in creation order.
    pub fn object_variables_of(
        &self,
        global_variable: Handle<GlobalVariable>,
    ) -> Vec<Handle<ObjectVariable>> {
        self.object_variables
            .iter()
            .filter(|(_, variable)| variable.global_variable() == Some(global_variable))
            .map(|(handle, _)| handle)
            .collect()
    }

    /// Moves an object variable to another statistical object type.
    pub fn set_statistical_object_type(
        &mut self,
        variable: Handle<ObjectVariable>,
        object_type: Handle<StatisticalObjectType>,
    ) -> Result<()> {
        self.object_types.check(object_type)?;
        let entry = self
            .object_variables
            .get_mut(variable)
            .ok_or_else(|| variable.unknown())?;
        let old = entry.statistical_object_type();
        entry.link_object_type(object_type);
        relink(&mut self.object_types, variable, Some(old), Some(object_type));
        debug!(
            variable = %entry.identifier(),
            object_type = object_type.index(),
            "statistical object type assigned"
        );
        Ok(())
    }

    /// Links an object variable to the global variable it specialises.
    pub fn set_global_variable(
        &mut self,
        variable: Handle<ObjectVariable>,
        global_variable: Handle<GlobalVariable>,
    ) -> Result<()> {
        self.global_variables.check(global_variable)?;
        let entry = self
            .object_variables
            .get_mut(variable)
            .ok_or_else(|| variable.unknown())?;
        entry.link_global_variable(global_variable);
        debug!(
            variable = %entry.identifier(),
            global_variable = global_variable.index(),
            "global variable linked"
        );
        Ok(())
    }

    /// Creates a data element owned by `object_variable`.
    pub fn add_data_element(
        &mut self,
        identifier: impl Into<String>,
        object_variable: Handle<ObjectVariable>,
    ) -> Result<Handle<DataElement>> {
        self.object_variables.check(object_variable)?;
        let handle = self
            .data_elements
            .insert(DataElement::new(identifier, object_variable)?)?;
        relink(&mut self.object_variables, handle, None, Some(object_variable));
        Ok(handle)
    }

    pub fn data_element(&self, handle: Handle<DataElement>) -> Option<&DataElement> {
        self.data_elements.get(handle)
    }

    pub fn data_element_mut(&mut self, handle: Handle<DataElement>) -> Option<&mut DataElement> {
        self.data_elements.get_mut(handle)
    }

    pub fn find_data_element(&self, identifier: &str) -> Option<Handle<DataElement>> {
        self.data_elements.find(identifier)
    }

    pub fn data_elements(&self) -> impl Iterator<Item = (Handle<DataElement>, &DataElement)> + '_ {
        self.data_elements.iter()
    }

    /// Moves a data element to another owning object variable.
    pub fn set_data_element_object_variable(
        &mut self,
        element: Handle<DataElement>,
        object_variable: Handle<ObjectVariable>,
    ) -> Result<()> {
        self.object_variables.check(object_variable)?;
        let entry = self
            .data_elements
            .get_mut(element)
            .ok_or_else(|| element.unknown())?;
        let old = entry.object_variable();
        entry.link_object_variable(object_variable);
        relink(
            &mut self.object_variables,
            element,
            Some(old),
            Some(object_variable),
        );
        debug!(
            element = %entry.identifier(),
            object_variable = object_variable.index(),
            "data element owner assigned"
        );
        Ok(())
    }

    /// Number of entities across all kinds.
    pub fn len(&self) -> usize {
        self.studies.len()
            + self.questionnaires.len()
            + self.variable_families.len()
            + self.global_variables.len()
            + self.object_types.len()
            + self.object_variables.len()
            + self.data_elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
