use serde::Serialize;

use crate::association::{Members, Owner};
use crate::entity::{Descriptor, EntityKind, impl_entity};
use crate::error::Result;
use crate::ids::Identifier;
use crate::survey::Questionnaire;

/// A statistical study and its questionnaires.
#[derive(Debug, Clone, Serialize)]
pub struct Study {
    identifier: Identifier,
    #[serde(flatten)]
    descriptor: Descriptor,
    questionnaires: Members<Questionnaire>,
}

impl Study {
    pub fn new(identifier: impl Into<String>) -> Result<Self> {
        Ok(Self {
            identifier: Identifier::new(EntityKind::Study, identifier)?,
            descriptor: Descriptor::default(),
            questionnaires: Members::new(),
        })
    }

    pub fn questionnaires(&self) -> &Members<Questionnaire> {
        &self.questionnaires
    }
}

impl Owner<Questionnaire> for Study {
    fn members_mut(&mut self) -> &mut Members<Questionnaire> {
        &mut self.questionnaires
    }
}

impl_entity!(Study, EntityKind::Study);
