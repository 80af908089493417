use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::entity::{Described, Descriptor, EntityKind, impl_entity};
use crate::error::Result;
use crate::ids::{Handle, Identifier};
use crate::survey::Study;

/// Questionnaire belonging to exactly one [`Study`].
///
/// A questionnaire carries a title where other entities carry a name;
/// [`Described::name`] returns the title, and it serializes as `title`.
#[derive(Debug, Clone)]
pub struct Questionnaire {
    identifier: Identifier,
    descriptor: Descriptor,
    study: Handle<Study>,
}

impl Questionnaire {
    pub(crate) fn new(identifier: impl Into<String>, study: Handle<Study>) -> Result<Self> {
        Ok(Self {
            identifier: Identifier::new(EntityKind::Questionnaire, identifier)?,
            descriptor: Descriptor::default(),
            study,
        })
    }

    pub fn title(&self) -> &str {
        self.name()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.set_name(title);
    }

    pub fn study(&self) -> Handle<Study> {
        self.study
    }

    pub(crate) fn link_study(&mut self, study: Handle<Study>) {
        self.study = study;
    }
}

impl_entity!(Questionnaire, EntityKind::Questionnaire);

impl Serialize for Questionnaire {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Questionnaire", 4)?;
        state.serialize_field("identifier", &self.identifier)?;
        state.serialize_field("title", self.title())?;
        state.serialize_field("description", self.description())?;
        state.serialize_field("study", &self.study)?;
        state.end()
    }
}
