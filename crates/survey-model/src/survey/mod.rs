//! Studies and the questionnaires used to collect their data.

mod questionnaire;
mod study;

pub use questionnaire::Questionnaire;
pub use study::Study;
