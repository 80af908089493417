//! Library components of the `surveyforge` command line tool.

pub mod document;
pub mod load;
pub mod logging;
pub mod summary;

pub use document::SurveyDocument;
pub use load::{LoadError, LoadOptions, Survey, build_survey, load_survey};
pub use summary::SurveySummary;
