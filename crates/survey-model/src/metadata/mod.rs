//! Statistical metadata: global variables and their families, statistical
//! object types, object variables and data elements.
//!
//! Association fields are read through getters here and changed only through
//! [`Catalog`](crate::Catalog).

mod data_element;
mod family;
mod global_variable;
mod object_type;
mod object_variable;

pub use data_element::DataElement;
pub use family::VariableFamily;
pub use global_variable::GlobalVariable;
pub use object_type::StatisticalObjectType;
pub use object_variable::ObjectVariable;
