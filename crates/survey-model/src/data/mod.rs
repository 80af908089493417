//! Register schemas and the rows of data recorded against them.
//!
//! A [`Register`] defines the ordered fields a [`Row`] may contain. Once a
//! register is wrapped in [`RegisterData`] it is frozen, so every row built
//! for it keeps exactly one slot per field.

mod register;
mod register_data;
mod row;
mod row_data;

pub use register::Register;
pub use register_data::RegisterData;
pub use row::Row;
pub use row_data::RowData;
