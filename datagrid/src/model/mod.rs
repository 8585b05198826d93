//! Data model: columns, rows, cell values and styling overrides.

mod class_names;
mod column;
mod row;
mod value;

pub use class_names::*;
pub use column::*;
pub use row::*;
pub use value::*;
