//! Error types
//!
//! The interaction engine itself never fails: anomalies degrade to no-ops.
//! These errors only surface at the boundary where host data is decoded.

use crate::model::ColumnType;

/// Error raised when a column descriptor fails validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColumnError {
    /// The column identifier is empty.
    #[error("Column identifier must not be empty")]
    EmptyId,

    /// An option list was supplied for a type that does not take one.
    #[error("Column '{column}' of type {column_type} cannot carry {field}")]
    UnexpectedOptions {
        column: String,
        column_type: ColumnType,
        field: &'static str,
    },

    /// Minimum width is larger than maximum width.
    #[error("Column '{column}' has minWidth {min} greater than maxWidth {max}")]
    InvalidBounds { column: String, min: f64, max: f64 },
}

impl ColumnError {
    /// Creates a new unexpected options error.
    pub fn unexpected_options(
        column: impl Into<String>,
        column_type: ColumnType,
        field: &'static str,
    ) -> Self {
        Self::UnexpectedOptions {
            column: column.into(),
            column_type,
            field,
        }
    }
}

/// Error raised when a raw value cannot be coerced into a cell value.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValueError {
    /// The raw value has a different shape than the column type expects.
    #[error("Value type mismatch for {column_type} column: got {actual}")]
    TypeMismatch {
        column_type: ColumnType,
        actual: &'static str,
    },

    /// A string could not be parsed as a date.
    #[error("Invalid date '{0}'")]
    InvalidDate(String),
}

impl ValueError {
    /// Creates a new type mismatch error.
    pub fn type_mismatch(column_type: ColumnType, actual: &'static str) -> Self {
        Self::TypeMismatch {
            column_type,
            actual,
        }
    }
}
