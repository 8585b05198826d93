//! Error types

use std::path::PathBuf;

use datagrid::error::ValueError;
use datagrid::model::RowId;

/// Errors that can occur while loading or replaying a fixture.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    /// The fixture file could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The fixture is not valid JSON or has the wrong shape.
    #[error("Invalid fixture: {0}")]
    Json(#[from] serde_json::Error),

    /// A row record has no usable `id`.
    #[error("Row {index} has no usable id")]
    MissingRowId { index: usize },

    /// A raw value does not fit its column type.
    #[error("Row {row}, column '{column}': {source}")]
    Value {
        row: RowId,
        column: String,
        #[source]
        source: ValueError,
    },

    /// An event refers to a column the fixture never declared.
    #[error("Event {index}: unknown column '{column}'")]
    UnknownColumn { index: usize, column: String },

    /// The log file could not be created.
    #[error("Log file: {0}")]
    Io(#[from] std::io::Error),

    /// A logger was already installed.
    #[error("Failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}

impl ReplayError {
    /// Creates a new value error.
    pub fn value(row: &RowId, column: impl Into<String>, source: ValueError) -> Self {
        Self::Value {
            row: row.clone(),
            column: column.into(),
            source,
        }
    }
}
