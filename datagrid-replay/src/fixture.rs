//! Fixture files: grid setup plus an interaction script.

use std::fs;
use std::path::Path;

use datagrid::model::{CellValue, ClassNames, Column, ColumnType, Row, RowId};
use datagrid::{GridConfig, RowAction};
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::ReplayError;
use crate::script::Event;

/// Raw row record as the host would send it: an `id` plus one key per column.
pub type RawRow = Map<String, Value>;

/// A replay fixture.
///
/// ```json
/// {
///   "config": { "enableRowSelection": true },
///   "columns": [{ "id": "age", "type": "number", "isSortable": true }],
///   "rows": [{ "id": 1, "age": 30 }],
///   "events": [{ "type": "toggleSort", "column": "age" }, { "type": "snapshot" }]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Fixture {
    #[serde(default)]
    pub config: GridConfig,
    #[serde(default)]
    pub class_names: ClassNames,
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<RawRow>,
    #[serde(default)]
    pub row_actions: Vec<RowAction>,
    #[serde(default)]
    pub events: Vec<Event>,
}

impl Fixture {
    pub fn load(path: &Path) -> Result<Self, ReplayError> {
        let text = fs::read_to_string(path).map_err(|source| ReplayError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let fixture = Self::parse(&text)?;
        log::info!(
            "[fixture] loaded {} ({} columns, {} rows, {} events)",
            path.display(),
            fixture.columns.len(),
            fixture.rows.len(),
            fixture.events.len()
        );
        Ok(fixture)
    }

    pub fn parse(text: &str) -> Result<Self, ReplayError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode every raw row against the declared columns.
    pub fn decode_rows(&self) -> Result<Vec<Row>, ReplayError> {
        self.rows
            .iter()
            .enumerate()
            .map(|(index, raw)| decode_row(index, raw, &self.columns))
            .collect()
    }
}

/// Type of the column a value belongs to. Keys without a column keep
/// whatever scalar or string list they hold.
pub fn column_type_of(columns: &[Column], column_id: &str) -> ColumnType {
    columns
        .iter()
        .find(|c| c.id == column_id)
        .map_or(ColumnType::Custom, Column::column_type)
}

/// Decode one raw record.
pub fn decode_row(index: usize, raw: &RawRow, columns: &[Column]) -> Result<Row, ReplayError> {
    let id = raw
        .get("id")
        .and_then(|v| RowId::deserialize(v).ok())
        .ok_or(ReplayError::MissingRowId { index })?;

    let mut row = Row::new(id.clone());
    for (key, value) in raw.iter().filter(|(key, _)| key.as_str() != "id") {
        let cell = CellValue::from_json(value, column_type_of(columns, key))
            .map_err(|source| ReplayError::value(&id, key.as_str(), source))?;
        row.set(key.as_str(), cell);
    }
    Ok(row)
}
