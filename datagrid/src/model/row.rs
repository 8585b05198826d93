//! Row records

use std::collections::BTreeMap;

use serde::Serialize;

use super::CellValue;
use super::RowId;

static ABSENT: CellValue = CellValue::Null;

/// One data item keyed by a stable identifier.
///
/// Rows are immutable snapshots from the grid's point of view: it reads
/// them and emits change requests, the host decides what the next
/// snapshot looks like.
///
/// # Example
///
/// ```
/// use datagrid::model::{CellValue, Row};
///
/// let row = Row::new(1).with("name", "Bob").with("age", 30);
/// assert_eq!(row.value("age"), &CellValue::Number(30.0));
/// assert!(row.value("missing").is_null());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    id: RowId,
    #[serde(flatten)]
    cells: BTreeMap<String, CellValue>,
}

impl Row {
    pub fn new(id: impl Into<RowId>) -> Self {
        Self {
            id: id.into(),
            cells: BTreeMap::new(),
        }
    }

    /// Builder-style setter.
    pub fn with(mut self, column_id: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.cells.insert(column_id.into(), value.into());
        self
    }

    /// Overwrite one cell. `Null` is stored as given.
    pub fn set(&mut self, column_id: impl Into<String>, value: impl Into<CellValue>) {
        self.cells.insert(column_id.into(), value.into());
    }

    /// Drop a cell, e.g. when its column is deleted.
    pub fn remove(&mut self, column_id: &str) -> Option<CellValue> {
        self.cells.remove(column_id)
    }

    pub fn id(&self) -> &RowId {
        &self.id
    }

    /// Raw cell lookup; `None` when the key is missing.
    pub fn get(&self, column_id: &str) -> Option<&CellValue> {
        self.cells.get(column_id)
    }

    /// Cell lookup collapsing a missing key to `Null`.
    pub fn value(&self, column_id: &str) -> &CellValue {
        self.cells.get(column_id).unwrap_or(&ABSENT)
    }

    /// Present (non-null) cell value, if any.
    pub fn present(&self, column_id: &str) -> Option<&CellValue> {
        self.cells.get(column_id).filter(|v| !v.is_null())
    }

    pub fn cells(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }
}
