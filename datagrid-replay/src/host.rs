//! Host side of a replay.
//!
//! Plays the application that owns the data: it applies every requested
//! mutation to its own copy of the rows and columns and hands the result
//! back to the grid on the next cycle.

use std::collections::HashSet;

use datagrid::GridHost;
use datagrid::RowAction;
use datagrid::model::{CellValue, Column, Row, RowId};
use serde::Serialize;

/// A callback the grid made, as recorded in the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum HostEvent {
    CellChanged {
        row: RowId,
        column: String,
        value: CellValue,
    },
    SelectionChanged { selected: Vec<RowId> },
    ColumnChanged { column: Column },
    ColumnDeleted { column: String },
    RowAction { action: String, row: RowId },
}

#[derive(Debug, Default)]
pub struct ReplayHost {
    columns: Vec<Column>,
    rows: Vec<Row>,
    events: Vec<HostEvent>,
    columns_dirty: bool,
    rows_dirty: bool,
}

impl ReplayHost {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Columns changed since the last call, if any.
    pub fn take_columns(&mut self) -> Option<Vec<Column>> {
        std::mem::take(&mut self.columns_dirty).then(|| self.columns.clone())
    }

    /// Rows changed since the last call, if any.
    pub fn take_rows(&mut self) -> Option<Vec<Row>> {
        std::mem::take(&mut self.rows_dirty).then(|| self.rows.clone())
    }
}

impl GridHost for ReplayHost {
    fn on_cell_change(&mut self, row_id: &RowId, column_id: &str, value: CellValue) {
        self.events.push(HostEvent::CellChanged {
            row: row_id.clone(),
            column: column_id.to_string(),
            value: value.clone(),
        });
        if let Some(row) = self.rows.iter_mut().find(|r| r.id() == row_id) {
            row.set(column_id, value);
            self.rows_dirty = true;
        }
    }

    fn on_selection_change(&mut self, selected: &HashSet<RowId>) {
        let mut selected: Vec<RowId> = selected.iter().cloned().collect();
        selected.sort();
        self.events.push(HostEvent::SelectionChanged { selected });
    }

    fn on_column_change(&mut self, column: Column) {
        log::debug!("[host] replacing column {}", column.id);
        if let Some(slot) = self.columns.iter_mut().find(|c| c.id == column.id) {
            *slot = column.clone();
            self.columns_dirty = true;
        }
        self.events.push(HostEvent::ColumnChanged { column });
    }

    fn on_column_delete(&mut self, column_id: &str) {
        log::debug!("[host] deleting column {}", column_id);
        self.columns.retain(|c| c.id != column_id);
        for row in &mut self.rows {
            row.remove(column_id);
        }
        self.columns_dirty = true;
        self.rows_dirty = true;
        self.events.push(HostEvent::ColumnDeleted {
            column: column_id.to_string(),
        });
    }

    fn on_row_action(&mut self, action: &RowAction, row_id: &RowId) {
        self.events.push(HostEvent::RowAction {
            action: action.value.clone(),
            row: row_id.clone(),
        });
    }
}
