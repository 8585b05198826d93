//! Scripted interaction events.

use datagrid::actions::ColumnAction;
use datagrid::model::{ColumnType, RowId};
use serde::Deserialize;
use serde_json::Value;

/// One recorded user interaction, or a request to capture a snapshot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Event {
    /// Header click.
    ToggleSort { column: String },
    /// Pointer-down on a resize handle.
    BeginResize { column: String, x: f64 },
    PointerMove { x: f64 },
    /// The display refreshed.
    Frame,
    /// Pointer-up.
    EndResize,
    /// Header drag dropped onto `target`.
    Move { column: String, target: String },
    /// Set pin state, or toggle it when `pinned` is absent.
    Pin {
        column: String,
        #[serde(default)]
        pinned: Option<bool>,
    },
    ToggleRow { row: RowId },
    SelectRow { row: RowId, selected: bool },
    /// Header checkbox.
    SelectAll { checked: bool },
    ClearSelection,
    /// A committed cell edit with a raw JSON value.
    SaveCell {
        row: RowId,
        column: String,
        value: Value,
    },
    ColumnAction { column: String, action: ColumnAction },
    /// Submit the column edit form. Absent fields keep their current value.
    EditColumn {
        column: String,
        #[serde(default)]
        label: Option<String>,
        #[serde(default)]
        column_type: Option<ColumnType>,
    },
    DeleteColumn { column: String },
    RowAction { action: String, row: RowId },
    Loading { loading: bool },
    /// Capture the current snapshot into the report.
    Snapshot,
}

impl Event {
    /// Short name for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            Event::ToggleSort { .. } => "toggleSort",
            Event::BeginResize { .. } => "beginResize",
            Event::PointerMove { .. } => "pointerMove",
            Event::Frame => "frame",
            Event::EndResize => "endResize",
            Event::Move { .. } => "move",
            Event::Pin { .. } => "pin",
            Event::ToggleRow { .. } => "toggleRow",
            Event::SelectRow { .. } => "selectRow",
            Event::SelectAll { .. } => "selectAll",
            Event::ClearSelection => "clearSelection",
            Event::SaveCell { .. } => "saveCell",
            Event::ColumnAction { .. } => "columnAction",
            Event::EditColumn { .. } => "editColumn",
            Event::DeleteColumn { .. } => "deleteColumn",
            Event::RowAction { .. } => "rowAction",
            Event::Loading { .. } => "loading",
            Event::Snapshot => "snapshot",
        }
    }
}
