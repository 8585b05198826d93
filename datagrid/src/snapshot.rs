//! Derived view state for one render cycle.
//!
//! A [`Snapshot`] borrows from the grid and is rebuilt from scratch every
//! time it is asked for; nothing in it is cached between cycles.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::model::{ClassNames, Column, Row, RowId};
use crate::selection::HeaderState;
use crate::sort::{SortDirection, SortState};

/// One visible column, ready to render.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnView<'a> {
    pub column: &'a Column,
    pub width: f64,
    /// Left edge within its region: pinned columns stack from the grid's
    /// left edge, scrollable columns from the end of the pinned region.
    pub offset: f64,
    pub pinned: bool,
    pub sort: Option<SortDirection>,
    /// Whether this column's resize handle is being dragged.
    pub resizing: bool,
}

impl ColumnView<'_> {
    pub fn id(&self) -> &str {
        &self.column.id
    }
}

/// One row in display order.
#[derive(Debug, Clone, Serialize)]
pub struct RowView<'a> {
    pub row: &'a Row,
    pub selected: bool,
}

impl RowView<'_> {
    pub fn id(&self) -> &RowId {
        self.row.id()
    }
}

/// Consistent view of every projection at one point in time.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot<'a> {
    pub pinned_columns: Vec<ColumnView<'a>>,
    pub scrollable_columns: Vec<ColumnView<'a>>,
    /// Offset of the scrollable region.
    pub pinned_width: f64,
    pub rows: Vec<RowView<'a>>,
    /// Current width per column, hidden columns included.
    pub widths: BTreeMap<&'a str, f64>,
    /// Selected row identifiers, sorted.
    pub selection: Vec<&'a RowId>,
    pub header: HeaderState,
    pub sort: Option<&'a SortState>,
    /// Column whose resize session is live.
    pub resizing: Option<&'a str>,
    /// A pointer move is waiting for the next display frame.
    pub frame_pending: bool,
    /// Value pairs the last sort could not compare.
    pub incomparable: usize,
    pub loading: bool,
    pub selection_enabled: bool,
    pub show_column_actions: bool,
    /// Column whose edit form is open.
    pub editing_column: Option<&'a str>,
    pub class_names: &'a ClassNames,
}

impl<'a> Snapshot<'a> {
    /// Visible columns, pinned first.
    pub fn columns(&self) -> impl Iterator<Item = &ColumnView<'a>> {
        self.pinned_columns.iter().chain(&self.scrollable_columns)
    }

    pub fn column_ids(&self) -> Vec<&str> {
        self.columns().map(ColumnView::id).collect()
    }

    pub fn row_ids(&self) -> Vec<&RowId> {
        self.rows.iter().map(RowView::id).collect()
    }

    pub fn column(&self, column_id: &str) -> Option<&ColumnView<'a>> {
        self.columns().find(|c| c.id() == column_id)
    }

    pub fn width(&self, column_id: &str) -> Option<f64> {
        self.widths.get(column_id).copied()
    }

    /// Rendering JSON for hosts that consume snapshots out of process.
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}
