//! Host interface.
//!
//! The host owns columns and rows. The grid only asks for changes through
//! these callbacks and never waits for, or checks, the outcome: whatever
//! the host supplies on the next cycle is the truth.

use std::collections::HashSet;

use crate::model::{CellValue, Column, RowId};

/// An entry of the per-row actions menu.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RowAction {
    /// Unique value identifying the action.
    pub value: String,
    pub label: String,
    /// Opaque icon name, never interpreted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl RowAction {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            icon: None,
        }
    }

    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// Callbacks the grid invokes on its host.
///
/// Every method defaults to a no-op, so a host implements only what it
/// cares about. `()` is the host that ignores everything.
pub trait GridHost {
    /// A cell should take a new value.
    fn on_cell_change(&mut self, _row_id: &RowId, _column_id: &str, _value: CellValue) {}

    /// The selection changed.
    fn on_selection_change(&mut self, _selected: &HashSet<RowId>) {}

    /// A column descriptor should be replaced.
    fn on_column_change(&mut self, _column: Column) {}

    /// A column should be deleted.
    fn on_column_delete(&mut self, _column_id: &str) {}

    /// A row action was chosen.
    fn on_row_action(&mut self, _action: &RowAction, _row_id: &RowId) {}
}

impl GridHost for () {}

type CellFn = Box<dyn FnMut(&RowId, &str, CellValue)>;
type SelectionFn = Box<dyn FnMut(&HashSet<RowId>)>;
type ColumnFn = Box<dyn FnMut(Column)>;
type DeleteFn = Box<dyn FnMut(&str)>;
type RowActionFn = Box<dyn FnMut(&RowAction, &RowId)>;

/// Closure-based host: a required cell callback plus optional extras.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use datagrid::{Callbacks, GridHost};
/// use datagrid::model::{CellValue, RowId};
///
/// let saved = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&saved);
/// let mut host = Callbacks::new(move |row: &RowId, col: &str, value: CellValue| {
///     sink.borrow_mut().push((row.clone(), col.to_string(), value));
/// });
/// host.on_cell_change(&RowId::from(1), "name", CellValue::from("Al"));
/// assert_eq!(saved.borrow().len(), 1);
/// ```
pub struct Callbacks {
    on_cell_change: CellFn,
    on_selection_change: Option<SelectionFn>,
    on_column_change: Option<ColumnFn>,
    on_column_delete: Option<DeleteFn>,
    on_row_action: Option<RowActionFn>,
}

impl Callbacks {
    pub fn new(on_cell_change: impl FnMut(&RowId, &str, CellValue) + 'static) -> Self {
        Self {
            on_cell_change: Box::new(on_cell_change),
            on_selection_change: None,
            on_column_change: None,
            on_column_delete: None,
            on_row_action: None,
        }
    }

    pub fn on_selection_change(mut self, f: impl FnMut(&HashSet<RowId>) + 'static) -> Self {
        self.on_selection_change = Some(Box::new(f));
        self
    }

    pub fn on_column_change(mut self, f: impl FnMut(Column) + 'static) -> Self {
        self.on_column_change = Some(Box::new(f));
        self
    }

    pub fn on_column_delete(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_column_delete = Some(Box::new(f));
        self
    }

    pub fn on_row_action(mut self, f: impl FnMut(&RowAction, &RowId) + 'static) -> Self {
        self.on_row_action = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_selection_change", &self.on_selection_change.is_some())
            .field("on_column_change", &self.on_column_change.is_some())
            .field("on_column_delete", &self.on_column_delete.is_some())
            .field("on_row_action", &self.on_row_action.is_some())
            .finish_non_exhaustive()
    }
}

impl GridHost for Callbacks {
    fn on_cell_change(&mut self, row_id: &RowId, column_id: &str, value: CellValue) {
        (self.on_cell_change)(row_id, column_id, value);
    }

    fn on_selection_change(&mut self, selected: &HashSet<RowId>) {
        if let Some(f) = self.on_selection_change.as_mut() {
            f(selected);
        }
    }

    fn on_column_change(&mut self, column: Column) {
        if let Some(f) = self.on_column_change.as_mut() {
            f(column);
        }
    }

    fn on_column_delete(&mut self, column_id: &str) {
        if let Some(f) = self.on_column_delete.as_mut() {
            f(column_id);
        }
    }

    fn on_row_action(&mut self, action: &RowAction, row_id: &RowId) {
        if let Some(f) = self.on_row_action.as_mut() {
            f(action, row_id);
        }
    }
}
