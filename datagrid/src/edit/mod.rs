//! Cell edit dispatch.
//!
//! Editors normalize their own values (see [`editor`]); the dispatcher only
//! drops commits that would not change the cell and forwards the rest to
//! the host untouched.

pub mod editor;

pub use editor::{
    BooleanEditor, CellEditor, DateEditor, MultiSelectEditor, NumberEditor, RatingEditor,
    SelectEditor, TextEditor, ValueEditor,
};

use crate::host::GridHost;
use crate::model::{CellValue, RowId};

/// A committed cell change on its way to the host.
#[derive(Debug, Clone, PartialEq)]
pub struct CellEdit {
    pub row_id: RowId,
    pub column_id: String,
    pub value: CellValue,
}

impl CellEdit {
    pub fn new(row_id: RowId, column_id: impl Into<String>, value: CellValue) -> Self {
        Self {
            row_id,
            column_id: column_id.into(),
            value,
        }
    }
}

/// Forwards cell edits to the host, skipping no-op commits.
#[derive(Debug, Clone, Default)]
pub struct EditDispatcher {
    forwarded: u64,
    skipped: u64,
}

impl EditDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forward `edit` unless it equals `current`. Returns `true` if forwarded.
    ///
    /// `current` is the cell's value as the grid last saw it; a missing key
    /// is passed as [`CellValue::Null`].
    pub fn dispatch<H: GridHost + ?Sized>(
        &mut self,
        current: &CellValue,
        edit: CellEdit,
        host: &mut H,
    ) -> bool {
        if *current == edit.value {
            self.skipped += 1;
            log::trace!(
                "[edit] {}.{} unchanged, not forwarded",
                edit.row_id,
                edit.column_id
            );
            return false;
        }

        log::debug!(
            "[edit] {}.{} <- {}",
            edit.row_id,
            edit.column_id,
            edit.value.type_name()
        );
        self.forwarded += 1;
        host.on_cell_change(&edit.row_id, &edit.column_id, edit.value);
        true
    }

    /// Number of edits handed to the host.
    pub fn forwarded(&self) -> u64 {
        self.forwarded
    }

    /// Number of edits dropped because they changed nothing.
    pub fn skipped(&self) -> u64 {
        self.skipped
    }
}
