//! Row selection model.
//!
//! Tracks selected row identifiers. The header checkbox state is derived
//! from the selection and the current row universe, never stored.

use std::collections::HashSet;

use serde::Serialize;

use crate::model::RowId;

/// Aggregate state of the header checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderState {
    None,
    Partial,
    All,
}

impl HeaderState {
    /// Derive the state for `selected` rows out of a universe of `total`.
    pub fn derive(selected: usize, total: usize) -> Self {
        if total > 0 && selected == total {
            HeaderState::All
        } else if selected == 0 {
            HeaderState::None
        } else {
            HeaderState::Partial
        }
    }

    /// Checkbox rendering: checked only when all rows are selected.
    pub fn is_checked(self) -> bool {
        self == HeaderState::All
    }

    pub fn is_indeterminate(self) -> bool {
        self == HeaderState::Partial
    }
}

/// Set of selected row identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionModel {
    selected: HashSet<RowId>,
}

impl SelectionModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> &HashSet<RowId> {
        &self.selected
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selected.contains(id)
    }

    /// Flip membership of a row. Returns whether it is now selected.
    pub fn toggle_row(&mut self, id: &RowId) -> bool {
        if self.selected.remove(id) {
            false
        } else {
            self.selected.insert(id.clone());
            true
        }
    }

    /// Set membership of a row. Returns `true` if it changed.
    pub fn set_row(&mut self, id: &RowId, selected: bool) -> bool {
        if selected {
            self.selected.insert(id.clone())
        } else {
            self.selected.remove(id)
        }
    }

    /// Select exactly `universe`. Returns `true` if the set changed.
    pub fn select_all<'a>(&mut self, universe: impl IntoIterator<Item = &'a RowId>) -> bool {
        let next: HashSet<RowId> = universe.into_iter().cloned().collect();
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    /// Empty the selection. Returns `true` if anything was selected.
    pub fn clear(&mut self) -> bool {
        if self.selected.is_empty() {
            return false;
        }
        self.selected.clear();
        true
    }

    /// Drop identifiers outside the current universe. Returns `true` if any were dropped.
    pub fn retain(&mut self, universe: &HashSet<&RowId>) -> bool {
        let before = self.selected.len();
        self.selected.retain(|id| universe.contains(id));
        let dropped = before - self.selected.len();
        if dropped > 0 {
            log::debug!("[selection] dropped {} stale rows", dropped);
        }
        dropped > 0
    }

    pub fn header_state(&self, universe_len: usize) -> HeaderState {
        HeaderState::derive(self.selected.len(), universe_len)
    }
}
