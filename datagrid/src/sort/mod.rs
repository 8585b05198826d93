//! Sort controller.
//!
//! Tri-state per-column cycle: ascending, descending, none. Only one column
//! is sorted at a time; toggling a different column starts it fresh at
//! ascending and discards the previous column's sort.

mod compare;
mod rows;

pub use compare::{Comparison, compare, locale_cmp};
pub use rows::{SortedRows, sort_rows};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

/// The active sort: one column and a direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub column_id: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(column_id: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            column_id: column_id.into(),
            direction,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SortController {
    active: Option<SortState>,
}

impl SortController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<&SortState> {
        self.active.as_ref()
    }

    /// Direction of `column_id` if it is the sorted column.
    pub fn direction_of(&self, column_id: &str) -> Option<SortDirection> {
        self.active
            .as_ref()
            .filter(|s| s.column_id == column_id)
            .map(|s| s.direction)
    }

    /// Advance the sort cycle for `column_id` and return the new state.
    pub fn toggle(&mut self, column_id: &str) -> Option<&SortState> {
        let next = match self.direction_of(column_id) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };
        self.active = next.map(|direction| SortState::new(column_id, direction));
        log::debug!("[sort] {} -> {:?}", column_id, next);
        self.active.as_ref()
    }

    pub fn clear(&mut self) {
        self.active = None;
    }

    /// Drop the sort if its column no longer exists. Returns `true` if cleared.
    pub fn retain(&mut self, mut exists: impl FnMut(&str) -> bool) -> bool {
        match &self.active {
            Some(state) if !exists(&state.column_id) => {
                log::debug!("[sort] sorted column {} removed", state.column_id);
                self.active = None;
                true
            }
            _ => false,
        }
    }
}
