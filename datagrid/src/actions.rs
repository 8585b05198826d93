//! Per-column actions menu.

use serde::Deserialize;
use serde::Serialize;

use crate::model::Column;

/// An entry of a column's actions menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnAction {
    Edit,
    Delete,
    Pin,
    Unpin,
}

impl ColumnAction {
    pub fn label(self) -> &'static str {
        match self {
            ColumnAction::Edit => "Edit",
            ColumnAction::Delete => "Delete",
            ColumnAction::Pin => "Pin",
            ColumnAction::Unpin => "Unpin",
        }
    }
}

/// Actions offered for `column`, in menu order.
///
/// Edit and delete follow the column's flags; pinning is always offered.
pub fn available(column: &Column, pinned: bool) -> Vec<ColumnAction> {
    let mut actions = Vec::with_capacity(3);
    if column.flags.editable {
        actions.push(ColumnAction::Edit);
    }
    if column.flags.deletable {
        actions.push(ColumnAction::Delete);
    }
    actions.push(if pinned {
        ColumnAction::Unpin
    } else {
        ColumnAction::Pin
    });
    actions
}
