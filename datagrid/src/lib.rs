//! Interactive data grid engine
//!
//! The interaction core of a data grid: column ordering by drag, column
//! resizing coalesced to display frames, pinning, tri-state sorting, row
//! selection and per-type cell editing. Rendering is left to the caller;
//! the grid exposes a derived [`Snapshot`] per render cycle and reports
//! requested data changes through [`GridHost`].

pub mod actions;
pub mod config;
pub mod edit;
pub mod error;
pub mod host;
pub mod model;
pub mod order;
pub mod pin;
pub mod resize;
pub mod selection;
pub mod snapshot;
pub mod sort;

mod grid;

pub use config::GridConfig;
pub use grid::Grid;
pub use host::{Callbacks, GridHost, RowAction};
pub use snapshot::Snapshot;

pub mod prelude {
    pub use crate::actions::ColumnAction;
    pub use crate::config::GridConfig;
    pub use crate::edit::{CellEditor, ValueEditor};
    pub use crate::grid::Grid;
    pub use crate::host::{Callbacks, GridHost, RowAction};
    pub use crate::model::{CellValue, ClassNames, Column, ColumnEdit, ColumnType, Row, RowId};
    pub use crate::model::{ColumnFlags, ColumnKind, SelectOption};
    pub use crate::resize::FrameRequest;
    pub use crate::selection::HeaderState;
    pub use crate::snapshot::{ColumnView, RowView, Snapshot};
    pub use crate::sort::{SortDirection, SortState};
}
