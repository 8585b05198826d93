//! Drives a grid through a fixture's events.

use datagrid::Grid;
use datagrid::model::ColumnEdit;
use serde::Serialize;
use serde_json::Value;

use crate::error::ReplayError;
use crate::fixture::{Fixture, column_type_of};
use crate::host::{HostEvent, ReplayHost};
use crate::script::Event;

/// Result of a replay.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    /// One entry per `snapshot` event, plus the final state.
    pub snapshots: Vec<Value>,
    /// Every callback the grid made on the host, in order.
    pub host_events: Vec<HostEvent>,
    /// Events the grid ignored.
    pub ignored: usize,
}

/// A grid wired to a [`ReplayHost`].
#[derive(Debug)]
pub struct Replay {
    grid: Grid<ReplayHost>,
    snapshots: Vec<Value>,
    ignored: usize,
}

impl Replay {
    pub fn new(fixture: &Fixture) -> Result<Self, ReplayError> {
        let rows = fixture.decode_rows()?;
        let host = ReplayHost::new(fixture.columns.clone(), rows.clone());
        let grid = Grid::with_config(fixture.config.clone(), fixture.columns.clone(), rows, host)
            .with_class_names(fixture.class_names.clone())
            .with_row_actions(fixture.row_actions.clone());

        Ok(Self {
            grid,
            snapshots: Vec::new(),
            ignored: 0,
        })
    }

    pub fn grid(&self) -> &Grid<ReplayHost> {
        &self.grid
    }

    /// Apply one event, then let the host's changes flow back.
    pub fn apply(&mut self, index: usize, event: &Event) -> Result<bool, ReplayError> {
        let applied = self.dispatch(index, event)?;
        if !applied {
            self.ignored += 1;
            log::debug!("[replay] event {} ({}) ignored", index, event.name());
        }
        self.sync();
        Ok(applied)
    }

    fn dispatch(&mut self, index: usize, event: &Event) -> Result<bool, ReplayError> {
        let grid = &mut self.grid;
        let applied = match event {
            Event::ToggleSort { column } => grid.toggle_sort(column),
            Event::BeginResize { column, x } => grid.begin_resize(column, *x),
            Event::PointerMove { x } => {
                let request = grid.pointer_move(*x);
                log::trace!("[replay] pointer move -> {:?}", request);
                request != datagrid::resize::FrameRequest::Ignored
            }
            Event::Frame => {
                grid.on_frame();
                true
            }
            Event::EndResize => grid.end_resize().is_some(),
            Event::Move { column, target } => grid.move_column(column, target),
            Event::Pin { column, pinned } => match pinned {
                Some(pinned) => grid.set_pinned(column, *pinned),
                None => grid.toggle_pin(column).is_some(),
            },
            Event::ToggleRow { row } => grid.toggle_row(row),
            Event::SelectRow { row, selected } => grid.set_row_selected(row, *selected),
            Event::SelectAll { checked } => grid.set_all_selected(*checked),
            Event::ClearSelection => grid.clear_selection(),
            Event::SaveCell { row, column, value } => {
                if grid.column(column).is_none() {
                    return Err(ReplayError::UnknownColumn {
                        index,
                        column: column.clone(),
                    });
                }
                let ty = column_type_of(grid.columns(), column);
                let value = datagrid::model::CellValue::from_json(value, ty)
                    .map_err(|source| ReplayError::value(row, column.as_str(), source))?;
                grid.save_cell(row, column, value)
            }
            Event::ColumnAction { column, action } => grid.apply_column_action(column, *action),
            Event::EditColumn {
                column,
                label,
                column_type,
            } => {
                let Some(current) = grid.column(column) else {
                    return Err(ReplayError::UnknownColumn {
                        index,
                        column: column.clone(),
                    });
                };
                let mut edit = ColumnEdit::from_column(current);
                if let Some(label) = label {
                    edit.label = label.clone();
                }
                if let Some(column_type) = column_type {
                    edit.column_type = *column_type;
                }
                grid.edit_column(column, &edit)
            }
            Event::DeleteColumn { column } => grid.delete_column(column),
            Event::RowAction { action, row } => grid.invoke_row_action(action, row),
            Event::Loading { loading } => {
                grid.set_loading(*loading);
                true
            }
            Event::Snapshot => {
                let snapshot = grid.snapshot().to_json()?;
                self.snapshots.push(snapshot);
                true
            }
        };
        Ok(applied)
    }

    /// Feed host-side changes back into the grid.
    fn sync(&mut self) {
        let host = self.grid.host_mut();
        let columns = host.take_columns();
        let rows = host.take_rows();
        if let Some(columns) = columns {
            self.grid.set_columns(columns);
        }
        if let Some(rows) = rows {
            self.grid.set_rows(rows);
        }
    }

    /// Finish the replay, capturing the final snapshot.
    pub fn finish(mut self) -> Result<Report, ReplayError> {
        self.snapshots.push(self.grid.snapshot().to_json()?);
        Ok(Report {
            snapshots: self.snapshots,
            host_events: self.grid.host().events().to_vec(),
            ignored: self.ignored,
        })
    }
}

/// Replay every event of `fixture`.
pub fn run(fixture: &Fixture) -> Result<Report, ReplayError> {
    let mut replay = Replay::new(fixture)?;
    for (index, event) in fixture.events.iter().enumerate() {
        replay.apply(index, event)?;
    }
    log::info!(
        "[replay] {} events, {} ignored",
        fixture.events.len(),
        replay.ignored
    );
    replay.finish()
}
