//! Grid orchestrator.
//!
//! [`Grid`] owns every controller, routes interaction entry points to the
//! one responsible, and derives a fresh [`Snapshot`] on request. Controllers
//! never touch each other's state; the only cross-cutting rule lives here:
//! a structural change (move, pin, delete) to a column whose resize handle
//! is being dragged ends that drag first.
//!
//! The host stays the source of truth for data. Cell and column changes are
//! requested through [`GridHost`] and only show up once the host hands the
//! updated rows or columns back through [`Grid::set_rows`] and
//! [`Grid::set_columns`].

use std::collections::{BTreeMap, HashSet};

use crate::actions::{self, ColumnAction};
use crate::config::GridConfig;
use crate::edit::{CellEdit, CellEditor, EditDispatcher, ValueEditor};
use crate::host::{GridHost, RowAction};
use crate::model::{CellValue, ClassNames, Column, ColumnEdit, Row, RowId};
use crate::order::ColumnOrder;
use crate::pin::PinSet;
use crate::resize::{FrameRequest, ResizeController, ResizeSession, WidthMap};
use crate::selection::{HeaderState, SelectionModel};
use crate::snapshot::{ColumnView, RowView, Snapshot};
use crate::sort::{SortController, SortState, SortedRows, sort_rows};

/// Interactive grid over host-owned columns and rows.
///
/// # Example
///
/// ```
/// use datagrid::Grid;
/// use datagrid::model::{Column, Row, RowId};
///
/// let columns = vec![Column::text("name", "Name"), Column::number("age", "Age").sortable()];
/// let rows = vec![
///     Row::new(1).with("name", "Bob").with("age", 30),
///     Row::new(2).with("name", "Al").with("age", 40),
/// ];
/// let mut grid = Grid::new(columns, rows, ());
///
/// grid.toggle_sort("age");
/// grid.toggle_sort("age");
/// let order: Vec<RowId> = grid.snapshot().row_ids().into_iter().cloned().collect();
/// assert_eq!(order, vec![RowId::from(2), RowId::from(1)]);
/// ```
#[derive(Debug)]
pub struct Grid<H: GridHost = ()> {
    config: GridConfig,
    class_names: ClassNames,
    columns: Vec<Column>,
    rows: Vec<Row>,
    order: ColumnOrder,
    pins: PinSet,
    widths: WidthMap,
    resize: ResizeController,
    sort: SortController,
    sorted: SortedRows,
    selection: SelectionModel,
    dispatcher: EditDispatcher,
    row_actions: Vec<RowAction>,
    editing_column: Option<String>,
    loading: bool,
    host: H,
}

impl<H: GridHost> Grid<H> {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>, host: H) -> Self {
        Self::with_config(GridConfig::default(), columns, rows, host)
    }

    pub fn with_config(config: GridConfig, columns: Vec<Column>, rows: Vec<Row>, host: H) -> Self {
        let order = ColumnOrder::new(columns.iter().map(|c| c.id.as_str()));
        let mut widths = WidthMap::new();
        widths.seed(&columns, &config);
        let sorted = sort_rows(&rows, None);

        log::debug!(
            "[grid] created with {} columns, {} rows",
            columns.len(),
            rows.len()
        );

        Self {
            config,
            class_names: ClassNames::default(),
            columns,
            rows,
            order,
            pins: PinSet::new(),
            widths,
            resize: ResizeController::new(),
            sort: SortController::new(),
            sorted,
            selection: SelectionModel::new(),
            dispatcher: EditDispatcher::new(),
            row_actions: Vec::new(),
            editing_column: None,
            loading: false,
            host,
        }
    }

    pub fn with_class_names(mut self, class_names: ClassNames) -> Self {
        self.class_names = class_names;
        self
    }

    pub fn with_row_actions(mut self, row_actions: Vec<RowAction>) -> Self {
        self.row_actions = row_actions;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, column_id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == column_id)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row(&self, row_id: &RowId) -> Option<&Row> {
        self.rows.iter().find(|r| r.id() == row_id)
    }

    /// Column identifiers in display order, hidden columns included.
    pub fn order(&self) -> &[String] {
        self.order.ids()
    }

    pub fn widths(&self) -> &WidthMap {
        &self.widths
    }

    pub fn is_pinned(&self, column_id: &str) -> bool {
        self.pins.is_pinned(column_id)
    }

    pub fn sort_state(&self) -> Option<&SortState> {
        self.sort.state()
    }

    pub fn resize_session(&self) -> Option<&ResizeSession> {
        self.resize.session()
    }

    pub fn selection(&self) -> &HashSet<RowId> {
        self.selection.selected()
    }

    pub fn header_state(&self) -> HeaderState {
        self.selection.header_state(self.rows.len())
    }

    pub fn row_actions(&self) -> &[RowAction] {
        &self.row_actions
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    // =========================================================================
    // Host input
    // =========================================================================

    /// Take a new descriptor list from the host.
    ///
    /// The order keeps surviving columns where they were and appends new
    /// ones. Widths, pins, sort and an active resize of a removed column
    /// are dropped.
    pub fn set_columns(&mut self, columns: Vec<Column>) {
        self.columns = columns;
        let ids: HashSet<&str> = self.columns.iter().map(|c| c.id.as_str()).collect();

        if let Some(session) = self.resize.session()
            && !ids.contains(session.column_id.as_str())
        {
            log::debug!("[grid] resized column {} removed", session.column_id);
            self.resize.end(&mut self.widths);
        }

        self.order.reconcile(self.columns.iter().map(|c| c.id.as_str()));
        self.widths.retain(|id| ids.contains(id));
        self.widths.seed(&self.columns, &self.config);
        self.pins.retain(|id| ids.contains(id));
        self.sort.retain(|id| ids.contains(id));

        if let Some(editing) = &self.editing_column
            && !ids.contains(editing.as_str())
        {
            self.editing_column = None;
        }

        self.resort();
    }

    /// Take a new row list from the host.
    ///
    /// Selected identifiers that no longer exist are dropped, with one
    /// notification if that changed the selection.
    pub fn set_rows(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.resort();

        let universe: HashSet<&RowId> = self.rows.iter().map(Row::id).collect();
        if self.selection.retain(&universe) {
            self.notify_selection();
        }
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    // =========================================================================
    // Resize
    // =========================================================================

    /// Pointer-down on a column's resize handle.
    pub fn begin_resize(&mut self, column_id: &str, pointer_x: f64) -> bool {
        let Some(column) = self.columns.iter().find(|c| c.id == column_id) else {
            log::debug!("[grid] begin_resize on unknown column {}", column_id);
            return false;
        };
        if column.flags.hidden {
            log::debug!("[grid] {} is hidden, no resize handle", column_id);
            return false;
        }
        self.resize
            .begin(column, pointer_x, &self.widths, &self.config)
    }

    /// Pointer move during a drag. The width is applied on the next frame.
    pub fn pointer_move(&mut self, pointer_x: f64) -> FrameRequest {
        self.resize.pointer_moved(pointer_x)
    }

    /// Display frame callback. Returns the width applied, if any.
    pub fn on_frame(&mut self) -> Option<f64> {
        self.resize.on_frame(&mut self.widths)
    }

    /// Pointer-up. A no-op when no drag is active.
    pub fn end_resize(&mut self) -> Option<ResizeSession> {
        self.resize.end(&mut self.widths)
    }

    fn end_resize_on(&mut self, column_ids: &[&str]) {
        if column_ids.iter().any(|id| self.resize.is_resizing(id)) {
            log::debug!("[grid] structural change on resized column, ending resize");
            self.resize.end(&mut self.widths);
        }
    }

    // =========================================================================
    // Order and pins
    // =========================================================================

    /// Complete a header drag: `column_id` takes `target_id`'s place.
    ///
    /// Both columns must be draggable, visible and unpinned.
    pub fn move_column(&mut self, column_id: &str, target_id: &str) -> bool {
        if column_id == target_id {
            return false;
        }
        let movable = |id: &str| {
            self.column(id).is_some_and(|c| {
                c.flags.draggable && !c.flags.hidden && !self.pins.is_pinned(id)
            })
        };
        if !movable(column_id) || !movable(target_id) {
            log::debug!(
                "[grid] move {} -> {} rejected: not both draggable, visible and unpinned",
                column_id,
                target_id
            );
            return false;
        }

        self.end_resize_on(&[column_id, target_id]);
        self.order.move_to(column_id, target_id)
    }

    /// Pin or unpin a column. Returns `true` if its state changed.
    pub fn set_pinned(&mut self, column_id: &str, pinned: bool) -> bool {
        if self.column(column_id).is_none() || self.pins.is_pinned(column_id) == pinned {
            return false;
        }
        self.end_resize_on(&[column_id]);
        self.pins.set_pinned(column_id, pinned)
    }

    /// Flip a column's pin. Returns the new state, `None` for an unknown column.
    pub fn toggle_pin(&mut self, column_id: &str) -> Option<bool> {
        self.column(column_id)?;
        let next = !self.pins.is_pinned(column_id);
        self.set_pinned(column_id, next);
        Some(next)
    }

    // =========================================================================
    // Sort
    // =========================================================================

    /// Header click on a sortable column. Returns `false` if ignored.
    pub fn toggle_sort(&mut self, column_id: &str) -> bool {
        if !self.column(column_id).is_some_and(|c| c.flags.sortable) {
            log::debug!("[grid] {} is not sortable", column_id);
            return false;
        }
        self.sort.toggle(column_id);
        self.resort();
        true
    }

    fn resort(&mut self) {
        self.sorted = sort_rows(&self.rows, self.sort.state());
    }

    // =========================================================================
    // Selection
    // =========================================================================

    fn selection_enabled(&self) -> bool {
        if !self.config.enable_row_selection {
            log::trace!("[grid] row selection disabled");
        }
        self.config.enable_row_selection
    }

    fn notify_selection(&mut self) {
        log::debug!("[grid] selection now {} rows", self.selection.len());
        self.host.on_selection_change(self.selection.selected());
    }

    /// Flip one row. Returns `true` if the selection changed.
    pub fn toggle_row(&mut self, row_id: &RowId) -> bool {
        if !self.selection_enabled() || self.row(row_id).is_none() {
            return false;
        }
        self.selection.toggle_row(row_id);
        self.notify_selection();
        true
    }

    /// Row checkbox. Returns `true` if the selection changed.
    pub fn set_row_selected(&mut self, row_id: &RowId, selected: bool) -> bool {
        if !self.selection_enabled() || self.row(row_id).is_none() {
            return false;
        }
        let changed = self.selection.set_row(row_id, selected);
        if changed {
            self.notify_selection();
        }
        changed
    }

    /// Select every current row.
    pub fn select_all(&mut self) -> bool {
        if !self.selection_enabled() {
            return false;
        }
        let changed = self.selection.select_all(self.rows.iter().map(Row::id));
        if changed {
            self.notify_selection();
        }
        changed
    }

    pub fn clear_selection(&mut self) -> bool {
        if !self.selection_enabled() {
            return false;
        }
        let changed = self.selection.clear();
        if changed {
            self.notify_selection();
        }
        changed
    }

    /// Header checkbox: checked selects every row, unchecked clears.
    pub fn set_all_selected(&mut self, checked: bool) -> bool {
        if checked {
            self.select_all()
        } else {
            self.clear_selection()
        }
    }

    // =========================================================================
    // Cell edits
    // =========================================================================

    /// Editor for one cell. `None` for unknown cells and custom columns.
    pub fn editor(&self, row_id: &RowId, column_id: &str) -> Option<CellEditor> {
        let row = self.row(row_id)?;
        let column = self.column(column_id)?;
        CellEditor::for_column(column, row.value(column_id), &self.config)
    }

    /// Request a cell change. Unchanged values are not forwarded.
    pub fn save_cell(&mut self, row_id: &RowId, column_id: &str, value: CellValue) -> bool {
        let Some(row) = self.rows.iter().find(|r| r.id() == row_id) else {
            log::debug!("[grid] save on unknown row {}", row_id);
            return false;
        };
        if !self.column(column_id).is_some_and(|c| c.flags.editable) {
            log::debug!("[grid] {} is not editable", column_id);
            return false;
        }
        let edit = CellEdit::new(row_id.clone(), column_id, value);
        self.dispatcher
            .dispatch(row.value(column_id), edit, &mut self.host)
    }

    /// Commit `editor` for a cell and forward the result, if any.
    pub fn commit_editor(
        &mut self,
        row_id: &RowId,
        column_id: &str,
        editor: &mut CellEditor,
    ) -> bool {
        match editor.commit() {
            Some(value) => self.save_cell(row_id, column_id, value),
            None => false,
        }
    }

    pub fn dispatcher(&self) -> &EditDispatcher {
        &self.dispatcher
    }

    // =========================================================================
    // Column actions
    // =========================================================================

    /// Actions menu for a column. Empty when the menu is turned off.
    pub fn column_actions(&self, column_id: &str) -> Vec<ColumnAction> {
        if !self.config.show_column_actions {
            return Vec::new();
        }
        self.column(column_id)
            .map(|c| actions::available(c, self.pins.is_pinned(column_id)))
            .unwrap_or_default()
    }

    /// Choose an entry of a column's actions menu.
    ///
    /// `Edit` opens the column edit form (see [`Grid::edit_form`]).
    pub fn apply_column_action(&mut self, column_id: &str, action: ColumnAction) -> bool {
        if !self.column_actions(column_id).contains(&action) {
            log::debug!("[grid] {:?} not offered for {}", action, column_id);
            return false;
        }
        match action {
            ColumnAction::Edit => {
                self.editing_column = Some(column_id.to_string());
                true
            }
            ColumnAction::Delete => self.delete_column(column_id),
            ColumnAction::Pin => self.set_pinned(column_id, true),
            ColumnAction::Unpin => self.set_pinned(column_id, false),
        }
    }

    /// Column whose edit form is open.
    pub fn editing_column(&self) -> Option<&str> {
        self.editing_column.as_deref()
    }

    /// Initial values of the open edit form.
    pub fn edit_form(&self) -> Option<ColumnEdit> {
        let id = self.editing_column.as_deref()?;
        self.column(id).map(ColumnEdit::from_column)
    }

    pub fn cancel_column_edit(&mut self) {
        self.editing_column = None;
    }

    /// Send the replacement descriptor for an edit to the host.
    ///
    /// The local descriptor list is untouched until the host supplies the
    /// new one.
    pub fn edit_column(&mut self, column_id: &str, edit: &ColumnEdit) -> bool {
        let Some(column) = self.column(column_id).filter(|c| c.flags.editable) else {
            log::debug!("[grid] {} cannot be edited", column_id);
            return false;
        };
        let replacement = column.apply_edit(edit);
        if self.editing_column.as_deref() == Some(column_id) {
            self.editing_column = None;
        }
        log::debug!(
            "[grid] column {} edited as {}",
            column_id,
            replacement.column_type()
        );
        self.host.on_column_change(replacement);
        true
    }

    /// Ask the host to delete a column.
    pub fn delete_column(&mut self, column_id: &str) -> bool {
        if !self.column(column_id).is_some_and(|c| c.flags.deletable) {
            log::debug!("[grid] {} cannot be deleted", column_id);
            return false;
        }
        self.end_resize_on(&[column_id]);
        if self.editing_column.as_deref() == Some(column_id) {
            self.editing_column = None;
        }
        self.host.on_column_delete(column_id);
        true
    }

    // =========================================================================
    // Row actions
    // =========================================================================

    /// Choose a row action by its value.
    pub fn invoke_row_action(&mut self, action_value: &str, row_id: &RowId) -> bool {
        if self.row(row_id).is_none() {
            return false;
        }
        let Some(action) = self.row_actions.iter().find(|a| a.value == action_value) else {
            log::debug!("[grid] unknown row action {}", action_value);
            return false;
        };
        self.host.on_row_action(action, row_id);
        true
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    fn width_of(&self, column: &Column) -> f64 {
        self.widths.resolve(column, self.config.fallback_width)
    }

    fn column_views<'a>(&'a self, ids: &[&str], start: f64) -> Vec<ColumnView<'a>> {
        let mut offset = start;
        ids.iter()
            .filter_map(|id| self.column(id))
            .map(|column| {
                let width = self.width_of(column);
                let view = ColumnView {
                    column,
                    width,
                    offset,
                    pinned: self.pins.is_pinned(&column.id),
                    sort: self.sort.direction_of(&column.id),
                    resizing: self.resize.is_resizing(&column.id),
                };
                offset += width;
                view
            })
            .collect()
    }

    /// Derive the view state from the current state of every controller.
    pub fn snapshot(&self) -> Snapshot<'_> {
        let visible: Vec<&str> = self
            .order
            .ids()
            .iter()
            .map(String::as_str)
            .filter(|id| self.column(id).is_some_and(|c| !c.flags.hidden))
            .collect();
        let partition = self.pins.partition(&visible);

        let pinned_width = self.pins.pinned_width(&visible, |id| {
            self.column(id)
                .map_or(self.config.fallback_width, |c| self.width_of(c))
        });

        let rows = self
            .sorted
            .indices
            .iter()
            .filter_map(|&i| self.rows.get(i))
            .map(|row| RowView {
                row,
                selected: self.selection.is_selected(row.id()),
            })
            .collect();

        let mut selection: Vec<&RowId> = self.selection.selected().iter().collect();
        selection.sort();

        Snapshot {
            pinned_columns: self.column_views(&partition.pinned, 0.0),
            scrollable_columns: self.column_views(&partition.scrollable, pinned_width),
            pinned_width,
            rows,
            widths: self.widths.iter().collect::<BTreeMap<_, _>>(),
            selection,
            header: self.header_state(),
            sort: self.sort.state(),
            resizing: self.resize.session().map(|s| s.column_id.as_str()),
            frame_pending: self.resize.frame_pending(),
            incomparable: self.sorted.incomparable,
            loading: self.loading,
            selection_enabled: self.config.enable_row_selection,
            show_column_actions: self.config.show_column_actions,
            editing_column: self.editing_column.as_deref(),
            class_names: &self.class_names,
        }
    }
}
