//! Tests for per-type cell editors and the edit dispatcher.

use chrono::{TimeZone, Utc};
use datagrid::GridConfig;
use datagrid::edit::{
    BooleanEditor, CellEdit, CellEditor, DateEditor, EditDispatcher, MultiSelectEditor,
    NumberEditor, RatingEditor, SelectEditor, TextEditor, ValueEditor,
};
use datagrid::host::GridHost;
use datagrid::model::{CellValue, Column, RowId, SelectOption};

#[derive(Default)]
struct Recorder {
    cells: Vec<(RowId, String, CellValue)>,
}

impl GridHost for Recorder {
    fn on_cell_change(&mut self, row_id: &RowId, column_id: &str, value: CellValue) {
        self.cells.push((row_id.clone(), column_id.to_string(), value));
    }
}

fn options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("todo", "To do"),
        SelectOption::new("doing", "Doing"),
        SelectOption::new("done", "Done"),
    ]
}

// =============================================================================
// Dispatcher
// =============================================================================

#[test]
fn test_dispatch_forwards_changed_value_verbatim() {
    let mut host = Recorder::default();
    let mut dispatcher = EditDispatcher::new();
    let edit = CellEdit::new(RowId::from(1), "name", CellValue::from("  Al "));

    assert!(dispatcher.dispatch(&CellValue::from("Bob"), edit, &mut host));
    assert_eq!(
        host.cells,
        vec![(RowId::from(1), "name".to_string(), CellValue::from("  Al "))]
    );
    assert_eq!(dispatcher.forwarded(), 1);
}

#[test]
fn test_dispatch_skips_unchanged_value() {
    let mut host = Recorder::default();
    let mut dispatcher = EditDispatcher::new();

    let same = CellEdit::new(RowId::from(1), "age", CellValue::from(30));
    assert!(!dispatcher.dispatch(&CellValue::from(30), same, &mut host));

    let still_absent = CellEdit::new(RowId::from(1), "age", CellValue::Null);
    assert!(!dispatcher.dispatch(&CellValue::Null, still_absent, &mut host));

    assert!(host.cells.is_empty());
    assert_eq!(dispatcher.skipped(), 2);
}

// =============================================================================
// Text
// =============================================================================

#[test]
fn test_text_commit_changed_draft() {
    let mut editor = TextEditor::new(&CellValue::from("Bob"), true);
    assert!(editor.begin());
    editor.set_draft("Robert");
    assert_eq!(editor.commit(), Some(CellValue::from("Robert")));
    assert!(!editor.is_editing());
}

#[test]
fn test_text_unchanged_draft_does_not_commit() {
    let mut editor = TextEditor::new(&CellValue::from("Bob"), true);
    editor.begin();
    editor.set_draft("Bob");
    assert_eq!(editor.commit(), None);
}

#[test]
fn test_text_empty_draft_commits_absent() {
    let mut editor = TextEditor::new(&CellValue::from("Bob"), true);
    editor.begin();
    editor.set_draft("");
    assert_eq!(editor.commit(), Some(CellValue::Null));
}

#[test]
fn test_text_cancel_reverts() {
    let mut editor = TextEditor::new(&CellValue::from("Bob"), true);
    editor.begin();
    editor.set_draft("typo");
    editor.cancel();
    assert_eq!(editor.draft(), "Bob");
    assert_eq!(editor.commit(), None);
}

#[test]
fn test_text_read_only_never_commits() {
    let mut editor = TextEditor::new(&CellValue::from("Bob"), false);
    assert!(!editor.begin());
    editor.set_draft("Robert");
    assert_eq!(editor.commit(), None);
    assert_eq!(editor.display(), "Bob");
}

#[test]
fn test_text_display_placeholder() {
    let editor = TextEditor::new(&CellValue::Null, true);
    assert_eq!(editor.display(), "-");
}

// =============================================================================
// Number
// =============================================================================

#[test]
fn test_number_rejects_non_numeric_input() {
    let mut editor = NumberEditor::new(&CellValue::from(30), true);
    editor.begin();
    assert!(editor.set_draft("42.5"));
    assert!(!editor.set_draft("42a"));
    assert_eq!(editor.draft(), "42.5");
    assert_eq!(editor.commit(), Some(CellValue::Number(42.5)));
}

#[test]
fn test_number_empty_commits_absent() {
    let mut editor = NumberEditor::new(&CellValue::from(30), true);
    editor.begin();
    editor.set_draft("");
    assert_eq!(editor.commit(), Some(CellValue::Null));
}

#[test]
fn test_number_same_value_does_not_commit() {
    let mut editor = NumberEditor::new(&CellValue::from(30), true);
    editor.begin();
    editor.set_draft("30.0");
    assert_eq!(editor.commit(), None);
}

#[test]
fn test_number_unparseable_draft_reverts() {
    let mut editor = NumberEditor::new(&CellValue::from(30), true);
    editor.begin();
    assert!(editor.set_draft("-"));
    assert_eq!(editor.commit(), None);
    assert_eq!(editor.draft(), "30");
}

#[test]
fn test_number_display_is_grouped() {
    let editor = NumberEditor::new(&CellValue::from(1234567.5), true);
    assert_eq!(editor.display(), "1,234,567.5");
    assert_eq!(NumberEditor::new(&CellValue::Null, true).display(), "-");
}

// =============================================================================
// Boolean and toggle
// =============================================================================

#[test]
fn test_boolean_commits_only_real_change() {
    let mut editor = BooleanEditor::new(&CellValue::from(false), true);
    editor.set_checked(false);
    assert_eq!(editor.commit(), None);
    editor.set_checked(true);
    assert_eq!(editor.commit(), Some(CellValue::Bool(true)));
}

#[test]
fn test_boolean_absent_reads_unchecked() {
    let mut editor = BooleanEditor::new(&CellValue::Null, true);
    assert!(!editor.is_checked());
    editor.set_checked(true);
    assert_eq!(editor.commit(), Some(CellValue::Bool(true)));
}

#[test]
fn test_boolean_read_only_ignores_clicks() {
    let mut editor = BooleanEditor::new(&CellValue::from(false), false);
    editor.set_checked(true);
    assert!(!editor.is_checked());
    assert_eq!(editor.commit(), None);
}

// =============================================================================
// Date
// =============================================================================

#[test]
fn test_date_select_and_clear() {
    let day = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let mut editor = DateEditor::new(&CellValue::Null, true);
    assert_eq!(editor.display(), "Pick a date");

    editor.select(day);
    assert_eq!(editor.display(), "2024-03-01");
    assert_eq!(editor.commit(), Some(CellValue::Date(day)));

    let mut editor = DateEditor::new(&CellValue::Date(day), true);
    editor.select(day);
    assert_eq!(editor.commit(), None);
    editor.clear();
    assert_eq!(editor.commit(), Some(CellValue::Null));
}

// =============================================================================
// Select
// =============================================================================

#[test]
fn test_select_choose_known_option() {
    let mut editor = SelectEditor::new(&CellValue::from("todo"), &options(), true);
    assert_eq!(editor.display(), "To do");
    assert!(editor.choose("done"));
    assert_eq!(editor.commit(), Some(CellValue::from("done")));
}

#[test]
fn test_select_rejects_unknown_value() {
    let mut editor = SelectEditor::new(&CellValue::from("todo"), &options(), true);
    assert!(!editor.choose("archived"));
    assert_eq!(editor.commit(), None);
}

#[test]
fn test_select_clear_commits_absent() {
    let mut editor = SelectEditor::new(&CellValue::from("todo"), &options(), true);
    editor.clear();
    assert_eq!(editor.display(), "-");
    assert_eq!(editor.commit(), Some(CellValue::Null));
}

// =============================================================================
// Multi-select
// =============================================================================

#[test]
fn test_multi_select_commits_on_close() {
    let mut editor = MultiSelectEditor::new(&CellValue::from(vec!["todo"]), &options(), true);
    assert!(editor.open());
    assert!(editor.toggle("done"));
    assert!(editor.is_selected("done"));
    assert_eq!(
        editor.commit(),
        Some(CellValue::List(vec!["todo".into(), "done".into()]))
    );
    assert!(!editor.is_open());
}

#[test]
fn test_multi_select_same_set_does_not_commit() {
    let initial = CellValue::from(vec!["todo", "done"]);
    let mut editor = MultiSelectEditor::new(&initial, &options(), true);
    editor.open();
    editor.toggle("todo");
    editor.toggle("todo");
    assert_eq!(editor.commit(), None);
}

#[test]
fn test_multi_select_cleared_commits_absent() {
    let mut editor = MultiSelectEditor::new(&CellValue::from(vec!["todo"]), &options(), true);
    editor.open();
    editor.clear();
    assert_eq!(editor.commit(), Some(CellValue::Null));
}

#[test]
fn test_multi_select_toggle_requires_open_and_known_option() {
    let mut editor = MultiSelectEditor::new(&CellValue::Null, &options(), true);
    assert!(!editor.toggle("todo"));
    editor.open();
    assert!(!editor.toggle("archived"));
    assert_eq!(editor.commit(), None);
}

#[test]
fn test_multi_select_read_only_never_opens() {
    let mut editor = MultiSelectEditor::new(&CellValue::Null, &options(), false);
    assert!(!editor.open());
    assert_eq!(editor.commit(), None);
}

#[test]
fn test_multi_select_badges_overflow() {
    let all = CellValue::from(vec!["done", "todo", "doing"]);
    let editor = MultiSelectEditor::new(&all, &options(), true);
    let (shown, overflow) = editor.badges();
    let labels: Vec<&str> = shown.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(labels, ["To do", "Doing"]);
    assert_eq!(overflow, 1);
    assert_eq!(editor.display(), "To do, Doing +1");

    let empty = MultiSelectEditor::new(&CellValue::Null, &options(), true);
    assert_eq!(empty.display(), "(empty)");
}

// =============================================================================
// Rating
// =============================================================================

#[test]
fn test_rating_click_sets_value() {
    let mut editor = RatingEditor::new(&CellValue::Null, 5, true);
    assert!(editor.click(4));
    assert_eq!(editor.display(), "★★★★☆");
    assert_eq!(editor.commit(), Some(CellValue::Number(4.0)));
}

#[test]
fn test_rating_click_current_clears() {
    let mut editor = RatingEditor::new(&CellValue::from(3), 5, true);
    assert!(editor.click(3));
    assert_eq!(editor.commit(), Some(CellValue::Null));
}

#[test]
fn test_rating_rejects_out_of_range() {
    let mut editor = RatingEditor::new(&CellValue::from(3), 5, true);
    assert!(!editor.click(0));
    assert!(!editor.click(6));
    assert_eq!(editor.commit(), None);
}

// =============================================================================
// Dispatch by column type
// =============================================================================

#[test]
fn test_editor_variant_follows_column_type() {
    let config = GridConfig::default();
    let cases = [
        (Column::text("a", "A"), "Text"),
        (Column::number("a", "A"), "Number"),
        (Column::boolean("a", "A"), "Boolean"),
        (Column::toggle("a", "A"), "Toggle"),
        (Column::date("a", "A"), "Date"),
        (Column::select("a", "A", options()), "Select"),
        (Column::multi_select("a", "A", options()), "MultiSelect"),
        (Column::rating("a", "A"), "Rating"),
    ];
    for (column, expected) in cases {
        let editor = CellEditor::for_column(&column, &CellValue::Null, &config);
        let variant = match editor {
            Some(CellEditor::Text(_)) => "Text",
            Some(CellEditor::Number(_)) => "Number",
            Some(CellEditor::Boolean(_)) => "Boolean",
            Some(CellEditor::Toggle(_)) => "Toggle",
            Some(CellEditor::Date(_)) => "Date",
            Some(CellEditor::Select(_)) => "Select",
            Some(CellEditor::MultiSelect(_)) => "MultiSelect",
            Some(CellEditor::Rating(_)) => "Rating",
            None => "none",
        };
        assert_eq!(variant, expected, "{}", column.column_type());
    }
}

#[test]
fn test_custom_column_has_no_editor() {
    let column = Column::new("c", "C", datagrid::model::ColumnKind::Custom);
    assert!(CellEditor::for_column(&column, &CellValue::Null, &GridConfig::default()).is_none());
}

#[test]
fn test_rating_editor_uses_configured_scale() {
    let config = GridConfig {
        max_rating: 10,
        ..GridConfig::default()
    };
    let column = Column::rating("r", "R").editable();
    let Some(CellEditor::Rating(editor)) = CellEditor::for_column(&column, &CellValue::Null, &config)
    else {
        panic!("expected rating editor");
    };
    assert_eq!(editor.max(), 10);
}

#[test]
fn test_cell_editor_delegates_commit() {
    let column = Column::text("name", "Name").editable();
    let mut editor =
        CellEditor::for_column(&column, &CellValue::from("Bob"), &GridConfig::default())
            .expect("text editor");
    assert!(editor.is_editable());
    if let CellEditor::Text(text) = &mut editor {
        text.begin();
        text.set_draft("Al");
    }
    assert_eq!(editor.commit(), Some(CellValue::from("Al")));
}
