//! Tests for the sort controller, comparator and row projection.

use std::cmp::Ordering;

use chrono::{TimeZone, Utc};
use datagrid::model::{CellValue, Row, RowId};
use datagrid::sort::{
    Comparison, SortController, SortDirection, SortState, compare, sort_rows,
};

fn ids(rows: &[Row], indices: &[usize]) -> Vec<RowId> {
    indices.iter().map(|&i| rows[i].id().clone()).collect()
}

fn asc(a: impl Into<CellValue>, b: impl Into<CellValue>) -> Ordering {
    let (a, b) = (a.into(), b.into());
    compare(Some(&a), Some(&b), SortDirection::Ascending).ordering()
}

// =============================================================================
// Toggle cycle
// =============================================================================

#[test]
fn test_toggle_cycles_asc_desc_none() {
    let mut sort = SortController::new();
    assert_eq!(
        sort.toggle("age").map(|s| s.direction),
        Some(SortDirection::Ascending)
    );
    assert_eq!(
        sort.toggle("age").map(|s| s.direction),
        Some(SortDirection::Descending)
    );
    assert_eq!(sort.toggle("age"), None);
    assert_eq!(sort.state(), None);
}

#[test]
fn test_toggle_other_column_starts_at_ascending() {
    let mut sort = SortController::new();
    sort.toggle("age");
    sort.toggle("age");
    assert_eq!(
        sort.toggle("name"),
        Some(&SortState::new("name", SortDirection::Ascending))
    );
    assert_eq!(sort.direction_of("age"), None);
}

#[test]
fn test_retain_clears_removed_column() {
    let mut sort = SortController::new();
    sort.toggle("age");
    assert!(!sort.retain(|id| id == "age"));
    assert!(sort.retain(|id| id == "name"));
    assert_eq!(sort.state(), None);
}

// =============================================================================
// Comparator
// =============================================================================

#[test]
fn test_compare_natural_orders() {
    assert_eq!(asc(1.0, 2.0), Ordering::Less);
    assert_eq!(asc(false, true), Ordering::Less);
    assert_eq!(asc("apple", "Banana"), Ordering::Less);

    let early = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let late = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
    assert_eq!(asc(late, early), Ordering::Greater);
}

#[test]
fn test_compare_absent_last_ascending_first_descending() {
    let present = CellValue::from(1.0);
    let null = CellValue::Null;

    for absent in [None, Some(&null)] {
        assert_eq!(
            compare(absent, Some(&present), SortDirection::Ascending).ordering(),
            Ordering::Greater
        );
        assert_eq!(
            compare(absent, Some(&present), SortDirection::Descending).ordering(),
            Ordering::Less
        );
    }
    assert_eq!(
        compare(None, Some(&null), SortDirection::Ascending).ordering(),
        Ordering::Equal
    );
}

#[test]
fn test_compare_lists_by_first_element() {
    let a = CellValue::List(vec!["alpha".into(), "zulu".into()]);
    let b = CellValue::List(vec!["bravo".into()]);
    let empty = CellValue::List(vec![]);
    assert_eq!(
        compare(Some(&a), Some(&b), SortDirection::Ascending).ordering(),
        Ordering::Less
    );
    assert_eq!(
        compare(Some(&a), Some(&empty), SortDirection::Ascending).ordering(),
        Ordering::Equal
    );
}

#[test]
fn test_compare_mismatched_types_is_incomparable() {
    let text = CellValue::from("10");
    let number = CellValue::from(10.0);
    let cmp = compare(Some(&text), Some(&number), SortDirection::Ascending);
    assert_eq!(
        cmp,
        Comparison::Incomparable {
            left: "text",
            right: "number"
        }
    );
    assert_eq!(cmp.ordering(), Ordering::Equal);
}

// =============================================================================
// Row projection
// =============================================================================

fn people() -> Vec<Row> {
    vec![
        Row::new(1).with("name", "Bob").with("age", 30),
        Row::new(2).with("name", "Al").with("age", 40),
        Row::new(3).with("name", "cy"),
        Row::new(4).with("name", "Di").with("age", 30),
    ]
}

#[test]
fn test_sort_rows_without_state_is_identity() {
    let rows = people();
    let sorted = sort_rows(&rows, None);
    assert_eq!(sorted.indices, vec![0, 1, 2, 3]);
}

#[test]
fn test_sort_rows_ascending_is_stable_with_absent_last() {
    let rows = people();
    let state = SortState::new("age", SortDirection::Ascending);
    let sorted = sort_rows(&rows, Some(&state));
    assert_eq!(
        ids(&rows, &sorted.indices),
        vec![RowId::from(1), RowId::from(4), RowId::from(2), RowId::from(3)]
    );
}

#[test]
fn test_sort_rows_descending_keeps_ties_in_input_order() {
    let rows = people();
    let state = SortState::new("age", SortDirection::Descending);
    let sorted = sort_rows(&rows, Some(&state));
    assert_eq!(
        ids(&rows, &sorted.indices),
        vec![RowId::from(3), RowId::from(2), RowId::from(1), RowId::from(4)]
    );
}

#[test]
fn test_sort_rows_text_is_case_insensitive() {
    let rows = people();
    let state = SortState::new("name", SortDirection::Ascending);
    let sorted = sort_rows(&rows, Some(&state));
    assert_eq!(
        ids(&rows, &sorted.indices),
        vec![RowId::from(2), RowId::from(1), RowId::from(3), RowId::from(4)]
    );
}

#[test]
fn test_sort_rows_text_ignores_accents() {
    let rows = vec![
        Row::new(1).with("name", "Zoe"),
        Row::new(2).with("name", "Émile"),
        Row::new(3).with("name", "Adam"),
        Row::new(4).with("name", "Eve"),
    ];
    let state = SortState::new("name", SortDirection::Ascending);
    let sorted = sort_rows(&rows, Some(&state));
    assert_eq!(
        ids(&rows, &sorted.indices),
        vec![RowId::from(3), RowId::from(2), RowId::from(4), RowId::from(1)]
    );
}

#[test]
fn test_compare_accented_text_before_next_letter() {
    assert_eq!(asc("éclair", "fig"), Ordering::Less);
    assert_eq!(asc("Ångström", "Bob"), Ordering::Less);
}

#[test]
fn test_sort_rows_counts_incomparable_pairs() {
    let rows = vec![
        Row::new(1).with("v", 2),
        Row::new(2).with("v", "text"),
        Row::new(3).with("v", 1),
    ];
    let state = SortState::new("v", SortDirection::Ascending);
    let sorted = sort_rows(&rows, Some(&state));
    assert!(sorted.incomparable > 0);
    assert_eq!(sorted.indices.len(), 3);
}

#[test]
fn test_sort_rows_leaves_input_untouched() {
    let rows = people();
    let copy = rows.clone();
    let state = SortState::new("age", SortDirection::Descending);
    let _ = sort_rows(&rows, Some(&state));
    assert_eq!(rows, copy);
}
