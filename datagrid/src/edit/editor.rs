//! Per-type cell editors.
//!
//! One editor per value type, chosen once per cell from the column's type
//! tag. Each keeps its own local edit state and yields a value from
//! [`ValueEditor::commit`] only for a confirmed change: never for a
//! non-editable cell and never for a value equal to the initial one.
//!
//! Normalization lives here, not in the dispatcher: an empty text or
//! number draft, a cleared select and an empty multi-select all commit as
//! [`CellValue::Null`].

use std::collections::HashSet;
use std::sync::LazyLock;

use chrono::DateTime;
use chrono::Utc;
use regex::Regex;

use crate::config::GridConfig;
use crate::model::{CellValue, Column, ColumnKind, SelectOption};

static NUMBER_DRAFT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-?\d*\.?\d*$").expect("Invalid regex pattern"));

/// Placeholder shown for an absent text, number or select value.
const EMPTY: &str = "-";

/// Badges shown by a multi-select cell before collapsing into `+N`.
pub const MAX_BADGES: usize = 2;

/// Common capability of every cell editor.
pub trait ValueEditor {
    fn is_editable(&self) -> bool;

    /// Read-only rendering of the cell.
    fn display(&self) -> String;

    /// Finish the edit. Returns the value to save, if it changed.
    fn commit(&mut self) -> Option<CellValue>;
}

// =============================================================================
// Text
// =============================================================================

/// Inline text editor: begin, type, then commit or cancel.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEditor {
    initial: String,
    draft: String,
    editing: bool,
    editable: bool,
}

impl TextEditor {
    pub fn new(initial: &CellValue, editable: bool) -> Self {
        let initial = match initial {
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) => n.to_string(),
            CellValue::Bool(b) => b.to_string(),
            _ => String::new(),
        };
        Self {
            draft: initial.clone(),
            initial,
            editing: false,
            editable,
        }
    }

    /// Enter edit mode. Returns `false` for a read-only cell.
    pub fn begin(&mut self) -> bool {
        self.editing = self.editable;
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        if self.editing {
            self.draft = text.into();
        }
    }

    /// Escape: drop the draft and leave edit mode.
    pub fn cancel(&mut self) {
        self.draft = self.initial.clone();
        self.editing = false;
    }
}

impl ValueEditor for TextEditor {
    fn is_editable(&self) -> bool {
        self.editable
    }

    fn display(&self) -> String {
        if self.draft.is_empty() {
            EMPTY.to_string()
        } else {
            self.draft.clone()
        }
    }

    fn commit(&mut self) -> Option<CellValue> {
        if !std::mem::take(&mut self.editing) || self.draft == self.initial {
            return None;
        }
        if self.draft.is_empty() {
            Some(CellValue::Null)
        } else {
            Some(CellValue::Text(self.draft.clone()))
        }
    }
}

// =============================================================================
// Number
// =============================================================================

/// Inline numeric editor. The draft only ever holds `-?digits.digits`.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberEditor {
    initial: Option<f64>,
    draft: String,
    editing: bool,
    editable: bool,
}

impl NumberEditor {
    pub fn new(initial: &CellValue, editable: bool) -> Self {
        let initial = initial.as_f64();
        Self {
            initial,
            draft: Self::draft_of(initial),
            editing: false,
            editable,
        }
    }

    fn draft_of(value: Option<f64>) -> String {
        value.map(|n| n.to_string()).unwrap_or_default()
    }

    pub fn begin(&mut self) -> bool {
        self.editing = self.editable;
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Replace the draft. Input that is not a partial number is rejected
    /// and leaves the draft as it was.
    pub fn set_draft(&mut self, text: &str) -> bool {
        if !self.editing || !NUMBER_DRAFT.is_match(text) {
            return false;
        }
        self.draft = text.to_string();
        true
    }

    pub fn cancel(&mut self) {
        self.draft = Self::draft_of(self.initial);
        self.editing = false;
    }
}

impl ValueEditor for NumberEditor {
    fn is_editable(&self) -> bool {
        self.editable
    }

    fn display(&self) -> String {
        self.initial.map(format_number).unwrap_or_else(|| EMPTY.to_string())
    }

    fn commit(&mut self) -> Option<CellValue> {
        if !std::mem::take(&mut self.editing) {
            return None;
        }
        let next = if self.draft.is_empty() {
            None
        } else {
            match self.draft.parse::<f64>() {
                Ok(n) => Some(n),
                Err(_) => {
                    log::debug!("[edit] number draft {:?} does not parse, reverting", self.draft);
                    self.draft = Self::draft_of(self.initial);
                    return None;
                }
            }
        };
        if next == self.initial {
            return None;
        }
        Some(next.map_or(CellValue::Null, CellValue::Number))
    }
}

/// Group thousands and keep at most three fraction digits.
pub fn format_number(n: f64) -> String {
    if !n.is_finite() {
        return n.to_string();
    }
    let fixed = format!("{:.3}", n.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = n < 0.0 && (grouped != "0" || !frac.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

// =============================================================================
// Boolean, checkbox, toggle
// =============================================================================

/// Checkbox or switch. An absent value renders unchecked.
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanEditor {
    initial: bool,
    checked: Option<bool>,
    editable: bool,
}

impl BooleanEditor {
    pub fn new(initial: &CellValue, editable: bool) -> Self {
        Self {
            initial: initial.as_bool().unwrap_or(false),
            checked: None,
            editable,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked.unwrap_or(self.initial)
    }

    pub fn set_checked(&mut self, checked: bool) {
        if self.editable {
            self.checked = Some(checked);
        }
    }
}

impl ValueEditor for BooleanEditor {
    fn is_editable(&self) -> bool {
        self.editable
    }

    fn display(&self) -> String {
        let mark = if self.is_checked() { "✓" } else { "✗" };
        mark.to_string()
    }

    fn commit(&mut self) -> Option<CellValue> {
        let checked = self.checked.take()?;
        (checked != self.initial).then_some(CellValue::Bool(checked))
    }
}

// =============================================================================
// Date
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct DateEditor {
    initial: Option<DateTime<Utc>>,
    choice: Option<Option<DateTime<Utc>>>,
    editable: bool,
}

impl DateEditor {
    pub fn new(initial: &CellValue, editable: bool) -> Self {
        Self {
            initial: initial.as_date(),
            choice: None,
            editable,
        }
    }

    pub fn current(&self) -> Option<DateTime<Utc>> {
        self.choice.unwrap_or(self.initial)
    }

    pub fn select(&mut self, date: DateTime<Utc>) {
        if self.editable {
            self.choice = Some(Some(date));
        }
    }

    pub fn clear(&mut self) {
        if self.editable {
            self.choice = Some(None);
        }
    }
}

impl ValueEditor for DateEditor {
    fn is_editable(&self) -> bool {
        self.editable
    }

    fn display(&self) -> String {
        match self.current() {
            Some(date) => date.format("%Y-%m-%d").to_string(),
            None => "Pick a date".to_string(),
        }
    }

    fn commit(&mut self) -> Option<CellValue> {
        let choice = self.choice.take()?;
        (choice != self.initial).then(|| choice.map_or(CellValue::Null, CellValue::Date))
    }
}

// =============================================================================
// Select
// =============================================================================

/// Single choice from the column's option list.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectEditor {
    initial: Option<String>,
    options: Vec<SelectOption>,
    choice: Option<Option<String>>,
    editable: bool,
}

impl SelectEditor {
    pub fn new(initial: &CellValue, options: &[SelectOption], editable: bool) -> Self {
        Self {
            initial: initial.as_str().map(str::to_string),
            options: options.to_vec(),
            choice: None,
            editable,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn current(&self) -> Option<&str> {
        match &self.choice {
            Some(choice) => choice.as_deref(),
            None => self.initial.as_deref(),
        }
    }

    /// Choose an option by value. Unknown values are rejected.
    pub fn choose(&mut self, value: &str) -> bool {
        if !self.editable || !self.options.iter().any(|o| o.value == value) {
            return false;
        }
        self.choice = Some(Some(value.to_string()));
        true
    }

    pub fn clear(&mut self) {
        if self.editable {
            self.choice = Some(None);
        }
    }
}

impl ValueEditor for SelectEditor {
    fn is_editable(&self) -> bool {
        self.editable
    }

    fn display(&self) -> String {
        self.current()
            .and_then(|value| self.options.iter().find(|o| o.value == value))
            .map(|o| o.label.clone())
            .unwrap_or_else(|| EMPTY.to_string())
    }

    fn commit(&mut self) -> Option<CellValue> {
        let choice = self.choice.take()?;
        (choice != self.initial).then(|| choice.map_or(CellValue::Null, CellValue::Text))
    }
}

// =============================================================================
// Multi-select
// =============================================================================

/// Popover of toggles. Changes are collected while open and committed on close.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelectEditor {
    initial: Vec<String>,
    options: Vec<SelectOption>,
    current: Vec<String>,
    open: bool,
    editable: bool,
}

impl MultiSelectEditor {
    pub fn new(initial: &CellValue, options: &[SelectOption], editable: bool) -> Self {
        let initial = initial.as_list().map(<[String]>::to_vec).unwrap_or_default();
        Self {
            current: initial.clone(),
            initial,
            options: options.to_vec(),
            open: false,
            editable,
        }
    }

    pub fn options(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.current.iter().any(|v| v == value)
    }

    /// Open the popover, starting from the initial values.
    pub fn open(&mut self) -> bool {
        if !self.editable {
            return false;
        }
        self.current = self.initial.clone();
        self.open = true;
        true
    }

    /// Flip one option. Only while open, only for listed options.
    pub fn toggle(&mut self, value: &str) -> bool {
        if !self.open || !self.options.iter().any(|o| o.value == value) {
            return false;
        }
        if let Some(pos) = self.current.iter().position(|v| v == value) {
            self.current.remove(pos);
        } else {
            self.current.push(value.to_string());
        }
        true
    }

    pub fn clear(&mut self) {
        if self.open {
            self.current.clear();
        }
    }

    /// Options shown as badges, in option order, and the overflow count.
    pub fn badges(&self) -> (Vec<&SelectOption>, usize) {
        let selected: Vec<&SelectOption> = self
            .options
            .iter()
            .filter(|o| self.initial.contains(&o.value))
            .collect();
        let overflow = selected.len().saturating_sub(MAX_BADGES);
        (selected.into_iter().take(MAX_BADGES).collect(), overflow)
    }
}

impl ValueEditor for MultiSelectEditor {
    fn is_editable(&self) -> bool {
        self.editable
    }

    fn display(&self) -> String {
        let (shown, overflow) = self.badges();
        if shown.is_empty() {
            return "(empty)".to_string();
        }
        let labels: Vec<&str> = shown.iter().map(|o| o.label.as_str()).collect();
        let mut text = labels.join(", ");
        if overflow > 0 {
            text.push_str(&format!(" +{overflow}"));
        }
        text
    }

    /// Closing the popover commits.
    fn commit(&mut self) -> Option<CellValue> {
        if !std::mem::take(&mut self.open) {
            return None;
        }
        let before: HashSet<&String> = self.initial.iter().collect();
        let after: HashSet<&String> = self.current.iter().collect();
        if before == after {
            return None;
        }
        if self.current.is_empty() {
            Some(CellValue::Null)
        } else {
            Some(CellValue::List(self.current.clone()))
        }
    }
}

/// Stable palette slot for a badge value.
pub fn badge_color(value: &str, palette_len: usize) -> usize {
    if palette_len == 0 {
        return 0;
    }
    let hash = value.encode_utf16().fold(0i32, |hash, unit| {
        i32::from(unit).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    });
    (i64::from(hash).unsigned_abs() % palette_len as u64) as usize
}

// =============================================================================
// Rating
// =============================================================================

/// Star rating. Clicking the current rating clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingEditor {
    initial: Option<f64>,
    max: u8,
    choice: Option<Option<f64>>,
    editable: bool,
}

impl RatingEditor {
    pub fn new(initial: &CellValue, max: u8, editable: bool) -> Self {
        Self {
            initial: initial.as_f64(),
            max,
            choice: None,
            editable,
        }
    }

    pub fn max(&self) -> u8 {
        self.max
    }

    pub fn current(&self) -> Option<f64> {
        self.choice.unwrap_or(self.initial)
    }

    /// Click star `star` (1-based). Out-of-range stars are rejected.
    pub fn click(&mut self, star: u8) -> bool {
        if !self.editable || star == 0 || star > self.max {
            return false;
        }
        let star = f64::from(star);
        let next = if self.current() == Some(star) {
            None
        } else {
            Some(star)
        };
        self.choice = Some(next);
        true
    }
}

impl ValueEditor for RatingEditor {
    fn is_editable(&self) -> bool {
        self.editable
    }

    fn display(&self) -> String {
        let filled = self.current().unwrap_or(0.0).clamp(0.0, f64::from(self.max)) as usize;
        let mut stars = "★".repeat(filled);
        stars.push_str(&"☆".repeat(usize::from(self.max) - filled));
        stars
    }

    fn commit(&mut self) -> Option<CellValue> {
        let choice = self.choice.take()?;
        (choice != self.initial).then(|| choice.map_or(CellValue::Null, CellValue::Number))
    }
}

// =============================================================================
// Dispatch by type
// =============================================================================

/// Editor for one cell, selected by the column's type tag.
#[derive(Debug, Clone, PartialEq)]
pub enum CellEditor {
    Text(TextEditor),
    Number(NumberEditor),
    /// Boolean and checkbox columns.
    Boolean(BooleanEditor),
    Toggle(BooleanEditor),
    Date(DateEditor),
    Select(SelectEditor),
    MultiSelect(MultiSelectEditor),
    Rating(RatingEditor),
}

impl CellEditor {
    /// Editor for `value` in `column`. Custom columns have none.
    pub fn for_column(column: &Column, value: &CellValue, config: &GridConfig) -> Option<Self> {
        let editable = column.flags.editable;
        let editor = match &column.kind {
            ColumnKind::Text => CellEditor::Text(TextEditor::new(value, editable)),
            ColumnKind::Number => CellEditor::Number(NumberEditor::new(value, editable)),
            ColumnKind::Boolean | ColumnKind::Checkbox => {
                CellEditor::Boolean(BooleanEditor::new(value, editable))
            }
            ColumnKind::Toggle => CellEditor::Toggle(BooleanEditor::new(value, editable)),
            ColumnKind::Date => CellEditor::Date(DateEditor::new(value, editable)),
            ColumnKind::Select(options) => {
                CellEditor::Select(SelectEditor::new(value, options, editable))
            }
            ColumnKind::MultiSelect(options) => {
                CellEditor::MultiSelect(MultiSelectEditor::new(value, options, editable))
            }
            ColumnKind::Rating => {
                CellEditor::Rating(RatingEditor::new(value, config.max_rating, editable))
            }
            ColumnKind::Custom => return None,
        };
        Some(editor)
    }

    fn inner(&self) -> &dyn ValueEditor {
        match self {
            CellEditor::Text(e) => e,
            CellEditor::Number(e) => e,
            CellEditor::Boolean(e) | CellEditor::Toggle(e) => e,
            CellEditor::Date(e) => e,
            CellEditor::Select(e) => e,
            CellEditor::MultiSelect(e) => e,
            CellEditor::Rating(e) => e,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn ValueEditor {
        match self {
            CellEditor::Text(e) => e,
            CellEditor::Number(e) => e,
            CellEditor::Boolean(e) | CellEditor::Toggle(e) => e,
            CellEditor::Date(e) => e,
            CellEditor::Select(e) => e,
            CellEditor::MultiSelect(e) => e,
            CellEditor::Rating(e) => e,
        }
    }
}

impl ValueEditor for CellEditor {
    fn is_editable(&self) -> bool {
        self.inner().is_editable()
    }

    fn display(&self) -> String {
        self.inner().display()
    }

    fn commit(&mut self) -> Option<CellValue> {
        self.inner_mut().commit()
    }
}
