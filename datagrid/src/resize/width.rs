//! Width map and clamping.

use std::collections::HashMap;

use crate::config::GridConfig;
use crate::model::Column;

/// Width bounds of one column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthBounds {
    pub min: f64,
    /// `None` means unbounded.
    pub max: Option<f64>,
}

impl WidthBounds {
    /// Bounds for a column; a missing minimum falls back to `floor`.
    pub fn for_column(column: &Column, floor: f64) -> Self {
        Self {
            min: column.min_width.unwrap_or(floor),
            max: column.max_width,
        }
    }

    /// Clamp a width into `[min, max]`.
    ///
    /// A maximum below the minimum is ignored, so the result is never
    /// below `min`.
    pub fn clamp(&self, width: f64) -> f64 {
        let upper = match self.max {
            Some(max) if max >= self.min => max,
            _ => f64::INFINITY,
        };
        width.max(self.min).min(upper)
    }
}

/// Current pixel width per column identifier.
///
/// Only resizing writes into it; descriptors are never touched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WidthMap {
    widths: HashMap<String, f64>,
}

impl WidthMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed entries for columns that have none yet.
    ///
    /// New entries start at the column's minimum, or the configured default.
    pub fn seed<'a>(&mut self, columns: impl IntoIterator<Item = &'a Column>, config: &GridConfig) {
        for column in columns {
            self.widths
                .entry(column.id.clone())
                .or_insert_with(|| column.min_width.unwrap_or(config.default_width));
        }
    }

    pub fn get(&self, column_id: &str) -> Option<f64> {
        self.widths.get(column_id).copied()
    }

    pub fn set(&mut self, column_id: &str, width: f64) {
        self.widths.insert(column_id.to_string(), width);
    }

    /// Width of a column: its entry, else its minimum, else `fallback`.
    pub fn resolve(&self, column: &Column, fallback: f64) -> f64 {
        self.get(&column.id)
            .or(column.min_width)
            .unwrap_or(fallback)
    }

    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.widths.retain(|id, _| keep(id));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.widths.iter().map(|(id, w)| (id.as_str(), *w))
    }

    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }
}
