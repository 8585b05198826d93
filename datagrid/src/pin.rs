//! Pin manager.
//!
//! Splits the column order into a fixed left region and a scrollable
//! region. The split is always derived from the current order, never
//! cached, so reorders and new columns show up in both halves at once.

use std::collections::HashMap;

/// Pinned state per column identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PinSet {
    pinned: HashMap<String, bool>,
}

/// Ordered split of a column sequence.
///
/// `pinned` and `scrollable` are disjoint and together hold every input
/// identifier, each in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Partition<'a> {
    pub pinned: Vec<&'a str>,
    pub scrollable: Vec<&'a str>,
}

impl PinSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pinned(&self, column_id: &str) -> bool {
        self.pinned.get(column_id).copied().unwrap_or(false)
    }

    /// Set pinned state. Returns `true` if it changed.
    pub fn set_pinned(&mut self, column_id: &str, pinned: bool) -> bool {
        if self.is_pinned(column_id) == pinned {
            return false;
        }
        log::debug!(
            "[pin] {} {}",
            if pinned { "pinned" } else { "unpinned" },
            column_id
        );
        self.pinned.insert(column_id.to_string(), pinned);
        true
    }

    /// Flip pinned state and return the new state.
    pub fn toggle(&mut self, column_id: &str) -> bool {
        let next = !self.is_pinned(column_id);
        self.set_pinned(column_id, next);
        next
    }

    /// Identifiers currently pinned, in no particular order.
    pub fn pinned_ids(&self) -> impl Iterator<Item = &str> {
        self.pinned
            .iter()
            .filter(|(_, pinned)| **pinned)
            .map(|(id, _)| id.as_str())
    }

    /// Forget columns for which `keep` returns false.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.pinned.retain(|id, _| keep(id));
    }

    /// Split an ordered sequence into pinned and scrollable halves.
    pub fn partition<'a, S: AsRef<str>>(&self, ordered: &'a [S]) -> Partition<'a> {
        let mut partition = Partition::default();
        for id in ordered {
            let id = id.as_ref();
            if self.is_pinned(id) {
                partition.pinned.push(id);
            } else {
                partition.scrollable.push(id);
            }
        }
        partition
    }

    /// Total width of the pinned region.
    ///
    /// `width_of` resolves one column's current width; the renderer offsets
    /// the scrollable region by this amount.
    pub fn pinned_width<S: AsRef<str>>(
        &self,
        ordered: &[S],
        width_of: impl Fn(&str) -> f64,
    ) -> f64 {
        ordered
            .iter()
            .map(AsRef::as_ref)
            .filter(|id| self.is_pinned(id))
            .map(width_of)
            .sum()
    }
}
