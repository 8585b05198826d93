//! Column order manager.
//!
//! Holds the authoritative left-to-right sequence of column identifiers
//! and keeps it in sync with the host's descriptor list.

use std::collections::HashSet;

/// Ordered sequence of column identifiers.
///
/// Invariant: no duplicates, and after [`reconcile`](Self::reconcile) it
/// holds exactly the identifiers of the current descriptor list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnOrder {
    ids: Vec<String>,
}

impl ColumnOrder {
    /// Create an order from an initial sequence. Duplicates are dropped.
    pub fn new<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut order = Self::default();
        let mut seen = HashSet::new();
        for id in ids {
            let id = id.into();
            if seen.insert(id.clone()) {
                order.ids.push(id);
            }
        }
        order
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|existing| existing == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    /// Sync with the host's current descriptor identifiers.
    ///
    /// Drops identifiers that disappeared, appends new ones at the end and
    /// keeps survivors in their relative order. Returns `true` if the
    /// sequence changed; an unchanged sequence is left untouched.
    pub fn reconcile<'a, I>(&mut self, current: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        let current: Vec<&str> = current.into_iter().collect();
        let present: HashSet<&str> = current.iter().copied().collect();

        let mut next: Vec<String> = self
            .ids
            .iter()
            .filter(|id| present.contains(id.as_str()))
            .cloned()
            .collect();

        let mut known: HashSet<String> = next.iter().cloned().collect();
        for id in current {
            if known.insert(id.to_string()) {
                next.push(id.to_string());
            }
        }

        if next == self.ids {
            return false;
        }

        log::debug!("[order] reconciled {:?} -> {:?}", self.ids, next);
        self.ids = next;
        true
    }

    /// Move `id` to the slot `target` currently occupies.
    ///
    /// Array-move semantics: remove, then reinsert at the target's index.
    /// No-op when the two are equal or either is unknown.
    pub fn move_to(&mut self, id: &str, target: &str) -> bool {
        if id == target {
            return false;
        }
        let (Some(from), Some(to)) = (self.position(id), self.position(target)) else {
            log::debug!("[order] ignoring move {} -> {}: unknown column", id, target);
            return false;
        };

        let moved = self.ids.remove(from);
        self.ids.insert(to, moved);
        log::debug!("[order] moved {} to index {}", id, to);
        true
    }
}
