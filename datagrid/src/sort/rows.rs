//! Row projection for the active sort.

use std::cmp::Ordering;

use super::SortState;
use super::compare::compare;
use crate::model::Row;

/// Sorted view over a row slice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedRows {
    /// Indices into the input slice, in display order.
    pub indices: Vec<usize>,
    /// Comparisons that hit incomparable value types.
    pub incomparable: usize,
}

impl SortedRows {
    fn identity(len: usize) -> Self {
        Self {
            indices: (0..len).collect(),
            incomparable: 0,
        }
    }
}

/// Order `rows` by `state`, leaving the input untouched.
///
/// Without a sort state the original order is returned. The sort is stable,
/// so rows that compare equal keep their input order in both directions.
pub fn sort_rows(rows: &[Row], state: Option<&SortState>) -> SortedRows {
    let Some(state) = state else {
        return SortedRows::identity(rows.len());
    };

    let mut incomparable = 0;
    let mut indices: Vec<usize> = (0..rows.len()).collect();
    merge_sort_by(&mut indices, |&a, &b| {
        let cmp = compare(
            rows[a].get(&state.column_id),
            rows[b].get(&state.column_id),
            state.direction,
        );
        if cmp.is_incomparable() {
            incomparable += 1;
        }
        cmp.ordering()
    });

    if incomparable > 0 {
        log::warn!(
            "[sort] {} incomparable value pairs in column {}; treated as equal",
            incomparable,
            state.column_id
        );
    }

    SortedRows {
        indices,
        incomparable,
    }
}

/// Stable top-down merge sort.
///
/// Mixed-type columns make the comparator intransitive, which the standard
/// library sorts are allowed to panic on. This one only ever asks "is the
/// right element strictly less", so any comparator yields some permutation.
fn merge_sort_by<T: Copy>(items: &mut [T], mut cmp: impl FnMut(&T, &T) -> Ordering) {
    let mut buf = items.to_vec();
    sort_range(items, &mut buf, &mut cmp);
}

fn sort_range<T: Copy>(
    items: &mut [T],
    buf: &mut [T],
    cmp: &mut impl FnMut(&T, &T) -> Ordering,
) {
    let len = items.len();
    if len <= 1 {
        return;
    }
    let mid = len / 2;
    {
        let (left, right) = items.split_at_mut(mid);
        let (left_buf, right_buf) = buf.split_at_mut(mid);
        sort_range(left, left_buf, cmp);
        sort_range(right, right_buf, cmp);
    }

    buf[..len].copy_from_slice(items);
    let (mut i, mut j, mut k) = (0, mid, 0);
    while i < mid && j < len {
        if cmp(&buf[j], &buf[i]) == Ordering::Less {
            items[k] = buf[j];
            j += 1;
        } else {
            items[k] = buf[i];
            i += 1;
        }
        k += 1;
    }
    while i < mid {
        items[k] = buf[i];
        i += 1;
        k += 1;
    }
    while j < len {
        items[k] = buf[j];
        j += 1;
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sort_is_stable() {
        let mut items = vec![(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')];
        merge_sort_by(&mut items, |a, b| a.0.cmp(&b.0));
        assert_eq!(items, vec![(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]);
    }

    #[test]
    fn test_merge_sort_survives_intransitive_comparator() {
        // rock-paper-scissors: never total
        let mut items = vec![0u8, 1, 2, 0, 1, 2];
        merge_sort_by(&mut items, |a, b| match (a, b) {
            (0, 1) | (1, 2) | (2, 0) => Ordering::Less,
            (1, 0) | (2, 1) | (0, 2) => Ordering::Greater,
            _ => Ordering::Equal,
        });
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, vec![0, 0, 1, 1, 2, 2]);
    }
}
