//! Tests for the pin manager.

use std::collections::HashSet;

use datagrid::pin::PinSet;

#[test]
fn test_partition_preserves_order() {
    let mut pins = PinSet::new();
    pins.set_pinned("c", true);
    pins.set_pinned("a", true);

    let order = ["a", "b", "c", "d"];
    let part = pins.partition(&order);
    assert_eq!(part.pinned, ["a", "c"]);
    assert_eq!(part.scrollable, ["b", "d"]);
}

#[test]
fn test_partition_is_disjoint_cover() {
    let order = ["a", "b", "c", "d", "e"];
    // Every subset of the five columns as a pin set.
    for mask in 0u32..32 {
        let mut pins = PinSet::new();
        for (i, id) in order.iter().enumerate() {
            if mask & (1 << i) != 0 {
                pins.set_pinned(id, true);
            }
        }
        let part = pins.partition(&order);
        let pinned: HashSet<&str> = part.pinned.iter().copied().collect();
        let scrollable: HashSet<&str> = part.scrollable.iter().copied().collect();
        let all: HashSet<&str> = order.iter().copied().collect();

        assert!(pinned.is_disjoint(&scrollable), "mask {mask:05b}");
        assert_eq!(&pinned | &scrollable, all, "mask {mask:05b}");
    }
}

#[test]
fn test_partition_follows_reorder() {
    let mut pins = PinSet::new();
    pins.set_pinned("b", true);
    pins.set_pinned("c", true);
    assert_eq!(pins.partition(&["b", "c"]).pinned, ["b", "c"]);
    assert_eq!(pins.partition(&["c", "b"]).pinned, ["c", "b"]);
}

#[test]
fn test_toggle_is_symmetric() {
    let mut pins = PinSet::new();
    assert!(pins.toggle("a"));
    assert!(pins.is_pinned("a"));
    assert!(!pins.toggle("a"));
    assert!(!pins.is_pinned("a"));
}

#[test]
fn test_set_pinned_reports_change() {
    let mut pins = PinSet::new();
    assert!(pins.set_pinned("a", true));
    assert!(!pins.set_pinned("a", true));
    assert!(pins.set_pinned("a", false));
    assert!(!pins.set_pinned("never", false));
}

#[test]
fn test_pinned_width_sums_pinned_only() {
    let mut pins = PinSet::new();
    pins.set_pinned("a", true);
    pins.set_pinned("c", true);
    let width = pins.pinned_width(&["a", "b", "c"], |id| match id {
        "a" => 120.0,
        "b" => 500.0,
        _ => 80.0,
    });
    assert_eq!(width, 200.0);
}

#[test]
fn test_retain_forgets_removed_columns() {
    let mut pins = PinSet::new();
    pins.set_pinned("a", true);
    pins.set_pinned("b", true);
    pins.retain(|id| id != "a");
    let mut ids: Vec<&str> = pins.pinned_ids().collect();
    ids.sort();
    assert_eq!(ids, ["b"]);
}
