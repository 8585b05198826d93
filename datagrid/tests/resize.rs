//! Tests for the resize controller, width bounds and frame coalescing.

use datagrid::GridConfig;
use datagrid::model::Column;
use datagrid::resize::{FrameRequest, ResizeController, ResizeState, WidthBounds, WidthMap};

fn age() -> Column {
    Column::number("age", "Age").min_width(50.0).resizable()
}

fn widths_with(column: &str, width: f64) -> WidthMap {
    let mut widths = WidthMap::new();
    widths.set(column, width);
    widths
}

// =============================================================================
// Bounds
// =============================================================================

#[test]
fn test_clamp_never_leaves_bounds() {
    let bounds = WidthBounds {
        min: 50.0,
        max: Some(300.0),
    };
    for delta in [-1e9, -1000.0, -51.0, -50.0, 0.0, 1.0, 199.0, 250.0, 1e9] {
        let width = bounds.clamp(100.0 + delta);
        assert!((50.0..=300.0).contains(&width), "delta {delta} gave {width}");
    }
}

#[test]
fn test_clamp_without_max_is_unbounded_above() {
    let bounds = WidthBounds {
        min: 50.0,
        max: None,
    };
    assert_eq!(bounds.clamp(10_000.0), 10_000.0);
    assert_eq!(bounds.clamp(-10_000.0), 50.0);
}

#[test]
fn test_clamp_ignores_max_below_min() {
    let bounds = WidthBounds {
        min: 80.0,
        max: Some(40.0),
    };
    assert_eq!(bounds.clamp(10.0), 80.0);
    assert_eq!(bounds.clamp(120.0), 120.0);
}

#[test]
fn test_bounds_fall_back_to_floor() {
    let column = Column::text("name", "Name").resizable();
    let bounds = WidthBounds::for_column(&column, 50.0);
    assert_eq!(bounds.min, 50.0);
    assert_eq!(bounds.max, None);
}

// =============================================================================
// Sessions
// =============================================================================

#[test]
fn test_drag_widens_and_clamps() {
    let config = GridConfig::default();
    let mut widths = widths_with("age", 100.0);
    let mut resize = ResizeController::new();

    assert!(resize.begin(&age(), 200.0, &widths, &config));
    assert_eq!(resize.session().map(|s| s.start_width), Some(100.0));

    assert_eq!(resize.pointer_moved(250.0), FrameRequest::Schedule);
    assert_eq!(resize.on_frame(&mut widths), Some(150.0));
    assert_eq!(widths.get("age"), Some(150.0));

    assert_eq!(resize.pointer_moved(-1000.0), FrameRequest::Schedule);
    assert_eq!(resize.on_frame(&mut widths), Some(50.0));
    assert_eq!(widths.get("age"), Some(50.0));
}

#[test]
fn test_moves_within_a_frame_are_coalesced() {
    let config = GridConfig::default();
    let mut widths = widths_with("age", 100.0);
    let mut resize = ResizeController::new();
    resize.begin(&age(), 0.0, &widths, &config);

    assert_eq!(resize.pointer_moved(10.0), FrameRequest::Schedule);
    assert_eq!(resize.pointer_moved(20.0), FrameRequest::Coalesced);
    assert_eq!(resize.pointer_moved(30.0), FrameRequest::Coalesced);
    assert_eq!(widths.get("age"), Some(100.0));
    assert!(resize.frame_pending());

    // Only the latest position is applied.
    assert_eq!(resize.on_frame(&mut widths), Some(130.0));
    assert!(!resize.frame_pending());

    // No move since the last frame: nothing to do.
    assert_eq!(resize.on_frame(&mut widths), None);
}

#[test]
fn test_begin_requires_resizable() {
    let config = GridConfig::default();
    let widths = WidthMap::new();
    let mut resize = ResizeController::new();
    let fixed = Column::number("age", "Age");
    assert!(!resize.begin(&fixed, 0.0, &widths, &config));
    assert_eq!(resize.state(), &ResizeState::Idle);
}

#[test]
fn test_second_begin_is_ignored() {
    let config = GridConfig::default();
    let widths = WidthMap::new();
    let mut resize = ResizeController::new();
    let other = Column::text("name", "Name").resizable();

    assert!(resize.begin(&age(), 0.0, &widths, &config));
    assert!(!resize.begin(&other, 10.0, &widths, &config));
    assert!(resize.is_resizing("age"));
    assert!(!resize.is_resizing("name"));
}

#[test]
fn test_start_width_falls_back_to_min_then_default() {
    let config = GridConfig::default();
    let widths = WidthMap::new();

    let mut resize = ResizeController::new();
    resize.begin(&age(), 0.0, &widths, &config);
    assert_eq!(resize.session().map(|s| s.start_width), Some(50.0));

    let mut resize = ResizeController::new();
    resize.begin(&Column::text("name", "Name").resizable(), 0.0, &widths, &config);
    assert_eq!(
        resize.session().map(|s| s.start_width),
        Some(config.fallback_width)
    );
}

#[test]
fn test_end_flushes_pending_move() {
    let config = GridConfig::default();
    let mut widths = widths_with("age", 100.0);
    let mut resize = ResizeController::new();
    resize.begin(&age(), 0.0, &widths, &config);
    resize.pointer_moved(40.0);

    let session = resize.end(&mut widths);
    assert_eq!(session.map(|s| s.column_id), Some("age".to_string()));
    assert_eq!(widths.get("age"), Some(140.0));
    assert!(!resize.is_active());
    assert!(!resize.frame_pending());
}

#[test]
fn test_end_while_idle_is_noop() {
    let mut widths = WidthMap::new();
    let mut resize = ResizeController::new();
    assert!(resize.end(&mut widths).is_none());
    assert!(widths.is_empty());
}

#[test]
fn test_move_while_idle_is_ignored() {
    let mut resize = ResizeController::new();
    assert_eq!(resize.pointer_moved(10.0), FrameRequest::Ignored);
}

#[test]
fn test_non_finite_pointer_is_ignored() {
    let config = GridConfig::default();
    let mut widths = widths_with("age", 100.0);
    let mut resize = ResizeController::new();
    assert!(!resize.begin(&age(), f64::NAN, &widths, &config));

    resize.begin(&age(), 0.0, &widths, &config);
    assert_eq!(resize.pointer_moved(f64::INFINITY), FrameRequest::Ignored);
    assert_eq!(resize.on_frame(&mut widths), None);
    assert_eq!(widths.get("age"), Some(100.0));
}

// =============================================================================
// Width map
// =============================================================================

#[test]
fn test_seed_uses_min_or_default() {
    let config = GridConfig::default();
    let columns = vec![age(), Column::text("name", "Name")];
    let mut widths = WidthMap::new();
    widths.seed(&columns, &config);
    assert_eq!(widths.get("age"), Some(50.0));
    assert_eq!(widths.get("name"), Some(config.default_width));
}

#[test]
fn test_seed_keeps_existing_entries() {
    let config = GridConfig::default();
    let mut widths = widths_with("age", 222.0);
    widths.seed(&[age()], &config);
    assert_eq!(widths.get("age"), Some(222.0));
}
