use gridweave::prelude::{BottomSheet, EventResult, GestureContext, WidgetEventKind};

fn sample_sheet() -> BottomSheet {
    BottomSheet::new(vec![6, 12, 20])
}

// =============================================================================
// Open/close
// =============================================================================

#[test]
fn test_open_close() {
    let sheet = sample_sheet();
    assert!(!sheet.is_open());
    assert_eq!(sheet.height(), 0);

    sheet.open(1);
    assert!(sheet.is_open());
    assert_eq!(sheet.height(), 12);

    sheet.close();
    assert!(!sheet.is_open());
    assert_eq!(sheet.height(), 0);
}

#[test]
fn test_open_clamps_snap_index() {
    let sheet = sample_sheet();
    sheet.open(99);
    assert_eq!(sheet.height(), 20);
}

#[test]
fn test_snap_heights_sorted_and_deduped() {
    let sheet = BottomSheet::new(vec![12, 0, 6, 12]);
    assert_eq!(sheet.snap_heights(), vec![6, 12]);
}

#[test]
fn test_empty_sheet_cannot_open() {
    let sheet = BottomSheet::new(vec![0]);
    sheet.open(0);
    assert!(!sheet.is_open());
}

// =============================================================================
// Drag gesture
// =============================================================================

#[test]
fn test_drag_follows_pointer() {
    let sheet = sample_sheet();
    let cx = GestureContext::new();

    sheet.open(0);
    assert_eq!(sheet.begin_drag(18, &cx), EventResult::StartDrag);
    assert!(sheet.is_dragging());
    // No snap animation while the sheet tracks the pointer
    assert_eq!(sheet.transition(), None);

    // Dragging up by 4 rows grows the sheet
    assert_eq!(sheet.drag_to(14, &cx), EventResult::Consumed);
    assert_eq!(sheet.height(), 10);

    // Down past the start shrinks it
    sheet.drag_to(20, &cx);
    assert_eq!(sheet.height(), 4);
}

#[test]
fn test_release_snaps_to_nearest() {
    let sheet = sample_sheet();
    let cx = GestureContext::new();

    sheet.open(0);
    sheet.begin_drag(20, &cx);
    sheet.drag_to(9, &cx); // height 17, nearest snap is 20
    assert_eq!(sheet.release(&cx), EventResult::Consumed);

    assert!(sheet.is_open());
    assert!(!sheet.is_dragging());
    assert_eq!(sheet.height(), 20);
    assert!(sheet.transition().is_some());

    let events = cx.drain_events();
    assert!(events.iter().any(|e| e.kind == WidgetEventKind::Change));
}

#[test]
fn test_release_low_dismisses() {
    let sheet = sample_sheet();
    let cx = GestureContext::new();

    sheet.open(0);
    sheet.begin_drag(10, &cx);
    sheet.drag_to(14, &cx); // height 2, below half the smallest snap
    sheet.release(&cx);

    assert!(!sheet.is_open());
    assert_eq!(sheet.height(), 0);
}

#[test]
fn test_drag_clamped_to_tallest_snap() {
    let sheet = sample_sheet();
    let cx = GestureContext::new();

    sheet.open(2);
    sheet.begin_drag(30, &cx);
    sheet.drag_to(0, &cx);
    assert_eq!(sheet.height(), 20);
    sheet.release(&cx);
}

#[test]
fn test_begin_drag_when_closed_is_ignored() {
    let sheet = sample_sheet();
    let cx = GestureContext::new();
    assert_eq!(sheet.begin_drag(10, &cx), EventResult::Ignored);
}

#[test]
fn test_drag_releases_listener_slot() {
    let sheet = sample_sheet();
    let cx = GestureContext::new();

    sheet.open(0);
    sheet.begin_drag(10, &cx);
    assert!(cx.active_gesture().is_some());
    sheet.release(&cx);
    assert_eq!(cx.active_gesture(), None);

    // Moves after release change nothing
    assert_eq!(sheet.drag_to(5, &cx), EventResult::Ignored);
    assert_eq!(sheet.height(), 6);
}
