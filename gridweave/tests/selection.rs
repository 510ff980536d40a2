use celldom::PointerEvent;
use gridweave::prelude::{
    CellPos, CellRange, Column, EventResult, GestureContext, Grid, Row, WidgetEventKind,
};

fn sample_grid() -> Grid {
    Grid::with_rows(
        vec![
            Column::new("c1", "First", 8),
            Column::new("c2", "Second", 8),
            Column::new("c3", "Third", 8),
        ],
        vec![Row::new("r1"), Row::new("r2"), Row::new("r3")],
    )
}

// =============================================================================
// Phase machine
// =============================================================================

#[test]
fn test_selection_lifecycle() {
    let grid = sample_grid();
    let cx = GestureContext::new();

    assert!(!grid.is_selecting());
    assert_eq!(grid.selection_range(), None);

    assert_eq!(
        grid.begin_selection(CellPos::new(0, 0), &cx),
        EventResult::StartDrag
    );
    assert!(grid.is_selecting());
    assert_eq!(
        grid.selection_range(),
        Some(CellRange::single(CellPos::new(0, 0)))
    );

    assert_eq!(
        grid.update_selection(CellPos::new(2, 1), &cx),
        EventResult::Consumed
    );
    assert_eq!(
        grid.selection_range(),
        Some(CellRange {
            top: 0,
            bottom: 2,
            left: 0,
            right: 1,
        })
    );

    assert_eq!(grid.end_selection(&cx), EventResult::Consumed);
    assert!(!grid.is_selecting());
}

#[test]
fn test_range_persists_after_pointer_up() {
    let grid = sample_grid();
    let cx = GestureContext::new();

    grid.begin_selection(CellPos::new(1, 1), &cx);
    grid.update_selection(CellPos::new(2, 2), &cx);
    grid.end_selection(&cx);

    let finalized = grid.selection_range();
    assert_eq!(
        finalized,
        Some(CellRange {
            top: 1,
            bottom: 2,
            left: 1,
            right: 2,
        })
    );

    // Still there until a new gesture starts
    assert_eq!(grid.selection_range(), finalized);

    grid.begin_selection(CellPos::new(0, 0), &cx);
    assert_eq!(
        grid.selection_range(),
        Some(CellRange::single(CellPos::new(0, 0)))
    );
}

#[test]
fn test_update_without_begin_is_ignored() {
    let grid = sample_grid();
    let cx = GestureContext::new();

    assert_eq!(
        grid.update_selection(CellPos::new(1, 1), &cx),
        EventResult::Ignored
    );
    assert_eq!(grid.selection_range(), None);
    assert_eq!(grid.end_selection(&cx), EventResult::Ignored);
}

#[test]
fn test_begin_on_empty_grid_is_ignored() {
    let grid = Grid::new(vec![Column::new("c1", "First", 8)]);
    let cx = GestureContext::new();

    assert_eq!(
        grid.begin_selection(CellPos::new(0, 0), &cx),
        EventResult::Ignored
    );
}

#[test]
fn test_anchor_is_fixed_for_the_gesture() {
    let grid = sample_grid();
    let cx = GestureContext::new();

    grid.begin_selection(CellPos::new(1, 1), &cx);
    grid.update_selection(CellPos::new(0, 0), &cx);
    grid.update_selection(CellPos::new(2, 2), &cx);

    // The rectangle always spans from the original anchor
    assert_eq!(
        grid.selection_range(),
        Some(CellRange {
            top: 1,
            bottom: 2,
            left: 1,
            right: 2,
        })
    );
}

#[test]
fn test_update_clamps_to_grid_bounds() {
    let grid = sample_grid();
    let cx = GestureContext::new();

    grid.begin_selection(CellPos::new(0, 0), &cx);
    grid.update_selection(CellPos::new(99, 99), &cx);

    assert_eq!(
        grid.selection_range(),
        Some(CellRange {
            top: 0,
            bottom: 2,
            left: 0,
            right: 2,
        })
    );
}

// =============================================================================
// Mutual exclusion with reorder
// =============================================================================

#[test]
fn test_selection_rejected_during_reorder_drag() {
    let grid = sample_grid();
    let cx = GestureContext::new();

    assert_eq!(grid.begin_reorder("c2", &cx), EventResult::StartDrag);
    assert_eq!(
        grid.begin_selection(CellPos::new(0, 0), &cx),
        EventResult::Ignored
    );

    grid.end_reorder(&cx);
    assert_eq!(
        grid.begin_selection(CellPos::new(0, 0), &cx),
        EventResult::StartDrag
    );
}

#[test]
fn test_reorder_rejected_during_selection_drag() {
    let grid = sample_grid();
    let cx = GestureContext::new();

    grid.begin_selection(CellPos::new(0, 0), &cx);
    assert_eq!(grid.begin_reorder("c1", &cx), EventResult::Ignored);

    grid.end_selection(&cx);
    assert_eq!(grid.begin_reorder("c1", &cx), EventResult::StartDrag);
}

#[test]
fn test_range_query_survives_reorder_drag() {
    let grid = sample_grid();
    let cx = GestureContext::new();

    grid.begin_selection(CellPos::new(0, 0), &cx);
    grid.update_selection(CellPos::new(1, 1), &cx);
    grid.end_selection(&cx);
    let finalized = grid.selection_range();

    grid.begin_reorder("c3", &cx);
    assert_eq!(grid.selection_range(), finalized);
    grid.end_reorder(&cx);
}

// =============================================================================
// Pointer dispatch
// =============================================================================

#[test]
fn test_pointer_drag_selects_rectangle() {
    let grid = sample_grid();
    let cx = GestureContext::new();

    // Header is y == 0; first data row is y == 1. Columns are 8 wide.
    let down = PointerEvent::Down {
        x: 1,
        y: 1,
        button: celldom::MouseButton::Left,
    };
    assert_eq!(grid.on_pointer(&down, &cx), EventResult::StartDrag);

    let moved = PointerEvent::Move { x: 9, y: 2 };
    assert_eq!(grid.on_pointer(&moved, &cx), EventResult::Consumed);

    let up = PointerEvent::Up {
        x: 9,
        y: 2,
        button: celldom::MouseButton::Left,
    };
    assert_eq!(grid.on_pointer(&up, &cx), EventResult::Consumed);

    assert_eq!(
        grid.selection_range(),
        Some(CellRange {
            top: 0,
            bottom: 1,
            left: 0,
            right: 1,
        })
    );
}

#[test]
fn test_pointer_move_past_edge_clamps() {
    let grid = sample_grid();
    let cx = GestureContext::new();

    grid.on_pointer(
        &PointerEvent::Down {
            x: 0,
            y: 1,
            button: celldom::MouseButton::Left,
        },
        &cx,
    );
    // Way past the last column and row
    grid.on_pointer(&PointerEvent::Move { x: 60, y: 20 }, &cx);

    assert_eq!(
        grid.selection_range(),
        Some(CellRange {
            top: 0,
            bottom: 2,
            left: 0,
            right: 2,
        })
    );
}

#[test]
fn test_selection_change_events_published_per_recompute() {
    let grid = sample_grid();
    let cx = GestureContext::new();

    grid.begin_selection(CellPos::new(0, 0), &cx);
    grid.update_selection(CellPos::new(1, 0), &cx);
    // Same cell again: no new geometry, no new event
    grid.update_selection(CellPos::new(1, 0), &cx);
    grid.update_selection(CellPos::new(2, 0), &cx);
    grid.end_selection(&cx);

    let changes = cx
        .drain_events()
        .into_iter()
        .filter(|e| e.kind == WidgetEventKind::SelectionChange)
        .count();
    assert_eq!(changes, 3);
}
