//! Grid widget state.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::widgets::column::{Column, ColumnLayout};
use crate::widgets::events::{
    EventResult, GestureContext, GestureKind, ListenerGuard, WidgetEvent, WidgetEventKind,
};
use crate::widgets::traits::Widget;

use super::range::{CellPos, CellRange};

/// Unique identifier for a Grid widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridId(usize);

impl GridId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for GridId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__grid_{}", self.0)
    }
}

/// A grid row: an opaque identity whose order is defined by the row list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub key: String,
}

impl Row {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

/// An in-flight range-selection gesture.
#[derive(Debug)]
pub(super) struct SelectionGesture {
    /// The cell where the gesture began; fixed for its duration.
    pub anchor: CellPos,
    pub _guard: ListenerGuard,
}

/// An in-flight column reorder drag.
#[derive(Debug)]
pub(super) struct ReorderDrag {
    pub key: String,
    /// Preview offsets per column key, replaced wholesale each move frame.
    pub offsets: HashMap<String, i32>,
    pub _guard: ListenerGuard,
}

/// Internal state for the Grid widget.
#[derive(Debug)]
pub(super) struct GridInner {
    /// The rows in the grid, in display order.
    pub rows: Vec<Row>,
    /// Column definitions in visual order.
    pub columns: Vec<Column>,
    /// Canonical column key order; maps a column index to a stable key
    /// independent of any visual reordering in progress.
    pub base_order: Vec<String>,
    /// Cached column x-positions.
    pub layout: ColumnLayout,
    /// Height of one row in terminal rows.
    pub row_height: u16,
    pub scroll_offset_x: u16,
    pub scroll_offset_y: u16,
    /// Some while a selection drag is in flight.
    pub selecting: Option<SelectionGesture>,
    /// The current selection rectangle; survives the end of its gesture
    /// until the next one begins.
    pub range: Option<CellRange>,
    /// Some while a column reorder drag is in flight.
    pub drag: Option<ReorderDrag>,
    /// When set, shift previews snap instantly (used around the drop commit
    /// frame to avoid animating the final reflow).
    pub shift_animation_disabled: bool,
}

impl GridInner {
    fn new(columns: Vec<Column>) -> Self {
        let layout = ColumnLayout::from_columns(&columns);
        let base_order = columns.iter().map(|c| c.key.clone()).collect();
        Self {
            rows: Vec::new(),
            columns,
            base_order,
            layout,
            row_height: 1,
            scroll_offset_x: 0,
            scroll_offset_y: 0,
            selecting: None,
            range: None,
            drag: None,
            shift_animation_disabled: false,
        }
    }
}

/// A spreadsheet-like grid with rectangular range selection, column reorder
/// previews, and clipboard export.
///
/// The handle is cheap to clone; all clones share state. Gesture handlers
/// take the surface's [`GestureContext`] explicitly so selection, reorder,
/// and resize drags contend for the same listener slot.
#[derive(Debug)]
pub struct Grid {
    /// Unique identifier.
    id: GridId,
    /// Internal state.
    pub(super) inner: Arc<RwLock<GridInner>>,
    /// Dirty flag for re-render.
    pub(super) dirty: Arc<AtomicBool>,
}

impl Grid {
    /// Create a new grid with column definitions. The canonical column order
    /// is taken from the definitions' order at construction.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            id: GridId::new(),
            inner: Arc::new(RwLock::new(GridInner::new(columns))),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a grid with initial rows.
    pub fn with_rows(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        let grid = Self::new(columns);
        if let Ok(mut guard) = grid.inner.write() {
            guard.rows = rows;
        }
        grid
    }

    /// Set the row height (terminal rows per grid row).
    pub fn with_row_height(self, height: u16) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.row_height = height.max(1);
        }
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> GridId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Row access
    // -------------------------------------------------------------------------

    /// Get the number of rows.
    pub fn len(&self) -> usize {
        self.inner.read().map(|g| g.rows.len()).unwrap_or(0)
    }

    /// Check if the grid has no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get a row by index.
    pub fn row(&self, index: usize) -> Option<Row> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.rows.get(index).cloned())
    }

    /// Get all rows.
    pub fn rows(&self) -> Vec<Row> {
        self.inner
            .read()
            .map(|g| g.rows.clone())
            .unwrap_or_default()
    }

    /// Set all rows. Cancels an in-flight selection gesture; the finalized
    /// rectangle stays put (copy skips indices the new list no longer has)
    /// until the next gesture replaces it.
    pub fn set_rows(&self, rows: Vec<Row>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.rows = rows;
            guard.selecting = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Column access
    // -------------------------------------------------------------------------

    /// Get the column definitions in visual order.
    pub fn columns(&self) -> Vec<Column> {
        self.inner
            .read()
            .map(|g| g.columns.clone())
            .unwrap_or_default()
    }

    /// Replace the column definitions (visual order). The canonical order is
    /// untouched; use [`Grid::set_base_order`] when the semantic order itself
    /// changes.
    pub fn set_columns(&self, columns: Vec<Column>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.layout = ColumnLayout::from_columns(&columns);
            guard.columns = columns;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Canonical column key order used for range iteration.
    pub fn base_order(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|g| g.base_order.clone())
            .unwrap_or_default()
    }

    /// Replace the canonical column key order.
    pub fn set_base_order(&self, order: Vec<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.base_order = order;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.inner.read().map(|g| g.columns.len()).unwrap_or(0)
    }

    /// Total content width (sum of all column widths).
    pub fn total_width(&self) -> u16 {
        self.inner.read().map(|g| g.layout.total_width()).unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Scrolling
    // -------------------------------------------------------------------------

    pub fn scroll_offset_x(&self) -> u16 {
        self.inner.read().map(|g| g.scroll_offset_x).unwrap_or(0)
    }

    pub fn set_scroll_offset_x(&self, offset: u16) {
        if let Ok(mut guard) = self.inner.write() {
            guard.scroll_offset_x = offset;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    pub fn scroll_offset_y(&self) -> u16 {
        self.inner.read().map(|g| g.scroll_offset_y).unwrap_or(0)
    }

    pub fn set_scroll_offset_y(&self, offset: u16) {
        if let Ok(mut guard) = self.inner.write() {
            guard.scroll_offset_y = offset;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Selection gesture
    // -------------------------------------------------------------------------

    /// Pointer-down on a body cell: record the anchor and start selecting.
    ///
    /// Ignored while a reorder drag is active, while another gesture holds
    /// the surface's listener slot, or when the grid is empty. The previous
    /// rectangle is replaced by the single-cell rectangle at `pos`.
    pub fn begin_selection(&self, pos: CellPos, cx: &GestureContext) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        if guard.drag.is_some() || guard.selecting.is_some() {
            return EventResult::Ignored;
        }
        if guard.rows.is_empty() || guard.base_order.is_empty() {
            return EventResult::Ignored;
        }
        let Some(listeners) = cx.acquire_listeners(GestureKind::Selection) else {
            return EventResult::Ignored;
        };

        let pos = pos.clamped(guard.rows.len(), guard.base_order.len());
        guard.selecting = Some(SelectionGesture {
            anchor: pos,
            _guard: listeners,
        });
        guard.range = Some(CellRange::single(pos));
        self.dirty.store(true, Ordering::SeqCst);
        cx.push_event(WidgetEvent::new(
            WidgetEventKind::SelectionChange,
            self.id_string(),
        ));
        log::debug!("[grid {}] selection anchored at {pos:?}", self.id);
        EventResult::StartDrag
    }

    /// Pointer-move during a selection drag: recompute the rectangle from the
    /// anchor and the current cell. Publishes a change event only when the
    /// rectangle actually moved.
    pub fn update_selection(&self, pos: CellPos, cx: &GestureContext) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        let Some(gesture) = guard.selecting.as_ref() else {
            return EventResult::Ignored;
        };

        let anchor = gesture.anchor;
        let next = CellRange::between(anchor, pos)
            .clamped(guard.rows.len(), guard.base_order.len());
        if guard.range != Some(next) {
            guard.range = Some(next);
            self.dirty.store(true, Ordering::SeqCst);
            cx.push_event(WidgetEvent::new(
                WidgetEventKind::SelectionChange,
                self.id_string(),
            ));
            log::trace!("[grid {}] selection now {next:?}", self.id);
        }
        EventResult::Consumed
    }

    /// Pointer-up: finalize the gesture. The rectangle itself persists until
    /// the next [`Grid::begin_selection`].
    pub fn end_selection(&self, _cx: &GestureContext) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        if guard.selecting.take().is_none() {
            return EventResult::Ignored;
        }
        log::debug!("[grid {}] selection finalized as {:?}", self.id, guard.range);
        EventResult::Consumed
    }

    /// The current selection rectangle. Still answers with the last finalized
    /// geometry while a reorder drag is in flight.
    pub fn selection_range(&self) -> Option<CellRange> {
        self.inner.read().ok().and_then(|g| g.range)
    }

    /// Whether a selection drag is in flight.
    pub fn is_selecting(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.selecting.is_some())
            .unwrap_or(false)
    }

    /// Drop the selection rectangle entirely.
    pub fn clear_selection(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selecting = None;
            guard.range = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Reorder drag state
    // -------------------------------------------------------------------------

    /// The column key currently being dragged, if any.
    pub fn dragging_key(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.drag.as_ref().map(|d| d.key.clone()))
    }
}

impl Widget for Grid {
    fn id_string(&self) -> String {
        self.id.to_string()
    }

    fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}

impl Clone for Grid {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
