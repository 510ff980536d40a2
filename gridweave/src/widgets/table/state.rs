//! Table widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use celldom::text::display_width;
use serde::{Deserialize, Serialize};

use crate::widgets::column::{Column, ColumnLayout};
use crate::widgets::events::{
    EventResult, GestureContext, GestureKind, ListenerGuard, WidgetEvent, WidgetEventKind,
};
use crate::widgets::traits::Widget;

/// Unique identifier for a Table widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableId(usize);

impl TableId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for TableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__table_{}", self.0)
    }
}

/// Bounds applied to a column width while resizing.
///
/// The default keeps every column at least one terminal column wide so it
/// can't vanish under the pointer; pass [`WidthClamp::NONE`] for the raw
/// unbounded behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidthClamp {
    pub min: u16,
    pub max: Option<u16>,
}

impl WidthClamp {
    pub const NONE: WidthClamp = WidthClamp {
        min: 0,
        max: None,
    };

    /// Clamp a signed candidate width into bounds.
    pub fn apply(&self, width: i32) -> u16 {
        let mut width = width.max(self.min as i32);
        if let Some(max) = self.max {
            width = width.min(max as i32);
        }
        width.clamp(0, u16::MAX as i32) as u16
    }
}

impl Default for WidthClamp {
    fn default() -> Self {
        Self { min: 1, max: None }
    }
}

/// An in-flight column resize drag.
#[derive(Debug)]
struct ResizeDrag {
    /// Stable key of the column being resized; key-based lookup keeps the
    /// gesture correct even if columns get reordered mid-drag.
    key: String,
    start_x: u16,
    start_width: u16,
    _guard: ListenerGuard,
}

/// Internal state for the Table widget.
#[derive(Debug)]
struct TableInner {
    /// Column definitions in visual order.
    columns: Vec<Column>,
    /// Cached column x-positions.
    layout: ColumnLayout,
    clamp: WidthClamp,
    /// Some while a resize drag is in flight.
    resize: Option<ResizeDrag>,
}

impl TableInner {
    fn new(columns: Vec<Column>) -> Self {
        let layout = ColumnLayout::from_columns(&columns);
        Self {
            columns,
            layout,
            clamp: WidthClamp::default(),
            resize: None,
        }
    }

    fn reflow(&mut self) {
        self.layout = ColumnLayout::from_columns(&self.columns);
    }
}

/// A headless table whose column widths are owned here and mutated by the
/// resize gesture, always addressed by stable key.
#[derive(Debug)]
pub struct Table {
    /// Unique identifier.
    id: TableId,
    /// Internal state.
    inner: Arc<RwLock<TableInner>>,
    /// Dirty flag for re-render.
    dirty: Arc<AtomicBool>,
}

impl Table {
    /// Create a new table with column definitions.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            id: TableId::new(),
            inner: Arc::new(RwLock::new(TableInner::new(columns))),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the width bounds used while resizing.
    pub fn with_clamp(self, clamp: WidthClamp) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.clamp = clamp;
        }
        self
    }

    /// Get the unique ID.
    pub fn id(&self) -> TableId {
        self.id
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

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.inner.read().map(|g| g.columns.len()).unwrap_or(0)
    }

    /// Width of the column with `key`.
    pub fn column_width(&self, key: &str) -> Option<u16> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.columns.iter().find(|c| c.key == key).map(|c| c.width))
    }

    /// Set the width of the column with `key`, subject to the clamp.
    pub fn set_column_width(&self, key: &str, width: u16) {
        if let Ok(mut guard) = self.inner.write() {
            let clamped = guard.clamp.apply(width as i32);
            let Some(column) = guard.columns.iter_mut().find(|c| c.key == key) else {
                return;
            };
            if column.width != clamped {
                column.width = clamped;
                guard.reflow();
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    /// Move the column with `key` to a new visual index.
    /// Returns false when the key is unknown.
    pub fn move_column(&self, key: &str, to_index: usize) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            let Some(from) = guard.columns.iter().position(|c| c.key == key) else {
                return false;
            };
            let column = guard.columns.remove(from);
            let to_index = to_index.min(guard.columns.len());
            guard.columns.insert(to_index, column);
            guard.reflow();
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    /// Total content width (sum of all column widths).
    pub fn total_width(&self) -> u16 {
        self.inner.read().map(|g| g.layout.total_width()).unwrap_or(0)
    }

    /// Fit a column to its content: the widest of the header title and the
    /// given cell texts (measured in terminal columns), subject to the clamp.
    pub fn autosize_column<S: AsRef<str>>(&self, key: &str, cells: &[S]) {
        let Ok(mut guard) = self.inner.write() else {
            return;
        };
        let Some(title_width) = guard
            .columns
            .iter()
            .find(|c| c.key == key)
            .map(|c| display_width(&c.title))
        else {
            return;
        };

        let mut width = title_width;
        for cell in cells {
            width = width.max(display_width(cell.as_ref()));
        }
        let clamped = guard.clamp.apply(width.min(u16::MAX as usize) as i32);

        let Some(column) = guard.columns.iter_mut().find(|c| c.key == key) else {
            return;
        };
        if column.width != clamped {
            column.width = clamped;
            guard.reflow();
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// The resize-handle column at viewport x: the rightmost cell of each
    /// column's header span acts as its handle.
    pub fn resize_handle_at(&self, x: u16) -> Option<String> {
        let guard = self.inner.read().ok()?;
        for (i, column) in guard.columns.iter().enumerate() {
            if column.width == 0 {
                continue;
            }
            let left = guard.layout.position(i)?;
            if x == left + column.width - 1 {
                return Some(column.key.clone());
            }
        }
        None
    }

    // -------------------------------------------------------------------------
    // Resize gesture
    // -------------------------------------------------------------------------

    /// Pointer-down on a resize handle: record the starting x and the target
    /// column's current width.
    ///
    /// Ignored when a resize is already in flight, when another gesture holds
    /// the surface's listener slot, or when the key names no column.
    pub fn begin_resize(&self, key: &str, start_x: u16, cx: &GestureContext) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        if guard.resize.is_some() {
            return EventResult::Ignored;
        }
        let Some(start_width) = guard.columns.iter().find(|c| c.key == key).map(|c| c.width)
        else {
            return EventResult::Ignored;
        };
        let Some(listeners) = cx.acquire_listeners(GestureKind::Resize) else {
            return EventResult::Ignored;
        };

        guard.resize = Some(ResizeDrag {
            key: key.to_string(),
            start_x,
            start_width,
            _guard: listeners,
        });
        log::debug!(
            "[table {}] resize started on {key:?} at width {start_width}",
            self.id
        );
        EventResult::StartDrag
    }

    /// Pointer-move during a resize: apply `start_width + (x - start_x)`,
    /// clamped, to the dragged column immediately.
    pub fn resize_to(&self, current_x: u16, _cx: &GestureContext) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        let Some(resize) = guard.resize.as_ref() else {
            return EventResult::Ignored;
        };

        let delta = current_x as i32 - resize.start_x as i32;
        let width = guard.clamp.apply(resize.start_width as i32 + delta);
        let key = resize.key.clone();
        let Some(column) = guard.columns.iter_mut().find(|c| c.key == key) else {
            // Column vanished mid-drag; keep the gesture, change nothing.
            return EventResult::Ignored;
        };
        if column.width != width {
            column.width = width;
            guard.reflow();
            self.dirty.store(true, Ordering::SeqCst);
            log::trace!("[table {}] {key:?} resized to {width}", self.id);
        }
        EventResult::Consumed
    }

    /// Pointer-up: finish the resize and release the listener slot exactly
    /// once. Later pointer moves cannot touch any width.
    pub fn end_resize(&self, cx: &GestureContext) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        let Some(resize) = guard.resize.take() else {
            return EventResult::Ignored;
        };
        cx.push_event(WidgetEvent::new(WidgetEventKind::Resize, self.id_string()));
        log::debug!("[table {}] resize on {:?} finished", self.id, resize.key);
        EventResult::Consumed
    }

    /// Whether a resize drag is in flight.
    pub fn is_resizing(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.resize.is_some())
            .unwrap_or(false)
    }
}

impl Widget for Table {
    fn id_string(&self) -> String {
        self.id.to_string()
    }

    fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst)
    }
}

impl Clone for Table {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
