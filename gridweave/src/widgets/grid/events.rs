//! Pointer dispatch for the Grid widget.
//!
//! Coordinates are viewport-relative: y == 0 is the header row, data rows
//! start at y == 1. Header presses start a reorder drag, body presses start
//! a selection drag; the two can never overlap because both entry points
//! check the other gesture and contend for the same listener slot.

use celldom::{MouseButton, PointerEvent};

use crate::widgets::events::{EventResult, GestureContext};

use super::range::CellPos;
use super::state::Grid;

impl Grid {
    /// Map viewport coordinates to the cell under them.
    /// None on the header row, outside the columns, or past the last row.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<CellPos> {
        let guard = self.inner.read().ok()?;
        if y == 0 {
            return None; // Header row, not a data row
        }
        let absolute_y = guard.scroll_offset_y + (y - 1);
        let row = (absolute_y / guard.row_height) as usize;
        if row >= guard.rows.len() {
            return None;
        }
        let absolute_x = guard.scroll_offset_x.saturating_add(x);
        let col = guard.layout.column_at_x(absolute_x)?;
        Some(CellPos::new(row, col))
    }

    /// Map viewport coordinates to the nearest cell, for move frames that
    /// run past the grid edges mid-drag.
    pub fn cell_at_clamped(&self, x: u16, y: u16) -> Option<CellPos> {
        let guard = self.inner.read().ok()?;
        if guard.rows.is_empty() || guard.columns.is_empty() {
            return None;
        }
        let absolute_y = guard.scroll_offset_y + y.saturating_sub(1);
        let row = (absolute_y / guard.row_height) as usize;
        let absolute_x = guard.scroll_offset_x.saturating_add(x);
        let col = guard.layout.column_at_x_clamped(absolute_x);
        Some(CellPos::new(row, col).clamped(guard.rows.len(), guard.columns.len()))
    }

    /// Key of the header column at viewport x, if any.
    pub fn header_column_at(&self, x: u16) -> Option<String> {
        let guard = self.inner.read().ok()?;
        let absolute_x = guard.scroll_offset_x.saturating_add(x);
        let index = guard.layout.column_at_x(absolute_x)?;
        guard.columns.get(index).map(|c| c.key.clone())
    }

    /// Route a pointer event to the selection or reorder gesture.
    pub fn on_pointer(&self, event: &PointerEvent, cx: &GestureContext) -> EventResult {
        match *event {
            PointerEvent::Down {
                x,
                y,
                button: MouseButton::Left,
            } => {
                if y == 0 {
                    match self.header_column_at(x) {
                        Some(key) => self.begin_reorder(&key, cx),
                        None => EventResult::Ignored,
                    }
                } else {
                    match self.cell_at(x, y) {
                        Some(pos) => self.begin_selection(pos, cx),
                        None => EventResult::Ignored,
                    }
                }
            }
            PointerEvent::Move { x, y } => {
                if self.is_selecting() {
                    match self.cell_at_clamped(x, y) {
                        Some(pos) => self.update_selection(pos, cx),
                        None => EventResult::Ignored,
                    }
                } else {
                    // Reorder previews are fed externally from measured
                    // positions via set_shift_offsets; nothing to do here.
                    EventResult::Ignored
                }
            }
            PointerEvent::Up { .. } => {
                if self.is_selecting() {
                    self.end_selection(cx)
                } else if self.dragging_key().is_some() {
                    self.end_reorder(cx)
                } else {
                    EventResult::Ignored
                }
            }
            PointerEvent::Down { .. } => EventResult::Ignored,
        }
    }
}
