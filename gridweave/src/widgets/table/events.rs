//! Pointer dispatch for the Table widget.
//!
//! y == 0 is the header row; only presses on a resize handle start a
//! gesture. Moves and releases route to whatever resize is in flight.

use celldom::{MouseButton, PointerEvent};

use crate::widgets::events::{EventResult, GestureContext};

use super::state::Table;

impl Table {
    /// Route a pointer event to the resize gesture.
    pub fn on_pointer(&self, event: &PointerEvent, cx: &GestureContext) -> EventResult {
        match *event {
            PointerEvent::Down {
                x,
                y: 0,
                button: MouseButton::Left,
            } => match self.resize_handle_at(x) {
                Some(key) => self.begin_resize(&key, x, cx),
                None => EventResult::Ignored,
            },
            PointerEvent::Move { x, .. } => self.resize_to(x, cx),
            PointerEvent::Up { .. } => self.end_resize(cx),
            _ => EventResult::Ignored,
        }
    }
}
