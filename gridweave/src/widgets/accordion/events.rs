//! Event handling for the Accordion widget.

use celldom::Key;

use crate::widgets::events::{EventResult, GestureContext, WidgetEvent, WidgetEventKind};
use crate::widgets::traits::Widget;

use super::state::Accordion;

impl Accordion {
    /// Handle a key press while the accordion has focus.
    /// Up/Down move the cursor; Enter and Space toggle the focused section.
    pub fn on_key(&self, key: &Key, cx: &GestureContext) -> EventResult {
        match key {
            Key::Up => {
                if self.cursor_up().is_some() {
                    cx.push_event(WidgetEvent::new(
                        WidgetEventKind::CursorMove,
                        self.id_string(),
                    ));
                    return EventResult::Consumed;
                }
                EventResult::Ignored
            }
            Key::Down => {
                if self.cursor_down().is_some() {
                    cx.push_event(WidgetEvent::new(
                        WidgetEventKind::CursorMove,
                        self.id_string(),
                    ));
                    return EventResult::Consumed;
                }
                EventResult::Ignored
            }
            Key::Enter | Key::Char(' ') => match self.cursor_key() {
                Some(key) => self.toggle_with_event(&key, cx),
                None => EventResult::Ignored,
            },
            _ => EventResult::Ignored,
        }
    }

    /// Handle a click on a section header, identified by its key.
    pub fn on_header_click(&self, key: &str, cx: &GestureContext) -> EventResult {
        self.toggle_with_event(key, cx)
    }

    fn toggle_with_event(&self, key: &str, cx: &GestureContext) -> EventResult {
        match self.toggle(key) {
            Some(true) => {
                cx.push_event(WidgetEvent::new(WidgetEventKind::Expand, self.id_string()));
                EventResult::Consumed
            }
            Some(false) => {
                cx.push_event(WidgetEvent::new(
                    WidgetEventKind::Collapse,
                    self.id_string(),
                ));
                EventResult::Consumed
            }
            None => EventResult::Ignored,
        }
    }
}
