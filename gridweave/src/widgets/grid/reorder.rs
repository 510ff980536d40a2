//! Column reorder previews.
//!
//! While a header drag is in flight, every column gets a horizontal offset to
//! animate the reordering preview. Offsets are computed by the host from
//! measured column positions and handed over wholesale each move frame; this
//! module owns the drag lifecycle and the transition policy only.

use std::collections::HashMap;
use std::sync::atomic::Ordering;
use std::time::Duration;

use celldom::TransitionConfig;
use celldom::transition::{EASE, EASE_OUT_BACK};

use crate::widgets::events::{
    EventResult, GestureContext, GestureKind, WidgetEvent, WidgetEventKind,
};
use crate::widgets::traits::Widget;

use super::state::{Grid, ReorderDrag};

/// Shift applied mid-drag: slower, with overshoot, so displaced columns feel
/// like they make room.
const DRAG_SHIFT_TRANSITION: TransitionConfig =
    TransitionConfig::new(Duration::from_millis(280), EASE_OUT_BACK);

/// Shift applied outside a drag: a quick settle.
const IDLE_SHIFT_TRANSITION: TransitionConfig =
    TransitionConfig::new(Duration::from_millis(240), EASE);

/// How a column should be displaced right now.
///
/// A transform-style descriptor for the rendering layer: horizontal offset,
/// the transition to animate it with (None = snap instantly), and whether the
/// renderer should expect further changes this gesture (performance hint).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShiftStyle {
    /// Signed horizontal offset in terminal columns.
    pub translate_x: i32,
    /// Timing for animating toward the offset; None snaps.
    pub transition: Option<TransitionConfig>,
    /// True while a drag is in flight and offsets keep changing.
    pub will_change: bool,
}

impl Grid {
    /// Pointer-down on a header: start dragging the column with `key`.
    ///
    /// Ignored while a selection drag is active, while another gesture holds
    /// the listener slot, or when the key names no column.
    pub fn begin_reorder(&self, key: &str, cx: &GestureContext) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        if guard.selecting.is_some() || guard.drag.is_some() {
            return EventResult::Ignored;
        }
        if !guard.columns.iter().any(|c| c.key == key) {
            return EventResult::Ignored;
        }
        let Some(listeners) = cx.acquire_listeners(GestureKind::Reorder) else {
            return EventResult::Ignored;
        };

        guard.drag = Some(ReorderDrag {
            key: key.to_string(),
            offsets: HashMap::new(),
            _guard: listeners,
        });
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("[grid {}] reorder drag started on {key:?}", self.id());
        EventResult::StartDrag
    }

    /// Replace the preview offsets for this move frame.
    /// No-op when no drag is in flight; offsets die with the gesture.
    pub fn set_shift_offsets(&self, offsets: HashMap<String, i32>) {
        if let Ok(mut guard) = self.inner.write()
            && let Some(drag) = guard.drag.as_mut()
        {
            drag.offsets = offsets;
            self.dirty.store(true, Ordering::SeqCst);
            log::trace!("[grid {}] shift offsets updated", self.id());
        }
    }

    /// Pointer-up: finish the drag, discarding the offset map.
    pub fn end_reorder(&self, cx: &GestureContext) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        let Some(drag) = guard.drag.take() else {
            return EventResult::Ignored;
        };
        self.dirty.store(true, Ordering::SeqCst);
        cx.push_event(WidgetEvent::new(WidgetEventKind::Reorder, self.id_string()));
        log::debug!("[grid {}] reorder drag on {:?} finished", self.id(), drag.key);
        EventResult::Consumed
    }

    /// The displacement style for a column right now.
    ///
    /// Columns absent from the offset map sit at zero. The transition is
    /// chosen by a strict priority: the disable flag beats everything (snap),
    /// then an active drag gets the slow elastic curve, and idle gets the
    /// quick settle.
    pub fn shift_style(&self, key: &str) -> ShiftStyle {
        let Ok(guard) = self.inner.read() else {
            return ShiftStyle {
                translate_x: 0,
                transition: None,
                will_change: false,
            };
        };

        let translate_x = guard
            .drag
            .as_ref()
            .and_then(|d| d.offsets.get(key))
            .copied()
            .unwrap_or(0);

        let transition = if guard.shift_animation_disabled {
            None
        } else if guard.drag.is_some() {
            Some(DRAG_SHIFT_TRANSITION)
        } else {
            Some(IDLE_SHIFT_TRANSITION)
        };

        ShiftStyle {
            translate_x,
            transition,
            will_change: guard.drag.is_some(),
        }
    }

    /// Suppress shift animation (used around the drop commit frame).
    pub fn set_shift_animation_disabled(&self, disabled: bool) {
        if let Ok(mut guard) = self.inner.write()
            && guard.shift_animation_disabled != disabled
        {
            guard.shift_animation_disabled = disabled;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Whether shift animation is currently suppressed.
    pub fn shift_animation_disabled(&self) -> bool {
        self.inner
            .read()
            .map(|g| g.shift_animation_disabled)
            .unwrap_or(false)
    }
}
