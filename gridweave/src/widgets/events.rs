//! Widget event types and shared gesture plumbing.
//!
//! Widgets push events to the queue via [`GestureContext::push_event`]; the
//! host event loop drains the queue after each interaction and dispatches
//! whatever handlers it wants.
//!
//! The context also owns the single move/release listener slot shared by all
//! drag gestures. A gesture acquires the slot when it starts and holds the
//! returned [`ListenerGuard`] for its lifetime; releasing happens exactly once
//! on drop, so pointer-up and abnormal teardown take the same path.

use std::sync::{Arc, Mutex};

// =============================================================================
// Widget Event Types
// =============================================================================

/// Identifies which handler to call for a widget event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetEventKind {
    /// Item/section activated (Enter, double-click)
    Activate,
    /// Cursor moved to new position
    CursorMove,
    /// Grid range selection changed
    SelectionChange,
    /// Accordion section expanded
    Expand,
    /// Accordion section collapsed
    Collapse,
    /// Value changed (upload entry state, sheet snap position)
    Change,
    /// Column reorder drag finished
    Reorder,
    /// Column resize drag finished
    Resize,
    /// A copy payload was produced from the grid selection
    Copy,
}

/// A widget event to be dispatched.
#[derive(Debug, Clone)]
pub struct WidgetEvent {
    /// Which kind of event
    pub kind: WidgetEventKind,
    /// Widget ID that triggered the event
    pub widget_id: String,
}

impl WidgetEvent {
    /// Create a new widget event.
    pub fn new(kind: WidgetEventKind, widget_id: impl Into<String>) -> Self {
        Self {
            kind,
            widget_id: widget_id.into(),
        }
    }
}

// =============================================================================
// Event Result
// =============================================================================

/// Result of handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// Event was ignored, try other handlers.
    Ignored,
    /// Event was consumed, stop propagation.
    Consumed,
    /// Event started a drag operation on this widget.
    StartDrag,
}

impl EventResult {
    /// Check if the event was handled (consumed or started drag).
    pub fn is_handled(&self) -> bool {
        !matches!(self, EventResult::Ignored)
    }
}

// =============================================================================
// Gesture context
// =============================================================================

/// The drag gesture kinds that contend for the listener slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Selection,
    Reorder,
    Resize,
    Sheet,
}

#[derive(Debug, Clone, Default)]
struct ListenerSlot(Arc<Mutex<Option<GestureKind>>>);

/// Shared per-surface interaction state, passed explicitly to every widget
/// handler: the pending event queue and the gesture listener slot.
#[derive(Debug, Default)]
pub struct GestureContext {
    events: Mutex<Vec<WidgetEvent>>,
    listeners: ListenerSlot,
}

impl GestureContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an event for the host loop.
    pub fn push_event(&self, event: WidgetEvent) {
        self.events
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(event);
    }

    /// Take all queued events.
    pub fn drain_events(&self) -> Vec<WidgetEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(|e| e.into_inner()))
    }

    /// The gesture currently holding the move/release listeners, if any.
    pub fn active_gesture(&self) -> Option<GestureKind> {
        *self.listeners.0.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Claim the move/release listener slot for a starting gesture.
    ///
    /// Returns None when another gesture already holds the slot; a begin
    /// handler that gets None must ignore the event, which keeps listener
    /// registration idempotent and makes drag gestures mutually exclusive.
    pub fn acquire_listeners(&self, kind: GestureKind) -> Option<ListenerGuard> {
        let mut active = self.listeners.0.lock().unwrap_or_else(|e| e.into_inner());
        if active.is_some() {
            log::debug!("[gesture] {kind:?} denied, {:?} holds the listeners", *active);
            return None;
        }
        *active = Some(kind);
        log::debug!("[gesture] {kind:?} acquired listeners");
        Some(ListenerGuard {
            slot: self.listeners.clone(),
            kind,
        })
    }
}

/// Holds the listener slot for one gesture; dropping releases it.
#[derive(Debug)]
pub struct ListenerGuard {
    slot: ListenerSlot,
    kind: GestureKind,
}

impl ListenerGuard {
    pub fn kind(&self) -> GestureKind {
        self.kind
    }
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        *self.slot.0.lock().unwrap_or_else(|e| e.into_inner()) = None;
        log::debug!("[gesture] {:?} released listeners", self.kind);
    }
}
