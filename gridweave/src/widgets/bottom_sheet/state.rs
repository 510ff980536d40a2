//! Bottom sheet widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use celldom::TransitionConfig;
use celldom::transition::EASE;

use crate::widgets::events::{
    EventResult, GestureContext, GestureKind, ListenerGuard, WidgetEvent, WidgetEventKind,
};
use crate::widgets::traits::Widget;

/// Unique identifier for a BottomSheet widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BottomSheetId(usize);

impl BottomSheetId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for BottomSheetId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__sheet_{}", self.0)
    }
}

/// Animation used when the sheet settles onto a snap height.
const SNAP_TRANSITION: TransitionConfig =
    TransitionConfig::new(Duration::from_millis(240), EASE);

#[derive(Debug)]
enum SheetPhase {
    Closed,
    Open {
        snap: usize,
    },
    Dragging {
        start_y: u16,
        start_height: u16,
        current_height: u16,
        _guard: ListenerGuard,
    },
}

/// Internal state for a BottomSheet widget
#[derive(Debug)]
struct SheetInner {
    /// Snap heights in terminal rows, ascending, deduplicated.
    snap_heights: Vec<u16>,
    phase: SheetPhase,
}

/// A sheet anchored to the bottom edge that opens to fixed snap heights and
/// follows a vertical drag, settling on release to the nearest snap or
/// dismissing when dragged low enough.
#[derive(Debug)]
pub struct BottomSheet {
    /// Unique identifier for this sheet instance
    id: BottomSheetId,
    /// Internal state
    inner: Arc<RwLock<SheetInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl BottomSheet {
    /// Create a closed sheet with the given snap heights.
    /// Zero heights are dropped; the rest are sorted and deduplicated.
    pub fn new(snap_heights: Vec<u16>) -> Self {
        let mut snap_heights: Vec<u16> =
            snap_heights.into_iter().filter(|h| *h > 0).collect();
        snap_heights.sort_unstable();
        snap_heights.dedup();
        Self {
            id: BottomSheetId::new(),
            inner: Arc::new(RwLock::new(SheetInner {
                snap_heights,
                phase: SheetPhase::Closed,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this sheet
    pub fn id(&self) -> BottomSheetId {
        self.id
    }

    /// Get the snap heights
    pub fn snap_heights(&self) -> Vec<u16> {
        self.inner
            .read()
            .map(|guard| guard.snap_heights.clone())
            .unwrap_or_default()
    }

    /// Whether the sheet is visible at all
    pub fn is_open(&self) -> bool {
        self.inner
            .read()
            .map(|guard| !matches!(guard.phase, SheetPhase::Closed))
            .unwrap_or(false)
    }

    /// Whether a drag is in flight
    pub fn is_dragging(&self) -> bool {
        self.inner
            .read()
            .map(|guard| matches!(guard.phase, SheetPhase::Dragging { .. }))
            .unwrap_or(false)
    }

    /// Current visible height in terminal rows
    pub fn height(&self) -> u16 {
        self.inner
            .read()
            .map(|guard| match guard.phase {
                SheetPhase::Closed => 0,
                SheetPhase::Open { snap } => {
                    guard.snap_heights.get(snap).copied().unwrap_or(0)
                }
                SheetPhase::Dragging { current_height, .. } => current_height,
            })
            .unwrap_or(0)
    }

    /// Transition for animating toward the current height.
    /// None while dragging (the sheet follows the pointer directly).
    pub fn transition(&self) -> Option<TransitionConfig> {
        if self.is_dragging() {
            None
        } else {
            Some(SNAP_TRANSITION)
        }
    }

    /// Open at the given snap index (clamped to the available snaps).
    /// No-op for a sheet with no snap heights.
    pub fn open(&self, snap: usize) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.snap_heights.is_empty() {
                return;
            }
            let snap = snap.min(guard.snap_heights.len() - 1);
            guard.phase = SheetPhase::Open { snap };
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Close the sheet
    pub fn close(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.phase = SheetPhase::Closed;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Drag gesture
    // -------------------------------------------------------------------------

    /// Pointer-down on the sheet grip while open.
    pub fn begin_drag(&self, y: u16, cx: &GestureContext) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        let SheetPhase::Open { snap } = guard.phase else {
            return EventResult::Ignored;
        };
        let height = guard.snap_heights.get(snap).copied().unwrap_or(0);
        let Some(listeners) = cx.acquire_listeners(GestureKind::Sheet) else {
            return EventResult::Ignored;
        };

        guard.phase = SheetPhase::Dragging {
            start_y: y,
            start_height: height,
            current_height: height,
            _guard: listeners,
        };
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("[sheet {}] drag started at height {height}", self.id);
        EventResult::StartDrag
    }

    /// Pointer-move: the sheet follows the pointer (dragging up grows it).
    pub fn drag_to(&self, y: u16, _cx: &GestureContext) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        let max_height = guard.snap_heights.last().copied().unwrap_or(0);
        let SheetPhase::Dragging {
            start_y,
            start_height,
            ref mut current_height,
            ..
        } = guard.phase
        else {
            return EventResult::Ignored;
        };

        let delta = start_y as i32 - y as i32;
        let next = (start_height as i32 + delta).clamp(0, max_height as i32) as u16;
        if *current_height != next {
            *current_height = next;
            self.dirty.store(true, Ordering::SeqCst);
            log::trace!("[sheet {}] dragged to height {next}", self.id);
        }
        EventResult::Consumed
    }

    /// Pointer-up: settle on the nearest snap height, or dismiss when the
    /// sheet was dragged below half of the smallest snap.
    pub fn release(&self, cx: &GestureContext) -> EventResult {
        let Ok(mut guard) = self.inner.write() else {
            return EventResult::Ignored;
        };
        let SheetPhase::Dragging { current_height, .. } = guard.phase else {
            return EventResult::Ignored;
        };

        let dismiss_below = guard.snap_heights.first().copied().unwrap_or(0) / 2;
        guard.phase = if current_height < dismiss_below.max(1) {
            SheetPhase::Closed
        } else {
            let snap = nearest_snap(&guard.snap_heights, current_height);
            SheetPhase::Open { snap }
        };
        self.dirty.store(true, Ordering::SeqCst);
        cx.push_event(WidgetEvent::new(WidgetEventKind::Change, self.id_string()));
        log::debug!("[sheet {}] released at height {current_height}", self.id);
        EventResult::Consumed
    }
}

/// Index of the snap height closest to `height` (ties go to the lower snap).
fn nearest_snap(snap_heights: &[u16], height: u16) -> usize {
    let mut best = 0;
    let mut best_distance = u16::MAX;
    for (i, snap) in snap_heights.iter().enumerate() {
        let distance = snap.abs_diff(height);
        if distance < best_distance {
            best = i;
            best_distance = distance;
        }
    }
    best
}

impl Widget for BottomSheet {
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

impl Clone for BottomSheet {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
