//! Copy handling for the grid selection.
//!
//! On a native copy event the current rectangle is serialized as
//! tab-separated columns and newline-separated rows, reading cell text out of
//! the document by the shared id convention. Guards keep the handler away
//! from copies that belong to someone else: editable fields, ordinary text
//! sweeps elsewhere on the page, and mid-drag states.

use celldom::{CopyEvent, Document};
use thiserror::Error;

use crate::widgets::events::{EventResult, GestureContext, WidgetEvent, WidgetEventKind};
use crate::widgets::traits::Widget;

use super::state::Grid;

/// Id prefix every grid cell element carries.
pub const CELL_ID_PREFIX: &str = "__cell_";

/// The deterministic element id for a cell, composed from stable keys.
/// Any renderer that wants copy to work must honor this exactly.
pub fn cell_id(row_key: &str, column_key: &str) -> String {
    format!("{CELL_ID_PREFIX}{row_key}_{column_key}")
}

/// Failure to hand a payload to the OS clipboard.
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("system clipboard unavailable: {0}")]
    Unavailable(#[from] arboard::Error),
}

/// Push produced copy text to the system clipboard.
pub fn copy_to_system(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}

impl Grid {
    /// Handle a native copy event against `doc`.
    ///
    /// Fills the event's plain-text payload with the selected rectangle and
    /// prevents the default copy, or leaves the event untouched when the copy
    /// is not ours. Missing rows are skipped; a missing cell element reads as
    /// an empty cell; cell-internal newlines collapse to spaces.
    pub fn on_copy(&self, doc: &Document, event: &mut CopyEvent, cx: &GestureContext) -> EventResult {
        // An editable element owns its own copy behavior.
        if doc.focused_editable() {
            return EventResult::Ignored;
        }

        // A real text sweep that never touches a grid cell is not ours to hijack.
        if let Some(selection) = doc.selection()
            && !selection.is_collapsed()
            && !doc.is_within_prefixed(&selection.anchor.element_id, CELL_ID_PREFIX)
            && !doc.is_within_prefixed(&selection.focus.element_id, CELL_ID_PREFIX)
        {
            return EventResult::Ignored;
        }

        let Ok(guard) = self.inner.read() else {
            return EventResult::Ignored;
        };
        let Some(range) = guard.range else {
            return EventResult::Ignored;
        };
        // Mid-drag geometry may be stale; don't export it.
        if guard.drag.is_some() {
            return EventResult::Ignored;
        }

        let mut lines = Vec::with_capacity(range.row_count());
        for row_index in range.rows() {
            let Some(row) = guard.rows.get(row_index) else {
                continue;
            };
            let mut cells = Vec::with_capacity(range.col_count());
            for col_index in range.cols() {
                let Some(column_key) = guard.base_order.get(col_index) else {
                    continue;
                };
                let text = doc
                    .text_content(&cell_id(&row.key, column_key))
                    .unwrap_or_default();
                // Cells are single-line in the exported format
                cells.push(text.replace('\n', " "));
            }
            lines.push(cells.join("\t"));
        }

        event.set_payload(lines.join("\n"));
        event.prevent_default();
        cx.push_event(WidgetEvent::new(WidgetEventKind::Copy, self.id_string()));
        log::debug!(
            "[grid {}] copied {}x{} cells",
            self.id(),
            range.row_count(),
            range.col_count()
        );
        EventResult::Consumed
    }
}
