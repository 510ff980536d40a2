//! Capability traits shared by widget handles.

/// Minimal surface every widget handle exposes to a host event loop.
pub trait Widget {
    /// Stable id string, used for element ids and event targeting.
    fn id_string(&self) -> String;

    /// Check if the widget has changed since the last render.
    fn is_dirty(&self) -> bool;

    /// Clear the dirty flag.
    fn clear_dirty(&self);
}
