/// One endpoint of a native text selection: an element plus a character
/// offset into its text content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPoint {
    pub element_id: String,
    pub offset: usize,
}

impl SelectionPoint {
    pub fn new(element_id: impl Into<String>, offset: usize) -> Self {
        Self {
            element_id: element_id.into(),
            offset,
        }
    }
}

/// A native text selection sweeping from `anchor` to `focus`.
///
/// This models the selection the platform maintains when the user sweeps over
/// ordinary text, independent of any grid range selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSelection {
    pub anchor: SelectionPoint,
    pub focus: SelectionPoint,
}

impl TextSelection {
    pub fn new(anchor: SelectionPoint, focus: SelectionPoint) -> Self {
        Self { anchor, focus }
    }

    /// A caret with no extent.
    pub fn caret(point: SelectionPoint) -> Self {
        Self {
            anchor: point.clone(),
            focus: point,
        }
    }

    /// True when both endpoints coincide (a bare caret, nothing swept).
    pub fn is_collapsed(&self) -> bool {
        self.anchor == self.focus
    }
}
