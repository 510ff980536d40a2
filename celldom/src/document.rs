use crate::element::{find_element, Element};
use crate::focus::FocusState;
use crate::layout::GeometryMap;
use crate::text_selection::TextSelection;

/// The document: an element tree plus the per-document interaction state
/// (focus, native text selection, measured geometry).
#[derive(Debug)]
pub struct Document {
    root: Element,
    pub focus: FocusState,
    selection: Option<TextSelection>,
    geometry: GeometryMap,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self {
            root,
            focus: FocusState::new(),
            selection: None,
            geometry: GeometryMap::new(),
        }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// Replace the tree, keeping focus/selection/geometry as-is.
    pub fn set_root(&mut self, root: Element) {
        self.root = root;
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        find_element(&self.root, id)
    }

    /// Text content of the element with the given id, DOM-style
    /// (descendants concatenated in tree order).
    pub fn text_content(&self, id: &str) -> Option<String> {
        self.element(id).map(Element::text_content)
    }

    pub fn geometry(&self) -> &GeometryMap {
        &self.geometry
    }

    pub fn geometry_mut(&mut self) -> &mut GeometryMap {
        &mut self.geometry
    }

    // -------------------------------------------------------------------------
    // Native text selection
    // -------------------------------------------------------------------------

    pub fn selection(&self) -> Option<&TextSelection> {
        self.selection.as_ref()
    }

    pub fn set_selection(&mut self, selection: TextSelection) {
        self.selection = Some(selection);
    }

    pub fn clear_selection(&mut self) {
        self.selection = None;
    }

    // -------------------------------------------------------------------------
    // Focus queries
    // -------------------------------------------------------------------------

    /// True when the focused element accepts text input.
    pub fn focused_editable(&self) -> bool {
        self.focus
            .focused()
            .and_then(|id| self.element(id))
            .map(|element| element.editable)
            .unwrap_or(false)
    }

    /// True when the element with `id` is, or sits inside, an element whose
    /// id starts with `prefix`.
    pub fn is_within_prefixed(&self, id: &str, prefix: &str) -> bool {
        within_prefixed(&self.root, id, prefix, false)
    }
}

fn within_prefixed(element: &Element, id: &str, prefix: &str, inherited: bool) -> bool {
    let inside = inherited || element.id.starts_with(prefix);
    if element.id == id {
        return inside;
    }
    element
        .children()
        .iter()
        .any(|child| within_prefixed(child, id, prefix, inside))
}
