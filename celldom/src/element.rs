/// What an element holds.
#[derive(Debug, Clone, Default)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<Element>),
}

/// A node in the document tree.
///
/// Elements carry identity and interaction flags only; geometry is measured
/// externally and registered in a [`crate::layout::GeometryMap`].
#[derive(Debug, Clone)]
pub struct Element {
    pub id: String,
    pub content: Content,
    /// Element accepts text input (input fields, editable cells mid-edit).
    pub editable: bool,
    pub clickable: bool,
    /// Element may originate a drag gesture (column headers, sheet grips).
    pub draggable: bool,
}

impl Element {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: Content::None,
            editable: false,
            clickable: false,
            draggable: false,
        }
    }

    /// Shorthand for a text leaf.
    pub fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: Content::Text(text.into()),
            editable: false,
            clickable: false,
            draggable: false,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Element>) -> Self {
        self.content = Content::Children(children);
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    pub fn children(&self) -> &[Element] {
        match &self.content {
            Content::Children(children) => children,
            _ => &[],
        }
    }

    /// Concatenated text of this element and all descendants, in tree order.
    pub fn text_content(&self) -> String {
        match &self.content {
            Content::None => String::new(),
            Content::Text(text) => text.clone(),
            Content::Children(children) => {
                let mut out = String::new();
                for child in children {
                    out.push_str(&child.text_content());
                }
                out
            }
        }
    }
}

/// Depth-first search for an element by id.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }
    for child in root.children() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }
    None
}
