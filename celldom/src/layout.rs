use std::collections::HashMap;

use crate::geometry::Rect;

/// Measured geometry for elements, registered by whatever renders the tree.
///
/// The document layer never computes layout itself; hit testing and gesture
/// controllers read positions from here.
#[derive(Debug, Clone, Default)]
pub struct GeometryMap {
    rects: HashMap<String, Rect>,
}

impl GeometryMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, id: impl Into<String>, rect: Rect) {
        self.rects.insert(id.into(), rect);
    }

    pub fn get(&self, id: &str) -> Option<Rect> {
        self.rects.get(id).copied()
    }

    pub fn remove(&mut self, id: &str) -> Option<Rect> {
        self.rects.remove(id)
    }

    pub fn clear(&mut self) {
        self.rects.clear();
    }

    pub fn len(&self) -> usize {
        self.rects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }
}
