use crate::element::Element;
use crate::layout::GeometryMap;

/// Find the deepest clickable element at the given coordinates.
/// Returns None if no clickable element contains the point.
pub fn hit_test(geometry: &GeometryMap, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_by(geometry, root, x, y, &|element| element.clickable)
}

/// Find any element (clickable or not) at the given coordinates.
/// Returns the deepest element containing the point.
pub fn hit_test_any(geometry: &GeometryMap, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_by(geometry, root, x, y, &|_| true)
}

/// Find the deepest draggable element at the given coordinates.
pub fn hit_test_draggable(geometry: &GeometryMap, root: &Element, x: u16, y: u16) -> Option<String> {
    hit_test_by(geometry, root, x, y, &|element| element.draggable)
}

fn hit_test_by(
    geometry: &GeometryMap,
    element: &Element,
    x: u16,
    y: u16,
    accept: &dyn Fn(&Element) -> bool,
) -> Option<String> {
    let rect = geometry.get(&element.id)?;

    if !rect.contains(x, y) {
        return None;
    }

    // Check children in reverse order (last rendered = on top)
    for child in element.children().iter().rev() {
        if let Some(id) = hit_test_by(geometry, child, x, y, accept) {
            return Some(id);
        }
    }

    if accept(element) {
        Some(element.id.clone())
    } else {
        None
    }
}
