use celldom::{hit_test, hit_test_any, hit_test_draggable, Element, GeometryMap, Rect};

fn create_geometry(elements: &[(&str, Rect)]) -> GeometryMap {
    let mut geometry = GeometryMap::new();
    for (id, rect) in elements {
        geometry.register(id.to_string(), *rect);
    }
    geometry
}

#[test]
fn test_hit_test_point_inside() {
    let root = Element::new("root").clickable(true).with_children(vec![
        Element::text("btn", "Click me").clickable(true),
    ]);

    let geometry = create_geometry(&[
        ("root", Rect::new(0, 0, 100, 50)),
        ("btn", Rect::new(10, 10, 30, 3)),
    ]);

    // Inside btn
    assert_eq!(hit_test(&geometry, &root, 15, 11), Some("btn".to_string()));

    // Inside root but outside btn
    assert_eq!(hit_test(&geometry, &root, 5, 5), Some("root".to_string()));

    // Outside everything
    assert_eq!(hit_test(&geometry, &root, 150, 150), None);
}

#[test]
fn test_hit_test_overlapping_elements() {
    // Later children are "on top"
    let root = Element::new("root").with_children(vec![
        Element::new("bottom").clickable(true),
        Element::new("top").clickable(true),
    ]);

    let geometry = create_geometry(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("bottom", Rect::new(10, 10, 50, 50)),
        ("top", Rect::new(10, 10, 50, 50)),
    ]);

    assert_eq!(hit_test(&geometry, &root, 20, 20), Some("top".to_string()));
}

#[test]
fn test_hit_test_skips_non_clickable() {
    let root = Element::new("root").with_children(vec![Element::text("label", "plain")]);

    let geometry = create_geometry(&[
        ("root", Rect::new(0, 0, 100, 100)),
        ("label", Rect::new(0, 0, 10, 1)),
    ]);

    assert_eq!(hit_test(&geometry, &root, 2, 0), None);
    assert_eq!(
        hit_test_any(&geometry, &root, 2, 0),
        Some("label".to_string())
    );
}

#[test]
fn test_hit_test_unregistered_geometry() {
    let root = Element::new("root").clickable(true);
    let geometry = GeometryMap::new();

    // No measured rect means no hit
    assert_eq!(hit_test(&geometry, &root, 0, 0), None);
}

#[test]
fn test_hit_test_draggable_header() {
    let root = Element::new("root").clickable(true).with_children(vec![
        Element::new("header").draggable(true),
        Element::new("body").clickable(true),
    ]);

    let geometry = create_geometry(&[
        ("root", Rect::new(0, 0, 80, 24)),
        ("header", Rect::new(0, 0, 80, 1)),
        ("body", Rect::new(0, 1, 80, 23)),
    ]);

    assert_eq!(
        hit_test_draggable(&geometry, &root, 5, 0),
        Some("header".to_string())
    );
    assert_eq!(hit_test_draggable(&geometry, &root, 5, 10), None);
}
