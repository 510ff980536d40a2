use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use celldom::{hit_test, hit_test_draggable, Document, Element, Rect};

/// Builds a small 2x2 grid document with measured geometry and probes it
/// with a few pointer coordinates. Runs headless; see hit_grid.log for the
/// focus/debug output.
fn main() -> std::io::Result<()> {
    let log_file = File::create("hit_grid.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let root = Element::new("root").with_children(vec![
        Element::new("header").draggable(true).with_children(vec![
            Element::text("col-name", "Name").draggable(true),
            Element::text("col-size", "Size").draggable(true),
        ]),
        Element::new("body").with_children(vec![
            Element::text("__cell_r1_c1", "notes.txt").clickable(true),
            Element::text("__cell_r1_c2", "4 KiB").clickable(true),
            Element::text("__cell_r2_c1", "todo.md").clickable(true),
            Element::text("__cell_r2_c2", "1 KiB").clickable(true),
        ]),
    ]);

    let mut doc = Document::new(root);
    let geometry = doc.geometry_mut();
    geometry.register("root", Rect::new(0, 0, 24, 3));
    geometry.register("header", Rect::new(0, 0, 24, 1));
    geometry.register("col-name", Rect::new(0, 0, 12, 1));
    geometry.register("col-size", Rect::new(12, 0, 12, 1));
    geometry.register("body", Rect::new(0, 1, 24, 2));
    geometry.register("__cell_r1_c1", Rect::new(0, 1, 12, 1));
    geometry.register("__cell_r1_c2", Rect::new(12, 1, 12, 1));
    geometry.register("__cell_r2_c1", Rect::new(0, 2, 12, 1));
    geometry.register("__cell_r2_c2", Rect::new(12, 2, 12, 1));

    for (x, y) in [(3, 0), (14, 0), (3, 1), (14, 2), (30, 5)] {
        let clicked = hit_test(doc.geometry(), doc.root(), x, y);
        let dragged = hit_test_draggable(doc.geometry(), doc.root(), x, y);
        println!("({x:>2},{y}) click -> {clicked:?}, drag -> {dragged:?}");
    }

    if let Some(text) = doc.text_content("__cell_r2_c1") {
        println!("cell r2/c1 reads {text:?}");
    }

    Ok(())
}
