use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use celldom::{CopyEvent, Document, Element, MouseButton, PointerEvent};
use gridweave::prelude::{Column, Grid, GestureContext, Row, cell_id, copy_to_system};

/// Drives a 2x2 grid with synthetic pointer events: sweep a selection over
/// the whole rectangle, fire a copy event, and print the produced payload.
/// Runs headless; see clipboard_grid.log for the gesture log.
fn main() -> std::io::Result<()> {
    let log_file = File::create("clipboard_grid.log")?;
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let grid = Grid::with_rows(
        vec![Column::new("c1", "First", 8), Column::new("c2", "Second", 8)],
        vec![Row::new("r1"), Row::new("r2")],
    );

    let doc = Document::new(Element::new("root").with_children(vec![
        Element::text(cell_id("r1", "c1"), "A").clickable(true),
        Element::text(cell_id("r1", "c2"), "B").clickable(true),
        Element::text(cell_id("r2", "c1"), "C").clickable(true),
        Element::text(cell_id("r2", "c2"), "D").clickable(true),
    ]));

    let cx = GestureContext::new();

    // Sweep from the top-left cell to the bottom-right one
    grid.on_pointer(
        &PointerEvent::Down {
            x: 1,
            y: 1,
            button: MouseButton::Left,
        },
        &cx,
    );
    grid.on_pointer(&PointerEvent::Move { x: 9, y: 2 }, &cx);
    grid.on_pointer(
        &PointerEvent::Up {
            x: 9,
            y: 2,
            button: MouseButton::Left,
        },
        &cx,
    );

    println!("selected range: {:?}", grid.selection_range());

    let mut event = CopyEvent::new();
    grid.on_copy(&doc, &mut event, &cx);

    match event.payload() {
        Some(payload) => {
            println!("copy payload:\n{payload}");
            match copy_to_system(payload) {
                Ok(()) => println!("(pushed to the system clipboard)"),
                Err(err) => println!("({err})"),
            }
        }
        None => println!("copy produced nothing"),
    }

    for widget_event in cx.drain_events() {
        println!("event: {:?} from {}", widget_event.kind, widget_event.widget_id);
    }

    Ok(())
}
