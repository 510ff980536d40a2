use std::collections::HashMap;
use std::fs::File;

use simplelog::{Config, LevelFilter, WriteLogger};

use gridweave::prelude::{Column, Grid, GestureContext, Row};

/// Simulates a header drag and prints the shift style each column would
/// render with in every phase of the gesture.
fn main() -> std::io::Result<()> {
    let log_file = File::create("reorder_shift.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let grid = Grid::with_rows(
        vec![
            Column::new("name", "Name", 12),
            Column::new("size", "Size", 6),
            Column::new("kind", "Kind", 8),
        ],
        vec![Row::new("r1")],
    );
    let cx = GestureContext::new();

    let dump = |label: &str| {
        println!("-- {label}");
        for column in grid.columns() {
            let style = grid.shift_style(&column.key);
            println!(
                "   {:>4}: translate_x={:+} transition={:?} will_change={}",
                column.key, style.translate_x, style.transition, style.will_change
            );
        }
    };

    dump("idle");

    grid.begin_reorder("name", &cx);
    // Pretend "name" was dragged one slot to the right: "size" shifts left
    // into the vacated space while "name" follows the pointer.
    grid.set_shift_offsets(HashMap::from([
        ("name".to_string(), 6),
        ("size".to_string(), -12),
    ]));
    dump("mid-drag");

    // Commit frame: suppress animation so the drop doesn't animate twice
    grid.set_shift_animation_disabled(true);
    dump("commit frame (animation disabled)");

    grid.end_reorder(&cx);
    grid.set_shift_animation_disabled(false);
    dump("after drop");

    Ok(())
}
