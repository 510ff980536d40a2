//! The grid widget: rectangular range selection, column drag-to-reorder
//! preview, and copy-to-clipboard over a cell document.

mod clipboard;
mod events;
mod range;
mod reorder;
mod state;

pub use clipboard::{CELL_ID_PREFIX, ClipboardError, cell_id, copy_to_system};
pub use range::{CellPos, CellRange};
pub use reorder::ShiftStyle;
pub use state::{Grid, GridId, Row};
