//! The resizable headless table: column widths addressed by stable key, with
//! a pointer-driven resize gesture and persistable layout snapshots.

mod events;
mod layout;
mod state;

pub use layout::{ColumnWidth, TableLayout};
pub use state::{Table, TableId, WidthClamp};
