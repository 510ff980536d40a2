//! Persistable column-width snapshots.

use serde::{Deserialize, Serialize};

use super::state::Table;

/// One column's saved width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnWidth {
    pub key: String,
    pub width: u16,
}

/// A snapshot of column widths, keyed so it survives reordering and column
/// set changes between save and restore.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableLayout {
    pub widths: Vec<ColumnWidth>,
}

impl Table {
    /// Snapshot the current column widths.
    pub fn layout(&self) -> TableLayout {
        TableLayout {
            widths: self
                .columns()
                .into_iter()
                .map(|c| ColumnWidth {
                    key: c.key,
                    width: c.width,
                })
                .collect(),
        }
    }

    /// Restore widths from a snapshot. Entries for unknown keys are ignored;
    /// columns without an entry keep their width.
    pub fn apply_layout(&self, layout: &TableLayout) {
        for entry in &layout.widths {
            self.set_column_width(&entry.key, entry.width);
        }
    }
}
