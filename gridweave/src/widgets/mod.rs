//! Headless widget state machines.
//!
//! Widgets here own interaction state only; rendering is the host's concern.
//! Each widget is a cheaply clonable handle over shared inner state with a
//! dirty flag, and pushes [`events::WidgetEvent`]s onto a [`events::GestureContext`]
//! for the host event loop to drain.

pub mod accordion;
pub mod bottom_sheet;
pub mod column;
pub mod events;
pub mod file_uploader;
pub mod grid;
pub mod table;
pub mod traits;

pub use accordion::{Accordion, AccordionId, ExpandMode, Section};
pub use bottom_sheet::{BottomSheet, BottomSheetId};
pub use column::{Column, ColumnLayout};
pub use events::{EventResult, GestureContext, GestureKind, ListenerGuard, WidgetEvent, WidgetEventKind};
pub use file_uploader::{EntryStatus, FileUploader, FileUploaderId, UploadEntry};
pub use grid::{CellPos, CellRange, Grid, GridId, Row, ShiftStyle};
pub use table::{Table, TableId, TableLayout, WidthClamp};
pub use traits::Widget;
