pub mod widgets;

pub mod prelude {
    pub use crate::widgets::accordion::{Accordion, AccordionId, ExpandMode, Section};
    pub use crate::widgets::bottom_sheet::{BottomSheet, BottomSheetId};
    pub use crate::widgets::column::{Column, ColumnLayout};
    pub use crate::widgets::events::{
        EventResult, GestureContext, GestureKind, ListenerGuard, WidgetEvent, WidgetEventKind,
    };
    pub use crate::widgets::file_uploader::{
        EntryStatus, FileUploader, FileUploaderId, UploadEntry,
    };
    pub use crate::widgets::grid::{
        CELL_ID_PREFIX, CellPos, CellRange, ClipboardError, Grid, GridId, Row, ShiftStyle, cell_id,
        copy_to_system,
    };
    pub use crate::widgets::table::{Table, TableId, TableLayout, WidthClamp};
    pub use crate::widgets::traits::Widget;
}
