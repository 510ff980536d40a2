//! A bottom sheet with snap heights and a drag-to-snap/dismiss gesture.

mod state;

pub use state::{BottomSheet, BottomSheetId};
