//! A keyed upload queue with per-entry status.

mod state;

pub use state::{EntryStatus, FileUploader, FileUploaderId, UploadEntry};
