//! File uploader widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use crate::widgets::traits::Widget;

/// Unique identifier for a FileUploader widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FileUploaderId(usize);

impl FileUploaderId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for FileUploaderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__uploader_{}", self.0)
    }
}

/// Where an entry is in its upload lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryStatus {
    Queued,
    Uploading { percent: u8 },
    Done,
    Failed { reason: String },
}

/// One file in the upload list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadEntry {
    pub id: Uuid,
    pub name: String,
    pub size: u64,
    pub status: EntryStatus,
}

/// Internal state for a FileUploader widget
#[derive(Debug, Default)]
struct UploaderInner {
    entries: Vec<UploadEntry>,
}

/// A list of files moving through an upload pipeline. The uploader owns
/// list and status state only; actual transfers happen elsewhere and report
/// back through the status setters.
#[derive(Debug)]
pub struct FileUploader {
    /// Unique identifier for this uploader instance
    id: FileUploaderId,
    /// Internal state
    inner: Arc<RwLock<UploaderInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl FileUploader {
    /// Create an empty uploader
    pub fn new() -> Self {
        Self {
            id: FileUploaderId::new(),
            inner: Arc::new(RwLock::new(UploaderInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get the unique ID for this uploader
    pub fn id(&self) -> FileUploaderId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Entry access
    // -------------------------------------------------------------------------

    /// Get all entries, in insertion order
    pub fn entries(&self) -> Vec<UploadEntry> {
        self.inner
            .read()
            .map(|guard| guard.entries.clone())
            .unwrap_or_default()
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.inner.read().map(|guard| guard.entries.len()).unwrap_or(0)
    }

    /// Check if the list is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Find an entry by id
    pub fn entry(&self, id: Uuid) -> Option<UploadEntry> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.entries.iter().find(|e| e.id == id).cloned())
    }

    // -------------------------------------------------------------------------
    // Entry mutation
    // -------------------------------------------------------------------------

    /// Queue a file. Returns the generated entry id.
    pub fn add_file(&self, name: impl Into<String>, size: u64) -> Uuid {
        let id = Uuid::new_v4();
        if let Ok(mut guard) = self.inner.write() {
            guard.entries.push(UploadEntry {
                id,
                name: name.into(),
                size,
                status: EntryStatus::Queued,
            });
            self.dirty.store(true, Ordering::SeqCst);
        }
        id
    }

    /// Remove an entry. Returns true if it existed.
    pub fn remove(&self, id: Uuid) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            let before = guard.entries.len();
            guard.entries.retain(|e| e.id != id);
            if guard.entries.len() != before {
                self.dirty.store(true, Ordering::SeqCst);
                return true;
            }
        }
        false
    }

    /// Report transfer progress for an entry; moves it to Uploading.
    pub fn set_progress(&self, id: Uuid, percent: u8) {
        self.update_status(id, EntryStatus::Uploading {
            percent: percent.min(100),
        });
    }

    /// Mark an entry finished
    pub fn mark_done(&self, id: Uuid) {
        self.update_status(id, EntryStatus::Done);
    }

    /// Mark an entry failed with a reason
    pub fn mark_failed(&self, id: Uuid, reason: impl Into<String>) {
        self.update_status(id, EntryStatus::Failed {
            reason: reason.into(),
        });
    }

    /// Re-queue a failed entry. Returns true if the entry was failed.
    pub fn retry(&self, id: Uuid) -> bool {
        if let Ok(mut guard) = self.inner.write()
            && let Some(entry) = guard.entries.iter_mut().find(|e| e.id == id)
            && matches!(entry.status, EntryStatus::Failed { .. })
        {
            entry.status = EntryStatus::Queued;
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    /// Drop all Done entries
    pub fn clear_finished(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let before = guard.entries.len();
            guard.entries.retain(|e| e.status != EntryStatus::Done);
            if guard.entries.len() != before {
                self.dirty.store(true, Ordering::SeqCst);
            }
        }
    }

    fn update_status(&self, id: Uuid, status: EntryStatus) {
        if let Ok(mut guard) = self.inner.write()
            && let Some(entry) = guard.entries.iter_mut().find(|e| e.id == id)
            && entry.status != status
        {
            entry.status = status;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }
}

impl Default for FileUploader {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for FileUploader {
    fn id_string(&self) -> String {
        self.id.to_string()
    }

    fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst)
    }
}

impl Clone for FileUploader {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
