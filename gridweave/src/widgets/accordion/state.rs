//! Accordion widget state.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::widgets::traits::Widget;

/// Unique identifier for an Accordion widget instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AccordionId(usize);

impl AccordionId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for AccordionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__accordion_{}", self.0)
    }
}

/// How many sections may be open at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpandMode {
    /// Opening a section closes the others.
    #[default]
    Single,
    /// Sections open and close independently.
    Multiple,
}

/// One accordion section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub key: String,
    pub title: String,
}

impl Section {
    pub fn new(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
        }
    }
}

/// Internal state for an Accordion widget
#[derive(Debug)]
struct AccordionInner {
    sections: Vec<Section>,
    expanded: HashSet<String>,
    mode: ExpandMode,
    /// Keyboard cursor (focused section index).
    cursor: Option<usize>,
}

/// A container of keyed sections that expand and collapse.
#[derive(Debug)]
pub struct Accordion {
    /// Unique identifier for this accordion instance
    id: AccordionId,
    /// Internal state
    inner: Arc<RwLock<AccordionInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl Accordion {
    /// Create a collapsed accordion from section definitions
    pub fn new(sections: Vec<Section>) -> Self {
        Self {
            id: AccordionId::new(),
            inner: Arc::new(RwLock::new(AccordionInner {
                sections,
                expanded: HashSet::new(),
                mode: ExpandMode::default(),
                cursor: None,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the expand mode
    pub fn with_mode(self, mode: ExpandMode) -> Self {
        if let Ok(mut guard) = self.inner.write() {
            guard.mode = mode;
        }
        self
    }

    /// Get the unique ID for this accordion
    pub fn id(&self) -> AccordionId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the section definitions
    pub fn sections(&self) -> Vec<Section> {
        self.inner
            .read()
            .map(|guard| guard.sections.clone())
            .unwrap_or_default()
    }

    /// Get the expand mode
    pub fn mode(&self) -> ExpandMode {
        self.inner
            .read()
            .map(|guard| guard.mode)
            .unwrap_or_default()
    }

    /// Check if the section with `key` is expanded
    pub fn is_expanded(&self, key: &str) -> bool {
        self.inner
            .read()
            .map(|guard| guard.expanded.contains(key))
            .unwrap_or(false)
    }

    /// Expanded section keys, in section order
    pub fn expanded_keys(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| {
                guard
                    .sections
                    .iter()
                    .filter(|s| guard.expanded.contains(&s.key))
                    .map(|s| s.key.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Expand the section with `key`.
    /// Returns true if anything changed.
    pub fn expand(&self, key: &str) -> bool {
        if let Ok(mut guard) = self.inner.write() {
            if !guard.sections.iter().any(|s| s.key == key) {
                return false;
            }
            if guard.mode == ExpandMode::Single {
                let already_alone =
                    guard.expanded.len() == 1 && guard.expanded.contains(key);
                if already_alone {
                    return false;
                }
                guard.expanded.clear();
            } else if guard.expanded.contains(key) {
                return false;
            }
            guard.expanded.insert(key.to_string());
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    /// Collapse the section with `key`.
    /// Returns true if anything changed.
    pub fn collapse(&self, key: &str) -> bool {
        if let Ok(mut guard) = self.inner.write()
            && guard.expanded.remove(key)
        {
            self.dirty.store(true, Ordering::SeqCst);
            return true;
        }
        false
    }

    /// Toggle the section with `key`.
    /// Returns the new expanded state, or None for an unknown key.
    pub fn toggle(&self, key: &str) -> Option<bool> {
        if self.is_expanded(key) {
            self.collapse(key);
            Some(false)
        } else if self.expand(key) {
            Some(true)
        } else {
            None
        }
    }

    // -------------------------------------------------------------------------
    // Cursor
    // -------------------------------------------------------------------------

    /// Get the keyboard cursor position
    pub fn cursor(&self) -> Option<usize> {
        self.inner.read().ok().and_then(|guard| guard.cursor)
    }

    /// Key of the section under the cursor
    pub fn cursor_key(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|g| g.cursor.and_then(|c| g.sections.get(c).map(|s| s.key.clone())))
    }

    /// Move the cursor up, or onto the first section when unset.
    /// Returns the new position if it changed.
    pub fn cursor_up(&self) -> Option<usize> {
        if let Ok(mut guard) = self.inner.write() {
            if let Some(cursor) = guard.cursor {
                if cursor > 0 {
                    guard.cursor = Some(cursor - 1);
                    self.dirty.store(true, Ordering::SeqCst);
                    return Some(cursor - 1);
                }
            } else if !guard.sections.is_empty() {
                guard.cursor = Some(0);
                self.dirty.store(true, Ordering::SeqCst);
                return Some(0);
            }
        }
        None
    }

    /// Move the cursor down, or onto the first section when unset.
    /// Returns the new position if it changed.
    pub fn cursor_down(&self) -> Option<usize> {
        if let Ok(mut guard) = self.inner.write() {
            let max_index = guard.sections.len().saturating_sub(1);
            if let Some(cursor) = guard.cursor {
                if cursor < max_index {
                    guard.cursor = Some(cursor + 1);
                    self.dirty.store(true, Ordering::SeqCst);
                    return Some(cursor + 1);
                }
            } else if !guard.sections.is_empty() {
                guard.cursor = Some(0);
                self.dirty.store(true, Ordering::SeqCst);
                return Some(0);
            }
        }
        None
    }
}

impl Widget for Accordion {
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

impl Clone for Accordion {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}
