//! Hidden-window records and the read-only view the GUI renders.

use super::window::WindowId;

/// A window currently removed from the task switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenWindowRecord {
    /// Weak reference to the OS window.
    pub handle: WindowId,
    /// Caption captured when the window was hidden. Never re-queried.
    pub title: String,
}

impl HiddenWindowRecord {
    pub fn new(handle: WindowId, title: impl Into<String>) -> Self {
        Self {
            handle,
            title: title.into(),
        }
    }
}

/// Ordered titles plus the cycle cursor, for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrySnapshot {
    pub titles: Vec<String>,
    pub cursor: usize,
}

impl RegistrySnapshot {
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    /// Display lines in the form `"1. Title"`.
    pub fn numbered_lines(&self) -> Vec<String> {
        self.titles
            .iter()
            .enumerate()
            .map(|(i, title)| format!("{}. {}", i + 1, title))
            .collect()
    }
}
