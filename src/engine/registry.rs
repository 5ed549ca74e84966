//! Ordered collection of windows hidden from the task switcher.
//!
//! Insertion order is cycle order, and `restore_last` pops from the tail.
//! Every record holds a weak handle; liveness is re-checked through the
//! `Desktop` before any OS call.

use tracing::{debug, info, warn};

use crate::model::{HiddenWindowRecord, RegistrySnapshot, WindowId};

use super::desktop::Desktop;
use super::errors::RegistryError;

#[derive(Debug, Default)]
pub struct WindowRegistry {
    records: Vec<HiddenWindowRecord>,
    cursor: usize,
}

impl WindowRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the window armed for activation.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn records(&self) -> &[HiddenWindowRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&HiddenWindowRecord> {
        self.records.get(index)
    }

    pub fn contains(&self, handle: WindowId) -> bool {
        self.records.iter().any(|r| r.handle == handle)
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            titles: self.records.iter().map(|r| r.title.clone()).collect(),
            cursor: self.cursor,
        }
    }

    /// Remove `handle` from the switcher and record it.
    ///
    /// The record is only appended once the style change succeeded.
    pub fn hide<D: Desktop + ?Sized>(
        &mut self,
        desktop: &mut D,
        handle: WindowId,
        title: impl Into<String>,
    ) -> Result<&HiddenWindowRecord, RegistryError> {
        if self.contains(handle) {
            return Err(RegistryError::AlreadyHidden { handle });
        }

        let style = desktop.ex_style(handle).hidden_from_switcher();
        desktop
            .set_ex_style(handle, style)
            .map_err(|source| RegistryError::Attribute { handle, source })?;

        let record = HiddenWindowRecord::new(handle, title);
        info!(
            event = "core.registry.hide_completed",
            handle = ?handle,
            title = %record.title,
            hidden = self.records.len() + 1
        );
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Pop the most recently hidden window and put it back in the switcher.
    pub fn restore_last<D: Desktop + ?Sized>(
        &mut self,
        desktop: &mut D,
    ) -> Option<HiddenWindowRecord> {
        let record = self.records.pop()?;
        let restored = restore_record(desktop, &record);
        self.clamp_cursor();
        info!(
            event = "core.registry.restore_last_completed",
            title = %record.title,
            restored = restored,
            remaining = self.records.len()
        );
        Some(record)
    }

    /// Restore every live window and clear the registry.
    ///
    /// Returns how many windows actually had their style restored.
    pub fn restore_all<D: Desktop + ?Sized>(&mut self, desktop: &mut D) -> usize {
        let restored = self
            .records
            .iter()
            .filter(|record| restore_record(desktop, record))
            .count();
        let dropped = self.records.len() - restored;
        self.records.clear();
        self.cursor = 0;
        info!(
            event = "core.registry.restore_all_completed",
            restored = restored,
            skipped = dropped
        );
        restored
    }

    /// Advance the cursor, wrapping at the end. Stays 0 when empty.
    pub fn cycle_next(&mut self) -> usize {
        if self.records.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = (self.cursor + 1) % self.records.len();
        }
        self.cursor
    }

    /// Bring the window at `index` back to the foreground, maximized.
    ///
    /// Destroyed windows are skipped and keep their record.
    pub fn activate<D: Desktop + ?Sized>(&self, desktop: &mut D, index: usize) -> bool {
        let Some(record) = self.records.get(index) else {
            return false;
        };
        if !desktop.is_window(record.handle) {
            debug!(
                event = "core.registry.activate_skipped",
                handle = ?record.handle,
                title = %record.title,
                reason = "window destroyed"
            );
            return false;
        }
        desktop.show_maximized_foreground(record.handle);
        info!(
            event = "core.registry.activate_completed",
            index = index,
            title = %record.title
        );
        true
    }

    /// Drop records whose window no longer exists.
    pub fn prune_dead<D: Desktop + ?Sized>(&mut self, desktop: &D) -> usize {
        let before = self.records.len();
        self.records.retain(|r| desktop.is_window(r.handle));
        let pruned = before - self.records.len();
        if pruned > 0 {
            self.clamp_cursor();
            debug!(event = "core.registry.pruned", pruned = pruned);
        }
        pruned
    }

    fn clamp_cursor(&mut self) {
        if self.records.is_empty() {
            self.cursor = 0;
        } else if self.cursor >= self.records.len() {
            self.cursor = self.records.len() - 1;
        }
    }
}

fn restore_record<D: Desktop + ?Sized>(desktop: &mut D, record: &HiddenWindowRecord) -> bool {
    if !desktop.is_window(record.handle) {
        debug!(
            event = "core.registry.restore_skipped",
            handle = ?record.handle,
            title = %record.title,
            reason = "window destroyed"
        );
        return false;
    }
    let style = desktop.ex_style(record.handle).restored_to_switcher();
    match desktop.set_ex_style(record.handle, style) {
        Ok(()) => true,
        Err(e) => {
            warn!(
                event = "core.registry.restore_failed",
                handle = ?record.handle,
                error = %e
            );
            false
        }
    }
}
