//! "Pick a window" mode.
//!
//! `Idle` -> `start` -> `Selecting` -> (`cancel` | click) -> `Idle`.
//! Entering the mode installs both hook channels; leaving it removes them
//! and puts the original cursor back.

use tracing::{debug, info, warn};

use crate::model::{CursorId, HiddenWindowRecord, ScreenPoint, WindowId};

use super::desktop::{is_switchable, Desktop};
use super::errors::{InputError, RegistryError};
use super::input::{HookChannel, InputHooks};
use super::registry::WindowRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    #[default]
    Idle,
    Selecting,
}

/// Outcome of a click while selecting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Not in selection mode; the click was not ours.
    NotSelecting,
    /// Nothing under the pointer.
    NoWindow,
    /// The root window is not an Alt+Tab window.
    Ineligible(WindowId),
    /// The root window belongs to this application.
    OwnWindow(WindowId),
    /// Switchable but without a caption to list it by.
    Untitled(WindowId),
    /// The registry refused the window (duplicate or style update failure).
    Rejected(RegistryError),
    Hidden(HiddenWindowRecord),
}

#[derive(Debug, Default)]
pub struct SelectionStateMachine {
    state: SelectionState,
    saved_cursor: Option<CursorId>,
    excluded: Vec<WindowId>,
}

impl SelectionStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn is_selecting(&self) -> bool {
        self.state == SelectionState::Selecting
    }

    /// Never hide `handle`, even if it qualifies.
    pub fn exclude(&mut self, handle: WindowId) {
        if !self.excluded.contains(&handle) {
            self.excluded.push(handle);
        }
    }

    /// Enter selection mode.
    ///
    /// Without the pointer channel a selection can never complete, so that
    /// failure leaves the machine `Idle`. A missing keyboard channel only
    /// loses Escape-to-cancel and is tolerated.
    pub fn start<D, H>(&mut self, desktop: &mut D, hooks: &mut H) -> Result<(), InputError>
    where
        D: Desktop + ?Sized,
        H: InputHooks + ?Sized,
    {
        if self.is_selecting() {
            return Ok(());
        }

        if let Err(e) = hooks.install(HookChannel::Pointer) {
            warn!(event = "core.selection.start_failed", error = %e);
            return Err(e);
        }
        if let Err(e) = hooks.install(HookChannel::Keyboard) {
            warn!(
                event = "core.selection.keyboard_unavailable",
                error = %e,
                "Escape will not cancel selection"
            );
        }

        self.saved_cursor = Some(desktop.current_cursor());
        desktop.set_selection_cursor();
        self.state = SelectionState::Selecting;
        info!(event = "core.selection.started");
        Ok(())
    }

    /// Leave selection mode. Returns false if it was already idle.
    ///
    /// `keep_keyboard` is set when the keyboard channel is still needed for
    /// the hotkey modifier release.
    pub fn cancel<D, H>(&mut self, desktop: &mut D, hooks: &mut H, keep_keyboard: bool) -> bool
    where
        D: Desktop + ?Sized,
        H: InputHooks + ?Sized,
    {
        if !self.is_selecting() {
            return false;
        }

        if let Some(cursor) = self.saved_cursor.take() {
            desktop.set_cursor(cursor);
        }
        hooks.uninstall(HookChannel::Pointer);
        if !keep_keyboard {
            hooks.uninstall(HookChannel::Keyboard);
        }
        self.state = SelectionState::Idle;
        info!(event = "core.selection.ended");
        true
    }

    /// Try to hide the window under `point`.
    ///
    /// Does not change the selection state; the caller decides whether a
    /// click ends the mode.
    pub fn confirm_at<D>(
        &self,
        desktop: &mut D,
        registry: &mut WindowRegistry,
        point: ScreenPoint,
    ) -> Selection
    where
        D: Desktop + ?Sized,
    {
        if !self.is_selecting() {
            return Selection::NotSelecting;
        }

        let Some(hit) = desktop.window_at(point) else {
            debug!(event = "core.selection.no_window", x = point.x, y = point.y);
            return Selection::NoWindow;
        };
        let root = desktop.root(hit);

        if self.excluded.contains(&root) {
            debug!(event = "core.selection.own_window", handle = ?root);
            return Selection::OwnWindow(root);
        }

        if !is_switchable(&*desktop, root) {
            debug!(
                event = "core.selection.ineligible",
                handle = ?root,
                "Window is not in the Alt+Tab list"
            );
            return Selection::Ineligible(root);
        }

        let title = desktop.title(root);
        if title.is_empty() {
            debug!(event = "core.selection.untitled", handle = ?root);
            return Selection::Untitled(root);
        }

        match registry.hide(desktop, root, title) {
            Ok(record) => Selection::Hidden(record.clone()),
            Err(e) => {
                warn!(event = "core.selection.hide_rejected", error = %e);
                Selection::Rejected(e)
            }
        }
    }
}
