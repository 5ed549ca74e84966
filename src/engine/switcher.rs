//! Application context tying the registry, the selection machine and the
//! input channels together.
//!
//! One `Switcher` exists per process. The entry point owns it; platform
//! callbacks reach it through a narrow slot (see
//! `platform::windows::app::state`). All methods run on the UI thread.

use tracing::{debug, info};

use crate::model::constants::VK_ESCAPE_CODE;
use crate::model::{HiddenWindowRecord, RegistrySnapshot, ScreenPoint, Settings, WindowId};

use super::desktop::Desktop;
use super::errors::InputError;
use super::input::{key_matches, HookChannel, InputHooks};
use super::registry::WindowRegistry;
use super::selection::{Selection, SelectionStateMachine};

/// Settings the core consults at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwitcherOptions {
    /// Key whose release activates the cycled window.
    pub cycle_modifier_vk: u32,
    /// Drop dead records on hotkey press and when the list is shown.
    pub prune_dead: bool,
}

impl Default for SwitcherOptions {
    fn default() -> Self {
        Self::from(&Settings::default())
    }
}

impl From<&Settings> for SwitcherOptions {
    fn from(settings: &Settings) -> Self {
        Self {
            cycle_modifier_vk: settings.cycle_modifier_vk,
            prune_dead: settings.prune_on_hotkey,
        }
    }
}

pub struct Switcher<D, H> {
    desktop: D,
    hooks: H,
    registry: WindowRegistry,
    selection: SelectionStateMachine,
    options: SwitcherOptions,
    gui_visible: bool,
    opened_via_hotkey: bool,
    revision: u64,
}

impl<D: Desktop, H: InputHooks> Switcher<D, H> {
    /// The list window starts visible, like the first launch of the app.
    pub fn new(desktop: D, hooks: H, options: SwitcherOptions) -> Self {
        Self {
            desktop,
            hooks,
            registry: WindowRegistry::new(),
            selection: SelectionStateMachine::new(),
            options,
            gui_visible: true,
            opened_via_hotkey: false,
            revision: 0,
        }
    }

    pub fn registry(&self) -> &WindowRegistry {
        &self.registry
    }

    pub fn snapshot(&self) -> RegistrySnapshot {
        self.registry.snapshot()
    }

    /// Bumped whenever anything the list window shows changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_gui_visible(&self) -> bool {
        self.gui_visible
    }

    pub fn is_selecting(&self) -> bool {
        self.selection.is_selecting()
    }

    pub fn opened_via_hotkey(&self) -> bool {
        self.opened_via_hotkey
    }

    pub fn desktop(&self) -> &D {
        &self.desktop
    }

    pub fn desktop_mut(&mut self) -> &mut D {
        &mut self.desktop
    }

    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Keep `handle` (the list window) out of selection.
    pub fn exclude_window(&mut self, handle: WindowId) {
        self.selection.exclude(handle);
    }

    // === GUI shell ===

    pub fn start_selection(&mut self) -> Result<(), InputError> {
        let was_selecting = self.selection.is_selecting();
        self.selection.start(&mut self.desktop, &mut self.hooks)?;
        if !was_selecting {
            self.touch();
        }
        Ok(())
    }

    pub fn cancel_selection(&mut self) {
        let keep_keyboard = self.opened_via_hotkey;
        if self
            .selection
            .cancel(&mut self.desktop, &mut self.hooks, keep_keyboard)
        {
            self.touch();
        }
    }

    pub fn restore_last(&mut self) -> Option<HiddenWindowRecord> {
        let record = self.registry.restore_last(&mut self.desktop);
        if record.is_some() {
            self.touch();
        }
        record
    }

    pub fn restore_all(&mut self) -> usize {
        let had_records = !self.registry.is_empty();
        let restored = self.registry.restore_all(&mut self.desktop);
        if had_records {
            self.touch();
        }
        restored
    }

    /// Show or hide the list window.
    ///
    /// Hiding is a forced teardown: an active selection is cancelled and the
    /// hotkey session ends, so both channels are released.
    pub fn set_gui_visible(&mut self, visible: bool) {
        if visible {
            if self.options.prune_dead && self.registry.prune_dead(&self.desktop) > 0 {
                self.touch();
            }
        } else {
            self.opened_via_hotkey = false;
            self.cancel_selection();
            self.hooks.uninstall_all();
        }
        if self.gui_visible != visible {
            self.gui_visible = visible;
            self.touch();
        }
    }

    pub fn toggle_gui(&mut self) -> bool {
        self.set_gui_visible(!self.gui_visible);
        self.gui_visible
    }

    // === Global input ===

    /// Primary button pressed anywhere on screen. Returns true if consumed.
    ///
    /// A single click always ends selection mode, hit or miss.
    pub fn on_pointer_down(&mut self, point: ScreenPoint) -> bool {
        if !self.selection.is_selecting() {
            return false;
        }
        let outcome = self
            .selection
            .confirm_at(&mut self.desktop, &mut self.registry, point);
        if matches!(outcome, Selection::Hidden(_)) {
            self.touch();
        }
        self.cancel_selection();
        true
    }

    /// Returns true if the key press must not reach other applications.
    pub fn on_key_down(&mut self, vk: u32) -> bool {
        if self.selection.is_selecting() && vk == VK_ESCAPE_CODE {
            self.cancel_selection();
            return true;
        }
        false
    }

    /// Key released. The release itself is never swallowed.
    pub fn on_key_up(&mut self, vk: u32) -> bool {
        if self.opened_via_hotkey && key_matches(self.options.cycle_modifier_vk, vk) {
            self.finish_hotkey_session();
        }
        false
    }

    /// The global cycle hotkey was pressed.
    ///
    /// The press that opens the list keeps the cursor where it is; every
    /// further press while the list is up advances it by one.
    pub fn on_hotkey(&mut self) -> bool {
        if self.options.prune_dead && self.registry.prune_dead(&self.desktop) > 0 {
            self.touch();
        }
        if self.registry.is_empty() {
            debug!(event = "core.hotkey.ignored", reason = "no hidden windows");
            return false;
        }

        if self.gui_visible {
            let cursor = self.registry.cycle_next();
            debug!(event = "core.hotkey.cycled", cursor = cursor);
            self.touch();
        }
        self.set_gui_visible(true);
        self.opened_via_hotkey = true;
        if let Err(e) = self.hooks.install(HookChannel::Keyboard) {
            // The per-frame check in `tick` still catches the release.
            debug!(event = "core.hotkey.keyboard_unavailable", error = %e);
        }
        true
    }

    /// Per-frame checks, run after native messages and app events.
    pub fn tick(&mut self) {
        if self.selection.is_selecting() {
            self.desktop.set_selection_cursor();
        }
        if self.opened_via_hotkey && !self.hooks.is_key_down(self.options.cycle_modifier_vk) {
            self.finish_hotkey_session();
        }
    }

    /// Restore everything and release all interception. Used on exit.
    pub fn shutdown(&mut self) -> usize {
        self.opened_via_hotkey = false;
        self.cancel_selection();
        self.hooks.uninstall_all();
        let restored = self.restore_all();
        info!(event = "core.switcher.shutdown_completed", restored = restored);
        restored
    }

    fn finish_hotkey_session(&mut self) {
        let index = self.registry.cursor();
        self.registry.activate(&mut self.desktop, index);
        self.set_gui_visible(false);
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
