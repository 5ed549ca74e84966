//! Applies queued `AppEvent`s to the switcher.

use tracing::{debug, info, warn};
use windows::Win32::Foundation::HWND;

use crate::events::AppEvent;
use crate::platform::windows::app::with_switcher;
use crate::platform::windows::ui::dialogs::show_about_dialog;

/// What the main loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    Continue,
    Exit,
}

/// Handle one event. Must be called from the UI thread, outside any
/// switcher borrow.
pub fn dispatch_event(hwnd: HWND, event: AppEvent) -> DispatchOutcome {
    debug!(event = "platform.dispatch.started", app_event = event.description());

    let handled = match event {
        AppEvent::StartSelection => with_switcher(|s| {
            if let Err(e) = s.start_selection() {
                warn!(event = "platform.dispatch.selection_unavailable", error = %e);
            }
        }),
        AppEvent::RestoreLast => with_switcher(|s| {
            if s.restore_last().is_none() {
                debug!(event = "platform.dispatch.nothing_to_restore");
            }
        }),
        AppEvent::RestoreAll => with_switcher(|s| {
            s.restore_all();
        }),
        AppEvent::HideGui => with_switcher(|s| s.set_gui_visible(false)),
        AppEvent::ToggleGui => with_switcher(|s| {
            s.toggle_gui();
        }),
        AppEvent::HotkeyPressed => with_switcher(|s| {
            s.on_hotkey();
        }),
        AppEvent::ShowAbout => {
            // Modal: runs its own message loop, so no borrow may be held here
            show_about_dialog(hwnd);
            Some(())
        }
        AppEvent::Quit => {
            info!(event = "platform.dispatch.quit_requested");
            return DispatchOutcome::Exit;
        }
    };

    if handled.is_none() {
        warn!(
            event = "platform.dispatch.switcher_unavailable",
            app_event = event.description()
        );
    }
    DispatchOutcome::Continue
}
