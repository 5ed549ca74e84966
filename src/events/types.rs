//! Requests the GUI shell makes of the core.

/// High-level actions queued for the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === List window ===
    /// "Select Window to Hide" button.
    StartSelection,

    /// "Restore Last Window" button.
    RestoreLast,

    /// "Restore All" button or tray menu item.
    RestoreAll,

    /// The list window was closed by the user (hides, does not exit).
    HideGui,

    // === Tray ===
    /// Tray double-click or "Show/Hide" menu item.
    ToggleGui,

    /// Show the About box.
    ShowAbout,

    /// Restore everything and exit.
    Quit,

    // === Global hotkey ===
    /// `WM_HOTKEY` for the cycle hotkey.
    HotkeyPressed,
}

impl AppEvent {
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::StartSelection => "Start window selection",
            AppEvent::RestoreLast => "Restore last hidden window",
            AppEvent::RestoreAll => "Restore all hidden windows",
            AppEvent::HideGui => "Hide list window",
            AppEvent::ToggleGui => "Toggle list window",
            AppEvent::ShowAbout => "Show about box",
            AppEvent::Quit => "Quit",
            AppEvent::HotkeyPressed => "Cycle hotkey pressed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [AppEvent; 8] = [
        AppEvent::StartSelection,
        AppEvent::RestoreLast,
        AppEvent::RestoreAll,
        AppEvent::HideGui,
        AppEvent::ToggleGui,
        AppEvent::ShowAbout,
        AppEvent::Quit,
        AppEvent::HotkeyPressed,
    ];

    #[test]
    fn all_events_have_descriptions() {
        for event in ALL {
            assert!(!event.description().is_empty());
        }
    }
}
