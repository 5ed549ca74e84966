//! Windows entry point and message loop.
//!
//! One thread runs everything. Each loop iteration:
//! 1. blocks for the next native message, then drains the rest;
//! 2. dispatches queued `AppEvent`s;
//! 3. runs the switcher's per-frame checks and syncs the list window.
//!
//! While the list window is visible a frame timer wakes the loop every
//! frame; while it is hidden the loop sleeps in `GetMessageW`.

use tracing::{error, info, warn};
use windows::Win32::Foundation::{HWND, LPARAM, LRESULT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{
    DefWindowProcW, DestroyWindow, DispatchMessageW, GetMessageW, PeekMessageW, PostQuitMessage,
    TranslateMessage, MSG, PM_REMOVE, WM_CLOSE, WM_COMMAND, WM_DESTROY, WM_HOTKEY, WM_QUIT,
    WM_SIZE, WM_TIMER,
};

use tabstash::engine::{Switcher, SwitcherOptions};
use tabstash::events::{self, AppEvent};
use tabstash::logging::init_logging;
use tabstash::model::constants::HOTKEY_CYCLE_ID;
use tabstash::model::Settings;
use tabstash::platform::windows::app::{install_switcher, take_switcher, with_switcher};
use tabstash::platform::windows::ffi::{to_window_id, Win32Desktop};
use tabstash::platform::windows::handlers::{dispatch_event, DispatchOutcome};
use tabstash::platform::windows::input::{
    register_cycle_hotkey, unregister_cycle_hotkey, Win32Hooks,
};
use tabstash::platform::windows::storage::{config_path, load_settings};
use tabstash::platform::windows::ui::main_window::{
    self, command_event, create_main_window, layout_controls, render_list, TIMER_FRAME,
};
use tabstash::platform::windows::ui::tray::{self, WM_TRAYICON};

/// Main entry point for Windows.
pub fn run() {
    if let Err(e) = run_app() {
        error!(event = "app.startup_failed", error = %e);
        eprintln!("Tabstash error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> windows::core::Result<()> {
    let (settings, config_error) = match load_settings() {
        Ok(settings) => (settings, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    init_logging(&settings.log_level);
    if let Some(e) = config_error {
        warn!(event = "app.config_load_failed", error = %e, "using defaults");
    }
    info!(
        event = "app.startup",
        version = env!("CARGO_PKG_VERSION"),
        config = %config_path().display(),
        hotkey = %settings.hotkey_label()
    );

    events::init_event_bus();

    let hwnd = create_main_window(Some(wndproc), &settings)?;

    let switcher = Switcher::new(
        Win32Desktop::new(),
        Win32Hooks::new(),
        SwitcherOptions::from(&settings),
    );
    if install_switcher(switcher).is_err() {
        warn!(event = "app.switcher_already_installed");
    }
    with_switcher(|s| s.exclude_window(to_window_id(hwnd)));

    // A failed registration only disables cycling
    let hotkey_registered = register_cycle_hotkey(hwnd, &settings).is_ok();

    tray::install_tray_icon(hwnd);

    let mut view = ViewState::default();
    view.sync(hwnd);

    run_message_loop(hwnd, &mut view);

    // Teardown: restore every hidden window before anything else goes away
    if let Some(mut switcher) = take_switcher() {
        switcher.shutdown();
    }
    if hotkey_registered {
        unregister_cycle_hotkey(hwnd);
    }
    tray::remove_tray_icon();
    main_window::release_controls();
    unsafe {
        let _ = DestroyWindow(hwnd);
    }

    info!(event = "app.exit");
    Ok(())
}

fn run_message_loop(hwnd: HWND, view: &mut ViewState) {
    let mut msg = MSG::default();
    loop {
        unsafe {
            let ret = GetMessageW(&mut msg, None, 0, 0);
            if ret.0 == 0 || ret.0 == -1 {
                return;
            }
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);

            while PeekMessageW(&mut msg, None, 0, 0, PM_REMOVE).as_bool() {
                if msg.message == WM_QUIT {
                    return;
                }
                let _ = TranslateMessage(&msg);
                DispatchMessageW(&msg);
            }
        }

        for event in events::drain_events() {
            if dispatch_event(hwnd, event) == DispatchOutcome::Exit {
                return;
            }
        }

        with_switcher(|s| s.tick());
        view.sync(hwnd);
    }
}

/// What the list window and tray currently show.
#[derive(Default)]
struct ViewState {
    revision: Option<u64>,
    visible: bool,
}

impl ViewState {
    /// Bring the window in line with the switcher. Runs outside any
    /// switcher borrow, since showing a window re-enters `wndproc`.
    fn sync(&mut self, hwnd: HWND) {
        let Some((revision, visible, snapshot)) = with_switcher(|s| {
            (s.revision(), s.is_gui_visible(), s.snapshot())
        }) else {
            return;
        };

        if self.revision != Some(revision) {
            render_list(&snapshot);
            tray::update_tray_tooltip(snapshot.titles.len());
            self.revision = Some(revision);
        }
        if self.visible != visible {
            main_window::set_main_window_visible(hwnd, visible);
            self.visible = visible;
        }
    }
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    unsafe {
        match msg {
            WM_SIZE => {
                layout_controls(hwnd);
                LRESULT(0)
            }

            // Only wakes the main loop
            WM_TIMER if wparam.0 == TIMER_FRAME => LRESULT(0),

            WM_HOTKEY => {
                if wparam.0 as i32 == HOTKEY_CYCLE_ID {
                    events::publish(AppEvent::HotkeyPressed);
                }
                LRESULT(0)
            }

            // Closing the list only hides it
            WM_CLOSE => {
                events::publish(AppEvent::HideGui);
                LRESULT(0)
            }

            WM_DESTROY => {
                PostQuitMessage(0);
                LRESULT(0)
            }

            msg if msg == WM_TRAYICON => {
                let notification = (lparam.0 as u32) & 0xFFFF;
                if let Some(event) = tray::handle_tray_message(hwnd, notification) {
                    events::publish(event);
                }
                LRESULT(0)
            }

            WM_COMMAND => {
                let id = (wparam.0 & 0xFFFF) as u32;
                let notification = ((wparam.0 >> 16) & 0xFFFF) as u32;
                let event = if lparam.0 == 0 {
                    // Menus send a zero control handle
                    tray::menu_command_event(id)
                } else {
                    command_event(id as i32, notification)
                };
                if let Some(event) = event {
                    events::publish(event);
                }
                LRESULT(0)
            }

            _ => DefWindowProcW(hwnd, msg, wparam, lparam),
        }
    }
}
