//! The hidden-window list.
//!
//! A plain top-level window with three buttons, a header and a list box.
//! Closing it only hides it; the process exits from the tray menu. The
//! window procedure lives in `windows_main` and forwards user intent as
//! `AppEvent`s; this module builds the controls and renders snapshots.

use std::cell::RefCell;

use windows::core::{w, Result, PCWSTR};
use windows::Win32::Foundation::{HINSTANCE, HWND, LPARAM, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{GetStockObject, COLOR_WINDOW, DEFAULT_GUI_FONT, HBRUSH};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, GetClientRect, KillTimer, LoadCursorW, MoveWindow, RegisterClassW,
    SendMessageW, SetForegroundWindow, SetTimer, ShowWindow, CS_HREDRAW, CS_VREDRAW,
    CW_USEDEFAULT, HMENU, IDC_ARROW, SW_HIDE, SW_SHOW, WINDOW_EX_STYLE, WINDOW_STYLE, WM_SETFONT,
    WNDCLASSW, WNDPROC, WS_BORDER, WS_CHILD, WS_OVERLAPPEDWINDOW, WS_TABSTOP, WS_VISIBLE,
    WS_VSCROLL,
};

use crate::events::AppEvent;
use crate::model::constants::FRAME_INTERVAL_MS;
use crate::model::settings::key_name;
use crate::model::{RegistrySnapshot, Settings};
use crate::platform::windows::ffi::to_wide;

pub const CLASS_NAME: PCWSTR = w!("TabstashMain");

/// Timer that keeps the main loop turning while the window is visible.
pub const TIMER_FRAME: usize = 1;

// Control IDs
const ID_SELECT_BUTTON: i32 = 201;
const ID_RESTORE_LAST_BUTTON: i32 = 202;
const ID_RESTORE_ALL_BUTTON: i32 = 203;
const ID_HEADER_LABEL: i32 = 204;
const ID_WINDOW_LIST: i32 = 205;

// Button notification
const BN_CLICKED: u32 = 0;

// ListBox messages and styles (from winuser.h)
const LB_ADDSTRING: u32 = 0x0180;
const LB_RESETCONTENT: u32 = 0x0184;
const LB_SETCURSEL: u32 = 0x0186;
const LBS_NOINTEGRALHEIGHT: u32 = 0x0100;

// Layout constants
const MARGIN: i32 = 12;
const MIN_BUTTON_HEIGHT: i32 = 32;
const HEADER_HEIGHT: i32 = 22;

struct Controls {
    select: HWND,
    restore_last: HWND,
    restore_all: HWND,
    header: HWND,
    list: HWND,
}

thread_local! {
    static CONTROLS: RefCell<Option<Controls>> = const { RefCell::new(None) };
}

/// Register the window class and create the (initially hidden) list window.
pub fn create_main_window(wndproc: WNDPROC, settings: &Settings) -> Result<HWND> {
    unsafe {
        let instance: HINSTANCE = GetModuleHandleW(None)?.into();

        let wc = WNDCLASSW {
            style: CS_HREDRAW | CS_VREDRAW,
            lpfnWndProc: wndproc,
            hInstance: instance,
            hCursor: LoadCursorW(None, IDC_ARROW)?,
            hbrBackground: HBRUSH((COLOR_WINDOW.0 + 1) as usize as *mut _),
            lpszClassName: CLASS_NAME,
            ..Default::default()
        };
        RegisterClassW(&wc);

        let hwnd = CreateWindowExW(
            WINDOW_EX_STYLE::default(),
            CLASS_NAME,
            w!("Tabstash"),
            WS_OVERLAPPEDWINDOW,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            settings.window_width,
            settings.window_height,
            None,
            None,
            Some(instance),
            None,
        )?;

        create_controls(hwnd, instance, &header_text(settings));
        layout_controls(hwnd);
        Ok(hwnd)
    }
}

fn header_text(settings: &Settings) -> String {
    format!(
        "Hidden windows (press {} to cycle, release {} to open):",
        settings.hotkey_label(),
        key_name(settings.cycle_modifier_vk)
    )
}

unsafe fn create_controls(hwnd: HWND, instance: HINSTANCE, header: &str) {
    let button = WINDOW_STYLE(WS_CHILD.0 | WS_VISIBLE.0 | WS_TABSTOP.0);
    let controls = Controls {
        select: create_child(
            hwnd,
            instance,
            w!("BUTTON"),
            "Select Window to Hide",
            button,
            ID_SELECT_BUTTON,
        ),
        restore_last: create_child(
            hwnd,
            instance,
            w!("BUTTON"),
            "Restore Last Window",
            button,
            ID_RESTORE_LAST_BUTTON,
        ),
        restore_all: create_child(
            hwnd,
            instance,
            w!("BUTTON"),
            "Restore All",
            button,
            ID_RESTORE_ALL_BUTTON,
        ),
        header: create_child(
            hwnd,
            instance,
            w!("STATIC"),
            header,
            WS_CHILD | WS_VISIBLE,
            ID_HEADER_LABEL,
        ),
        list: create_child(
            hwnd,
            instance,
            w!("LISTBOX"),
            "",
            WINDOW_STYLE(
                WS_CHILD.0 | WS_VISIBLE.0 | WS_VSCROLL.0 | WS_BORDER.0 | LBS_NOINTEGRALHEIGHT,
            ),
            ID_WINDOW_LIST,
        ),
    };
    CONTROLS.with(|c| *c.borrow_mut() = Some(controls));
}

unsafe fn create_child(
    parent: HWND,
    instance: HINSTANCE,
    class: PCWSTR,
    text: &str,
    style: WINDOW_STYLE,
    id: i32,
) -> HWND {
    let text_wide = to_wide(text);
    let child = CreateWindowExW(
        WINDOW_EX_STYLE::default(),
        class,
        PCWSTR(text_wide.as_ptr()),
        style,
        0,
        0,
        0,
        0,
        Some(parent),
        Some(HMENU(id as isize as *mut _)),
        Some(instance),
        None,
    )
    .unwrap_or_default();

    let font = GetStockObject(DEFAULT_GUI_FONT);
    SendMessageW(
        child,
        WM_SETFONT,
        Some(WPARAM(font.0 as usize)),
        Some(LPARAM(1)),
    );
    child
}

/// Position the controls for the current client size (`WM_SIZE`).
pub fn layout_controls(hwnd: HWND) {
    CONTROLS.with(|c| {
        let controls = c.borrow();
        let Some(controls) = controls.as_ref() else {
            return;
        };
        unsafe {
            let mut rect = RECT::default();
            if GetClientRect(hwnd, &mut rect).is_err() {
                return;
            }
            let width = rect.right - rect.left;
            let height = rect.bottom - rect.top;

            let button_w = ((width - 4 * MARGIN) / 3).max(0);
            let button_h = (height / 10).max(MIN_BUTTON_HEIGHT);
            let mut x = MARGIN;
            for button in [controls.select, controls.restore_last, controls.restore_all] {
                let _ = MoveWindow(button, x, MARGIN, button_w, button_h, true);
                x += button_w + MARGIN;
            }

            let header_y = MARGIN * 2 + button_h;
            let _ = MoveWindow(
                controls.header,
                MARGIN,
                header_y,
                (width - 2 * MARGIN).max(0),
                HEADER_HEIGHT,
                true,
            );

            let list_y = header_y + HEADER_HEIGHT + MARGIN / 2;
            let _ = MoveWindow(
                controls.list,
                MARGIN,
                list_y,
                (width - 2 * MARGIN).max(0),
                (height - list_y - MARGIN).max(0),
                true,
            );
        }
    });
}

/// Map a button click to an event.
pub fn command_event(control_id: i32, notification: u32) -> Option<AppEvent> {
    if notification != BN_CLICKED {
        return None;
    }
    match control_id {
        ID_SELECT_BUTTON => Some(AppEvent::StartSelection),
        ID_RESTORE_LAST_BUTTON => Some(AppEvent::RestoreLast),
        ID_RESTORE_ALL_BUTTON => Some(AppEvent::RestoreAll),
        _ => None,
    }
}

/// Replace the list contents and highlight the cycle cursor.
pub fn render_list(snapshot: &RegistrySnapshot) {
    let Some(list) = CONTROLS.with(|c| c.borrow().as_ref().map(|c| c.list)) else {
        return;
    };
    unsafe {
        SendMessageW(list, LB_RESETCONTENT, None, None);
        if snapshot.is_empty() {
            let text = to_wide("No hidden windows");
            SendMessageW(list, LB_ADDSTRING, None, Some(LPARAM(text.as_ptr() as isize)));
            return;
        }
        for line in snapshot.numbered_lines() {
            let text = to_wide(&line);
            SendMessageW(list, LB_ADDSTRING, None, Some(LPARAM(text.as_ptr() as isize)));
        }
        SendMessageW(list, LB_SETCURSEL, Some(WPARAM(snapshot.cursor)), None);
    }
}

/// Show (and focus) or hide the window, starting or stopping the frame timer.
pub fn set_main_window_visible(hwnd: HWND, visible: bool) {
    unsafe {
        if visible {
            let _ = ShowWindow(hwnd, SW_SHOW);
            let _ = SetForegroundWindow(hwnd);
            SetTimer(Some(hwnd), TIMER_FRAME, FRAME_INTERVAL_MS, None);
        } else {
            let _ = KillTimer(Some(hwnd), TIMER_FRAME);
            let _ = ShowWindow(hwnd, SW_HIDE);
        }
    }
}

/// Drop the cached control handles (the window is being destroyed).
pub fn release_controls() {
    CONTROLS.with(|c| c.borrow_mut().take());
}
