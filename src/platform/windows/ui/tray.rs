//! System tray (notification area) icon for Windows.
//!
//! Double-click toggles the list window; right-click opens a menu whose
//! commands arrive as `WM_COMMAND` on the owning window.

use std::cell::RefCell;

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{HWND, POINT};
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Shell::{
    Shell_NotifyIconW, NIF_ICON, NIF_MESSAGE, NIF_TIP, NIM_ADD, NIM_DELETE, NIM_MODIFY,
    NOTIFYICONDATAW,
};
use windows::Win32::UI::WindowsAndMessaging::{
    AppendMenuW, CreatePopupMenu, DestroyMenu, GetCursorPos, LoadIconW, LoadImageW,
    SetForegroundWindow, TrackPopupMenu, HICON, HMENU, IDI_APPLICATION, IMAGE_ICON,
    LR_DEFAULTSIZE, LR_SHARED, MF_SEPARATOR, MF_STRING, TPM_BOTTOMALIGN, TPM_LEFTALIGN,
    TPM_RIGHTBUTTON, WM_USER,
};

use crate::events::AppEvent;

// Custom message for tray icon events
pub const WM_TRAYICON: u32 = WM_USER + 1;

// Mouse notifications carried in the low word of lParam
const TRAY_LBUTTONDBLCLK: u32 = 0x0203;
const TRAY_RBUTTONUP: u32 = 0x0205;

// Menu item IDs
pub const MENU_TOGGLE: u32 = 1001;
pub const MENU_RESTORE_ALL: u32 = 1002;
pub const MENU_ABOUT: u32 = 1003;
pub const MENU_QUIT: u32 = 1004;

const TRAY_ICON_ID: u32 = 1;

thread_local! {
    static TRAY_HWND: RefCell<Option<HWND>> = const { RefCell::new(None) };
    static TRAY_MENU: RefCell<Option<HMENU>> = const { RefCell::new(None) };
}

/// Install the system tray icon with context menu.
pub fn install_tray_icon(hwnd: HWND) {
    unsafe {
        TRAY_HWND.with(|h| *h.borrow_mut() = Some(hwnd));

        // Icon resource 1 if the binary embeds one, else the stock application icon
        let hinstance = GetModuleHandleW(None).unwrap_or_default();
        let hicon = match LoadImageW(
            Some(hinstance.into()),
            PCWSTR(1 as *const u16),
            IMAGE_ICON,
            16,
            16,
            LR_DEFAULTSIZE | LR_SHARED,
        ) {
            Ok(handle) => HICON(handle.0),
            Err(_) => LoadIconW(None, IDI_APPLICATION).unwrap_or_default(),
        };

        let mut nid = NOTIFYICONDATAW {
            cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
            hWnd: hwnd,
            uID: TRAY_ICON_ID,
            uFlags: NIF_ICON | NIF_MESSAGE | NIF_TIP,
            uCallbackMessage: WM_TRAYICON,
            hIcon: hicon,
            ..Default::default()
        };
        write_tip(&mut nid, &tooltip_text(0));

        let _ = Shell_NotifyIconW(NIM_ADD, &nid);

        let menu = CreatePopupMenu().unwrap_or_default();
        let _ = AppendMenuW(menu, MF_STRING, MENU_TOGGLE as usize, w!("Show/Hide Window"));
        let _ = AppendMenuW(
            menu,
            MF_STRING,
            MENU_RESTORE_ALL as usize,
            w!("Restore All Windows"),
        );
        let _ = AppendMenuW(menu, MF_SEPARATOR, 0, PCWSTR::null());
        let _ = AppendMenuW(menu, MF_STRING, MENU_ABOUT as usize, w!("About..."));
        let _ = AppendMenuW(menu, MF_STRING, MENU_QUIT as usize, w!("Exit"));

        TRAY_MENU.with(|m| *m.borrow_mut() = Some(menu));
    }
}

/// Remove the tray icon.
pub fn remove_tray_icon() {
    if let Some(hwnd) = TRAY_HWND.with(|h| h.borrow_mut().take()) {
        unsafe {
            let nid = NOTIFYICONDATAW {
                cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
                hWnd: hwnd,
                uID: TRAY_ICON_ID,
                ..Default::default()
            };
            let _ = Shell_NotifyIconW(NIM_DELETE, &nid);
        }
    }

    if let Some(menu) = TRAY_MENU.with(|m| m.borrow_mut().take()) {
        unsafe {
            let _ = DestroyMenu(menu);
        }
    }
}

/// Show the context menu at the cursor position.
pub fn show_tray_menu(hwnd: HWND) {
    let Some(menu) = TRAY_MENU.with(|m| *m.borrow()) else {
        return;
    };
    unsafe {
        let mut pt = POINT::default();
        let _ = GetCursorPos(&mut pt);

        // Required for menu to close when clicking outside
        let _ = SetForegroundWindow(hwnd);

        let _ = TrackPopupMenu(
            menu,
            TPM_BOTTOMALIGN | TPM_LEFTALIGN | TPM_RIGHTBUTTON,
            pt.x,
            pt.y,
            None,
            hwnd,
            None,
        );
    }
}

/// Map a tray notification to an event, showing the menu on right-click.
pub fn handle_tray_message(hwnd: HWND, notification: u32) -> Option<AppEvent> {
    match notification {
        TRAY_LBUTTONDBLCLK => Some(AppEvent::ToggleGui),
        TRAY_RBUTTONUP => {
            show_tray_menu(hwnd);
            None
        }
        _ => None,
    }
}

/// Map a tray menu command to an event.
pub fn menu_command_event(command: u32) -> Option<AppEvent> {
    match command {
        MENU_TOGGLE => Some(AppEvent::ToggleGui),
        MENU_RESTORE_ALL => Some(AppEvent::RestoreAll),
        MENU_ABOUT => Some(AppEvent::ShowAbout),
        MENU_QUIT => Some(AppEvent::Quit),
        _ => None,
    }
}

/// Show the hidden-window count in the tooltip.
pub fn update_tray_tooltip(hidden: usize) {
    let Some(hwnd) = TRAY_HWND.with(|h| *h.borrow()) else {
        return;
    };
    unsafe {
        let mut nid = NOTIFYICONDATAW {
            cbSize: std::mem::size_of::<NOTIFYICONDATAW>() as u32,
            hWnd: hwnd,
            uID: TRAY_ICON_ID,
            uFlags: NIF_TIP,
            ..Default::default()
        };
        write_tip(&mut nid, &tooltip_text(hidden));
        let _ = Shell_NotifyIconW(NIM_MODIFY, &nid);
    }
}

fn tooltip_text(hidden: usize) -> String {
    match hidden {
        0 => "Tabstash".to_string(),
        1 => "Tabstash - 1 hidden window".to_string(),
        n => format!("Tabstash - {} hidden windows", n),
    }
}

fn write_tip(nid: &mut NOTIFYICONDATAW, tip: &str) {
    for (i, c) in tip.encode_utf16().take(nid.szTip.len() - 1).enumerate() {
        nid.szTip[i] = c;
    }
}
