//! About dialog for Windows.

use windows::core::PCWSTR;
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::WindowsAndMessaging::{MessageBoxW, MB_ICONINFORMATION, MB_OK};

use crate::platform::windows::ffi::to_wide;

/// Application version from Cargo.toml
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Show the About dialog.
pub fn show_about_dialog(hwnd: HWND) {
    let title = to_wide("About Tabstash");
    let message = to_wide(&format!(
        "Tabstash v{}\n\n\
        Hide windows from the Alt+Tab switcher and\n\
        bring them back with a global hotkey.\n\n\
        Hidden windows are restored when Tabstash exits.\n\n\
        Apache-2.0 License",
        VERSION
    ));

    unsafe {
        MessageBoxW(
            Some(hwnd),
            PCWSTR(message.as_ptr()),
            PCWSTR(title.as_ptr()),
            MB_OK | MB_ICONINFORMATION,
        );
    }
}
