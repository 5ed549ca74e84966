//! Conversions between core handle types and windows-rs handles.

use windows::Win32::Foundation::{HWND, POINT};
use windows::Win32::UI::WindowsAndMessaging::HCURSOR;

use crate::model::{CursorId, ScreenPoint, WindowId};

pub fn to_hwnd(id: WindowId) -> HWND {
    HWND(id.0 as *mut _)
}

pub fn to_window_id(hwnd: HWND) -> WindowId {
    WindowId(hwnd.0 as isize)
}

pub fn to_hcursor(id: CursorId) -> HCURSOR {
    HCURSOR(id.0 as *mut _)
}

pub fn to_cursor_id(cursor: HCURSOR) -> CursorId {
    CursorId(cursor.0 as isize)
}

pub fn to_point(point: ScreenPoint) -> POINT {
    POINT {
        x: point.x,
        y: point.y,
    }
}

/// NUL-terminated UTF-16 for `PCWSTR` arguments.
pub fn to_wide(text: &str) -> Vec<u16> {
    text.encode_utf16().chain(std::iter::once(0)).collect()
}
