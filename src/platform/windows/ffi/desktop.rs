//! `Desktop` backed by user32 and DWM.

use std::ffi::c_void;

use windows::Win32::Foundation::{GetLastError, SetLastError, ERROR_SUCCESS, WIN32_ERROR};
use windows::Win32::Graphics::Dwm::{DwmGetWindowAttribute, DWMWA_CLOAKED};
use windows::Win32::UI::WindowsAndMessaging::{
    GetAncestor, GetCursor, GetLastActivePopup, GetWindowLongW, GetWindowTextLengthW,
    GetWindowTextW, IsWindow, IsWindowVisible, LoadCursorW, SetCursor, SetForegroundWindow,
    SetWindowLongW, ShowWindow, WindowFromPoint, GA_ROOT, GA_ROOTOWNER, GWL_EXSTYLE, HCURSOR,
    IDC_CROSS, SW_SHOWMAXIMIZED,
};

use crate::engine::{Desktop, DesktopError};
use crate::model::{CursorId, ExStyle, ScreenPoint, WindowId};

use super::types::*;

/// The live Win32 window manager.
pub struct Win32Desktop {
    crosshair: HCURSOR,
}

impl Win32Desktop {
    pub fn new() -> Self {
        let crosshair = unsafe { LoadCursorW(None, IDC_CROSS) }.unwrap_or_default();
        Self { crosshair }
    }
}

impl Default for Win32Desktop {
    fn default() -> Self {
        Self::new()
    }
}

impl Desktop for Win32Desktop {
    fn is_window(&self, handle: WindowId) -> bool {
        !handle.is_null() && unsafe { IsWindow(Some(to_hwnd(handle))) }.as_bool()
    }

    fn is_visible(&self, handle: WindowId) -> bool {
        !handle.is_null() && unsafe { IsWindowVisible(to_hwnd(handle)) }.as_bool()
    }

    fn window_at(&self, point: ScreenPoint) -> Option<WindowId> {
        let hwnd = unsafe { WindowFromPoint(to_point(point)) };
        let id = to_window_id(hwnd);
        (!id.is_null()).then_some(id)
    }

    fn root(&self, handle: WindowId) -> WindowId {
        to_window_id(unsafe { GetAncestor(to_hwnd(handle), GA_ROOT) })
    }

    fn root_owner(&self, handle: WindowId) -> WindowId {
        to_window_id(unsafe { GetAncestor(to_hwnd(handle), GA_ROOTOWNER) })
    }

    fn last_active_popup(&self, handle: WindowId) -> WindowId {
        to_window_id(unsafe { GetLastActivePopup(to_hwnd(handle)) })
    }

    fn ex_style(&self, handle: WindowId) -> ExStyle {
        ExStyle(unsafe { GetWindowLongW(to_hwnd(handle), GWL_EXSTYLE) } as u32)
    }

    fn set_ex_style(&mut self, handle: WindowId, style: ExStyle) -> Result<(), DesktopError> {
        if !self.is_window(handle) {
            return Err(DesktopError::InvalidWindow { handle });
        }
        unsafe {
            // SetWindowLongW returns the previous value, which may legitimately
            // be 0; only a non-zero last error marks a failure.
            SetLastError(WIN32_ERROR(0));
            let previous = SetWindowLongW(to_hwnd(handle), GWL_EXSTYLE, style.0 as i32);
            if previous == 0 {
                let err = GetLastError();
                if err != ERROR_SUCCESS {
                    return Err(DesktopError::StyleUpdate {
                        handle,
                        code: err.0,
                    });
                }
            }
        }
        Ok(())
    }

    fn is_cloaked(&self, handle: WindowId) -> bool {
        let mut cloaked: u32 = 0;
        let result = unsafe {
            DwmGetWindowAttribute(
                to_hwnd(handle),
                DWMWA_CLOAKED,
                &mut cloaked as *mut u32 as *mut c_void,
                std::mem::size_of::<u32>() as u32,
            )
        };
        // If the query fails, treat the window as not cloaked
        result.is_ok() && cloaked != 0
    }

    fn title(&self, handle: WindowId) -> String {
        let hwnd = to_hwnd(handle);
        let len = unsafe { GetWindowTextLengthW(hwnd) };
        if len <= 0 {
            return String::new();
        }
        let mut buf = vec![0u16; len as usize + 1];
        let copied = unsafe { GetWindowTextW(hwnd, &mut buf) };
        if copied <= 0 {
            return String::new();
        }
        String::from_utf16_lossy(&buf[..copied as usize])
    }

    fn show_maximized_foreground(&mut self, handle: WindowId) {
        let hwnd = to_hwnd(handle);
        unsafe {
            let _ = ShowWindow(hwnd, SW_SHOWMAXIMIZED);
            let _ = SetForegroundWindow(hwnd);
        }
    }

    fn current_cursor(&self) -> CursorId {
        to_cursor_id(unsafe { GetCursor() })
    }

    fn set_selection_cursor(&mut self) {
        if !self.crosshair.0.is_null() {
            unsafe {
                SetCursor(Some(self.crosshair));
            }
        }
    }

    fn set_cursor(&mut self, cursor: CursorId) {
        unsafe {
            SetCursor(Some(to_hcursor(cursor)));
        }
    }
}
