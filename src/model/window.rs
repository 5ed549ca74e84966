//! Opaque OS handles and window style bits.
//!
//! Handles are plain integers: the OS owns the objects behind them and may
//! destroy them at any time, so nothing here is ever dereferenced. Liveness
//! is checked through `engine::desktop::Desktop::is_window` at every use.

use std::fmt;

/// Opaque top-level window identifier (an `HWND` value on Windows).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct WindowId(pub isize);

impl WindowId {
    /// The null handle.
    pub const NULL: WindowId = WindowId(0);

    /// Returns true for the null sentinel.
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WindowId({:#x})", self.0)
    }
}

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

/// Opaque cursor handle, saved on selection start and restored on exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CursorId(pub isize);

/// A point in virtual-screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Extended window style bits (`GWL_EXSTYLE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExStyle(pub u32);

impl ExStyle {
    /// WS_EX_TOOLWINDOW: the window is left out of Alt+Tab and the taskbar.
    pub const TOOLWINDOW: u32 = 0x0000_0080;
    /// WS_EX_APPWINDOW: forces a taskbar button for a top-level window.
    pub const APPWINDOW: u32 = 0x0004_0000;
    /// WS_EX_NOACTIVATE: the window never becomes the foreground window.
    pub const NOACTIVATE: u32 = 0x0800_0000;

    pub fn contains(self, bits: u32) -> bool {
        self.0 & bits == bits
    }

    /// True if the style alone keeps the window out of the task switcher.
    pub fn excludes_from_switcher(self) -> bool {
        self.0 & (Self::TOOLWINDOW | Self::NOACTIVATE) != 0
    }

    /// Style to apply when hiding: tool window on, app window off.
    pub fn hidden_from_switcher(self) -> ExStyle {
        ExStyle((self.0 | Self::TOOLWINDOW) & !Self::APPWINDOW)
    }

    /// Style to apply when restoring. Only the tool window bit is cleared;
    /// an app window bit removed on hide is not put back.
    pub fn restored_to_switcher(self) -> ExStyle {
        ExStyle(self.0 & !Self::TOOLWINDOW)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hide_sets_toolwindow_and_clears_appwindow() {
        let style = ExStyle(ExStyle::APPWINDOW | 0x100).hidden_from_switcher();
        assert!(style.contains(ExStyle::TOOLWINDOW));
        assert!(!style.contains(ExStyle::APPWINDOW));
        assert!(style.contains(0x100));
    }

    #[test]
    fn restore_clears_only_toolwindow() {
        let style = ExStyle(ExStyle::TOOLWINDOW | 0x100).restored_to_switcher();
        assert_eq!(style, ExStyle(0x100));
    }

    #[test]
    fn toolwindow_and_noactivate_exclude() {
        assert!(ExStyle(ExStyle::TOOLWINDOW).excludes_from_switcher());
        assert!(ExStyle(ExStyle::NOACTIVATE).excludes_from_switcher());
        assert!(!ExStyle(ExStyle::APPWINDOW).excludes_from_switcher());
        assert!(!ExStyle::default().excludes_from_switcher());
    }

    #[test]
    fn null_window_id() {
        assert!(WindowId::NULL.is_null());
        assert!(!WindowId(0x1234).is_null());
        assert_eq!(format!("{:?}", WindowId(0x1f)), "WindowId(0x1f)");
    }
}
