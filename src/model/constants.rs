//! Configuration constants and default values.
//!
//! Virtual-key codes and hotkey defaults are plain numbers here so the
//! model stays free of Win32 types.

// === Hotkey Defaults ===

/// Identifier passed to `RegisterHotKey` for the cycle hotkey.
pub const HOTKEY_CYCLE_ID: i32 = 1;

/// Default hotkey key: `]` on a US layout (VK_OEM_6).
pub const DEFAULT_HOTKEY_VK: u32 = 0xDD;

/// Default modifier held while cycling (VK_MENU, the Alt key).
pub const DEFAULT_CYCLE_MODIFIER_VK: u32 = 0x12;

// === Virtual Keys ===

/// VK_ESCAPE, cancels selection mode.
pub const VK_ESCAPE_CODE: u32 = 0x1B;

/// Left/right Alt. Low-level keyboard hooks report these instead of VK_MENU.
pub const VK_LMENU_CODE: u32 = 0xA4;
pub const VK_RMENU_CODE: u32 = 0xA5;

/// Left/right Control.
pub const VK_LCONTROL_CODE: u32 = 0xA2;
pub const VK_RCONTROL_CODE: u32 = 0xA3;

/// Left/right Shift.
pub const VK_LSHIFT_CODE: u32 = 0xA0;
pub const VK_RSHIFT_CODE: u32 = 0xA1;

/// Generic Control and Shift.
pub const VK_CONTROL_CODE: u32 = 0x11;
pub const VK_SHIFT_CODE: u32 = 0x10;

/// Left/right Windows keys. There is no generic code; the left one stands in.
pub const VK_LWIN_CODE: u32 = 0x5B;
pub const VK_RWIN_CODE: u32 = 0x5C;

// === List Window ===

/// Default list window width in pixels.
pub const DEFAULT_WINDOW_WIDTH: i32 = 800;

/// Default list window height in pixels.
pub const DEFAULT_WINDOW_HEIGHT: i32 = 420;

/// Smallest accepted list window dimension.
pub const MIN_WINDOW_DIMENSION: i32 = 240;

/// Largest accepted list window dimension.
pub const MAX_WINDOW_DIMENSION: i32 = 4096;

/// Frame interval while the list window is visible (~60 FPS).
pub const FRAME_INTERVAL_MS: u32 = 16;

// === Selection ===

/// Upper bound on owner/popup hops when classifying a window.
pub const MAX_POPUP_WALK: usize = 64;

// === Logging ===

/// Default `tracing` filter directive.
pub const DEFAULT_LOG_LEVEL: &str = "info";
