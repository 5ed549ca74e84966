//! Windows implementation using the Win32 API.
//!
//! - FFI: `Win32Desktop`, the window-manager oracle
//! - Input: low-level mouse/keyboard hooks and the global hotkey
//! - App: the thread-local slot holding the one `Switcher`
//! - Handlers: dispatch of queued `AppEvent`s
//! - Storage: JSON settings in `%APPDATA%\Tabstash`
//! - UI: list window, tray icon, About box

pub mod app;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod storage;
pub mod ui;
