//! Platform-specific implementations.
//!
//! Only Windows is supported: the Alt+Tab eligibility rules, window style
//! bits and low-level hooks are Win32 concepts. Each platform submodule
//! provides:
//! - FFI implementations of the core traits (`Desktop`, `InputHooks`)
//! - UI components (list window, tray, dialogs)
//! - Storage (settings persistence)

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(target_os = "windows")]
pub use self::windows::*;
