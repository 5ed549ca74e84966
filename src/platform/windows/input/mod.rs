//! Input handling for Windows (low-level hooks, global hotkey).

pub mod hooks;
pub mod hotkeys;

pub use hooks::Win32Hooks;
pub use hotkeys::{register_cycle_hotkey, unregister_cycle_hotkey};
