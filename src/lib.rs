//! Tabstash: hide windows from Alt+Tab and cycle through them with a hotkey.
//!
//! The core (`engine`, `model`, `events`) is free of FFI so it can be tested
//! as normal integration tests on any host. The Win32 bindings live in
//! `platform::windows`.

pub mod engine;
pub mod events;
pub mod logging;
pub mod model;

#[cfg(target_os = "windows")]
pub mod platform;

// Re-export the types the shell works with
pub use crate::engine::{Desktop, InputHooks, Switcher, SwitcherOptions, WindowRegistry};
pub use events::{AppEvent, EventBus, EventPublisher};
pub use model::{HiddenWindowRecord, RegistrySnapshot, Settings, WindowId};
