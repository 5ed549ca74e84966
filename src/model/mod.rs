//! Application domain model.
//!
//! This module contains pure types (no FFI dependencies): window identifiers,
//! hidden-window records, user settings and the constants they default to.
//!
//! Platform-specific persistence is in `platform::windows::storage`.

pub mod constants;
pub mod hidden_window;
pub mod settings;
pub mod window;

pub use hidden_window::{HiddenWindowRecord, RegistrySnapshot};
pub use settings::{HotkeyModifiers, Settings};
pub use window::{CursorId, ExStyle, ScreenPoint, WindowId};
