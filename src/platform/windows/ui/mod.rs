//! UI components for Windows.

pub mod dialogs;
pub mod main_window;
pub mod tray;

pub use dialogs::*;
pub use tray::*;
