//! Application runtime state for Windows.

pub mod state;

pub use state::{install_switcher, take_switcher, with_switcher, AppSwitcher};
