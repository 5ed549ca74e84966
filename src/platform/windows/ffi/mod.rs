//! Win32 bindings behind the core's `Desktop` trait.

pub mod desktop;
pub mod types;

pub use desktop::Win32Desktop;
pub use types::*;
