//! Core state machine (pure Rust, no FFI).
//!
//! - [`registry`]: ordered hidden-window records and the cycle cursor
//! - [`selection`]: the pick-a-window mode
//! - [`input`]: hook channel bookkeeping
//! - [`desktop`]: OS window primitives and the Alt+Tab eligibility check
//! - [`switcher`]: the application context that owns all of the above

pub mod desktop;
pub mod errors;
pub mod input;
pub mod registry;
pub mod selection;
pub mod switcher;

pub use desktop::{is_switchable, Desktop};
pub use errors::{DesktopError, InputError, RegistryError};
pub use input::{key_matches, HookChannel, InputHooks};
pub use registry::WindowRegistry;
pub use selection::{Selection, SelectionState, SelectionStateMachine};
pub use switcher::{Switcher, SwitcherOptions};
