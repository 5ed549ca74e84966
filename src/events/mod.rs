//! Event system between the GUI shell and the core.
//!
//! Window procedures (list window, tray, hotkey) must not touch the
//! `Switcher` directly: an OS call made by the core can re-enter a window
//! procedure while the core is borrowed. Instead they publish an
//! [`AppEvent`], and the main loop drains and dispatches the queue once the
//! native messages of the current iteration are handled.
//!
//! ```text
//!  tray menu ─┐
//!  buttons  ──┼─ publish() ─▶ EventBus ─ drain() ─▶ dispatcher ─▶ Switcher
//!  WM_HOTKEY ─┘
//! ```
//!
//! Low-level hook callbacks are the exception: they need an immediate
//! "consumed" answer and call the core synchronously.
//!
//! - [`types`]: the `AppEvent` enum
//! - [`bus`]: `EventBus` and `EventPublisher`
//! - [`global`]: process-wide access used from window procedures

pub mod bus;
pub mod global;
pub mod types;

pub use bus::{EventBus, EventPublisher};
pub use global::{drain_events, init_event_bus, publish};
pub use types::AppEvent;
