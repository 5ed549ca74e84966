//! Process-wide access to the event bus.
//!
//! Window procedures are `extern "system"` functions with no user context,
//! so they publish through these statics. `init_event_bus` runs once in the
//! entry point before any window is created.

use std::sync::{Mutex, OnceLock};

use super::bus::{EventBus, EventPublisher};
use super::types::AppEvent;

static PUBLISHER: OnceLock<EventPublisher> = OnceLock::new();

// Only the UI thread drains, so the lock is never contended.
static BUS: OnceLock<Mutex<EventBus>> = OnceLock::new();

/// Initialise the bus. Returns false if it was already initialised.
pub fn init_event_bus() -> bool {
    let bus = EventBus::new();
    if PUBLISHER.set(bus.publisher()).is_err() {
        return false;
    }
    BUS.set(Mutex::new(bus)).is_ok()
}

/// Queue an event. Events published before `init_event_bus` are dropped.
pub fn publish(event: AppEvent) {
    match PUBLISHER.get() {
        Some(publisher) => publisher.publish(event),
        None => tracing::debug!(event = "events.publish_dropped", app_event = ?event),
    }
}

/// Everything queued so far, oldest first.
pub fn drain_events() -> Vec<AppEvent> {
    let Some(bus) = BUS.get() else {
        return Vec::new();
    };
    match bus.lock() {
        Ok(bus) => bus.drain(),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The statics can be set once per test binary, so this single test
    // covers the whole lifecycle.
    #[test]
    fn global_bus_lifecycle() {
        assert!(drain_events().is_empty());
        publish(AppEvent::Quit);

        assert!(init_event_bus());
        assert!(!init_event_bus());

        publish(AppEvent::ToggleGui);
        publish(AppEvent::RestoreAll);

        assert_eq!(
            drain_events(),
            vec![AppEvent::ToggleGui, AppEvent::RestoreAll]
        );
        assert!(drain_events().is_empty());
    }
}
