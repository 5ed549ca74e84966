//! FIFO event queue over an mpsc channel.
//!
//! Producers hold an `EventPublisher`; the main loop owns the `EventBus`
//! and drains it once per iteration.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// A cloneable handle for producers.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<AppEvent> {
        std::iter::from_fn(|| self.try_recv()).collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Queue an event. A dropped receiver means the app is exiting, so the
    /// send error is ignored.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_bus_is_empty() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
        assert!(bus.try_recv().is_none());
    }

    #[test]
    fn drain_preserves_publish_order() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::HotkeyPressed);
        publisher.publish(AppEvent::RestoreLast);
        publisher.publish(AppEvent::Quit);

        assert_eq!(
            bus.drain(),
            vec![AppEvent::HotkeyPressed, AppEvent::RestoreLast, AppEvent::Quit]
        );
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn cloned_publishers_share_the_queue() {
        let bus = EventBus::default();
        let tray = bus.publisher();
        let window = tray.clone();

        tray.publish(AppEvent::ToggleGui);
        window.publish(AppEvent::StartSelection);

        assert_eq!(bus.try_recv(), Some(AppEvent::ToggleGui));
        assert_eq!(bus.try_recv(), Some(AppEvent::StartSelection));
        assert_eq!(bus.try_recv(), None);
    }

    #[test]
    fn publishing_after_bus_drop_is_silent() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        drop(bus);
        publisher.publish(AppEvent::Quit);
    }
}
