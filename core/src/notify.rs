//! Outcome reporting.
//!
//! # Design
//! Every operation reports its outcome as one human-readable line through
//! the [`Notifier`] trait, the stand-in for whatever surface shows activity
//! to the user. Delivery is fire-and-forget with no backpressure contract.
//! [`MessageLog`] is the bundled implementation: an append-only in-memory
//! list that tests and simple applications read back.

use std::sync::Mutex;

/// Receives one human-readable line per operation outcome.
pub trait Notifier: Send + Sync {
    /// Record one message. Must not block the caller on delivery.
    fn add(&self, message: String);
}

/// In-memory [`Notifier`] keeping every message in arrival order.
#[derive(Debug, Default)]
pub struct MessageLog {
    messages: Mutex<Vec<String>>,
}

impl MessageLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages recorded so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    /// Discard every recorded message.
    pub fn clear(&self) {
        self.messages.lock().unwrap().clear();
    }
}

impl Notifier for MessageLog {
    fn add(&self, message: String) {
        self.messages.lock().unwrap().push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_messages_in_arrival_order() {
        let log = MessageLog::new();
        log.add("first".to_string());
        log.add("second".to_string());
        assert_eq!(log.messages(), vec!["first", "second"]);
    }

    #[test]
    fn clear_discards_everything() {
        let log = MessageLog::new();
        log.add("stale".to_string());
        log.clear();
        assert!(log.messages().is_empty());
    }
}
