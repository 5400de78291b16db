// SPDX-License-Identifier: MPL-2.0
//! In-memory diagnostics for user-visible problems.
//!
//! Warnings and errors surfaced through the notification emitter are also
//! recorded here, in a bounded ring buffer, so a support request can be
//! answered from what the user actually saw. Nothing is persisted and
//! nothing leaves the process.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Default number of events kept before the oldest are evicted.
pub const DEFAULT_BUFFER_CAPACITY: usize = 200;

/// Classification of a recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Warning,
    Error,
}

/// One recorded warning or error.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub kind: EventKind,
    /// The i18n key of the message shown to the user.
    pub message_key: String,
    pub recorded_at: Instant,
}

/// A bounded ring buffer of diagnostic events.
///
/// When the buffer is full, pushing a new event evicts the oldest one.
/// Events are stored in chronological order (oldest first).
#[derive(Debug)]
pub struct EventBuffer {
    data: VecDeque<DiagnosticEvent>,
    capacity: usize,
}

impl EventBuffer {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, event: DiagnosticEvent) {
        if self.data.len() >= self.capacity {
            self.data.pop_front();
        }
        self.data.push_back(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Cloneable handle for recording events from anywhere in the app.
#[derive(Debug, Clone)]
pub struct DiagnosticsHandle {
    buffer: Arc<Mutex<EventBuffer>>,
}

impl Default for DiagnosticsHandle {
    fn default() -> Self {
        Self::new(DEFAULT_BUFFER_CAPACITY)
    }
}

impl DiagnosticsHandle {
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: Arc::new(Mutex::new(EventBuffer::new(capacity))),
        }
    }

    pub fn log_warning(&self, message_key: impl Into<String>) {
        self.log(EventKind::Warning, message_key.into());
    }

    pub fn log_error(&self, message_key: impl Into<String>) {
        self.log(EventKind::Error, message_key.into());
    }

    fn log(&self, kind: EventKind, message_key: String) {
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(DiagnosticEvent {
                kind,
                message_key,
                recorded_at: Instant::now(),
            });
        }
    }

    /// Returns a snapshot of the recorded events, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<DiagnosticEvent> {
        self.buffer
            .lock()
            .map(|buffer| buffer.iter().cloned().collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_evicts_oldest_at_capacity() {
        let mut buffer = EventBuffer::new(2);
        for key in ["a", "b", "c"] {
            buffer.push(DiagnosticEvent {
                kind: EventKind::Warning,
                message_key: key.to_string(),
                recorded_at: Instant::now(),
            });
        }

        let keys: Vec<&str> = buffer.iter().map(|e| e.message_key.as_str()).collect();
        assert_eq!(keys, vec!["b", "c"]);
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let buffer = EventBuffer::new(0);
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
    }

    #[test]
    fn handle_records_in_order() {
        let handle = DiagnosticsHandle::new(10);
        handle.log_warning("w1");
        handle.log_error("e1");

        let events = handle.snapshot();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].kind, EventKind::Warning);
        assert_eq!(events[1].kind, EventKind::Error);
        assert_eq!(events[1].message_key, "e1");
    }

    #[test]
    fn clones_share_the_same_buffer() {
        let handle = DiagnosticsHandle::new(10);
        let clone = handle.clone();
        clone.log_error("shared");

        assert_eq!(handle.snapshot().len(), 1);
    }
}
