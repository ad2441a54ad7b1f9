//! In-page activity log.
//!
//! Every user-visible action appends a timestamped line, newest first, so
//! testers can see what the app thinks just happened. Each entry is also
//! emitted through `tracing` and recorded as a Sentry breadcrumb.

use std::collections::VecDeque;
use std::fmt;

use chrono::{DateTime, Local};

/// Entries kept before the oldest are dropped.
pub const DEFAULT_CAPACITY: usize = 200;

/// One log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub at: DateTime<Local>,
    pub text: String,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.at.format("%H:%M:%S"), self.text)
    }
}

/// Bounded, newest-first event log.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<Event>,
    capacity: usize,
}

impl EventLog {
    /// An empty log holding at most `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity.min(DEFAULT_CAPACITY)),
            capacity,
        }
    }

    /// Record `text` with the current local time.
    pub fn record(&mut self, text: impl Into<String>) {
        self.record_at(Local::now(), text);
    }

    /// Record `text` with an explicit timestamp.
    pub fn record_at(&mut self, at: DateTime<Local>, text: impl Into<String>) {
        let text = text.into();
        tracing::info!(event = %text, "playground event");
        crate::error::add_event_breadcrumb(&text);

        if self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_back();
        }
        self.entries.push_front(Event { at, text });
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &Event> {
        self.entries.iter()
    }

    /// Number of entries held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The most recent entry's text.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(|e| e.text.as_str())
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }
}
