//! In-memory collaborators for tests, demos, and headless runs.
//!
//! `MemoryStore` stands in for client-local storage; `RecordingLogger`
//! captures events instead of delivering them, and can be told to reject
//! specific event kinds to exercise failure paths.

use std::collections::HashMap;

use debrief_types::{EventLogger, EventRecord, LogAck, SessionStore};

/// A key/value store held in a plain map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Seed an entry, builder-style.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Error type for `RecordingLogger`.
#[derive(Debug, thiserror::Error)]
#[error("event kind rejected: {kind}")]
pub struct RejectedEvent {
    pub kind: String,
}

/// An event logger that records instead of delivering.
#[derive(Debug, Clone, Default)]
pub struct RecordingLogger {
    events: Vec<EventRecord>,
    rejected_kinds: Vec<String>,
}

impl RecordingLogger {
    /// Create a new logger that accepts everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject events of the given kind, builder-style.
    pub fn rejecting(mut self, kind: impl Into<String>) -> Self {
        self.rejected_kinds.push(kind.into());
        self
    }

    /// The events recorded so far, in delivery order.
    pub fn events(&self) -> &[EventRecord] {
        &self.events
    }

    /// The recorded kinds, in delivery order.
    pub fn kinds(&self) -> Vec<&str> {
        self.events.iter().map(|event| event.kind.as_str()).collect()
    }
}

impl EventLogger for RecordingLogger {
    type Error = RejectedEvent;

    fn log_event(&mut self, event: EventRecord) -> Result<LogAck, Self::Error> {
        if self.rejected_kinds.contains(&event.kind) {
            return Err(RejectedEvent { kind: event.kind });
        }
        self.events.push(event);
        Ok(LogAck { ok: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_get_and_set() {
        let mut store = MemoryStore::new().with_entry("sessionId", "s1");
        assert_eq!(store.get("sessionId").as_deref(), Some("s1"));

        store.set("sessionId", "s2");
        assert_eq!(store.get("sessionId").as_deref(), Some("s2"));
        assert_eq!(store.get("missing"), None);
    }

    #[test]
    fn logger_records_in_order() {
        let mut logger = RecordingLogger::new();
        logger.log_event(EventRecord::new("s1", "A")).unwrap();
        logger.log_event(EventRecord::new("s1", "B")).unwrap();
        assert_eq!(logger.kinds(), vec!["A", "B"]);
    }

    #[test]
    fn logger_rejects_configured_kinds() {
        let mut logger = RecordingLogger::new().rejecting("B");
        logger.log_event(EventRecord::new("s1", "A")).unwrap();
        let result = logger.log_event(EventRecord::new("s1", "B"));
        assert!(result.is_err());
        assert_eq!(logger.kinds(), vec!["A"]);
    }
}
