use crate::{EventRecord, LogAck};

/// The injected client-local key/value storage capability.
///
/// The browser's storage is modeled as an explicit collaborator rather
/// than ambient global state: the engine only ever reads and writes
/// string values by string key, synchronously.
pub trait SessionStore {
    /// Read the value for a key, if present.
    fn get(&self, key: &str) -> Option<String>;

    /// Write the value for a key, replacing any previous value.
    fn set(&mut self, key: &str, value: &str);
}

/// The injected event-logging collaborator.
///
/// Implementations deliver events to the experiment's event route and
/// fail by returning an error when the delivery is not acknowledged.
/// Callers decide per event kind whether a failure is surfaced or
/// swallowed as best-effort telemetry.
pub trait EventLogger {
    /// The error type for this logger.
    type Error: Into<anyhow::Error>;

    /// Deliver one event, returning the collaborator's acknowledgement.
    fn log_event(&mut self, event: EventRecord) -> Result<LogAck, Self::Error>;
}
