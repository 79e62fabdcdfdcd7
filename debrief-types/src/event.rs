use serde::{Deserialize, Serialize};

/// Emitted once when the respondent first opens the post-survey.
pub const STARTED_EVENT: &str = "POST_SURVEY_STARTED";

/// Carries the nested submission payload. This is the response data itself.
pub const RESPONSES_EVENT: &str = "POST_SURVEY";

/// Telemetry: whole-second session duration from consent to submission.
pub const DURATION_EVENT: &str = "SESSION_DURATION";

/// One event handed to the logging collaborator.
///
/// Serializes to the wire shape the event route expects:
/// `{"sessionId": ..., "type": ..., "payload"?: ..., "ts"?: ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// The session this event belongs to.
    pub session_id: String,

    /// The event kind, one of the constants above.
    #[serde(rename = "type")]
    pub kind: String,

    /// Optional structured payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,

    /// Optional client timestamp (RFC 3339); the collaborator fills in
    /// its own clock when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts: Option<String>,
}

impl EventRecord {
    /// Create an event with no payload and no timestamp.
    pub fn new(session_id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            kind: kind.into(),
            payload: None,
            ts: None,
        }
    }

    /// Attach a payload.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Attach a client timestamp.
    pub fn with_ts(mut self, ts: impl Into<String>) -> Self {
        self.ts = Some(ts.into());
        self
    }
}

/// The collaborator's acknowledgement: `{"ok": true}` on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogAck {
    pub ok: bool,
}
