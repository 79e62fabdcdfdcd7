//! Storage keys and cached-blob readers for the injected session store.
//!
//! Cached JSON written by earlier pages (responses, transcript,
//! descriptions) can be stale or corrupt; every reader here degrades to
//! absent/empty instead of propagating a parse error.

use indexmap::IndexMap;

use debrief_types::{ResponseMap, SessionStore};

use crate::transcript::GameTranscript;

/// The current session identifier.
pub const SESSION_ID_KEY: &str = "sessionId";

/// RFC 3339 timestamp written by the consent page.
pub const CONSENTED_AT_KEY: &str = "consentedAt";

/// The cached end-of-game transcript.
pub const LAST_ENDED_KEY: &str = "lastEnded";

/// The cached fallback description map.
pub const LAST_DESCRIPTIONS_KEY: &str = "lastDescriptions";

/// Key of the persisted answer map for one session.
pub fn responses_key(session_id: &str) -> String {
    format!("postSurveyResponses:{session_id}")
}

/// Key of the survey-started marker for one session.
pub fn started_at_key(session_id: &str) -> String {
    format!("postSurveyStartedAt:{session_id}")
}

/// Read the session id, if one was established.
pub fn session_id<S: SessionStore>(store: &S) -> Option<String> {
    store.get(SESSION_ID_KEY)
}

/// Rehydrate the persisted answers for a session. Malformed JSON is
/// discarded and the session starts over with an empty map.
pub fn load_responses<S: SessionStore>(store: &S, session_id: &str) -> ResponseMap {
    let Some(raw) = store.get(&responses_key(session_id)) else {
        return ResponseMap::new();
    };
    match serde_json::from_str(&raw) {
        Ok(responses) => responses,
        Err(error) => {
            tracing::debug!(%error, "discarding malformed cached responses");
            ResponseMap::new()
        }
    }
}

/// Persist the answer map for a session.
pub fn save_responses<S: SessionStore>(store: &mut S, session_id: &str, responses: &ResponseMap) {
    match serde_json::to_string(responses) {
        Ok(raw) => store.set(&responses_key(session_id), &raw),
        Err(error) => tracing::debug!(%error, "failed to serialize responses"),
    }
}

/// Read the cached end-of-game transcript, if present and well-formed.
pub fn load_transcript<S: SessionStore>(store: &S) -> Option<GameTranscript> {
    let raw = store.get(LAST_ENDED_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(transcript) => Some(transcript),
        Err(error) => {
            tracing::debug!(%error, "discarding malformed cached transcript");
            None
        }
    }
}

/// Read the cached fallback description map, if present and well-formed.
pub fn load_descriptions<S: SessionStore>(store: &S) -> Option<IndexMap<String, String>> {
    let raw = store.get(LAST_DESCRIPTIONS_KEY)?;
    match serde_json::from_str(&raw) {
        Ok(descriptions) => Some(descriptions),
        Err(error) => {
            tracing::debug!(%error, "discarding malformed cached descriptions");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    #[test]
    fn malformed_responses_degrade_to_empty() {
        let store = MemoryStore::new().with_entry(responses_key("s1"), "{not json");
        assert!(load_responses(&store, "s1").is_empty());
    }

    #[test]
    fn responses_round_trip() {
        let mut store = MemoryStore::new();
        let mut responses = ResponseMap::new();
        responses.insert("trust_ai.T1", "5");

        save_responses(&mut store, "s1", &responses);
        assert_eq!(load_responses(&store, "s1"), responses);
    }

    #[test]
    fn malformed_transcript_is_discarded() {
        let store = MemoryStore::new().with_entry(LAST_ENDED_KEY, "[[[");
        assert_eq!(load_transcript(&store), None);
    }

    #[test]
    fn descriptions_preserve_order() {
        let store = MemoryStore::new()
            .with_entry(LAST_DESCRIPTIONS_KEY, r#"{"Zoe":"z","Ava":"a"}"#);
        let descriptions = load_descriptions(&store).unwrap();
        let keys: Vec<&String> = descriptions.keys().collect();
        assert_eq!(keys, vec!["Zoe", "Ava"]);
    }
}
