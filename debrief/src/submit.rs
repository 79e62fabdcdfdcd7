//! Completion predicates, the submission payload, and duration telemetry.

use chrono::DateTime;
use indexmap::IndexMap;
use serde::Serialize;

use debrief_types::{ResponseMap, SectionGroup};

/// Check that every question of every given section has a non-empty answer.
///
/// Monotonic under answer insertion: adding an answer can only turn this
/// from false to true, never back.
pub fn sections_complete<'a>(
    sections: impl IntoIterator<Item = &'a SectionGroup>,
    responses: &ResponseMap,
) -> bool {
    sections
        .into_iter()
        .flat_map(|section| section.questions().iter())
        .all(|question| responses.has_answer(question.response_key()))
}

/// Build the nested submission payload: section key -> question id -> answer.
///
/// Unanswered questions are omitted, and so is any section left with no
/// answered questions. The payload is reproducible from the response map
/// and the schema alone.
pub fn build_payload(
    sections: &[SectionGroup],
    responses: &ResponseMap,
) -> IndexMap<String, IndexMap<String, String>> {
    let mut payload = IndexMap::new();
    for section in sections {
        let mut answered = IndexMap::new();
        for question in section.questions() {
            if let Some(value) = responses.get(question.response_key()) {
                if !value.is_empty() {
                    answered.insert(question.id().to_string(), value.to_string());
                }
            }
        }
        if !answered.is_empty() {
            payload.insert(section.key().to_string(), answered);
        }
    }
    payload
}

/// Convert a built payload into a JSON value for the event record.
pub(crate) fn payload_value(payload: IndexMap<String, IndexMap<String, String>>) -> serde_json::Value {
    let mut root = serde_json::Map::new();
    for (section, answers) in payload {
        let mut object = serde_json::Map::new();
        for (id, value) in answers {
            object.insert(id, serde_json::Value::String(value));
        }
        root.insert(section, serde_json::Value::Object(object));
    }
    serde_json::Value::Object(root)
}

/// The session-duration telemetry payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionDuration {
    pub started_at: String,
    pub ended_at: String,
    pub duration_seconds: i64,
}

impl SessionDuration {
    /// Compute the whole-second duration between two RFC 3339 timestamps.
    ///
    /// Returns `None` when either timestamp fails to parse or the end
    /// precedes the start; the duration event is simply not emitted then.
    pub fn between(started_at: &str, ended_at: &str) -> Option<Self> {
        let started = DateTime::parse_from_rfc3339(started_at).ok()?;
        let ended = DateTime::parse_from_rfc3339(ended_at).ok()?;
        let millis = (ended - started).num_milliseconds();
        if millis < 0 {
            return None;
        }
        Some(Self {
            started_at: started_at.to_string(),
            ended_at: ended_at.to_string(),
            duration_seconds: ((millis as f64) / 1000.0).round() as i64,
        })
    }

    /// The event payload shape.
    pub fn payload(&self) -> serde_json::Value {
        serde_json::json!({
            "started_at": self.started_at,
            "ended_at": self.ended_at,
            "duration_seconds": self.duration_seconds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debrief_types::QuestionSchema;

    fn two_section_groups() -> Vec<SectionGroup> {
        QuestionSchema::new()
            .with_section("a", &[("A1", "x"), ("A2", "y")])
            .with_section("b", &[("B1", "z")])
            .section_groups()
    }

    #[test]
    fn completion_requires_every_question() {
        let sections = two_section_groups();
        let mut responses = ResponseMap::new();
        assert!(!sections_complete(&sections, &responses));

        responses.insert("a.A1", "1");
        responses.insert("a.A2", "2");
        assert!(!sections_complete(&sections, &responses));

        responses.insert("b.B1", "3");
        assert!(sections_complete(&sections, &responses));
    }

    #[test]
    fn empty_answers_do_not_complete() {
        let sections = two_section_groups();
        let mut responses = ResponseMap::new();
        responses.insert("a.A1", "");
        responses.insert("a.A2", "2");
        responses.insert("b.B1", "3");
        assert!(!sections_complete(&sections, &responses));
    }

    #[test]
    fn payload_omits_unanswered() {
        let sections = two_section_groups();
        let mut responses = ResponseMap::new();
        responses.insert("a.A2", "7");
        responses.insert("b.B1", "");

        let payload = build_payload(&sections, &responses);
        assert_eq!(payload.len(), 1);
        assert_eq!(payload["a"].len(), 1);
        assert_eq!(payload["a"]["A2"], "7");
        assert!(!payload.contains_key("b"));
    }

    #[test]
    fn payload_value_nests_sections() {
        let sections = two_section_groups();
        let mut responses = ResponseMap::new();
        responses.insert("a.A1", "yes");

        let value = payload_value(build_payload(&sections, &responses));
        assert_eq!(value, serde_json::json!({ "a": { "A1": "yes" } }));
    }

    #[test]
    fn duration_rounds_to_whole_seconds() {
        let duration = SessionDuration::between(
            "2026-08-29T10:00:00.000Z",
            "2026-08-29T10:20:30.499Z",
        )
        .unwrap();
        assert_eq!(duration.duration_seconds, 1230);

        let half_up = SessionDuration::between(
            "2026-08-29T10:00:00.000Z",
            "2026-08-29T10:00:00.500Z",
        )
        .unwrap();
        assert_eq!(half_up.duration_seconds, 1);
    }

    #[test]
    fn duration_requires_ordered_timestamps() {
        assert_eq!(
            SessionDuration::between("2026-08-29T10:00:01Z", "2026-08-29T10:00:00Z"),
            None
        );
        // Equal timestamps are a zero-second session, not an error.
        assert_eq!(
            SessionDuration::between("2026-08-29T10:00:00Z", "2026-08-29T10:00:00Z")
                .unwrap()
                .duration_seconds,
            0
        );
    }

    #[test]
    fn duration_requires_parseable_timestamps() {
        assert_eq!(SessionDuration::between("yesterday", "2026-08-29T10:00:00Z"), None);
        assert_eq!(SessionDuration::between("2026-08-29T10:00:00Z", ""), None);
    }
}
