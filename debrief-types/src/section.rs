use crate::ResponseKey;

/// Section key for the binary message-strength block. Always page 0 when present.
pub const MESSAGE_STRENGTH_KEY: &str = "message_strength";

/// Section key for the terminal liar-accusation question.
pub const FINAL_GUESS_KEY: &str = "final_guess";

/// The attitude cluster: these sections always share the trailing page
/// with `final_guess`. Membership is exact-name, not a pattern.
pub const ATTITUDE_KEYS: [&str; 3] = [
    "attitude_clarity",
    "attitude_correctness",
    "susceptibility_consensus",
];

/// Check if a section key belongs to the attitude cluster.
pub fn is_attitude_key(key: &str) -> bool {
    ATTITUDE_KEYS.contains(&key)
}

/// A single question derived from the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// The question id within its section, e.g. "T2".
    id: String,

    /// The raw question text, possibly carrying a conditional prefix
    /// or an inline numbered-option legend.
    text: String,

    /// The globally unique answer-map key for this question.
    response_key: ResponseKey,
}

impl Question {
    /// Create a new question belonging to the given section.
    pub fn new(section_key: &str, id: impl Into<String>, text: impl Into<String>) -> Self {
        let id = id.into();
        let response_key = ResponseKey::new(section_key, &id);
        Self {
            id,
            text: text.into(),
            response_key,
        }
    }

    /// Get the question id within its section.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Get the raw question text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the answer-map key.
    pub fn response_key(&self) -> &ResponseKey {
        &self.response_key
    }
}

/// A named group of related questions sharing one widget convention.
///
/// Section order and question order both come from schema insertion order
/// and are semantically load-bearing: they drive page layout and the
/// previous/next traversal within a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionGroup {
    key: String,
    questions: Vec<Question>,
}

impl SectionGroup {
    /// Create a section from `(id, text)` pairs, preserving their order.
    pub fn new(
        key: impl Into<String>,
        items: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        let key = key.into();
        let questions = items
            .into_iter()
            .map(|(id, text)| Question::new(&key, id, text))
            .collect();
        Self { key, questions }
    }

    /// Get the section key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Get the questions in schema order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the number of questions in this section.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the section has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Check if this is the message-strength section.
    pub fn is_message_strength(&self) -> bool {
        self.key == MESSAGE_STRENGTH_KEY
    }

    /// Check if this is the final-guess section.
    pub fn is_final_guess(&self) -> bool {
        self.key == FINAL_GUESS_KEY
    }

    /// Check if this section belongs to the attitude cluster.
    pub fn is_attitude(&self) -> bool {
        is_attitude_key(&self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_gets_joined_response_key() {
        let question = Question::new("trust_ai", "T2", "I trusted the agents.");
        assert_eq!(question.response_key().as_str(), "trust_ai.T2");
    }

    #[test]
    fn section_preserves_question_order() {
        let section = SectionGroup::new(
            "experience",
            vec![
                ("E1".to_string(), "Boring ↔ Exciting".to_string()),
                ("E2".to_string(), "Confusing ↔ Clear".to_string()),
            ],
        );
        let ids: Vec<_> = section.questions().iter().map(Question::id).collect();
        assert_eq!(ids, vec!["E1", "E2"]);
    }

    #[test]
    fn attitude_membership_is_exact() {
        assert!(is_attitude_key("attitude_clarity"));
        assert!(is_attitude_key("susceptibility_consensus"));
        assert!(!is_attitude_key("attitude_clarity_extra"));
        assert!(!is_attitude_key("attitude"));
    }
}
