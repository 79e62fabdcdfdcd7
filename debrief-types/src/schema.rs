use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::SectionGroup;

/// The static, nested question schema: section key -> question id -> raw text.
///
/// Insertion order of sections and of questions within a section comes from
/// the JSON asset and is preserved end to end; page layout depends on it.
/// The schema is loaded once and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionSchema {
    sections: IndexMap<String, IndexMap<String, String>>,
}

impl QuestionSchema {
    /// Create a new empty schema.
    pub fn new() -> Self {
        Self {
            sections: IndexMap::new(),
        }
    }

    /// Append a section with `(id, text)` questions. Intended for fixtures;
    /// production schemas come from the JSON asset.
    pub fn with_section(mut self, key: &str, items: &[(&str, &str)]) -> Self {
        let questions = items
            .iter()
            .map(|(id, text)| ((*id).to_string(), (*text).to_string()))
            .collect();
        self.sections.insert(key.to_string(), questions);
        self
    }

    /// Derive the ordered section groups, attaching response keys.
    pub fn section_groups(&self) -> Vec<SectionGroup> {
        self.sections
            .iter()
            .map(|(key, items)| {
                SectionGroup::new(
                    key.clone(),
                    items
                        .iter()
                        .map(|(id, text)| (id.clone(), text.clone()))
                        .collect::<Vec<_>>(),
                )
            })
            .collect()
    }

    /// Get the number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Check if the schema has no sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get the total number of questions across all sections.
    pub fn question_count(&self) -> usize {
        self.sections.values().map(IndexMap::len).sum()
    }
}

/// The top-level shape of the static survey asset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyDocument {
    /// The post-experiment survey schema.
    pub post_survey: QuestionSchema,
}
