use std::fmt;

use serde::{Deserialize, Serialize};

/// The key of one question's answer, e.g. `"trust_ai.T2"`.
///
/// A response key is `"<section>.<question id>"` and is globally unique
/// across the schema. It keys the `ResponseMap` and doubles as a stable
/// identifier for persisted answers.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseKey {
    /// Dot-separated key string, e.g. "trust_ai.T2"
    key: String,
}

impl ResponseKey {
    /// Create a key for a question in a section.
    pub fn new(section: &str, question_id: &str) -> Self {
        Self {
            key: format!("{section}.{question_id}"),
        }
    }

    /// Create a key from an already-joined string.
    pub fn from_raw(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Get the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.key
    }

    /// Get the section segment (everything before the first dot).
    pub fn section(&self) -> &str {
        self.key.split('.').next().unwrap_or(&self.key)
    }

    /// Get the question id segment (everything after the first dot).
    pub fn question_id(&self) -> &str {
        match self.key.split_once('.') {
            Some((_, id)) => id,
            None => "",
        }
    }
}

impl fmt::Display for ResponseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key)
    }
}

impl From<&str> for ResponseKey {
    fn from(s: &str) -> Self {
        Self::from_raw(s)
    }
}

impl From<String> for ResponseKey {
    fn from(s: String) -> Self {
        Self::from_raw(s)
    }
}

impl From<&String> for ResponseKey {
    fn from(s: &String) -> Self {
        Self::from_raw(s.clone())
    }
}
