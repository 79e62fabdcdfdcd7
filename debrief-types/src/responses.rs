use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ResponseKey;

/// Error type for response access operations.
#[derive(Debug, thiserror::Error)]
pub enum ResponseError {
    #[error("Missing answer for key: {0}")]
    MissingKey(ResponseKey),
}

/// Collected answers for a survey session.
///
/// A flat map from `ResponseKey` to the single current answer string.
/// Every answer is single-valued: inserting for an existing key replaces
/// the previous answer. The map serializes as a plain JSON object, which
/// is the shape persisted to the session store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResponseMap {
    values: HashMap<ResponseKey, String>,
}

impl ResponseMap {
    /// Create a new empty response map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Insert an answer for the given key, replacing any previous answer.
    pub fn insert(&mut self, key: impl Into<ResponseKey>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Get the answer for the given key.
    pub fn get(&self, key: &ResponseKey) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Check if any answer (even an empty one) exists for the given key.
    pub fn contains(&self, key: &ResponseKey) -> bool {
        self.values.contains_key(key)
    }

    /// Check if the key has a non-empty answer.
    ///
    /// Completion gating uses this: an empty string counts as unanswered,
    /// the same way the surrounding UI treats cleared inputs.
    pub fn has_answer(&self, key: &ResponseKey) -> bool {
        match self.values.get(key) {
            Some(value) => !value.is_empty(),
            None => false,
        }
    }

    /// Get the answer for the given key, or an error when absent.
    pub fn get_required(&self, key: &ResponseKey) -> Result<&str, ResponseError> {
        self.get(key)
            .ok_or_else(|| ResponseError::MissingKey(key.clone()))
    }

    /// Remove the answer for the given key.
    pub fn remove(&mut self, key: &ResponseKey) -> Option<String> {
        self.values.remove(key)
    }

    /// Get an iterator over all key-answer pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&ResponseKey, &str)> {
        self.values.iter().map(|(key, value)| (key, value.as_str()))
    }

    /// Get the number of recorded answers.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if there are no recorded answers.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Merge another response map into this one.
    pub fn extend(&mut self, other: ResponseMap) {
        self.values.extend(other.values);
    }
}

impl IntoIterator for ResponseMap {
    type Item = (ResponseKey, String);
    type IntoIter = std::collections::hash_map::IntoIter<ResponseKey, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}
