use std::collections::HashMap;

use serde::Serialize;

use crate::QuestionId;

/// The in-progress mapping of question id to chosen option value.
///
/// Keys are unique; selecting again for the same question overwrites the
/// previous value, so the map never grows past the question count and
/// never shrinks during an attempt.
///
/// Serializes as a plain JSON object, matching the shape the submission
/// endpoint expects inside its request body.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct AnswerMap {
    values: HashMap<QuestionId, String>,
}

impl AnswerMap {
    /// Create a new empty answer map.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Record the answer for a question, replacing any previous one.
    pub fn insert(&mut self, id: impl Into<QuestionId>, value: impl Into<String>) {
        self.values.insert(id.into(), value.into());
    }

    /// Get the recorded answer for a question.
    pub fn get(&self, id: &QuestionId) -> Option<&str> {
        self.values.get(id).map(String::as_str)
    }

    /// Check if a question has been answered.
    pub fn contains(&self, id: &QuestionId) -> bool {
        self.values.contains_key(id)
    }

    /// Get the number of answered questions.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if no question has been answered yet.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get an iterator over all id-value pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, &str)> {
        self.values.iter().map(|(id, value)| (id, value.as_str()))
    }
}

impl IntoIterator for AnswerMap {
    type Item = (QuestionId, String);
    type IntoIter = std::collections::hash_map::IntoIter<QuestionId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a AnswerMap {
    type Item = (&'a QuestionId, &'a String);
    type IntoIter = std::collections::hash_map::Iter<'a, QuestionId, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
