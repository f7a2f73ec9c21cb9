use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of one quiz question, e.g. `"q1"`.
///
/// The server tags every rendered question panel with a stable id; the
/// answer map and the submission body are keyed by it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(String);

impl QuestionId {
    /// Create a new question id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for QuestionId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&String> for QuestionId {
    fn from(s: &String) -> Self {
        Self::new(s.clone())
    }
}

/// Identifier of the lesson a quiz belongs to; part of the submission URL.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(u32);

impl LessonId {
    /// Create a new lesson id.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the numeric id.
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One selectable option of a question.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// The value submitted to the server when this option is chosen.
    value: String,

    /// The text shown to the user.
    label: String,
}

impl AnswerOption {
    /// Create a new option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Get the submission value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the display label.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// A single question in a quiz.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,

    /// The prompt text shown to the user.
    prompt: String,

    options: Vec<AnswerOption>,
}

impl Question {
    /// Create a new question.
    pub fn new(
        id: impl Into<QuestionId>,
        prompt: impl Into<String>,
        options: Vec<AnswerOption>,
    ) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options,
        }
    }

    /// Get the question id.
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get the selectable options.
    pub fn options(&self) -> &[AnswerOption] {
        &self.options
    }

    /// Look up an option by its submission value.
    pub fn option(&self, value: &str) -> Option<&AnswerOption> {
        self.options.iter().find(|option| option.value() == value)
    }
}

/// The ordered, fixed-length question sequence for one lesson's quiz.
///
/// Order is significant - it defines the navigation order - and immutable
/// for the lifetime of one attempt.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizDefinition {
    lesson: LessonId,
    questions: Vec<Question>,
}

impl QuizDefinition {
    /// Create a new quiz definition for a lesson.
    pub fn new(lesson: LessonId, questions: Vec<Question>) -> Self {
        Self { lesson, questions }
    }

    /// Get the lesson this quiz belongs to.
    pub fn lesson(&self) -> LessonId {
        self.lesson
    }

    /// Get the questions in navigation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get the question at a panel index.
    pub fn question_at(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// Look up a question by id.
    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    /// Get the number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Check if the quiz has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yes_no(id: &str, prompt: &str) -> Question {
        Question::new(
            id,
            prompt,
            vec![
                AnswerOption::new("0", "Yes"),
                AnswerOption::new("1", "No"),
            ],
        )
    }

    #[test]
    fn option_lookup_by_value() {
        let question = yes_no("q1", "Ready?");
        assert_eq!(question.option("1").map(AnswerOption::label), Some("No"));
        assert!(question.option("2").is_none());
    }

    #[test]
    fn question_lookup_by_id() {
        let quiz = QuizDefinition::new(
            LessonId::new(1),
            vec![yes_no("q1", "First?"), yes_no("q2", "Second?")],
        );
        assert_eq!(quiz.len(), 2);
        assert_eq!(
            quiz.question(&QuestionId::new("q2")).map(Question::prompt),
            Some("Second?")
        );
        assert!(quiz.question(&QuestionId::new("q3")).is_none());
    }

    #[test]
    fn display() {
        assert_eq!(format!("{}", QuestionId::new("q1")), "q1");
        assert_eq!(format!("{}", LessonId::new(7)), "7");
    }
}
