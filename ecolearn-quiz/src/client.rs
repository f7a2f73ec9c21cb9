use std::future::Future;

use ecolearn_types::{AnswerMap, LessonId, QuizOutcome, TransportError};

/// The question submission endpoint.
///
/// The controller makes at most one call per submission attempt and the
/// whole answer map travels in a single request. Implementations decode
/// the response against a strict schema and report anything else as a
/// [`TransportError`]; a partially filled outcome must never escape.
pub trait SubmissionClient {
    /// Submit a completed answer map for a lesson's quiz.
    fn submit(
        &self,
        lesson: LessonId,
        answers: &AnswerMap,
    ) -> impl Future<Output = Result<QuizOutcome, TransportError>>;
}
