//! Core types for the EcoLearn client.
//!
//! This crate provides the foundational types shared by the quiz flow
//! controller and the HTTP client:
//! - `QuizDefinition`, `Question` and `AnswerOption` - one lesson's question sequence
//! - `QuestionId` and `AnswerMap` - collected answers, keyed by question
//! - `QuizOutcome` and `ChallengeOutcome` - scored results from the server
//! - `Severity` and the `Notifier` trait - the transient message surface
//! - `TransportError` - failures talking to the server

mod question;
pub use question::{AnswerOption, LessonId, Question, QuestionId, QuizDefinition};

mod answers;
pub use answers::AnswerMap;

mod outcome;
pub use outcome::{ChallengeId, ChallengeOutcome, QuizOutcome};

mod notify;
pub use notify::{Notifier, NullNotifier, Severity};

mod error;
pub use error::TransportError;

mod format;
pub use format::format_count;
