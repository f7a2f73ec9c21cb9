//! # ecolearn-quiz
//!
//! The quiz flow controller of the EcoLearn client: linear navigation
//! through a fixed, ordered question sequence, one answer per question,
//! one batched submission. Presentation-agnostic.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use ecolearn_quiz::QuizFlow;
//!
//! let mut flow = QuizFlow::new(definition, presenter, notifier);
//!
//! flow.select_option("q1", "2");
//! flow.advance();
//! flow.select_option("q2", "0");
//!
//! let outcome = flow.submit(&client).await?;
//! println!("{}/{}", outcome.score(), outcome.total());
//! ```
//!
//! ## Seams
//!
//! The controller owns only the navigation cursor, the answer map and the
//! terminal result. Everything else is injected:
//! - [`QuizPresenter`] - the presentation layer holding the question
//!   panels and navigation controls
//! - [`Notifier`] - the transient message surface
//! - [`SubmissionClient`] - the question submission endpoint
//!
//! Concrete presenters live in separate crates (e.g. the dialoguer
//! terminal wizard); [`RecordingPresenter`] and [`ScriptedClient`] cover
//! tests.

// Re-export all types from ecolearn-types
pub use ecolearn_types::*;

mod controller;
pub use controller::QuizFlow;

mod presenter;
pub use presenter::{Affordance, QuizPresenter};

mod client;
pub use client::SubmissionClient;

mod error;
pub use error::SubmitError;

// Test doubles for exercising the flow without a UI or a server
mod test_support;
pub use test_support::{CollectingNotifier, PresenterEvent, RecordingPresenter, ScriptedClient};
