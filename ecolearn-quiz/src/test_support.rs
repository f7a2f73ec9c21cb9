//! Test doubles for exercising the quiz flow without a UI or a server.
//!
//! `RecordingPresenter` keeps an ordered log of every presenter call,
//! `ScriptedClient` replays pre-configured submission results while
//! recording each payload it was handed, and `CollectingNotifier`
//! captures notifications.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut flow = QuizFlow::new(
//!     definition,
//!     RecordingPresenter::new(),
//!     CollectingNotifier::new(),
//! );
//! let client = ScriptedClient::new().with_outcome(QuizOutcome::new(2, 2, 25));
//!
//! flow.select_option("q1", "0");
//! let outcome = flow.submit(&client).await.unwrap();
//!
//! assert_eq!(client.call_count(), 1);
//! assert!(flow.presenter().events().contains(&PresenterEvent::ShowResults(outcome)));
//! ```

use std::collections::VecDeque;
use std::future::Future;
use std::sync::Mutex;

use ecolearn_types::{
    AnswerMap, LessonId, QuestionId, QuizOutcome, Severity, TransportError,
};

use crate::{Affordance, Notifier, QuizPresenter, SubmissionClient};

/// One observed presenter call.
#[derive(Clone, Debug, PartialEq)]
pub enum PresenterEvent {
    ShowQuestion(usize),
    HideQuestion(usize),
    MarkSelected(QuestionId, String),
    SetVisible(Affordance, bool),
    SetEnabled(Affordance, bool),
    SetBusy(bool),
    SetProgress(usize, usize),
    ShowResults(QuizOutcome),
}

/// A presenter that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    events: Vec<PresenterEvent>,
}

impl RecordingPresenter {
    /// Create a new empty recording presenter.
    pub fn new() -> Self {
        Self::default()
    }

    /// All events observed so far, in call order.
    pub fn events(&self) -> &[PresenterEvent] {
        &self.events
    }

    /// Drop the recorded events, keeping the presenter usable.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl QuizPresenter for RecordingPresenter {
    fn show_question(&mut self, index: usize) {
        self.events.push(PresenterEvent::ShowQuestion(index));
    }

    fn hide_question(&mut self, index: usize) {
        self.events.push(PresenterEvent::HideQuestion(index));
    }

    fn mark_selected(&mut self, question: &QuestionId, value: &str) {
        self.events
            .push(PresenterEvent::MarkSelected(question.clone(), value.to_string()));
    }

    fn set_visible(&mut self, affordance: Affordance, visible: bool) {
        self.events.push(PresenterEvent::SetVisible(affordance, visible));
    }

    fn set_enabled(&mut self, affordance: Affordance, enabled: bool) {
        self.events.push(PresenterEvent::SetEnabled(affordance, enabled));
    }

    fn set_busy(&mut self, busy: bool) {
        self.events.push(PresenterEvent::SetBusy(busy));
    }

    fn set_progress(&mut self, position: usize, total: usize) {
        self.events.push(PresenterEvent::SetProgress(position, total));
    }

    fn show_results(&mut self, outcome: &QuizOutcome) {
        self.events.push(PresenterEvent::ShowResults(outcome.clone()));
    }
}

/// A submission client that replays scripted results and records the
/// payload of every request it receives.
///
/// Results are consumed in queue order; a call with nothing queued fails
/// like an unreachable server.
#[derive(Debug, Default)]
pub struct ScriptedClient {
    results: Mutex<VecDeque<Result<QuizOutcome, TransportError>>>,
    calls: Mutex<Vec<(LessonId, AnswerMap)>>,
}

impl ScriptedClient {
    /// Create a new client with nothing queued.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful outcome for the next submission.
    pub fn with_outcome(self, outcome: QuizOutcome) -> Self {
        self.results
            .lock()
            .expect("scripted results poisoned")
            .push_back(Ok(outcome));
        self
    }

    /// Queue a failure for the next submission.
    pub fn with_failure(self, error: TransportError) -> Self {
        self.results
            .lock()
            .expect("scripted results poisoned")
            .push_back(Err(error));
        self
    }

    /// Number of requests this client has seen.
    pub fn call_count(&self) -> usize {
        self.calls.lock().expect("recorded calls poisoned").len()
    }

    /// The payload of every request, in order.
    pub fn calls(&self) -> Vec<(LessonId, AnswerMap)> {
        self.calls.lock().expect("recorded calls poisoned").clone()
    }
}

impl SubmissionClient for ScriptedClient {
    fn submit(
        &self,
        lesson: LessonId,
        answers: &AnswerMap,
    ) -> impl Future<Output = Result<QuizOutcome, TransportError>> {
        self.calls
            .lock()
            .expect("recorded calls poisoned")
            .push((lesson, answers.clone()));
        let result = self
            .results
            .lock()
            .expect("scripted results poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Err(TransportError::request(anyhow::anyhow!(
                    "no scripted result queued"
                )))
            });
        async move { result }
    }
}

/// A notifier that collects every message with its severity.
#[derive(Debug, Default)]
pub struct CollectingNotifier {
    messages: Mutex<Vec<(String, Severity)>>,
}

impl CollectingNotifier {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// All collected messages, in order.
    pub fn messages(&self) -> Vec<(String, Severity)> {
        self.messages
            .lock()
            .expect("collected messages poisoned")
            .clone()
    }
}

impl Notifier for CollectingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.messages
            .lock()
            .expect("collected messages poisoned")
            .push((message.to_string(), severity));
    }
}
