use ecolearn_types::{
    AnswerMap, Notifier, QuestionId, QuizDefinition, QuizOutcome, Severity, TransportError,
};
use tracing::debug;

use crate::{Affordance, QuizPresenter, SubmissionClient, SubmitError};

/// Where the attempt currently stands.
#[derive(Clone, Debug, PartialEq)]
enum Phase {
    /// Collecting answers; the cursor points at the visible question.
    InProgress,
    /// A confirmed submission result arrived; the attempt is over.
    Completed(QuizOutcome),
}

/// Linear navigation through one lesson's question sequence.
///
/// `QuizFlow` owns the navigation cursor and the answer map, drives a
/// [`QuizPresenter`] and reports user-correctable problems through a
/// [`Notifier`]. All transitions happen synchronously except
/// [`QuizFlow::submit`], the one asynchronous boundary.
///
/// The states are `Question(cursor)` for every cursor position plus a
/// terminal `Results` state reached only by a confirmed submission.
/// Navigation outside the valid range is a silent no-op, and there is no
/// transition out of `Results`.
pub struct QuizFlow<P, N> {
    definition: QuizDefinition,
    cursor: usize,
    answers: AnswerMap,
    phase: Phase,
    presenter: P,
    notifier: N,
}

impl<P: QuizPresenter, N: Notifier> QuizFlow<P, N> {
    /// Set up a fresh attempt at question 0.
    ///
    /// The presenter receives the initial control state: retreat and
    /// submit hidden, advance visible but disabled until the first option
    /// is picked.
    pub fn new(definition: QuizDefinition, mut presenter: P, notifier: N) -> Self {
        presenter.set_visible(Affordance::Retreat, false);
        presenter.set_visible(Affordance::Advance, true);
        presenter.set_visible(Affordance::Submit, false);
        presenter.set_enabled(Affordance::Advance, false);
        if !definition.is_empty() {
            presenter.show_question(0);
            presenter.set_progress(1, definition.len());
        }
        Self {
            definition,
            cursor: 0,
            answers: AnswerMap::new(),
            phase: Phase::InProgress,
            presenter,
            notifier,
        }
    }

    /// Index of the currently visible question.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The quiz being attempted.
    pub fn definition(&self) -> &QuizDefinition {
        &self.definition
    }

    /// Answers collected so far.
    pub fn answers(&self) -> &AnswerMap {
        &self.answers
    }

    /// The submission result, once one has arrived.
    pub fn outcome(&self) -> Option<&QuizOutcome> {
        match &self.phase {
            Phase::Completed(outcome) => Some(outcome),
            Phase::InProgress => None,
        }
    }

    /// Whether the attempt has reached the terminal results state.
    pub fn is_completed(&self) -> bool {
        matches!(self.phase, Phase::Completed(_))
    }

    /// The presenter this flow drives.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// The notifier this flow reports through.
    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    fn last_index(&self) -> usize {
        self.definition.len().saturating_sub(1)
    }

    /// Record the answer for a question and mark its option selected.
    ///
    /// Re-selecting overwrites the previous value for that question;
    /// exactly one answer per question is ever recorded. Ids and values
    /// not present in the definition are ignored, as is any selection
    /// after the attempt completed.
    pub fn select_option(&mut self, id: impl Into<QuestionId>, value: impl Into<String>) {
        if self.is_completed() {
            return;
        }
        let id = id.into();
        let value = value.into();
        let Some(question) = self.definition.question(&id) else {
            debug!(%id, "selection for unknown question ignored");
            return;
        };
        if question.option(&value).is_none() {
            debug!(%id, %value, "selection with unknown option value ignored");
            return;
        }
        self.answers.insert(id.clone(), value.clone());
        self.presenter.mark_selected(&id, &value);
        self.presenter.set_enabled(Affordance::Advance, true);
        // On the last question the forward control becomes the submit
        // control; cursor position decides, not answer completeness.
        if self.cursor == self.last_index() {
            self.presenter.set_visible(Affordance::Advance, false);
            self.presenter.set_visible(Affordance::Submit, true);
        }
    }

    /// Move to the next question. No-op on the last question.
    pub fn advance(&mut self) {
        if self.is_completed() || self.cursor >= self.last_index() {
            return;
        }
        self.presenter.hide_question(self.cursor);
        self.cursor += 1;
        self.presenter.show_question(self.cursor);
        self.presenter.set_visible(Affordance::Retreat, true);
        if self.cursor == self.last_index() {
            self.presenter.set_visible(Affordance::Advance, false);
            self.presenter.set_visible(Affordance::Submit, true);
        }
        self.presenter
            .set_progress(self.cursor + 1, self.definition.len());
        debug!(cursor = self.cursor, "advanced");
    }

    /// Move back to the previous question. No-op on the first.
    pub fn retreat(&mut self) {
        if self.is_completed() || self.cursor == 0 {
            return;
        }
        self.presenter.hide_question(self.cursor);
        self.cursor -= 1;
        self.presenter.show_question(self.cursor);
        if self.cursor == 0 {
            self.presenter.set_visible(Affordance::Retreat, false);
        }
        // Leaving the last question swaps submit back for advance.
        self.presenter.set_visible(Affordance::Advance, true);
        self.presenter.set_visible(Affordance::Submit, false);
        self.presenter
            .set_progress(self.cursor + 1, self.definition.len());
        debug!(cursor = self.cursor, "retreated");
    }

    /// Submit the completed answer map.
    ///
    /// With unanswered questions left this emits one warning notification
    /// and returns [`SubmitError::Incomplete`] without touching the
    /// network. Otherwise exactly one request is made, with the submit
    /// control disabled and the busy indicator shown for its whole
    /// duration. A confirmed success is the one-way transition into the
    /// results state: the presenter renders the results panel and the
    /// submit control is never re-enabled. Any failure restores the
    /// control, emits one error notification and leaves answers and
    /// cursor alone so the user can retry manually. Calling this again
    /// after success returns the stored outcome without another request.
    ///
    /// At most one submission is in flight at a time: this takes
    /// `&mut self` across the await, so exclusive ownership enforces what
    /// the disabled control enforces visually.
    pub async fn submit<C: SubmissionClient>(
        &mut self,
        client: &C,
    ) -> Result<QuizOutcome, SubmitError> {
        if let Phase::Completed(outcome) = &self.phase {
            return Ok(outcome.clone());
        }
        let expected = self.definition.len();
        let answered = self.answers.len();
        if answered != expected {
            self.notifier.notify(
                "Please answer all questions before submitting.",
                Severity::Warning,
            );
            return Err(SubmitError::Incomplete { answered, expected });
        }

        let guard = BusyGuard::engage(&mut self.presenter);
        let result = client.submit(self.definition.lesson(), &self.answers).await;
        match result {
            Ok(outcome) => {
                guard.disarm();
                debug!(
                    score = outcome.score(),
                    total = outcome.total(),
                    "submission accepted"
                );
                self.presenter.show_results(&outcome);
                self.phase = Phase::Completed(outcome.clone());
                Ok(outcome)
            }
            Err(err) => {
                drop(guard);
                let message = match &err {
                    TransportError::Rejected { .. } => "Error submitting quiz. Please try again.",
                    _ => "Network error. Please check your connection and try again.",
                };
                self.notifier.notify(message, Severity::Error);
                Err(SubmitError::Transport(err))
            }
        }
    }
}

/// Scoped submit lock: engaging disables the submit control and shows the
/// busy indicator; dropping releases both again on any exit path.
/// `disarm` clears the busy indicator but keeps the control disabled, for
/// the one-way transition into the results state.
struct BusyGuard<'a, P: QuizPresenter> {
    presenter: &'a mut P,
    armed: bool,
}

impl<'a, P: QuizPresenter> BusyGuard<'a, P> {
    fn engage(presenter: &'a mut P) -> Self {
        presenter.set_enabled(Affordance::Submit, false);
        presenter.set_busy(true);
        Self {
            presenter,
            armed: true,
        }
    }

    fn disarm(mut self) {
        self.armed = false;
        self.presenter.set_busy(false);
    }
}

impl<P: QuizPresenter> Drop for BusyGuard<'_, P> {
    fn drop(&mut self) {
        if self.armed {
            self.presenter.set_busy(false);
            self.presenter.set_enabled(Affordance::Submit, true);
        }
    }
}
