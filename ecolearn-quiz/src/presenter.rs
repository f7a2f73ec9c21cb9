use ecolearn_types::{QuestionId, QuizOutcome};

/// One of the three navigation controls the controller toggles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordance {
    /// The "go back" control.
    Retreat,
    /// The "next question" control.
    Advance,
    /// The "submit quiz" control.
    Submit,
}

/// The presentation layer for one quiz view.
///
/// Implementations own one panel per question, one interactive element
/// per option and the navigation controls; the controller only toggles
/// their visibility and enabled state, it never creates or destroys
/// them. All methods are infallible from the controller's point of view:
/// a presenter that cannot honor a toggle simply ignores it.
pub trait QuizPresenter {
    /// Make the question panel at `index` visible.
    fn show_question(&mut self, index: usize);

    /// Hide the question panel at `index`.
    fn hide_question(&mut self, index: usize);

    /// Mark one option of a question as selected and all of its siblings
    /// as unselected.
    fn mark_selected(&mut self, question: &QuestionId, value: &str);

    /// Show or hide a navigation control.
    fn set_visible(&mut self, affordance: Affordance, visible: bool);

    /// Enable or disable a navigation control.
    fn set_enabled(&mut self, affordance: Affordance, enabled: bool);

    /// Show or hide the submission busy indicator.
    fn set_busy(&mut self, busy: bool);

    /// Update the progress indicator to question `position` of `total`.
    fn set_progress(&mut self, position: usize, total: usize);

    /// Replace the quiz form with the terminal results panel.
    fn show_results(&mut self, outcome: &QuizOutcome);
}
