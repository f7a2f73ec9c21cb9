use dialoguer::{
    Confirm, Select,
    console::style,
    theme::{ColorfulTheme, SimpleTheme, Theme},
};
use ecolearn_quiz::{
    Affordance, AnswerOption, Notifier, QuestionId, QuizDefinition, QuizFlow, QuizOutcome,
    QuizPresenter, Severity, SubmissionClient, SubmitError, format_count,
};
use thiserror::Error;

const GO_BACK: &str = "(go back)";

/// Error type for the terminal wizard.
#[derive(Debug, Error)]
pub enum WizardError {
    /// User cancelled the quiz (e.g., pressed Ctrl+C or Escape).
    #[error("Quiz cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// The submission failed and the user declined to retry.
    #[error(transparent)]
    Submit(#[from] SubmitError),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

fn prompt_error(err: dialoguer::Error) -> WizardError {
    if is_cancelled(&err) {
        WizardError::Cancelled
    } else {
        WizardError::Dialoguer(err)
    }
}

/// Interactive CLI runner for one quiz attempt.
///
/// This backend drives a [`QuizFlow`] through terminal prompts; the flow
/// keeps the cursor, the answers and the submission rules, the wizard
/// only translates prompt picks into flow operations.
#[derive(Debug, Default, Clone)]
pub struct DialoguerWizard {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl DialoguerWizard {
    /// Create a new wizard with the default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a wizard with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    fn theme(&self) -> Box<dyn Theme> {
        if self.colorful {
            Box::new(ColorfulTheme::default())
        } else {
            Box::new(SimpleTheme)
        }
    }

    /// Run one quiz attempt to completion and return the scored outcome.
    pub async fn run<C>(
        &self,
        definition: QuizDefinition,
        client: &C,
    ) -> Result<QuizOutcome, WizardError>
    where
        C: SubmissionClient,
    {
        let theme = self.theme();
        let mut flow = QuizFlow::new(definition, TerminalPresenter, TerminalNotifier);

        loop {
            let Some(question) = flow.definition().question_at(flow.cursor()).cloned() else {
                // no questions to ask: the empty attempt goes straight out
                return Ok(flow.submit(client).await?);
            };

            let position = flow.cursor() + 1;
            let total = flow.definition().len();

            let mut items: Vec<&str> = question.options().iter().map(AnswerOption::label).collect();
            if flow.cursor() > 0 {
                items.push(GO_BACK);
            }

            // land on the previously chosen option when revisiting
            let default = flow
                .answers()
                .get(question.id())
                .and_then(|value| {
                    question
                        .options()
                        .iter()
                        .position(|option| option.value() == value)
                })
                .unwrap_or(0);

            let choice = Select::with_theme(&*theme)
                .with_prompt(format!("({position}/{total}) {}", question.prompt()))
                .items(&items)
                .default(default)
                .interact_opt()
                .map_err(prompt_error)?;

            let Some(choice) = choice else {
                return Err(WizardError::Cancelled);
            };

            if choice == question.options().len() {
                flow.retreat();
                continue;
            }

            let value = question.options()[choice].value().to_string();
            flow.select_option(question.id().clone(), value);

            if flow.cursor() + 1 < flow.definition().len() {
                flow.advance();
                continue;
            }

            let confirmed = Confirm::with_theme(&*theme)
                .with_prompt("Submit your answers?")
                .default(true)
                .interact_opt()
                .map_err(prompt_error)?;
            if confirmed != Some(true) {
                // stay on the last question; answers are kept
                continue;
            }

            match flow.submit(client).await {
                Ok(outcome) => return Ok(outcome),
                Err(err @ SubmitError::Incomplete { .. }) => return Err(err.into()),
                Err(err) => {
                    let retry = Confirm::with_theme(&*theme)
                        .with_prompt("Submission failed. Try again?")
                        .default(true)
                        .interact_opt()
                        .map_err(prompt_error)?;
                    if retry != Some(true) {
                        return Err(err.into());
                    }
                }
            }
        }
    }
}

/// Presenter for the terminal flow.
///
/// Panel visibility and control toggles have no terminal counterpart -
/// the prompt loop already shows exactly one question at a time - so only
/// the busy indicator and the results panel render anything.
struct TerminalPresenter;

impl QuizPresenter for TerminalPresenter {
    fn show_question(&mut self, _index: usize) {}

    fn hide_question(&mut self, _index: usize) {}

    fn mark_selected(&mut self, _question: &QuestionId, _value: &str) {}

    fn set_visible(&mut self, _affordance: Affordance, _visible: bool) {}

    fn set_enabled(&mut self, _affordance: Affordance, _enabled: bool) {}

    fn set_busy(&mut self, busy: bool) {
        if busy {
            println!("{}", style("Submitting...").dim());
        }
    }

    fn set_progress(&mut self, _position: usize, _total: usize) {}

    fn show_results(&mut self, outcome: &QuizOutcome) {
        println!();
        println!("{}", style("Quiz completed!").green().bold());
        println!(
            "Your score: {}/{} ({}%)",
            outcome.score(),
            outcome.total(),
            outcome.percentage()
        );
        println!(
            "Points earned: +{} Eco Points",
            format_count(u64::from(outcome.points_earned()))
        );
    }
}

/// Notifier printing severity-tagged lines to stderr.
struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        let tag = match severity {
            Severity::Info => style(severity.as_str()).cyan(),
            Severity::Success => style(severity.as_str()).green(),
            Severity::Warning => style(severity.as_str()).yellow(),
            Severity::Error => style(severity.as_str()).red(),
        };
        eprintln!("[{tag}] {message}");
    }
}
