//! Integration tests for the quiz flow controller.

use ecolearn_quiz::{
    Affordance, AnswerOption, CollectingNotifier, LessonId, PresenterEvent, Question, QuestionId,
    QuizDefinition, QuizFlow, QuizOutcome, RecordingPresenter, ScriptedClient, Severity,
    SubmitError, TransportError,
};

fn two_options() -> Vec<AnswerOption> {
    vec![
        AnswerOption::new("a", "Option A"),
        AnswerOption::new("b", "Option B"),
    ]
}

fn quiz(questions: usize) -> QuizDefinition {
    QuizDefinition::new(
        LessonId::new(7),
        (1..=questions)
            .map(|n| Question::new(format!("q{n}"), format!("Question {n}?"), two_options()))
            .collect(),
    )
}

fn flow(definition: QuizDefinition) -> QuizFlow<RecordingPresenter, CollectingNotifier> {
    QuizFlow::new(
        definition,
        RecordingPresenter::new(),
        CollectingNotifier::new(),
    )
}

#[test]
fn fresh_attempt_starts_at_question_zero() {
    let flow = flow(quiz(3));

    assert_eq!(flow.cursor(), 0);
    assert!(flow.answers().is_empty());
    assert!(!flow.is_completed());

    let events = flow.presenter().events();
    assert!(events.contains(&PresenterEvent::SetVisible(Affordance::Retreat, false)));
    assert!(events.contains(&PresenterEvent::SetVisible(Affordance::Submit, false)));
    assert!(events.contains(&PresenterEvent::SetEnabled(Affordance::Advance, false)));
    assert!(events.contains(&PresenterEvent::ShowQuestion(0)));
    assert!(events.contains(&PresenterEvent::SetProgress(1, 3)));
}

#[test]
fn cursor_stays_in_bounds() {
    let mut flow = flow(quiz(3));

    flow.retreat();
    flow.retreat();
    assert_eq!(flow.cursor(), 0);

    for _ in 0..10 {
        flow.advance();
        assert!(flow.cursor() <= 2);
    }
    assert_eq!(flow.cursor(), 2);

    flow.retreat();
    assert_eq!(flow.cursor(), 1);
    for _ in 0..5 {
        flow.retreat();
    }
    assert_eq!(flow.cursor(), 0);
}

#[test]
fn boundary_navigation_is_a_noop() {
    let mut flow = flow(quiz(3));

    flow.presenter_mut().clear();
    flow.retreat();
    assert_eq!(flow.cursor(), 0);
    assert!(flow.presenter().events().is_empty());

    flow.advance();
    flow.advance();
    assert_eq!(flow.cursor(), 2);

    // last question, submit mode already switched in
    flow.select_option("q3", "a");
    flow.presenter_mut().clear();
    flow.advance();
    assert_eq!(flow.cursor(), 2);
    assert!(flow.presenter().events().is_empty());
}

#[test]
fn reselecting_overwrites_the_answer() {
    let mut flow = flow(quiz(2));

    flow.select_option("q1", "b");
    flow.select_option("q1", "a");

    assert_eq!(flow.answers().len(), 1);
    assert_eq!(flow.answers().get(&QuestionId::new("q1")), Some("a"));
}

#[test]
fn selection_enables_forward_navigation() {
    let mut flow = flow(quiz(2));

    flow.presenter_mut().clear();
    flow.select_option("q1", "b");

    let events = flow.presenter().events();
    assert!(events.contains(&PresenterEvent::MarkSelected(QuestionId::new("q1"), "b".into())));
    assert!(events.contains(&PresenterEvent::SetEnabled(Affordance::Advance, true)));
    // not on the last question, so no submit swap yet
    assert!(!events.contains(&PresenterEvent::SetVisible(Affordance::Submit, true)));
}

#[test]
fn unknown_selection_is_ignored() {
    let mut flow = flow(quiz(2));
    flow.presenter_mut().clear();

    flow.select_option("q9", "a");
    flow.select_option("q1", "z");

    assert!(flow.answers().is_empty());
    assert!(flow.presenter().events().is_empty());
}

#[test]
fn navigation_updates_progress_and_affordances() {
    let mut flow = flow(quiz(3));

    flow.advance();
    let events = flow.presenter().events();
    assert!(events.contains(&PresenterEvent::HideQuestion(0)));
    assert!(events.contains(&PresenterEvent::ShowQuestion(1)));
    assert!(events.contains(&PresenterEvent::SetVisible(Affordance::Retreat, true)));
    assert!(events.contains(&PresenterEvent::SetProgress(2, 3)));

    // landing on the last index swaps advance for submit
    flow.presenter_mut().clear();
    flow.advance();
    let events = flow.presenter().events();
    assert!(events.contains(&PresenterEvent::SetVisible(Affordance::Advance, false)));
    assert!(events.contains(&PresenterEvent::SetVisible(Affordance::Submit, true)));

    // leaving it swaps back and hides retreat at index 0
    flow.retreat();
    flow.presenter_mut().clear();
    flow.retreat();
    let events = flow.presenter().events();
    assert!(events.contains(&PresenterEvent::SetVisible(Affordance::Retreat, false)));
    assert!(events.contains(&PresenterEvent::SetVisible(Affordance::Advance, true)));
    assert!(events.contains(&PresenterEvent::SetVisible(Affordance::Submit, false)));
    assert_eq!(flow.cursor(), 0);
}

#[tokio::test]
async fn incomplete_submission_touches_no_network() {
    let client = ScriptedClient::new().with_outcome(QuizOutcome::new(3, 3, 30));
    let mut flow = flow(quiz(3));

    flow.select_option("q1", "a");
    flow.advance();
    flow.select_option("q2", "b");

    let result = flow.submit(&client).await;
    assert!(matches!(
        result,
        Err(SubmitError::Incomplete {
            answered: 2,
            expected: 3
        })
    ));
    assert_eq!(client.call_count(), 0);
    assert_eq!(
        flow.notifier().messages(),
        vec![(
            "Please answer all questions before submitting.".to_string(),
            Severity::Warning
        )]
    );
}

#[tokio::test]
async fn two_question_walkthrough_submits_the_answer_map() {
    let client = ScriptedClient::new().with_outcome(QuizOutcome::new(1, 2, 10));
    let mut flow = flow(quiz(2));

    flow.select_option("q1", "b");
    flow.advance();
    flow.select_option("q2", "a");

    // submit swapped in at the last cursor position, before submission
    assert_eq!(flow.cursor(), 1);
    assert!(flow
        .presenter()
        .events()
        .contains(&PresenterEvent::SetVisible(Affordance::Submit, true)));

    let outcome = flow.submit(&client).await.unwrap();
    assert_eq!(outcome, QuizOutcome::new(1, 2, 10));

    let calls = client.calls();
    assert_eq!(calls.len(), 1);
    let (lesson, answers) = &calls[0];
    assert_eq!(*lesson, LessonId::new(7));
    assert_eq!(answers.len(), 2);
    assert_eq!(answers.get(&QuestionId::new("q1")), Some("b"));
    assert_eq!(answers.get(&QuestionId::new("q2")), Some("a"));
}

#[tokio::test]
async fn success_is_a_one_way_transition() {
    let client = ScriptedClient::new().with_outcome(QuizOutcome::new(1, 2, 10));
    let mut flow = flow(quiz(2));

    flow.select_option("q1", "b");
    flow.advance();
    flow.select_option("q2", "a");
    let outcome = flow.submit(&client).await.unwrap();

    assert!(flow.is_completed());
    assert_eq!(flow.outcome(), Some(&outcome));

    let events = flow.presenter().events();
    assert!(events.contains(&PresenterEvent::ShowResults(outcome.clone())));
    // the submit control is never re-enabled after the results render
    let busy_at = events
        .iter()
        .position(|event| *event == PresenterEvent::SetBusy(true))
        .unwrap();
    assert!(!events[busy_at..]
        .contains(&PresenterEvent::SetEnabled(Affordance::Submit, true)));

    // a second submit performs no request and changes nothing
    flow.presenter_mut().clear();
    let again = flow.submit(&client).await.unwrap();
    assert_eq!(again, outcome);
    assert_eq!(client.call_count(), 1);
    assert!(flow.presenter().events().is_empty());

    // and neither navigation nor selection escape the results state
    flow.advance();
    flow.retreat();
    flow.select_option("q1", "a");
    assert!(flow.presenter().events().is_empty());
    assert_eq!(flow.answers().get(&QuestionId::new("q1")), Some("b"));
}

#[tokio::test]
async fn rejection_restores_the_submit_control() {
    let client = ScriptedClient::new()
        .with_failure(TransportError::Rejected { message: None })
        .with_outcome(QuizOutcome::new(2, 2, 25));
    let mut flow = flow(quiz(2));

    flow.select_option("q1", "b");
    flow.advance();
    flow.select_option("q2", "a");

    let result = flow.submit(&client).await;
    assert!(matches!(
        result,
        Err(SubmitError::Transport(TransportError::Rejected { .. }))
    ));

    // answers survive for a manual retry
    assert!(!flow.is_completed());
    assert_eq!(flow.answers().len(), 2);
    assert_eq!(
        flow.notifier().messages(),
        vec![(
            "Error submitting quiz. Please try again.".to_string(),
            Severity::Error
        )]
    );

    // disable/busy pair released in reverse order on the failure path
    let events = flow.presenter().events();
    assert_eq!(
        &events[events.len() - 4..],
        &[
            PresenterEvent::SetEnabled(Affordance::Submit, false),
            PresenterEvent::SetBusy(true),
            PresenterEvent::SetBusy(false),
            PresenterEvent::SetEnabled(Affordance::Submit, true),
        ]
    );

    // the manual retry goes through without re-answering
    let outcome = flow.submit(&client).await.unwrap();
    assert_eq!(outcome, QuizOutcome::new(2, 2, 25));
    assert_eq!(client.call_count(), 2);
}

#[tokio::test]
async fn network_failure_notifies_and_keeps_state() {
    let client =
        ScriptedClient::new().with_failure(TransportError::request(anyhow::anyhow!("refused")));
    let mut flow = flow(quiz(1));

    flow.select_option("q1", "a");
    let result = flow.submit(&client).await;

    assert!(matches!(
        result,
        Err(SubmitError::Transport(TransportError::Request(_)))
    ));
    assert_eq!(flow.answers().len(), 1);
    assert_eq!(
        flow.notifier().messages(),
        vec![(
            "Network error. Please check your connection and try again.".to_string(),
            Severity::Error
        )]
    );
}

#[tokio::test]
async fn seeded_climate_quiz_round() {
    let definition = example_lessons::climate_change();
    assert_eq!(definition.len(), 2);

    let client = ScriptedClient::new().with_outcome(QuizOutcome::new(2, 2, 20));
    let mut flow = flow(definition);

    flow.select_option("1", "1");
    flow.advance();
    flow.select_option("2", "2");

    let outcome = flow.submit(&client).await.unwrap();
    assert_eq!(outcome.percentage(), 100);
    assert_eq!(outcome.points_earned(), 20);
}
