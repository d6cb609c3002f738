use inspect_core::model::ChoiceId;

use crate::vm::{SessionIntent, SessionPhase};

use super::test_harness::{ViewKind, setup_view_harness};

fn select(id: &str) -> SessionIntent {
    SessionIntent::Select(ChoiceId::new(id))
}

#[test]
fn start_view_smoke_lists_levels() {
    let mut harness = setup_view_harness(ViewKind::Start);
    harness.rebuild();
    let html = harness.render();
    for title in ["Blog Layout", "Landing Page", "Dashboard"] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert_eq!(html.matches("Start Challenge").count(), 3, "{html}");
    assert!(html.contains("5 questions"), "missing count in {html}");
}

#[test]
fn game_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Play("easy".to_string()));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "missing header in {html}");
    assert!(html.contains("Inspecting: header"), "missing badge in {html}");
    assert!(html.contains("Header Structure"), "missing title in {html}");
    assert!(html.contains("Submit Answer"), "missing submit in {html}");
    assert!(html.contains("tok tok--blank"), "missing placeholder token in {html}");
    assert!(html.contains("100%"), "missing zoom label in {html}");
    assert!(html.contains("My Blog"), "missing canvas in {html}");
    assert!(html.contains("inspector-outline"), "missing highlight in {html}");
}

#[test]
fn game_view_smoke_unknown_level_shows_fallback() {
    let mut harness = setup_view_harness(ViewKind::Play("expert".to_string()));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Back to levels"), "missing fallback link in {html}");
    assert!(!html.contains("Submit Answer"), "unexpected question in {html}");
}

#[test]
fn game_view_marks_answers_after_submit() {
    let mut harness = setup_view_harness(ViewKind::Play("easy".to_string()));
    harness.rebuild();

    harness.dispatch(select("a"));
    let html = harness.render();
    assert!(html.contains("choice choice--selected"), "missing selection in {html}");

    harness.dispatch(SessionIntent::Submit);
    let html = harness.render();
    assert!(html.contains("choice choice--wrong"), "missing wrong mark in {html}");
    assert!(html.contains("choice choice--correct"), "missing correct mark in {html}");
    assert!(html.contains("Explain"), "missing explain in {html}");
    assert!(html.contains("Next Question"), "missing next in {html}");
    assert!(!html.contains("question-explanation"), "explanation shown early in {html}");

    harness.dispatch(SessionIntent::Explain);
    let html = harness.render();
    assert!(html.contains("question-explanation"), "missing explanation in {html}");
    assert!(html.contains("semantic HTML5 tag"), "missing explanation text in {html}");
}

#[test]
fn game_view_shows_end_screen_after_last_question() {
    let mut harness = setup_view_harness(ViewKind::Play("easy".to_string()));
    harness.rebuild();

    for answer in ["b", "c", "a", "b", "a"] {
        harness.dispatch(select(answer));
        harness.dispatch(SessionIntent::Submit);
        harness.dispatch(SessionIntent::Next);
    }

    let handles = harness.game_handles.clone().expect("game handles");
    let phase = harness
        .dom
        .in_runtime(|| handles.vm().read().as_ref().map(|vm| vm.phase()).ok());
    assert_eq!(phase, Some(SessionPhase::Complete));

    let html = harness.render();
    assert!(html.contains("Good Try!"), "missing headline in {html}");
    assert!(html.contains("Review Your Mistakes"), "missing review in {html}");
    assert!(html.contains("Navigation Links"), "missing mistake in {html}");
    assert!(html.contains("Try Again"), "missing restart in {html}");

    harness.dispatch(SessionIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Question 1 of 5"), "restart did not reset in {html}");
}
