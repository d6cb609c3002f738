use std::sync::Arc;

use inspect_core::model::{ChoiceId, Level, LevelId, QuizSession, SessionCommand};
use services::{SessionError, SessionLoopService, SessionProgress};

use crate::views::ViewError;

use super::code_vm::{CodeLineVm, code_lines};
use super::level_vm::difficulty_class;
use super::result_vm::ResultVm;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionIntent {
    Select(ChoiceId),
    Submit,
    Explain,
    Next,
    Restart,
}

impl SessionIntent {
    fn command(self) -> SessionCommand {
        match self {
            SessionIntent::Select(choice) => SessionCommand::Select(choice),
            SessionIntent::Submit => SessionCommand::Submit,
            SessionIntent::Explain => SessionCommand::RevealExplanation,
            SessionIntent::Next => SessionCommand::Advance,
            SessionIntent::Restart => SessionCommand::Restart,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Choosing,
    Answered,
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Ignored,
    Continue,
    Completed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChoiceVariant {
    Idle,
    Selected,
    Correct,
    Wrong,
}

impl ChoiceVariant {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            ChoiceVariant::Idle => "choice",
            ChoiceVariant::Selected => "choice choice--selected",
            ChoiceVariant::Correct => "choice choice--correct",
            ChoiceVariant::Wrong => "choice choice--wrong",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceVm {
    pub id: ChoiceId,
    pub label: String,
    pub code: String,
    pub variant: ChoiceVariant,
    pub disabled: bool,
}

impl ChoiceVm {
    /// Text shown in the round badge: a mark once graded, otherwise the label.
    #[must_use]
    pub fn badge(&self) -> &str {
        match self.variant {
            ChoiceVariant::Correct => "✓",
            ChoiceVariant::Wrong => "✕",
            ChoiceVariant::Idle | ChoiceVariant::Selected => &self.label,
        }
    }
}

/// Everything the question panel renders for the current question.
#[derive(Clone, Debug, PartialEq)]
pub struct QuestionPanelVm {
    pub question_label: String,
    pub score: usize,
    pub progress_width: String,
    pub inspecting: String,
    pub title: String,
    pub description: String,
    pub code: Vec<CodeLineVm>,
    pub choices: Vec<ChoiceVm>,
    pub phase: SessionPhase,
    pub can_submit: bool,
    pub can_explain: bool,
    pub explanation: Option<String>,
    pub next_label: &'static str,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionVm {
    session: QuizSession,
}

impl SessionVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn level(&self) -> &Arc<Level> {
        self.session.level()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.session.is_complete() {
            SessionPhase::Complete
        } else if self.session.is_answered() {
            SessionPhase::Answered
        } else {
            SessionPhase::Choosing
        }
    }

    pub fn dispatch(
        &mut self,
        session_loop: &SessionLoopService,
        intent: SessionIntent,
    ) -> SessionOutcome {
        let step = session_loop.dispatch(&mut self.session, intent.command());
        if !step.applied {
            SessionOutcome::Ignored
        } else if step.is_complete {
            SessionOutcome::Completed
        } else {
            SessionOutcome::Continue
        }
    }

    #[must_use]
    pub fn difficulty_label(&self) -> &'static str {
        self.level().difficulty().as_str()
    }

    #[must_use]
    pub fn difficulty_class(&self) -> &'static str {
        difficulty_class(self.level().difficulty())
    }

    #[must_use]
    pub fn panel(&self) -> QuestionPanelVm {
        let question = self.session.current_question();
        let progress = SessionProgress::from_session(&self.session);
        let phase = self.phase();
        let answered = self.session.is_answered();
        let selected = self.session.selected_answer();

        let choices = question
            .choices()
            .iter()
            .map(|choice| {
                let is_selected = selected == Some(choice.id());
                let variant = if answered && question.is_correct(choice.id()) {
                    ChoiceVariant::Correct
                } else if answered && is_selected {
                    ChoiceVariant::Wrong
                } else if is_selected {
                    ChoiceVariant::Selected
                } else {
                    ChoiceVariant::Idle
                };
                ChoiceVm {
                    id: choice.id().clone(),
                    label: choice.label().to_string(),
                    code: choice.code().to_string(),
                    variant,
                    disabled: answered,
                }
            })
            .collect();

        QuestionPanelVm {
            question_label: format!("Question {} of {}", progress.number, progress.total),
            score: progress.score,
            progress_width: progress.percent_label(),
            inspecting: question.highlight_element().to_string(),
            title: question.title().to_string(),
            description: question.description().to_string(),
            code: code_lines(question.code_snippet()),
            choices,
            phase,
            can_submit: !answered && selected.is_some(),
            can_explain: answered && !self.session.show_explanation(),
            explanation: self
                .session
                .show_explanation()
                .then(|| question.explanation().to_string()),
            next_label: if self.session.is_last_question() {
                "See Results"
            } else {
                "Next Question"
            },
        }
    }

    #[must_use]
    pub fn result(&self, session_loop: &SessionLoopService) -> ResultVm {
        ResultVm::from_result(&session_loop.result(&self.session))
    }

    /// Keyboard shortcut for the current phase. `key` is the DOM key name.
    #[must_use]
    pub fn key_intent(&self, key: &str) -> Option<SessionIntent> {
        match self.phase() {
            SessionPhase::Complete => None,
            SessionPhase::Answered => match key {
                "Enter" | "n" | "N" => Some(SessionIntent::Next),
                "e" | "E" if !self.session.show_explanation() => Some(SessionIntent::Explain),
                _ => None,
            },
            SessionPhase::Choosing => {
                if key == "Enter" {
                    return self
                        .session
                        .selected_answer()
                        .is_some()
                        .then_some(SessionIntent::Submit);
                }
                let question = self.session.current_question();
                if let Ok(number) = key.parse::<usize>() {
                    return number
                        .checked_sub(1)
                        .and_then(|idx| question.choices().get(idx))
                        .map(|choice| SessionIntent::Select(choice.id().clone()));
                }
                question
                    .choices()
                    .iter()
                    .find(|choice| choice.label().eq_ignore_ascii_case(key))
                    .map(|choice| SessionIntent::Select(choice.id().clone()))
            }
        }
    }
}

/// # Errors
///
/// Returns `ViewError::LevelNotFound` when the id is blank or not in the catalog.
pub fn start_session(
    session_loop: &SessionLoopService,
    level_id: &str,
) -> Result<SessionVm, ViewError> {
    let level_id: LevelId = level_id.parse().map_err(|_| ViewError::LevelNotFound)?;
    match session_loop.start_session(&level_id) {
        Ok(session) => Ok(SessionVm::new(session)),
        Err(SessionError::LevelNotFound(_)) => Err(ViewError::LevelNotFound),
        Err(_) => Err(ViewError::Unknown),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use services::LevelCatalog;

    use super::*;

    fn session_loop() -> SessionLoopService {
        SessionLoopService::new(Arc::new(LevelCatalog::builtin().unwrap()))
    }

    fn choice(id: &str) -> SessionIntent {
        SessionIntent::Select(ChoiceId::new(id))
    }

    #[test]
    fn unknown_or_blank_level_is_not_found() {
        let session_loop = session_loop();
        assert_eq!(
            start_session(&session_loop, "expert").unwrap_err(),
            ViewError::LevelNotFound
        );
        assert_eq!(
            start_session(&session_loop, "  ").unwrap_err(),
            ViewError::LevelNotFound
        );
    }

    #[test]
    fn fresh_panel_shows_first_question() {
        let vm = start_session(&session_loop(), "easy").unwrap();
        let panel = vm.panel();
        assert_eq!(panel.question_label, "Question 1 of 5");
        assert_eq!(panel.progress_width, "20%");
        assert_eq!(panel.inspecting, "header");
        assert_eq!(panel.choices.len(), 3);
        assert!(panel.choices.iter().all(|c| c.variant == ChoiceVariant::Idle));
        assert!(!panel.can_submit);
        assert_eq!(panel.next_label, "Next Question");
        assert_eq!(vm.difficulty_label(), "easy");
    }

    #[test]
    fn wrong_answer_marks_both_choices() {
        let session_loop = session_loop();
        let mut vm = start_session(&session_loop, "easy").unwrap();
        assert_eq!(vm.dispatch(&session_loop, choice("a")), SessionOutcome::Continue);
        assert!(vm.panel().can_submit);
        assert_eq!(
            vm.panel().choices[0].variant,
            ChoiceVariant::Selected
        );

        vm.dispatch(&session_loop, SessionIntent::Submit);
        let panel = vm.panel();
        assert_eq!(panel.phase, SessionPhase::Answered);
        assert_eq!(panel.choices[0].variant, ChoiceVariant::Wrong);
        assert_eq!(panel.choices[0].badge(), "✕");
        assert_eq!(panel.choices[1].variant, ChoiceVariant::Correct);
        assert_eq!(panel.choices[1].badge(), "✓");
        assert_eq!(panel.choices[2].badge(), "C");
        assert!(panel.choices.iter().all(|c| c.disabled));
        assert_eq!(panel.score, 0);
        assert!(panel.can_explain);
        assert!(panel.explanation.is_none());
    }

    #[test]
    fn explanation_is_shown_once() {
        let session_loop = session_loop();
        let mut vm = start_session(&session_loop, "easy").unwrap();
        vm.dispatch(&session_loop, choice("b"));
        vm.dispatch(&session_loop, SessionIntent::Submit);
        assert_eq!(vm.dispatch(&session_loop, SessionIntent::Explain), SessionOutcome::Continue);
        let panel = vm.panel();
        assert!(!panel.can_explain);
        assert!(panel.explanation.is_some());
        assert_eq!(vm.dispatch(&session_loop, SessionIntent::Explain), SessionOutcome::Ignored);
    }

    #[test]
    fn last_question_leads_to_results() {
        let session_loop = session_loop();
        let mut vm = start_session(&session_loop, "hard").unwrap();
        for (idx, answer) in ["a", "b", "a", "a", "a"].into_iter().enumerate() {
            vm.dispatch(&session_loop, choice(answer));
            vm.dispatch(&session_loop, SessionIntent::Submit);
            if idx == 4 {
                assert_eq!(vm.panel().next_label, "See Results");
            }
            let outcome = vm.dispatch(&session_loop, SessionIntent::Next);
            let expected = if idx == 4 {
                SessionOutcome::Completed
            } else {
                SessionOutcome::Continue
            };
            assert_eq!(outcome, expected);
        }
        assert_eq!(vm.phase(), SessionPhase::Complete);
        let result = vm.result(&session_loop);
        assert_eq!(result.headline, "Excellent!");
        assert_eq!(result.percentage, 100);
    }

    #[test]
    fn restart_returns_to_first_question() {
        let session_loop = session_loop();
        let mut vm = start_session(&session_loop, "medium").unwrap();
        vm.dispatch(&session_loop, choice("a"));
        vm.dispatch(&session_loop, SessionIntent::Submit);
        vm.dispatch(&session_loop, SessionIntent::Next);
        vm.dispatch(&session_loop, SessionIntent::Restart);
        let panel = vm.panel();
        assert_eq!(panel.question_label, "Question 1 of 5");
        assert_eq!(panel.score, 0);
        assert_eq!(vm.phase(), SessionPhase::Choosing);
    }

    #[test]
    fn keys_select_by_label_or_number() {
        let vm = start_session(&session_loop(), "easy").unwrap();
        assert_eq!(vm.key_intent("b"), Some(choice("b")));
        assert_eq!(vm.key_intent("C"), Some(choice("c")));
        assert_eq!(vm.key_intent("1"), Some(choice("a")));
        assert_eq!(vm.key_intent("4"), None);
        assert_eq!(vm.key_intent("0"), None);
        assert_eq!(vm.key_intent("Enter"), None);
    }

    #[test]
    fn keys_follow_the_phase() {
        let session_loop = session_loop();
        let mut vm = start_session(&session_loop, "easy").unwrap();
        vm.dispatch(&session_loop, choice("b"));
        assert_eq!(vm.key_intent("Enter"), Some(SessionIntent::Submit));

        vm.dispatch(&session_loop, SessionIntent::Submit);
        assert_eq!(vm.key_intent("a"), None);
        assert_eq!(vm.key_intent("e"), Some(SessionIntent::Explain));
        assert_eq!(vm.key_intent("Enter"), Some(SessionIntent::Next));

        vm.dispatch(&session_loop, SessionIntent::Explain);
        assert_eq!(vm.key_intent("e"), None);
    }
}
