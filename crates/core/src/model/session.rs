use std::sync::Arc;

use crate::model::grade::{GradeTier, percentage};
use crate::model::ids::{ChoiceId, LevelId, QuestionId};
use crate::model::level::Level;
use crate::model::question::Question;

//
// ─── ANSWER ────────────────────────────────────────────────────────────────────
//

/// Record of one submitted question. Append-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub question_id: QuestionId,
    pub selected_choice: ChoiceId,
    pub is_correct: bool,
}

//
// ─── COMMANDS ──────────────────────────────────────────────────────────────────
//

/// User intents forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Select(ChoiceId),
    Submit,
    RevealExplanation,
    Advance,
    Restart,
}

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Plain copy of the session state, for rendering and assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub level_id: LevelId,
    pub current_question_index: usize,
    pub score: usize,
    pub answers: Vec<Answer>,
    pub is_complete: bool,
    pub show_explanation: bool,
    pub selected_answer: Option<ChoiceId>,
    pub is_answered: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// One play-through of a single level.
///
/// Every operation is total: a call whose precondition does not hold leaves the
/// state untouched and returns `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSession {
    level: Arc<Level>,
    current: usize,
    score: usize,
    answers: Vec<Answer>,
    is_complete: bool,
    show_explanation: bool,
    selected: Option<ChoiceId>,
    is_answered: bool,
}

impl QuizSession {
    /// Fresh session at the first question.
    #[must_use]
    pub fn new(level: Arc<Level>) -> Self {
        Self {
            level,
            current: 0,
            score: 0,
            answers: Vec::new(),
            is_complete: false,
            show_explanation: false,
            selected: None,
            is_answered: false,
        }
    }

    #[must_use]
    pub fn level(&self) -> &Arc<Level> {
        &self.level
    }

    #[must_use]
    pub fn level_id(&self) -> &LevelId {
        self.level.id()
    }

    #[must_use]
    pub fn current_question_index(&self) -> usize {
        self.current
    }

    /// 1-based position of the current question.
    #[must_use]
    pub fn question_number(&self) -> usize {
        self.current + 1
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.level.question_count()
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.is_complete
    }

    #[must_use]
    pub fn show_explanation(&self) -> bool {
        self.show_explanation
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&ChoiceId> {
        self.selected.as_ref()
    }

    #[must_use]
    pub fn is_answered(&self) -> bool {
        self.is_answered
    }

    #[must_use]
    pub fn current_question(&self) -> &Question {
        // A validated level has at least one question and `current` never leaves range.
        &self.level.questions()[self.current]
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.current + 1 >= self.total_questions()
    }

    /// Whether the pending or submitted selection matches the correct answer.
    #[must_use]
    pub fn is_selection_correct(&self) -> bool {
        self.selected
            .as_ref()
            .is_some_and(|choice| self.current_question().is_correct(choice))
    }

    #[must_use]
    pub fn percentage(&self) -> u32 {
        percentage(self.score, self.total_questions())
    }

    #[must_use]
    pub fn grade(&self) -> GradeTier {
        GradeTier::from_percentage(self.percentage())
    }

    pub fn incorrect_answers(&self) -> impl Iterator<Item = &Answer> {
        self.answers.iter().filter(|answer| !answer.is_correct)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            level_id: self.level.id().clone(),
            current_question_index: self.current,
            score: self.score,
            answers: self.answers.clone(),
            is_complete: self.is_complete,
            show_explanation: self.show_explanation,
            selected_answer: self.selected.clone(),
            is_answered: self.is_answered,
        }
    }

    /// Set the pending selection. Locked once the question is submitted.
    ///
    /// Ids that are not choices of the current question are ignored.
    pub fn select_choice(&mut self, choice_id: ChoiceId) -> bool {
        if self.is_answered || self.is_complete {
            return false;
        }
        if self.current_question().choice(&choice_id).is_none() {
            return false;
        }
        self.selected = Some(choice_id);
        true
    }

    /// Grade the pending selection. The only operation that changes the score.
    pub fn submit(&mut self) -> bool {
        if self.is_answered || self.is_complete {
            return false;
        }
        let Some(selected) = self.selected.clone() else {
            return false;
        };

        let is_correct = self.is_selection_correct();
        let answer = Answer {
            question_id: self.current_question().id().clone(),
            selected_choice: selected,
            is_correct,
        };

        self.answers.push(answer);
        if is_correct {
            self.score += 1;
        }
        self.is_answered = true;
        true
    }

    pub fn reveal_explanation(&mut self) -> bool {
        if !self.is_answered || self.show_explanation {
            return false;
        }
        self.show_explanation = true;
        true
    }

    /// Move to the next question, or finish after the last one.
    ///
    /// Finishing keeps the last question's selection and answered flag as they were.
    pub fn advance(&mut self) -> bool {
        if !self.is_answered || self.is_complete {
            return false;
        }
        if self.is_last_question() {
            self.is_complete = true;
            return true;
        }

        self.current += 1;
        self.selected = None;
        self.is_answered = false;
        self.show_explanation = false;
        true
    }

    /// Discard all progress and start the same level over.
    pub fn restart(&mut self) -> bool {
        *self = Self::new(Arc::clone(&self.level));
        true
    }

    /// Apply a command. Returns `false` when it was ignored.
    pub fn apply(&mut self, command: SessionCommand) -> bool {
        match command {
            SessionCommand::Select(choice_id) => self.select_choice(choice_id),
            SessionCommand::Submit => self.submit(),
            SessionCommand::RevealExplanation => self.reveal_explanation(),
            SessionCommand::Advance => self.advance(),
            SessionCommand::Restart => self.restart(),
        }
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Choice, DesignElement, Difficulty, ElementId, LevelDraft, QuestionDraft};

    fn question(id: &str, correct: &str) -> Question {
        QuestionDraft {
            id: QuestionId::new(id),
            title: format!("Title {id}"),
            description: String::new(),
            code_snippet: "???".into(),
            highlight_element: ElementId::new("main"),
            choices: ["a", "b", "c"]
                .into_iter()
                .map(|c| Choice::new(ChoiceId::new(c), c.to_uppercase(), format!("code-{c}")))
                .collect(),
            correct_answer: ChoiceId::new(correct),
            explanation: format!("Because {correct}"),
        }
        .validate()
        .unwrap()
    }

    fn level(correct: &[&str]) -> Arc<Level> {
        let questions = correct
            .iter()
            .enumerate()
            .map(|(i, c)| question(&format!("q-{}", i + 1), c))
            .collect();
        Arc::new(
            LevelDraft {
                id: LevelId::new("test"),
                title: "Test".into(),
                description: String::new(),
                difficulty: Difficulty::Medium,
                questions,
                design_elements: vec![DesignElement::new(ElementId::new("main"), "Main", Vec::new())],
            }
            .validate()
            .unwrap(),
        )
    }

    fn choice(id: &str) -> ChoiceId {
        ChoiceId::new(id)
    }

    fn assert_score_matches_answers(session: &QuizSession) {
        let correct = session.answers().iter().filter(|a| a.is_correct).count();
        assert_eq!(session.score(), correct);
    }

    #[test]
    fn new_session_starts_fresh() {
        let session = QuizSession::new(level(&["a", "b"]));
        let snap = session.snapshot();
        assert_eq!(snap.current_question_index, 0);
        assert_eq!(snap.score, 0);
        assert!(snap.answers.is_empty());
        assert!(!snap.is_complete && !snap.is_answered && !snap.show_explanation);
        assert_eq!(snap.selected_answer, None);
    }

    #[test]
    fn selection_can_change_until_submit() {
        let mut session = QuizSession::new(level(&["a"]));
        assert!(session.select_choice(choice("b")));
        assert!(session.select_choice(choice("c")));
        assert_eq!(session.selected_answer(), Some(&choice("c")));
    }

    #[test]
    fn unknown_choice_is_ignored() {
        let mut session = QuizSession::new(level(&["a"]));
        assert!(!session.select_choice(choice("zz")));
        assert_eq!(session.selected_answer(), None);
    }

    #[test]
    fn submit_without_selection_is_noop() {
        let mut session = QuizSession::new(level(&["a"]));
        assert!(!session.submit());
        assert!(session.answers().is_empty());
        assert!(!session.is_answered());
    }

    #[test]
    fn double_submit_scores_once() {
        let mut session = QuizSession::new(level(&["a", "b"]));
        session.select_choice(choice("a"));
        assert!(session.submit());
        assert!(!session.submit());
        assert_eq!(session.score(), 1);
        assert_eq!(session.answers().len(), 1);
        assert_score_matches_answers(&session);
    }

    #[test]
    fn selection_is_locked_after_submit() {
        let mut session = QuizSession::new(level(&["a", "b"]));
        session.select_choice(choice("b"));
        session.submit();
        assert!(!session.select_choice(choice("a")));
        assert_eq!(session.selected_answer(), Some(&choice("b")));
        assert_eq!(session.answers()[0].selected_choice, choice("b"));
    }

    #[test]
    fn explanation_requires_submission() {
        let mut session = QuizSession::new(level(&["a", "b"]));
        assert!(!session.reveal_explanation());
        session.select_choice(choice("a"));
        assert!(!session.reveal_explanation());
        session.submit();
        assert!(session.reveal_explanation());
        assert!(session.show_explanation());
        assert_eq!(session.score(), 1);
    }

    #[test]
    fn advance_requires_submission() {
        let mut session = QuizSession::new(level(&["a", "b"]));
        session.select_choice(choice("a"));
        assert!(!session.advance());
        assert_eq!(session.current_question_index(), 0);
    }

    #[test]
    fn advance_resets_question_state() {
        let mut session = QuizSession::new(level(&["a", "b"]));
        session.select_choice(choice("a"));
        session.submit();
        session.reveal_explanation();
        assert!(session.advance());
        assert_eq!(session.current_question_index(), 1);
        assert_eq!(session.selected_answer(), None);
        assert!(!session.is_answered());
        assert!(!session.show_explanation());
        assert_eq!(session.current_question().id(), &QuestionId::new("q-2"));
    }

    #[test]
    fn advance_past_last_question_completes() {
        let mut session = QuizSession::new(level(&["a"]));
        session.select_choice(choice("c"));
        session.submit();
        assert!(session.advance());
        assert!(session.is_complete());
        assert_eq!(session.current_question_index(), 0);
        // Completion keeps the last question's state.
        assert!(session.is_answered());
        assert_eq!(session.selected_answer(), Some(&choice("c")));
        assert!(!session.advance());
        assert_eq!(session.current_question_index(), 0);
    }

    #[test]
    fn restart_from_complete_returns_to_initial_state() {
        let lvl = level(&["a", "b"]);
        let mut session = QuizSession::new(Arc::clone(&lvl));
        for pick in ["a", "a"] {
            session.select_choice(choice(pick));
            session.submit();
            session.reveal_explanation();
            session.advance();
        }
        assert!(session.is_complete());

        assert!(session.restart());
        assert_eq!(session, QuizSession::new(lvl));
        let snap = session.snapshot();
        assert_eq!(snap.current_question_index, 0);
        assert_eq!(snap.score, 0);
        assert!(snap.answers.is_empty());
        assert!(!snap.is_complete);
        assert!(!snap.is_answered);
        assert_eq!(snap.selected_answer, None);
        assert!(!snap.show_explanation);
    }

    #[test]
    fn restart_mid_question_discards_selection() {
        let mut session = QuizSession::new(level(&["a", "b"]));
        session.select_choice(choice("b"));
        session.restart();
        assert_eq!(session.selected_answer(), None);
    }

    #[test]
    fn apply_dispatches_commands() {
        let mut session = QuizSession::new(level(&["b", "a"]));
        assert!(session.apply(SessionCommand::Select(choice("b"))));
        assert!(session.apply(SessionCommand::Submit));
        assert!(session.apply(SessionCommand::RevealExplanation));
        assert!(!session.apply(SessionCommand::RevealExplanation));
        assert!(session.apply(SessionCommand::Advance));
        assert_eq!(session.question_number(), 2);
        assert!(session.apply(SessionCommand::Restart));
        assert_eq!(session.question_number(), 1);
    }

    #[test]
    fn score_tracks_correct_answers_throughout() {
        let mut session = QuizSession::new(level(&["a", "b", "c", "a"]));
        for pick in ["a", "c", "c", "b"] {
            session.select_choice(choice(pick));
            assert_score_matches_answers(&session);
            session.submit();
            assert_score_matches_answers(&session);
            session.submit();
            assert_score_matches_answers(&session);
            session.advance();
            assert_score_matches_answers(&session);
        }
        assert!(session.is_complete());
        assert_eq!(session.score(), 2);
        assert_eq!(session.percentage(), 50);
        assert_eq!(session.grade(), GradeTier::Good);
        let wrong: Vec<_> = session
            .incorrect_answers()
            .map(|a| a.question_id.as_str().to_string())
            .collect();
        assert_eq!(wrong, vec!["q-2", "q-4"]);
    }

    #[test]
    fn answers_follow_visitation_order() {
        let mut session = QuizSession::new(level(&["a", "a", "a"]));
        for pick in ["a", "b"] {
            session.select_choice(choice(pick));
            session.submit();
            assert_eq!(session.answers().len(), session.current_question_index() + 1);
            session.advance();
        }
        let ids: Vec<_> = session.answers().iter().map(|a| a.question_id.clone()).collect();
        assert_eq!(ids, vec![QuestionId::new("q-1"), QuestionId::new("q-2")]);
    }

    #[test]
    fn selection_correctness_reflects_current_question() {
        let mut session = QuizSession::new(level(&["b"]));
        assert!(!session.is_selection_correct());
        session.select_choice(choice("a"));
        assert!(!session.is_selection_correct());
        session.select_choice(choice("b"));
        assert!(session.is_selection_correct());
    }
}
