use std::collections::HashSet;

use thiserror::Error;

use crate::model::ids::{ChoiceId, ElementId, QuestionId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question title cannot be empty")]
    EmptyTitle,

    #[error("question needs at least 2 choices, got {count}")]
    TooFewChoices { count: usize },

    #[error("duplicate choice id: {0}")]
    DuplicateChoice(ChoiceId),

    #[error("correct answer {0} is not one of the choices")]
    UnknownCorrectAnswer(ChoiceId),
}

//
// ─── CHOICE ────────────────────────────────────────────────────────────────────
//

/// One selectable answer option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    id: ChoiceId,
    label: String,
    code: String,
}

impl Choice {
    #[must_use]
    pub fn new(id: ChoiceId, label: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
            code: code.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> &ChoiceId {
        &self.id
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Unvalidated question fields, as read from a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub title: String,
    pub description: String,
    pub code_snippet: String,
    pub highlight_element: ElementId,
    pub choices: Vec<Choice>,
    pub correct_answer: ChoiceId,
    pub explanation: String,
}

impl QuestionDraft {
    /// Validate the draft into an immutable `Question`.
    ///
    /// The highlighted element is checked by the owning level, not here.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the title is blank, fewer than two choices are given,
    /// choice ids repeat, or the correct answer is not among the choices.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.title.trim().is_empty() {
            return Err(QuestionError::EmptyTitle);
        }
        if self.choices.len() < 2 {
            return Err(QuestionError::TooFewChoices {
                count: self.choices.len(),
            });
        }

        let mut seen = HashSet::with_capacity(self.choices.len());
        for choice in &self.choices {
            if !seen.insert(choice.id()) {
                return Err(QuestionError::DuplicateChoice(choice.id().clone()));
            }
        }
        if !seen.contains(&self.correct_answer) {
            return Err(QuestionError::UnknownCorrectAnswer(self.correct_answer));
        }

        Ok(Question {
            id: self.id,
            title: self.title,
            description: self.description,
            code_snippet: self.code_snippet,
            highlight_element: self.highlight_element,
            choices: self.choices,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
        })
    }
}

/// A single quiz item with exactly one correct choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    title: String,
    description: String,
    code_snippet: String,
    highlight_element: ElementId,
    choices: Vec<Choice>,
    correct_answer: ChoiceId,
    explanation: String,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Snippet shown with the question; may contain the `???` placeholder.
    #[must_use]
    pub fn code_snippet(&self) -> &str {
        &self.code_snippet
    }

    #[must_use]
    pub fn highlight_element(&self) -> &ElementId {
        &self.highlight_element
    }

    #[must_use]
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    #[must_use]
    pub fn correct_answer(&self) -> &ChoiceId {
        &self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn choice(&self, id: &ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id() == id)
    }

    /// The choice referenced by `correct_answer`. Always present after validation.
    #[must_use]
    pub fn correct_choice(&self) -> Option<&Choice> {
        self.choice(&self.correct_answer)
    }

    #[must_use]
    pub fn is_correct(&self, choice_id: &ChoiceId) -> bool {
        &self.correct_answer == choice_id
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft {
            id: QuestionId::new("q-1"),
            title: "Header Structure".into(),
            description: "Which tag?".into(),
            code_snippet: "<??? class=\"header\">".into(),
            highlight_element: ElementId::new("header"),
            choices: vec![
                Choice::new(ChoiceId::new("a"), "A", "<div>"),
                Choice::new(ChoiceId::new("b"), "B", "<header>"),
            ],
            correct_answer: ChoiceId::new("b"),
            explanation: "Semantic tag.".into(),
        }
    }

    #[test]
    fn valid_draft_builds_question() {
        let question = draft().validate().unwrap();
        assert_eq!(question.choices().len(), 2);
        assert_eq!(question.correct_choice().unwrap().code(), "<header>");
        assert!(question.is_correct(&ChoiceId::new("b")));
        assert!(!question.is_correct(&ChoiceId::new("a")));
    }

    #[test]
    fn single_choice_is_rejected() {
        let mut draft = draft();
        draft.choices.truncate(1);
        let err = draft.validate().unwrap_err();
        assert_eq!(err, QuestionError::TooFewChoices { count: 1 });
    }

    #[test]
    fn duplicate_choice_ids_are_rejected() {
        let mut draft = draft();
        draft.choices.push(Choice::new(ChoiceId::new("a"), "C", "<section>"));
        let err = draft.validate().unwrap_err();
        assert_eq!(err, QuestionError::DuplicateChoice(ChoiceId::new("a")));
    }

    #[test]
    fn correct_answer_must_reference_a_choice() {
        let mut draft = draft();
        draft.correct_answer = ChoiceId::new("z");
        let err = draft.validate().unwrap_err();
        assert_eq!(err, QuestionError::UnknownCorrectAnswer(ChoiceId::new("z")));
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut draft = draft();
        draft.title = "  ".into();
        assert_eq!(draft.validate().unwrap_err(), QuestionError::EmptyTitle);
    }
}
