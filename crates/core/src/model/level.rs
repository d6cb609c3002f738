use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::{ElementId, LevelId, QuestionId};
use crate::model::question::{Question, QuestionError};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevelError {
    #[error("level title cannot be empty")]
    EmptyTitle,

    #[error("level must contain at least one question")]
    NoQuestions,

    #[error("duplicate question id: {0}")]
    DuplicateQuestion(QuestionId),

    #[error("duplicate design element id: {0}")]
    DuplicateElement(ElementId),

    #[error("question {question} highlights unknown element {element}")]
    UnknownHighlight {
        question: QuestionId,
        element: ElementId,
    },

    #[error("invalid question {question}: {source}")]
    Question {
        question: QuestionId,
        #[source]
        source: QuestionError,
    },

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Difficulty {
    type Error = LevelError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Difficulty {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            other => Err(LevelError::UnknownDifficulty(other.to_string())),
        }
    }
}

//
// ─── DESIGN ELEMENT ────────────────────────────────────────────────────────────
//

/// Descriptive metadata for one inspectable region of a mock design.
///
/// Styles keep their declaration order so tooltips list them as authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesignElement {
    id: ElementId,
    name: String,
    styles: Vec<(String, String)>,
}

impl DesignElement {
    #[must_use]
    pub fn new(id: ElementId, name: impl Into<String>, styles: Vec<(String, String)>) -> Self {
        Self {
            id,
            name: name.into(),
            styles,
        }
    }

    #[must_use]
    pub fn id(&self) -> &ElementId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn styles(&self) -> &[(String, String)] {
        &self.styles
    }

    /// Name for tooltips. Falls back to the id with the first `-` turned into a space.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.name.trim().is_empty() {
            self.id.as_str().replacen('-', " ", 1)
        } else {
            self.name.clone()
        }
    }
}

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// Unvalidated level fields. Questions must already be validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDraft {
    pub id: LevelId,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
    pub design_elements: Vec<DesignElement>,
}

impl LevelDraft {
    /// Validate the draft into an immutable `Level`.
    ///
    /// # Errors
    ///
    /// Returns `LevelError` if the level has no questions, ids repeat, or a question
    /// highlights an element the level does not declare.
    pub fn validate(self) -> Result<Level, LevelError> {
        if self.title.trim().is_empty() {
            return Err(LevelError::EmptyTitle);
        }
        if self.questions.is_empty() {
            return Err(LevelError::NoQuestions);
        }

        let mut elements = HashSet::with_capacity(self.design_elements.len());
        for element in &self.design_elements {
            if !elements.insert(element.id()) {
                return Err(LevelError::DuplicateElement(element.id().clone()));
            }
        }

        let mut questions = HashSet::with_capacity(self.questions.len());
        for question in &self.questions {
            if !questions.insert(question.id()) {
                return Err(LevelError::DuplicateQuestion(question.id().clone()));
            }
            if !elements.contains(question.highlight_element()) {
                return Err(LevelError::UnknownHighlight {
                    question: question.id().clone(),
                    element: question.highlight_element().clone(),
                });
            }
        }

        Ok(Level {
            id: self.id,
            title: self.title,
            description: self.description,
            difficulty: self.difficulty,
            questions: self.questions,
            design_elements: self.design_elements,
        })
    }
}

/// A themed set of questions plus the design metadata for its preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    id: LevelId,
    title: String,
    description: String,
    difficulty: Difficulty,
    questions: Vec<Question>,
    design_elements: Vec<DesignElement>,
}

impl Level {
    #[must_use]
    pub fn id(&self) -> &LevelId {
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

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Questions in play order. Never empty.
    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn question_by_id(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|question| question.id() == id)
    }

    #[must_use]
    pub fn design_elements(&self) -> &[DesignElement] {
        &self.design_elements
    }

    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&DesignElement> {
        self.design_elements.iter().find(|element| element.id() == id)
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
