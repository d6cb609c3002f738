use inspect_core::model::{GradeTier, LevelId, QuestionId, QuizSession};

/// One incorrect answer, resolved against its question for the review list.
///
/// Holds raw strings only; formatting is left to the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MistakeReview {
    pub question_id: QuestionId,
    pub question_title: String,
    pub selected_code: String,
    pub correct_code: String,
    pub explanation: String,
}

/// End-of-level result for a completed (or abandoned) session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionResult {
    pub level_id: LevelId,
    pub level_title: String,
    pub score: usize,
    pub total: usize,
    pub incorrect: usize,
    pub percentage: u32,
    pub grade: GradeTier,
    pub mistakes: Vec<MistakeReview>,
}

impl SessionResult {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        let level = session.level();
        let mistakes = session
            .incorrect_answers()
            .filter_map(|answer| {
                let question = level.question_by_id(&answer.question_id)?;
                let selected_code = question
                    .choice(&answer.selected_choice)
                    .map(|choice| choice.code().to_string())
                    .unwrap_or_default();
                let correct_code = question
                    .correct_choice()
                    .map(|choice| choice.code().to_string())
                    .unwrap_or_default();
                Some(MistakeReview {
                    question_id: question.id().clone(),
                    question_title: question.title().to_string(),
                    selected_code,
                    correct_code,
                    explanation: question.explanation().to_string(),
                })
            })
            .collect();

        let score = session.score();
        let total = session.total_questions();
        Self {
            level_id: level.id().clone(),
            level_title: level.title().to_string(),
            score,
            total,
            incorrect: total.saturating_sub(score),
            percentage: session.percentage(),
            grade: session.grade(),
            mistakes,
        }
    }

    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.mistakes.is_empty() && self.score == self.total
    }
}
