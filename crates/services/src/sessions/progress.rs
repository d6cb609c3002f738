use inspect_core::model::QuizSession;

/// Aggregated view of session progress, useful for UI.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionProgress {
    /// 1-based number of the question on screen.
    pub number: usize,
    pub total: usize,
    pub answered: usize,
    pub score: usize,
    /// `number / total`, drives the progress bar.
    pub fraction: f32,
    pub is_complete: bool,
}

impl SessionProgress {
    #[must_use]
    pub fn from_session(session: &QuizSession) -> Self {
        let number = session.question_number();
        let total = session.total_questions();
        #[allow(clippy::cast_precision_loss)]
        let fraction = if total == 0 {
            0.0
        } else {
            number as f32 / total as f32
        };

        Self {
            number,
            total,
            answered: session.answers().len(),
            score: session.score(),
            fraction,
            is_complete: session.is_complete(),
        }
    }

    /// Progress bar width as a CSS percentage.
    #[must_use]
    pub fn percent_label(&self) -> String {
        format!("{:.0}%", self.fraction * 100.0)
    }
}
