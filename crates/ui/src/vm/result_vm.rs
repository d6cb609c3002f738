use std::f64::consts::PI;

use inspect_core::model::GradeTier;
use services::SessionResult;

/// Radius of the score ring on the end screen.
pub const RING_RADIUS: f64 = 70.0;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MistakeVm {
    pub key: String,
    pub title: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub explanation: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultVm {
    pub headline: &'static str,
    pub emoji: &'static str,
    pub tone_class: &'static str,
    pub subtitle: String,
    pub score: usize,
    pub total: usize,
    pub incorrect: usize,
    pub percentage: u32,
    pub ring_circumference: f64,
    pub ring_offset: f64,
    pub mistakes: Vec<MistakeVm>,
}

impl ResultVm {
    #[must_use]
    pub fn from_result(result: &SessionResult) -> Self {
        let circumference = 2.0 * PI * RING_RADIUS;
        let filled = f64::from(result.percentage.min(100)) / 100.0;
        Self {
            headline: headline(result.grade),
            emoji: emoji(result.grade),
            tone_class: tone_class(result.grade),
            subtitle: format!("You completed the {} challenge", result.level_title),
            score: result.score,
            total: result.total,
            incorrect: result.incorrect,
            percentage: result.percentage,
            ring_circumference: circumference,
            ring_offset: circumference * (1.0 - filled),
            mistakes: result
                .mistakes
                .iter()
                .map(|mistake| MistakeVm {
                    key: mistake.question_id.to_string(),
                    title: mistake.question_title.clone(),
                    your_answer: mistake.selected_code.clone(),
                    correct_answer: mistake.correct_code.clone(),
                    explanation: mistake.explanation.clone(),
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn has_mistakes(&self) -> bool {
        !self.mistakes.is_empty()
    }
}

#[must_use]
pub fn headline(grade: GradeTier) -> &'static str {
    match grade {
        GradeTier::Excellent => "Excellent!",
        GradeTier::Great => "Great Job!",
        GradeTier::Good => "Good Try!",
        GradeTier::KeepLearning => "Keep Learning!",
    }
}

fn emoji(grade: GradeTier) -> &'static str {
    match grade {
        GradeTier::Excellent => "🏆",
        GradeTier::Great => "⭐",
        GradeTier::Good => "👍",
        GradeTier::KeepLearning => "📚",
    }
}

fn tone_class(grade: GradeTier) -> &'static str {
    match grade {
        GradeTier::Excellent => "end-title end-title--excellent",
        GradeTier::Great => "end-title end-title--great",
        GradeTier::Good => "end-title end-title--good",
        GradeTier::KeepLearning => "end-title end-title--learning",
    }
}
