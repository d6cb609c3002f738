use inspect_core::model::{Difficulty, Level, LevelId};
use services::LevelCatalog;

/// One card on the level-selection screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelCardVm {
    pub id: LevelId,
    pub title: String,
    pub description: String,
    pub difficulty: &'static str,
    pub difficulty_class: &'static str,
    pub question_count_label: String,
}

impl LevelCardVm {
    #[must_use]
    pub fn from_level(level: &Level) -> Self {
        let count = level.question_count();
        Self {
            id: level.id().clone(),
            title: level.title().to_string(),
            description: level.description().to_string(),
            difficulty: level.difficulty().as_str(),
            difficulty_class: difficulty_class(level.difficulty()),
            question_count_label: if count == 1 {
                "1 question".to_string()
            } else {
                format!("{count} questions")
            },
        }
    }
}

#[must_use]
pub fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "difficulty difficulty--easy",
        Difficulty::Medium => "difficulty difficulty--medium",
        Difficulty::Hard => "difficulty difficulty--hard",
    }
}

/// Cards in catalog order.
#[must_use]
pub fn map_level_cards(catalog: &LevelCatalog) -> Vec<LevelCardVm> {
    catalog
        .levels()
        .iter()
        .map(|level| LevelCardVm::from_level(level))
        .collect()
}
