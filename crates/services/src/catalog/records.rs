//! Serde records for the catalog JSON and their mapping into validated domain values.

use serde::Deserialize;
use serde_json::Value;

use inspect_core::model::{
    Choice, ChoiceId, DesignElement, Difficulty, ElementId, Level, LevelDraft, LevelError, LevelId,
    QuestionDraft, QuestionId,
};

use crate::error::CatalogError;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct LevelRecord {
    pub id: LevelId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub difficulty: Difficulty,
    pub questions: Vec<QuestionRecord>,
    #[serde(default)]
    pub design_elements: Vec<DesignElementRecord>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuestionRecord {
    pub id: QuestionId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code_snippet: String,
    pub highlight_element: ElementId,
    pub choices: Vec<ChoiceRecord>,
    pub correct_answer: ChoiceId,
    #[serde(default)]
    pub explanation: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChoiceRecord {
    pub id: ChoiceId,
    pub label: String,
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DesignElementRecord {
    pub id: ElementId,
    pub name: String,
    #[serde(default)]
    pub styles: serde_json::Map<String, Value>,
}

fn style_value(element: &ElementId, property: &str, value: Value) -> Result<String, CatalogError> {
    match value {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        _ => Err(CatalogError::Style {
            element: element.clone(),
            property: property.to_string(),
        }),
    }
}

pub(crate) fn map_element(record: DesignElementRecord) -> Result<DesignElement, CatalogError> {
    let styles = record
        .styles
        .into_iter()
        .map(|(property, value)| {
            let value = style_value(&record.id, &property, value)?;
            Ok((property, value))
        })
        .collect::<Result<Vec<_>, CatalogError>>()?;
    Ok(DesignElement::new(record.id, record.name, styles))
}

pub(crate) fn map_level(record: LevelRecord) -> Result<Level, CatalogError> {
    let level_id = record.id.clone();
    let level_err = |source: LevelError| CatalogError::Level {
        level_id: level_id.clone(),
        source,
    };

    let questions = record
        .questions
        .into_iter()
        .map(|question| {
            let question_id = question.id.clone();
            QuestionDraft {
                id: question.id,
                title: question.title,
                description: question.description,
                code_snippet: question.code_snippet,
                highlight_element: question.highlight_element,
                choices: question
                    .choices
                    .into_iter()
                    .map(|choice| Choice::new(choice.id, choice.label, choice.code))
                    .collect(),
                correct_answer: question.correct_answer,
                explanation: question.explanation,
            }
            .validate()
            .map_err(|source| LevelError::Question {
                question: question_id,
                source,
            })
        })
        .collect::<Result<Vec<_>, LevelError>>()
        .map_err(level_err)?;

    let design_elements = record
        .design_elements
        .into_iter()
        .map(map_element)
        .collect::<Result<Vec<_>, CatalogError>>()?;

    LevelDraft {
        id: record.id,
        title: record.title,
        description: record.description,
        difficulty: record.difficulty,
        questions,
        design_elements,
    }
    .validate()
    .map_err(level_err)
}
