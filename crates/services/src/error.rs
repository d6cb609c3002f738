//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use inspect_core::model::{ElementId, LevelError, LevelId};

/// Errors emitted while loading or validating a `LevelCatalog`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog contains no levels")]
    Empty,
    #[error("duplicate level id: {0}")]
    DuplicateLevel(LevelId),
    #[error("invalid level {level_id}: {source}")]
    Level {
        level_id: LevelId,
        #[source]
        source: LevelError,
    },
    #[error("style {property} of element {element} must be a string or number")]
    Style {
        element: ElementId,
        property: String,
    },
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Errors emitted by session services.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("level not found: {0}")]
    LevelNotFound(LevelId),
}
