use std::sync::Arc;

use inspect_core::model::{LevelId, QuizSession, SessionCommand};

use crate::catalog::LevelCatalog;
use crate::error::SessionError;

use super::view::SessionResult;

/// Result of dispatching a single command to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStep {
    pub applied: bool,
    pub is_complete: bool,
}

/// Orchestrates session start and command dispatch over a shared catalog.
#[derive(Clone)]
pub struct SessionLoopService {
    catalog: Arc<LevelCatalog>,
}

impl SessionLoopService {
    #[must_use]
    pub fn new(catalog: Arc<LevelCatalog>) -> Self {
        Self { catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> &Arc<LevelCatalog> {
        &self.catalog
    }

    /// Start a fresh session for the given level.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::LevelNotFound` if the catalog has no such level.
    pub fn start_session(&self, level_id: &LevelId) -> Result<QuizSession, SessionError> {
        let Some(level) = self.catalog.get(level_id) else {
            log::warn!("requested unknown level {level_id}");
            return Err(SessionError::LevelNotFound(level_id.clone()));
        };
        log::info!(
            "starting level {} ({} questions)",
            level.id(),
            level.question_count()
        );
        Ok(QuizSession::new(level))
    }

    /// Apply a command and report whether it changed anything.
    pub fn dispatch(&self, session: &mut QuizSession, command: SessionCommand) -> SessionStep {
        let was_complete = session.is_complete();
        let description = format!("{command:?}");
        let applied = session.apply(command);

        if !applied {
            log::debug!(
                "ignored {description} on {} question {}",
                session.level_id(),
                session.question_number()
            );
        } else if session.is_complete() && !was_complete {
            log::info!(
                "completed level {} with {}/{}",
                session.level_id(),
                session.score(),
                session.total_questions()
            );
        }

        SessionStep {
            applied,
            is_complete: session.is_complete(),
        }
    }

    /// Summary for the end screen.
    #[must_use]
    pub fn result(&self, session: &QuizSession) -> SessionResult {
        SessionResult::from_session(session)
    }
}
