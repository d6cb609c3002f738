use std::sync::{Arc, Mutex, PoisonError};

use inspect_core::model::LevelId;
use services::{LevelCatalog, SessionLoopService};

use crate::views::DesignRegistry;

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<LevelCatalog>;
    fn session_loop(&self) -> Arc<SessionLoopService>;

    /// Level to open straight away instead of the start screen.
    fn initial_level(&self) -> Option<LevelId>;

    fn designs(&self) -> DesignRegistry {
        DesignRegistry::builtin()
    }
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<LevelCatalog>,
    session_loop: Arc<SessionLoopService>,
    designs: Arc<DesignRegistry>,
    initial_level_configured: Option<LevelId>,
    initial_level_once: Arc<Mutex<Option<LevelId>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let initial_level = app.initial_level();

        Self {
            catalog: app.catalog(),
            session_loop: app.session_loop(),
            designs: Arc::new(app.designs()),
            initial_level_configured: initial_level.clone(),
            initial_level_once: Arc::new(Mutex::new(initial_level)),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<LevelCatalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn session_loop(&self) -> Arc<SessionLoopService> {
        Arc::clone(&self.session_loop)
    }

    #[must_use]
    pub fn designs(&self) -> Arc<DesignRegistry> {
        Arc::clone(&self.designs)
    }

    /// The launch level, handed out once so returning home does not bounce back into it.
    #[must_use]
    pub fn take_initial_level(&self) -> Option<LevelId> {
        self.initial_level_once
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// The configured value (not the one-shot value).
    #[must_use]
    pub fn initial_level_configured(&self) -> Option<&LevelId> {
        self.initial_level_configured.as_ref()
    }
}

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
