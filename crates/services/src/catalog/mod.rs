mod records;

use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;

use inspect_core::model::{Level, LevelId};

use crate::error::CatalogError;
use records::{LevelRecord, map_level};

/// Levels shipped with the game, embedded at compile time.
const BUILTIN_LEVELS: &str = include_str!("../../catalog/levels.json");

/// Ordered, immutable set of validated levels.
///
/// Built once at start-up and shared by reference; it never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelCatalog {
    levels: Vec<Arc<Level>>,
}

impl LevelCatalog {
    /// Build a catalog from already validated levels.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` for an empty list and
    /// `CatalogError::DuplicateLevel` when two levels share an id.
    pub fn new(levels: Vec<Level>) -> Result<Self, CatalogError> {
        if levels.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::with_capacity(levels.len());
        for level in &levels {
            if !seen.insert(level.id()) {
                return Err(CatalogError::DuplicateLevel(level.id().clone()));
            }
        }

        Ok(Self {
            levels: levels.into_iter().map(Arc::new).collect(),
        })
    }

    /// The bundled easy / medium / hard levels.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the bundled data fails validation.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json_str(BUILTIN_LEVELS)
    }

    /// Parse and validate a catalog from its JSON form (an array of levels).
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` for malformed JSON and validation errors otherwise.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<LevelRecord> = serde_json::from_str(json)?;
        let levels = records
            .into_iter()
            .map(map_level)
            .collect::<Result<Vec<_>, _>>()?;
        let catalog = Self::new(levels)?;
        log::debug!("parsed catalog with {} levels", catalog.len());
        Ok(catalog)
    }

    /// Read a catalog JSON file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read, otherwise as `from_json_str`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        log::info!("loaded {} levels from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    #[must_use]
    pub fn levels(&self) -> &[Arc<Level>] {
        &self.levels
    }

    /// Look up a level. `None` means the id is unknown.
    #[must_use]
    pub fn get(&self, id: &LevelId) -> Option<Arc<Level>> {
        self.levels
            .iter()
            .find(|level| level.id() == id)
            .map(Arc::clone)
    }

    #[must_use]
    pub fn contains(&self, id: &LevelId) -> bool {
        self.levels.iter().any(|level| level.id() == id)
    }

    #[must_use]
    pub fn first(&self) -> &Arc<Level> {
        // `new` rejects empty catalogs.
        &self.levels[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}
