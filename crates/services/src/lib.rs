#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod sessions;

pub use catalog::LevelCatalog;
pub use error::{CatalogError, SessionError};

pub use sessions::{
    MistakeReview, SessionLoopService, SessionProgress, SessionResult, SessionStep,
};
