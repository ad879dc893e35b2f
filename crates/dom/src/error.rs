//! Error types for element registry operations
//!
//! Only the checked `try_*` calls surface these. The plain operations
//! degrade to no-ops or empty values instead.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DomError>;

#[derive(Debug, Error)]
pub enum DomError {
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Element already exists: {0}")]
    DuplicateId(String),

    #[error("Stale element handle: {0}")]
    StaleHandle(u32),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
