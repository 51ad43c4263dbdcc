//! Store-level error type.

use atelier_core::CoreError;

/// Errors surfaced by sheet loading, parsing, and the repositories.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Sheet I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Sheet format invalid: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Entity not found: {entity} '{id}'")]
    NotFound { entity: &'static str, id: String },

    #[error("Sheet lock poisoned by a panicked writer")]
    LockPoisoned,
}
