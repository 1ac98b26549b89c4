//! Error types for the editor.

use core_suit_model::ValidationError;
use core_suit_store::StoreError;
use thiserror::Error;

/// Errors that can occur during editor operations.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The staged form failed validation. Nothing was written.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Storage error while persisting the collection.
    #[error("storage error: {0}")]
    Store(#[from] StoreError),

    /// Submit was requested while the form is closed.
    #[error("the form is not open")]
    ModalClosed,

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

/// Result type for editor operations.
pub type Result<T> = std::result::Result<T, EditorError>;
