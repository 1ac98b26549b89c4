//! Error types for the host collaborators.

use thiserror::Error;

/// Errors that can occur while talking to the hosting server.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum HostError {
    /// Network or client failure.
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("unexpected status {0}")]
    Status(u16),

    /// No answer within the configured time.
    #[error("timeout: {0}")]
    Timeout(String),
}

/// Result type for host operations.
pub type Result<T> = std::result::Result<T, HostError>;
