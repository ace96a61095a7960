//! Error taxonomy for the translation pipeline.

use thiserror::Error;

/// Errors that can occur while performing a translation.
///
/// None of these are retried or recovered locally; they propagate
/// straight to the process boundary.
#[derive(Debug, Error)]
pub enum TranslationError {
    /// Missing or unusable API credential. Raised before any network I/O.
    #[error("{0}")]
    Configuration(String),

    /// Network failure, timeout, or a non-success status from the
    /// completion endpoint.
    #[error("completion request failed: {0}")]
    RemoteService(String),

    /// The endpoint replied, but the body did not contain the expected
    /// message content.
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

/// Result type for translation operations.
pub type TranslationResult<T> = Result<T, TranslationError>;
