//! Error types for tweet lookups.

use thiserror::Error;

use crate::twitter::ApiError;

/// Error currency of the HTTP layer and configuration loading.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The single error surfaced by a lookup call.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The request never completed, or its body could not be decoded.
    #[error("Twitter transport error: {0}")]
    Transport(#[source] BoxError),
    /// The API answered with a request-level error document.
    #[error("Twitter API error: {0}")]
    Api(#[from] ApiError),
}

impl LookupError {
    /// Returns the API error document, if this is an API error.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            LookupError::Api(api_error) => Some(api_error),
            LookupError::Transport(_) => None,
        }
    }
}
