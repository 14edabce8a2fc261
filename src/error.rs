//! Error types at the auth service seam.
//!
//! Everything the service can fail with is funneled into [`AuthCallError`]
//! before it reaches a screen controller. The controller never re-throws:
//! `Service` descriptors go through the classifier, `Transport` failures
//! become the generic banner, and the screen always returns to an
//! interactive idle state.

use thiserror::Error;

use crate::types::ServiceError;

/// Failure modes of a single auth service call.
#[derive(Debug, Clone, Error)]
pub enum AuthCallError {
    /// The service answered with a structured error descriptor
    #[error("auth service error: {0}")]
    Service(ServiceError),

    /// The call failed before a descriptor existed (connection error,
    /// malformed response)
    #[error("transport error: {message}")]
    Transport {
        /// Failure detail, for logs only; never shown to the user
        message: String,
    },
}

impl AuthCallError {
    /// Create a transport-level error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for AuthCallError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(format!("Network error: {}", err))
    }
}
