//! Wire types for the auth backend.
//!
//! Request and response shapes exchanged with the authentication service.
//! The service signals failure inside the response envelope: an
//! [`AuthOutcome`] carrying an error descriptor. Absence of `error` means
//! the operation succeeded.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sign-in request
///
/// Contains the email and password for user authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignInRequest {
    /// User's email address
    pub email: String,
    /// User's password (verified against the stored hash server-side)
    pub password: String,
}

/// Sign-up request
///
/// Contains the credentials and profile attributes for account creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignUpRequest {
    /// User's email address
    pub email: String,
    /// User's chosen password
    pub password: String,
    /// Profile attributes recorded alongside the new account
    pub profile: SignUpProfile,
}

/// Profile attributes attached to a sign-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpProfile {
    /// Display name, whitespace-trimmed
    pub full_name: String,
    /// Account role, e.g. "patient"
    pub role: String,
    /// Service region code, e.g. "AU"
    pub region: String,
}

/// Error descriptor returned by the auth service.
///
/// `message` is human-readable and is what the classifier falls back to
/// matching on when no stable `code` is present.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ServiceError {
    /// Human-readable error message
    pub message: String,
    /// Stable machine-readable code, when the backend stamps one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ServiceError {
    /// Create a descriptor carrying only a message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: None,
        }
    }

    /// Create a descriptor with a stable code
    pub fn with_code(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: Some(code.into()),
        }
    }
}

/// Response envelope shared by both auth operations.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthOutcome {
    /// Populated when the operation was rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ServiceError>,
}

impl AuthOutcome {
    /// Whether the envelope signals success
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}
