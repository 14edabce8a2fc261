//! Classification of auth service errors into display messages.
//!
//! The backend is a black box that today only guarantees a human-readable
//! message, so classification is substring matching against known wording,
//! first rule wins. A stable-code fast path runs before the string rules:
//! the moment the backend stamps a recognized `code`, display copy stops
//! depending on message wording.
//!
//! Every classification yields exactly one entry: either a banner under
//! [`Field::General`] or a single field-attached message.

use crate::form::{ErrorMap, Field};
use crate::types::ServiceError;

/// Stable error codes recognized by the fast path.
mod code {
    pub const INVALID_CREDENTIALS: &str = "invalid_credentials";
    pub const EMAIL_NOT_CONFIRMED: &str = "email_not_confirmed";
    pub const USER_ALREADY_EXISTS: &str = "user_already_exists";
    pub const EMAIL_EXISTS: &str = "email_exists";
    pub const WEAK_PASSWORD: &str = "weak_password";
}

const INVALID_CREDENTIALS_MSG: &str = "Invalid email or password. Please try again.";
const UNCONFIRMED_MSG: &str =
    "Please check your email and confirm your account before signing in.";
const DUPLICATE_ACCOUNT_MSG: &str =
    "An account with this email already exists. Please sign in instead.";
const SIGN_IN_FALLBACK: &str = "Sign in failed. Please try again.";
const SIGN_UP_FALLBACK: &str = "Failed to create account. Please try again.";

/// Map a sign-in rejection to its display entry.
pub fn sign_in(error: &ServiceError) -> ErrorMap {
    if let Some(code) = error.code.as_deref() {
        match code {
            code::INVALID_CREDENTIALS => return ErrorMap::general(INVALID_CREDENTIALS_MSG),
            code::EMAIL_NOT_CONFIRMED => return ErrorMap::general(UNCONFIRMED_MSG),
            _ => {}
        }
    }

    let message = error.message.as_str();
    if message.contains("Invalid login credentials")
        || message.contains("Invalid email or password")
    {
        ErrorMap::general(INVALID_CREDENTIALS_MSG)
    } else if message.contains("Email not confirmed") {
        ErrorMap::general(UNCONFIRMED_MSG)
    } else if message.is_empty() {
        ErrorMap::general(SIGN_IN_FALLBACK)
    } else {
        ErrorMap::general(message)
    }
}

/// Map a sign-up rejection to its display entry.
pub fn sign_up(error: &ServiceError) -> ErrorMap {
    if let Some(code) = error.code.as_deref() {
        match code {
            code::USER_ALREADY_EXISTS | code::EMAIL_EXISTS => {
                return ErrorMap::general(DUPLICATE_ACCOUNT_MSG)
            }
            code::WEAK_PASSWORD => {
                return ErrorMap::field(Field::Password, error.message.as_str())
            }
            _ => {}
        }
    }

    let message = error.message.as_str();
    if message.contains("already registered") || message.contains("already exists") {
        ErrorMap::general(DUPLICATE_ACCOUNT_MSG)
    } else if message.contains("Password") {
        ErrorMap::field(Field::Password, message)
    } else if message.contains("Email") {
        ErrorMap::field(Field::Email, message)
    } else if message.is_empty() {
        ErrorMap::general(SIGN_UP_FALLBACK)
    } else {
        ErrorMap::general(message)
    }
}
