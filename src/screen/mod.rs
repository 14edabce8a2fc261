//! Screen controllers for the auth flow.
//!
//! Each screen owns its form state, error map, and submission status, and
//! exposes the pure state transitions (`submit_start`, `submit_success`,
//! `submit_failure`) alongside the async `submit` orchestration that
//! composes them. The UI layer talks to a screen through the field setters,
//! the `errors`/`status` accessors, and `submit` as the trigger entry
//! point; nothing else mutates screen state.

mod sign_in;
mod sign_up;

pub use sign_in::SignInScreen;
pub use sign_up::SignUpScreen;

/// Banner shown when the service call fails without a structured error.
pub(crate) const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again.";
