//! Pre-submission validation for the auth screens.
//!
//! Pure functions of the current field values: the returned map contains
//! only the failing fields, and an empty map clears the form for
//! submission. Validation runs on every submit attempt, not on keystrokes,
//! and never reaches the network.

use std::sync::LazyLock;

use regex::Regex;

use crate::form::{ErrorMap, Field, SignInForm, SignUpForm};

/// Minimum password length accepted at sign-up.
pub const PASSWORD_MIN_LEN: usize = 8;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// Validate the sign-in form.
pub fn sign_in(form: &SignInForm) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if form.email.is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !EMAIL_PATTERN.is_match(&form.email) {
        errors.insert(Field::Email, "Please enter a valid email");
    }

    if form.password.is_empty() {
        errors.insert(Field::Password, "Password is required");
    }

    errors
}

/// Validate the sign-up form.
pub fn sign_up(form: &SignUpForm) -> ErrorMap {
    let mut errors = ErrorMap::new();

    // Whitespace-only names count as missing.
    if form.full_name.trim().is_empty() {
        errors.insert(Field::FullName, "Full name is required");
    }

    if form.email.is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !EMAIL_PATTERN.is_match(&form.email) {
        errors.insert(Field::Email, "Please enter a valid email");
    }

    if form.password.is_empty() {
        errors.insert(Field::Password, "Password is required");
    } else if form.password.chars().count() < PASSWORD_MIN_LEN {
        errors.insert(Field::Password, "Password must be at least 8 characters");
    }

    // A mismatch is attached to the confirmation field only.
    if form.confirm_password.is_empty() {
        errors.insert(Field::ConfirmPassword, "Please confirm your password");
    } else if form.confirm_password != form.password {
        errors.insert(Field::ConfirmPassword, "Passwords do not match");
    }

    errors
}
