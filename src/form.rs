//! Form state owned by the auth screens.
//!
//! Plain value holders: the screen controller owns one form, one error map,
//! and one submission status, and nothing else mutates them. Forms are
//! reset only by dropping the screen on navigation; there is no explicit
//! clear operation.

use std::collections::BTreeMap;

/// Editable fields on the sign-in screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

/// Editable fields on the sign-up screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignUpForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Display slot an error message is attached to.
///
/// `General` is the banner slot for messages not attributable to a single
/// field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Password,
    ConfirmPassword,
    General,
}

/// Field-keyed error messages for display.
///
/// Recomputed wholesale on each validation pass and each submission
/// failure; a new pass fully replaces the previous map, never merges into
/// it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    entries: BTreeMap<Field, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-entry map carrying a banner message.
    pub fn general(message: impl Into<String>) -> Self {
        Self::field(Field::General, message)
    }

    /// Single-entry map for one field.
    pub fn field(field: Field, message: impl Into<String>) -> Self {
        let mut map = Self::new();
        map.insert(field, message);
        map
    }

    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.entries.insert(field, message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.entries.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.entries.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Entries in field order, for per-field display.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (*field, message.as_str()))
    }
}

/// Whether a submission is currently outstanding.
///
/// `InFlight` while the auth service call is awaited; returns to `Idle` on
/// both the success and failure paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    InFlight,
}

impl SubmissionStatus {
    pub fn is_in_flight(self) -> bool {
        matches!(self, Self::InFlight)
    }
}
