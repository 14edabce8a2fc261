use crate::classify;
use crate::config::ProfileDefaults;
use crate::error::AuthCallError;
use crate::form::{ErrorMap, SignUpForm, SubmissionStatus};
use crate::navigation::{Navigator, Route};
use crate::service::AuthService;
use crate::types::SignUpProfile;
use crate::validate;

use super::UNEXPECTED_ERROR;

/// Sign-up screen controller.
///
/// Owns the form, the error map, and the submission status, plus the
/// configured profile defaults copied into every submitted profile.
#[derive(Debug)]
pub struct SignUpScreen {
    form: SignUpForm,
    errors: ErrorMap,
    status: SubmissionStatus,
    defaults: ProfileDefaults,
}

impl Default for SignUpScreen {
    fn default() -> Self {
        Self::new(ProfileDefaults::default())
    }
}

impl SignUpScreen {
    pub fn new(defaults: ProfileDefaults) -> Self {
        Self {
            form: SignUpForm::default(),
            errors: ErrorMap::new(),
            status: SubmissionStatus::Idle,
            defaults,
        }
    }

    // Field setters, driven by the presentation layer's input events.

    pub fn set_full_name(&mut self, value: impl Into<String>) {
        self.form.full_name = value.into();
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.password = value.into();
    }

    pub fn set_confirm_password(&mut self, value: impl Into<String>) {
        self.form.confirm_password = value.into();
    }

    pub fn form(&self) -> &SignUpForm {
        &self.form
    }

    /// Per-field and banner messages from the last attempt
    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    /// For disabling/labeling the submit control
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    // Pure transitions, as on the sign-in screen.

    /// Enter the in-flight state, dropping any displayed errors.
    pub fn submit_start(&mut self) {
        self.status = SubmissionStatus::InFlight;
        self.errors = ErrorMap::new();
    }

    /// Return to idle after a successful submission.
    pub fn submit_success(&mut self) {
        self.status = SubmissionStatus::Idle;
    }

    /// Return to idle, replacing the displayed errors with the failure's.
    pub fn submit_failure(&mut self, errors: ErrorMap) {
        self.errors = errors;
        self.status = SubmissionStatus::Idle;
    }

    /// Validate and submit the form.
    ///
    /// The submitted profile carries the trimmed full name and the
    /// configured role/region defaults. On success the navigator moves to
    /// onboarding before the screen returns to idle.
    pub async fn submit<S, N>(&mut self, service: &S, navigator: &mut N)
    where
        S: AuthService + ?Sized,
        N: Navigator + ?Sized,
    {
        if self.status.is_in_flight() {
            return;
        }

        let errors = validate::sign_up(&self.form);
        if !errors.is_empty() {
            tracing::debug!("sign-up blocked by validation ({} fields)", errors.len());
            self.errors = errors;
            return;
        }

        self.submit_start();
        tracing::info!("sign-up request for: {}", self.form.email);

        let profile = SignUpProfile {
            full_name: self.form.full_name.trim().to_string(),
            role: self.defaults.role.clone(),
            region: self.defaults.region.clone(),
        };

        let result = service
            .sign_up(&self.form.email, &self.form.password, &profile)
            .await;

        match result {
            Ok(()) => {
                tracing::info!("account created for: {}", self.form.email);
                navigator.replace(Route::Onboarding);
                self.submit_success();
            }
            Err(AuthCallError::Service(error)) => {
                tracing::warn!("sign-up rejected: {}", error);
                self.submit_failure(classify::sign_up(&error));
            }
            Err(AuthCallError::Transport { message }) => {
                tracing::error!("sign-up transport failure: {}", message);
                self.submit_failure(ErrorMap::general(UNEXPECTED_ERROR));
            }
        }
    }
}
