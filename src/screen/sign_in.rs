use crate::classify;
use crate::error::AuthCallError;
use crate::form::{ErrorMap, SignInForm, SubmissionStatus};
use crate::navigation::{Navigator, Route};
use crate::service::AuthService;
use crate::validate;

use super::UNEXPECTED_ERROR;

/// Sign-in screen controller.
///
/// Owns the form, the error map, and the submission status. Submission is
/// serialized by the idle/in-flight guard in [`submit`](Self::submit):
/// repeated triggers while a call is outstanding are fast no-ops.
#[derive(Debug, Default)]
pub struct SignInScreen {
    form: SignInForm,
    errors: ErrorMap,
    status: SubmissionStatus,
}

impl SignInScreen {
    pub fn new() -> Self {
        Self::default()
    }

    // Field setters, driven by the presentation layer's input events.

    pub fn set_email(&mut self, value: impl Into<String>) {
        self.form.email = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.form.password = value.into();
    }

    pub fn form(&self) -> &SignInForm {
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

    // Pure transitions. `submit` composes these; a host shell or test can
    // also drive the machine directly.

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
    /// Validation failures surface per field and never reach the service.
    /// On success the navigator replaces the route before the screen
    /// returns to idle; on failure the classified messages are displayed.
    pub async fn submit<S, N>(&mut self, service: &S, navigator: &mut N)
    where
        S: AuthService + ?Sized,
        N: Navigator + ?Sized,
    {
        if self.status.is_in_flight() {
            return;
        }

        let errors = validate::sign_in(&self.form);
        if !errors.is_empty() {
            tracing::debug!("sign-in blocked by validation ({} fields)", errors.len());
            self.errors = errors;
            return;
        }

        self.submit_start();
        tracing::info!("sign-in request for: {}", self.form.email);

        let result = service.sign_in(&self.form.email, &self.form.password).await;

        match result {
            Ok(()) => {
                tracing::info!("sign-in succeeded for: {}", self.form.email);
                navigator.replace(Route::MainTabs);
                self.submit_success();
            }
            Err(AuthCallError::Service(error)) => {
                tracing::warn!("sign-in rejected: {}", error);
                self.submit_failure(classify::sign_in(&error));
            }
            Err(AuthCallError::Transport { message }) => {
                tracing::error!("sign-in transport failure: {}", message);
                self.submit_failure(ErrorMap::general(UNEXPECTED_ERROR));
            }
        }
    }
}
