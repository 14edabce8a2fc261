//! Shared test doubles for the integration suite.
//!
//! Provides a scripted in-memory auth service that records what it was
//! asked to do, and a navigator that records route replacements instead of
//! navigating.

#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;

use careauth::{AuthCallError, AuthService, Navigator, Route, ServiceError, SignUpProfile};

/// One recorded service invocation.
#[derive(Debug, Clone)]
pub enum RecordedCall {
    SignIn {
        email: String,
        password: String,
    },
    SignUp {
        email: String,
        password: String,
        profile: SignUpProfile,
    },
}

/// Scripted auth service.
///
/// Pops the next scripted result on each call, defaulting to success once
/// the script runs out, and records every invocation for assertions.
pub struct ScriptedAuthService {
    results: Mutex<Vec<Result<(), AuthCallError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedAuthService {
    pub fn new(results: Vec<Result<(), AuthCallError>>) -> Self {
        Self {
            results: Mutex::new(results),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn succeeding() -> Self {
        Self::new(vec![Ok(())])
    }

    pub fn rejecting(error: ServiceError) -> Self {
        Self::new(vec![Err(AuthCallError::Service(error))])
    }

    pub fn failing_transport(message: &str) -> Self {
        Self::new(vec![Err(AuthCallError::transport(message))])
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    fn next_result(&self) -> Result<(), AuthCallError> {
        self.results.lock().unwrap().pop().unwrap_or(Ok(()))
    }
}

#[async_trait]
impl AuthService for ScriptedAuthService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthCallError> {
        self.calls.lock().unwrap().push(RecordedCall::SignIn {
            email: email.to_string(),
            password: password.to_string(),
        });
        self.next_result()
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: &SignUpProfile,
    ) -> Result<(), AuthCallError> {
        self.calls.lock().unwrap().push(RecordedCall::SignUp {
            email: email.to_string(),
            password: password.to_string(),
            profile: profile.clone(),
        });
        self.next_result()
    }
}

/// Records route replacements instead of navigating.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub routes: Vec<Route>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Navigator for RecordingNavigator {
    fn replace(&mut self, route: Route) {
        self.routes.push(route);
    }
}
