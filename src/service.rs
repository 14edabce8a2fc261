//! Auth service client.
//!
//! [`AuthService`] is the narrow contract both screens submit through.
//! [`HttpAuthService`] is the production implementation over the backend's
//! JSON API; tests substitute their own implementations.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::config::Config;
use crate::error::AuthCallError;
use crate::types::{AuthOutcome, ServiceError, SignInRequest, SignUpProfile, SignUpRequest};

/// Remote authentication operations.
///
/// Success is the absence of an error descriptor. Implementations report
/// structured backend rejections as [`AuthCallError::Service`] and anything
/// that failed before a descriptor existed as [`AuthCallError::Transport`].
/// Calls may suspend for an unbounded but finite duration; cancellation and
/// timeouts are the service's own concern.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate an existing account
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthCallError>;

    /// Create an account with the given credentials and profile
    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: &SignUpProfile,
    ) -> Result<(), AuthCallError>;
}

/// HTTP client for the auth backend.
#[derive(Debug, Clone)]
pub struct HttpAuthService {
    client: Client,
    config: Config,
}

impl HttpAuthService {
    pub fn new(config: Config) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    async fn post_auth(&self, path: &str, body: &impl Serialize) -> Result<(), AuthCallError> {
        let url = self.config.api_url(path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| AuthCallError::transport(format!("Network error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            // Error statuses still carry the outcome envelope when the
            // backend produced one; otherwise surface the body text.
            let body = response.text().await.unwrap_or_else(|_| status.to_string());
            let error = serde_json::from_str::<AuthOutcome>(&body)
                .ok()
                .and_then(|outcome| outcome.error)
                .unwrap_or_else(|| ServiceError::new(body));
            return Err(AuthCallError::Service(error));
        }

        let outcome: AuthOutcome = response
            .json()
            .await
            .map_err(|e| AuthCallError::transport(format!("Failed to parse response: {}", e)))?;

        match outcome.error {
            Some(error) => Err(AuthCallError::Service(error)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AuthService for HttpAuthService {
    async fn sign_in(&self, email: &str, password: &str) -> Result<(), AuthCallError> {
        let request = SignInRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_auth("/api/auth/sign-in", &request).await
    }

    async fn sign_up(
        &self,
        email: &str,
        password: &str,
        profile: &SignUpProfile,
    ) -> Result<(), AuthCallError> {
        let request = SignUpRequest {
            email: email.to_string(),
            password: password.to_string(),
            profile: profile.clone(),
        };
        self.post_auth("/api/auth/sign-up", &request).await
    }
}
