//! Application configuration module
//!
//! Provides the client configuration consumed by the auth flow: the server
//! URL the HTTP client posts to, and the profile defaults attached to every
//! sign-up submission.

use thiserror::Error;

/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:3000";

/// Default account role for new sign-ups
const DEFAULT_ROLE: &str = "patient";

/// Default service region for new sign-ups
const DEFAULT_REGION: &str = "AU";

/// Profile attribute defaults applied to every sign-up submission.
///
/// Policy values, not user input: the sign-up screen receives these at
/// construction and copies them into the submitted profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDefaults {
    /// Account role, e.g. "patient"
    pub role: String,
    /// Service region code, e.g. "AU"
    pub region: String,
}

impl Default for ProfileDefaults {
    fn default() -> Self {
        Self {
            role: DEFAULT_ROLE.to_string(),
            region: DEFAULT_REGION.to_string(),
        }
    }
}

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    server_url: String,
    profile_defaults: ProfileDefaults,
}

impl Default for Config {
    fn default() -> Self {
        let server_url =
            std::env::var("CLIENT_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self {
            server_url,
            profile_defaults: ProfileDefaults::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new ConfigBuilder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Profile defaults handed to the sign-up screen
    pub fn profile_defaults(&self) -> &ProfileDefaults {
        &self.profile_defaults
    }
}

/// Builder for Config
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    server_url: Option<String>,
    role: Option<String>,
    region: Option<String>,
}

impl ConfigBuilder {
    /// Set the server URL
    pub fn server_url(mut self, url: impl Into<String>) -> Self {
        self.server_url = Some(url.into());
        self
    }

    /// Set the default account role for sign-ups
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Set the default service region for sign-ups
    pub fn region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, ConfigError> {
        let server_url = match self.server_url {
            Some(url) if url.is_empty() => return Err(ConfigError::MissingValue("server_url")),
            Some(url) => url,
            None => {
                std::env::var("CLIENT_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string())
            }
        };

        let defaults = ProfileDefaults::default();
        let role = self.role.unwrap_or(defaults.role);
        if role.is_empty() {
            return Err(ConfigError::MissingValue("role"));
        }
        let region = self.region.unwrap_or(defaults.region);
        if region.is_empty() {
            return Err(ConfigError::MissingValue("region"));
        }

        Ok(Config {
            server_url,
            profile_defaults: ProfileDefaults { role, region },
        })
    }
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}
