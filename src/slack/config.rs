//! Connection settings for the Slack Web API.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://slack.com/api";

#[derive(Clone)]
pub struct SlackConfig {
    /// Bot OAuth token (xoxb-...).
    token: SecretString,
    /// Base URL of the Web API, without the method name.
    api_url: String,
    /// Request timeout; `None` waits for as long as the service takes.
    timeout: Option<Duration>,
}

impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field("token", &"[REDACTED]")
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl SlackConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: SecretString::from(token.into()),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn token(&self) -> &str {
        self.token.expose_secret()
    }

    pub fn has_token(&self) -> bool {
        !self.token.expose_secret().trim().is_empty()
    }

    /// Full URL for a Web API method, e.g. `users.lookupByEmail`.
    pub fn method_url(&self, method: &str) -> String {
        format!("{}/{}", self.api_url.trim_end_matches('/'), method)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
