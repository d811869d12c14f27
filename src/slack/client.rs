//! `users.lookupByEmail` over HTTP.

use crate::error::ActionError;
use crate::fields::Record;
use crate::slack::SlackConfig;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

/// Body of a `users.lookupByEmail` response.
#[derive(Debug, Clone, Deserialize)]
pub struct LookupResponse {
    pub ok: bool,

    #[serde(default)]
    pub user: Record,

    /// Error code when `ok` is false (e.g. `users_not_found`).
    #[serde(default)]
    pub error: Option<String>,
}

/// Something that can resolve an email address to a user record.
#[async_trait]
pub trait DirectoryLookup: Send + Sync {
    async fn lookup_by_email(&self, email: &str) -> Result<LookupResponse, ActionError>;
}

pub struct SlackClient {
    http: reqwest::Client,
    config: SlackConfig,
}

impl SlackClient {
    pub fn new(config: SlackConfig) -> Result<Self, ActionError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl DirectoryLookup for SlackClient {
    async fn lookup_by_email(&self, email: &str) -> Result<LookupResponse, ActionError> {
        let url = self.config.method_url("users.lookupByEmail");
        debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(self.config.token())
            .query(&[("email", email)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ActionError::SlackApi {
                code: Some(status.to_string()),
            });
        }

        Ok(response.json::<LookupResponse>().await?)
    }
}
