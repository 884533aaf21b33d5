//! Realtime scrape client

use super::query::ScrapeQuery;
use crate::auth::AuthConfig;
use crate::config::{HttpSettings, Profile};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// Client for a realtime scrape endpoint
///
/// Owns an HTTP client configured with basic-auth credentials. Each
/// `submit` performs exactly one POST to the endpoint; there is no
/// retry and no polling.
#[derive(Debug)]
pub struct ScrapeClient {
    http: HttpClient,
    endpoint: String,
}

impl ScrapeClient {
    /// Create a client for the given endpoint and credentials
    pub fn new(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self::with_settings(endpoint, username, password, &HttpSettings::default())
    }

    /// Create a client with explicit HTTP settings
    pub fn with_settings(
        endpoint: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        settings: &HttpSettings,
    ) -> Self {
        let config = HttpClientConfig::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .user_agent(&settings.user_agent)
            .build();

        let http = HttpClient::with_auth(
            config,
            AuthConfig::Basic {
                username: username.into(),
                password: password.into(),
            },
        );

        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Build a client from a profile, resolving credentials
    pub fn from_profile(profile: &Profile) -> Result<Self> {
        let (username, password) = profile.credentials()?;
        Ok(Self::with_settings(
            &profile.endpoint,
            username,
            password,
            &profile.http,
        ))
    }

    /// The endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Submit a scrape query and return the decoded JSON result
    ///
    /// One POST of the JSON payload with the basic-auth header attached.
    /// A non-2xx status or non-JSON body is an error; nothing is retried.
    pub async fn submit(&self, query: &ScrapeQuery) -> Result<Value> {
        info!("Submitting scrape query for {}", query.url);
        debug!("POST {} source={}", self.endpoint, query.source);

        let result = self.http.post_json(&self.endpoint, query.to_value()).await?;
        debug!("Scrape query for {} returned a result", query.url);
        Ok(result)
    }
}
