//! Scrape query payload

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use url::Url;

/// A realtime scrape query
///
/// The wire payload is exactly these two fields: the scrape mode and
/// the target page address. Constructed once, immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrapeQuery {
    /// Scrape mode recognized by the provider (e.g. "universal")
    pub source: String,

    /// Target page address (absolute URL)
    pub url: String,
}

impl ScrapeQuery {
    /// Create a query, validating both fields
    ///
    /// The mode must be non-empty (it is not otherwise validated; the
    /// provider decides which modes exist). The target must parse as an
    /// absolute URL with a host.
    pub fn new(source: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let url = url.into();

        if source.trim().is_empty() {
            return Err(Error::invalid_query("source must be a non-empty string"));
        }
        if url.trim().is_empty() {
            return Err(Error::invalid_query("url must be a non-empty string"));
        }

        let parsed = Url::parse(&url).map_err(|e| {
            Error::invalid_query(format!("target '{url}' is not an absolute URL: {e}"))
        })?;
        if parsed.host_str().is_none() {
            return Err(Error::invalid_query(format!("target '{url}' has no host")));
        }

        Ok(Self { source, url })
    }

    /// The JSON payload sent to the endpoint
    pub fn to_value(&self) -> serde_json::Value {
        serde_json::json!({
            "source": self.source,
            "url": self.url,
        })
    }
}
