//! Catalog search client and brand/query splitting

use crate::auth::AuthConfig;
use crate::config::{HttpSettings, ProductsConfig};
use crate::error::Result;
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, info};

/// One catalog search result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductHit {
    /// Product name
    pub name: String,

    /// Price, in whatever shape the catalog returns it
    #[serde(default)]
    pub price: Option<Value>,

    /// Product page link
    #[serde(default)]
    pub link: Option<String>,

    /// Brand the product belongs to
    #[serde(default)]
    pub brand: Option<String>,
}

/// Split a free-text item description into (brand, search query)
///
/// The brand is the first configured name found in the item
/// (case-insensitive); when none matches, the first configured brand is
/// the default. The query is the item with every brand name stripped
/// and whitespace collapsed.
pub fn split_brand(item: &str, brands: &[String]) -> (String, String) {
    let default_brand = brands.first().cloned().unwrap_or_default();

    let lower = item.to_lowercase();
    let brand = brands
        .iter()
        .find(|b| lower.contains(&b.to_lowercase()))
        .cloned()
        .unwrap_or(default_brand);

    let query = if brands.is_empty() {
        item.to_string()
    } else {
        let pattern = brands
            .iter()
            .map(|b| regex::escape(b))
            .collect::<Vec<_>>()
            .join("|");
        // Brand list comes from config; escaped names always form a valid pattern
        let re = regex::Regex::new(&format!("(?i){pattern}")).expect("brand pattern");
        re.replace_all(item, "").to_string()
    };
    let query = query.split_whitespace().collect::<Vec<_>>().join(" ");

    (brand, query)
}

/// Client for the product catalog search endpoint
#[derive(Debug)]
pub struct ProductSearch {
    http: HttpClient,
    search_url: String,
    brands: Vec<String>,
}

impl ProductSearch {
    /// Create a search client from the products config
    pub fn new(config: &ProductsConfig, settings: &HttpSettings) -> Self {
        let http_config = HttpClientConfig::builder()
            .timeout(Duration::from_secs(settings.timeout_seconds))
            .user_agent(&settings.user_agent)
            .build();

        let http = HttpClient::with_auth(
            http_config,
            AuthConfig::Oauth2ClientCredentials {
                token_url: config.token_url.clone(),
                client_id: config.client_id.clone(),
                client_secret: config.client_secret.clone(),
                scope: config.scope.clone(),
            },
        );

        Self {
            http,
            search_url: config.search_url.clone(),
            brands: config.brands.clone(),
        }
    }

    /// Search the catalog for products matching the item description
    ///
    /// Returns every hit the catalog reports, in its order. No results
    /// is an empty list, not an error.
    pub async fn search(&self, item: &str) -> Result<Vec<ProductHit>> {
        let (brand, query) = split_brand(item, &self.brands);
        info!("Searching catalog for '{query}' (brand: {brand})");

        let hits: Vec<ProductHit> = self
            .http
            .get_json_with_config(
                &self.search_url,
                RequestConfig::new().query("query", query).query("brand", brand),
            )
            .await?;

        debug!("Catalog returned {} hit(s)", hits.len());
        Ok(hits)
    }
}
