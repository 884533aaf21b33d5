//! Profile configuration
//!
//! A profile is a YAML file holding the endpoint, scrape mode, and
//! credentials. Values may reference the environment with
//! `{{ env.NAME }}` templates, which are rendered before parsing.
//! Anything a profile sets can be overridden by a CLI flag.

use crate::error::{Error, Result};
use crate::template::{self, TemplateContext};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

/// Default realtime scrape endpoint
pub const DEFAULT_ENDPOINT: &str = "https://realtime.oxylabs.io/v1/queries";

/// Default scrape mode (generic page rendering)
pub const DEFAULT_SOURCE: &str = "universal";

// ============================================================================
// Profile
// ============================================================================

/// Complete profile loaded from YAML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Realtime scrape endpoint URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Scrape mode sent as the payload `source` field
    #[serde(default = "default_source")]
    pub source: String,

    /// Basic-auth credentials for the scrape endpoint
    #[serde(default)]
    pub auth: BasicCredentials,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpSettings,

    /// Product catalog search settings (optional)
    #[serde(default)]
    pub products: Option<ProductsConfig>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            source: default_source(),
            auth: BasicCredentials::default(),
            http: HttpSettings::default(),
            products: None,
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

impl Profile {
    /// Load a profile from a YAML file, rendering `{{ env.* }}` templates
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::config(format!("Profile file '{}' not found", path.display()))
            } else {
                Error::config(format!(
                    "Failed to read profile file '{}': {}",
                    path.display(),
                    e
                ))
            }
        })?;
        Self::parse(&content, &TemplateContext::new())
    }

    /// Parse a profile from a YAML string using the process environment
    pub fn from_yaml(content: &str) -> Result<Self> {
        Self::parse(content, &TemplateContext::new())
    }

    /// Parse a profile from a YAML string with an explicit template context
    pub fn parse(content: &str, ctx: &TemplateContext) -> Result<Self> {
        let raw: serde_json::Value = serde_yaml::from_str(content)?;
        let rendered = template::render_value(&raw, ctx)?;
        let profile: Self = serde_json::from_value(rendered)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Validate the profile's shape (no network I/O)
    pub fn validate(&self) -> Result<()> {
        if self.source.trim().is_empty() {
            return Err(Error::invalid_value("source", "must be a non-empty string"));
        }
        let parsed = url::Url::parse(&self.endpoint)?;
        if parsed.host_str().is_none() {
            return Err(Error::invalid_value("endpoint", "URL has no host"));
        }
        if let Some(products) = &self.products {
            url::Url::parse(&products.search_url)?;
            url::Url::parse(&products.token_url)?;
        }
        Ok(())
    }

    /// Resolved basic-auth credentials, or a missing-field error
    pub fn credentials(&self) -> Result<(String, String)> {
        let username = self
            .auth
            .username
            .clone()
            .ok_or_else(|| Error::missing_field("auth.username"))?;
        let password = self
            .auth
            .password
            .clone()
            .ok_or_else(|| Error::missing_field("auth.password"))?;
        Ok((username, password))
    }

    /// Summary of the profile with secrets masked, for display
    pub fn summary(&self) -> serde_json::Value {
        serde_json::json!({
            "endpoint": self.endpoint,
            "source": self.source,
            "auth": {
                "username": self.auth.username,
                "password": mask(self.auth.password.as_deref()),
            },
            "http": {
                "timeout_seconds": self.http.timeout_seconds,
                "user_agent": self.http.user_agent,
            },
            "products": self.products.as_ref().map(|p| serde_json::json!({
                "search_url": p.search_url,
                "token_url": p.token_url,
                "client_id": p.client_id,
                "client_secret": mask(Some(&p.client_secret)),
                "scope": p.scope,
                "brands": p.brands,
            })),
        })
    }
}

fn mask(secret: Option<&str>) -> &'static str {
    match secret {
        Some(s) if !s.is_empty() => "********",
        _ => "(unset)",
    }
}

// ============================================================================
// Credentials
// ============================================================================

/// Basic-auth credential pair
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct BasicCredentials {
    /// Username
    #[serde(default)]
    pub username: Option<String>,

    /// Password
    #[serde(default)]
    pub password: Option<String>,
}

// Password never appears in logs or debug output
impl fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("username", &self.username)
            .field("password", &self.password.as_deref().map(|_| "********"))
            .finish()
    }
}

// ============================================================================
// HTTP Settings
// ============================================================================

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    format!("pagefetch/{}", env!("CARGO_PKG_VERSION"))
}

// ============================================================================
// Products
// ============================================================================

/// Product catalog search settings
#[derive(Clone, Serialize, Deserialize)]
pub struct ProductsConfig {
    /// Catalog search endpoint URL
    pub search_url: String,

    /// OAuth2 token endpoint URL
    pub token_url: String,

    /// OAuth2 client id
    pub client_id: String,

    /// OAuth2 client secret
    pub client_secret: String,

    /// OAuth2 scope
    #[serde(default)]
    pub scope: Option<String>,

    /// Known brand names, in match-priority order; the first is the default
    #[serde(default = "default_brands")]
    pub brands: Vec<String>,
}

impl fmt::Debug for ProductsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProductsConfig")
            .field("search_url", &self.search_url)
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"********")
            .field("scope", &self.scope)
            .field("brands", &self.brands)
            .finish()
    }
}

fn default_brands() -> Vec<String> {
    vec![
        "zara".to_string(),
        "massimo duti".to_string(),
        "pull & bear".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let profile = Profile::default();
        assert_eq!(profile.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(profile.source, "universal");
        assert!(profile.auth.username.is_none());
        assert_eq!(profile.http.timeout_seconds, 30);
        assert!(profile.products.is_none());
    }

    #[test]
    fn test_parse_minimal_profile() {
        let yaml = r#"
auth:
  username: scraper
  password: hunter2
"#;
        let profile = Profile::from_yaml(yaml).unwrap();
        assert_eq!(profile.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(profile.source, "universal");
        assert_eq!(profile.credentials().unwrap().0, "scraper");
    }

    #[test]
    fn test_parse_full_profile() {
        let yaml = r#"
endpoint: "https://realtime.example.io/v1/queries"
source: universal_ecommerce
auth:
  username: scraper
  password: hunter2
http:
  timeout_seconds: 60
  user_agent: "custom-agent/2.0"
products:
  search_url: "https://api.example.com/products"
  token_url: "https://auth.example.com/oauth2/token"
  client_id: my-client
  client_secret: my-secret
  scope: "catalog.read"
"#;
        let profile = Profile::from_yaml(yaml).unwrap();
        assert_eq!(profile.endpoint, "https://realtime.example.io/v1/queries");
        assert_eq!(profile.source, "universal_ecommerce");
        assert_eq!(profile.http.timeout_seconds, 60);
        assert_eq!(profile.http.user_agent, "custom-agent/2.0");

        let products = profile.products.unwrap();
        assert_eq!(products.client_id, "my-client");
        assert_eq!(products.scope.as_deref(), Some("catalog.read"));
        // Brand list defaults when omitted
        assert_eq!(products.brands[0], "zara");
    }

    #[test]
    fn test_env_templates() {
        let yaml = r#"
auth:
  username: "{{ env.SCRAPER_USERNAME }}"
  password: "{{ env.SCRAPER_PASSWORD }}"
"#;
        let ctx = TemplateContext::new()
            .with_var("SCRAPER_USERNAME", "alice")
            .with_var("SCRAPER_PASSWORD", "s3cret");
        let profile = Profile::parse(yaml, &ctx).unwrap();
        assert_eq!(
            profile.credentials().unwrap(),
            ("alice".to_string(), "s3cret".to_string())
        );
    }

    #[test]
    fn test_unset_env_template_fails() {
        let yaml = r#"
auth:
  username: scraper
  password: "{{ env.PAGEFETCH_TEST_UNSET_SECRET }}"
"#;
        let err = Profile::parse(yaml, &TemplateContext::new()).unwrap_err();
        assert!(err
            .to_string()
            .contains("env.PAGEFETCH_TEST_UNSET_SECRET"));
    }

    #[test]
    fn test_missing_credentials() {
        let profile = Profile::default();
        let err = profile.credentials().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Missing required config field: auth.username"
        );
    }

    #[test]
    fn test_invalid_endpoint_rejected() {
        let yaml = "endpoint: \"not a url\"\n";
        assert!(Profile::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_empty_source_rejected() {
        let yaml = "source: \"  \"\n";
        assert!(Profile::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_debug_masks_secrets() {
        let creds = BasicCredentials {
            username: Some("scraper".to_string()),
            password: Some("hunter2".to_string()),
        };
        let debug = format!("{creds:?}");
        assert!(debug.contains("scraper"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_summary_masks_secrets() {
        let yaml = r#"
auth:
  username: scraper
  password: hunter2
"#;
        let profile = Profile::from_yaml(yaml).unwrap();
        let summary = serde_json::to_string(&profile.summary()).unwrap();
        assert!(summary.contains("scraper"));
        assert!(!summary.contains("hunter2"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "endpoint: \"https://realtime.example.io/v1/queries\"\nauth:\n  username: u\n  password: p"
        )
        .unwrap();

        let profile = Profile::load(file.path()).unwrap();
        assert_eq!(profile.endpoint, "https://realtime.example.io/v1/queries");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Profile::load("/nonexistent/pagefetch.yaml").unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
