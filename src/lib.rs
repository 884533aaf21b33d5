// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # pagefetch
//!
//! Client and CLI for realtime web-scraping APIs.
//!
//! The core operation is a single POST: a `{source, url}` payload goes
//! to the provider's realtime endpoint with basic-auth credentials, and
//! the rendered result comes back as JSON. No queuing, no polling, no
//! retries — one call in, one result out.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pagefetch::scrape::{ScrapeClient, ScrapeQuery};
//! use pagefetch::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ScrapeClient::new(
//!         "https://realtime.oxylabs.io/v1/queries",
//!         std::env::var("SCRAPER_USERNAME").unwrap(),
//!         std::env::var("SCRAPER_PASSWORD").unwrap(),
//!     );
//!
//!     let query = ScrapeQuery::new("universal", "https://example.com/product")?;
//!     let result = client.submit(&query).await?;
//!     println!("{}", serde_json::to_string_pretty(&result)?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        CLI                           │
//! │   fetch <url>      products <item>      validate     │
//! └──────────────────────────┬───────────────────────────┘
//!                            │
//! ┌──────────┬───────────────┴───────────┬───────────────┐
//! │  config  │           scrape          │   products    │
//! │ profiles │   query → POST → JSON     │ OAuth2 search │
//! ├──────────┴───────────────────────────┴───────────────┤
//! │            http (single-shot)  +  auth               │
//! └──────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the crate
pub mod error;

/// Common types and type aliases
pub mod types;

/// Authentication implementations
pub mod auth;

/// Single-shot HTTP client
pub mod http;

/// Realtime scrape queries (the core operation)
pub mod scrape;

/// Product catalog search
pub mod products;

/// Profile configuration
pub mod config;

/// Template interpolation for profile values
pub mod template;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::Profile;
pub use error::{Error, Result};
pub use scrape::{ScrapeClient, ScrapeQuery};
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
