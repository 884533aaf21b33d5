//! Authentication module
//!
//! Supports: Basic, Bearer, OAuth2 client credentials
//!
//! The `Authenticator` handles all auth types and manages token caching
//! for the OAuth2 flow.

mod authenticator;
mod types;

pub use authenticator::Authenticator;
pub use types::{AuthConfig, CachedToken};
