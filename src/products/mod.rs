//! Product catalog search
//!
//! Searches a brand catalog API for products matching a free-text
//! description. Requests carry an OAuth2 bearer token obtained through
//! the client-credentials flow.

mod search;

pub use search::{split_brand, ProductHit, ProductSearch};
