//! HTTP client module
//!
//! Provides a single-shot HTTP client: every call maps to exactly one
//! network request. Non-2xx statuses and timeouts surface as typed
//! errors; nothing is retried.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
