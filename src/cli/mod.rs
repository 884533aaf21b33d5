//! CLI module
//!
//! # Commands
//!
//! - `fetch` - Fetch a rendered page through the realtime scrape endpoint
//! - `products` - Search the product catalog for an item
//! - `validate` - Validate the profile without any network call

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
