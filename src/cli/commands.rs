//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pagefetch command-line interface
#[derive(Parser, Debug)]
#[command(name = "pagefetch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Profile file (YAML)
    #[arg(short, long, global = true)]
    pub profile: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a rendered page through the realtime scrape endpoint
    Fetch {
        /// Target page URL (absolute)
        url: String,

        /// Scrape mode (overrides profile)
        #[arg(short, long)]
        source: Option<String>,

        /// Basic-auth username (overrides profile)
        #[arg(short, long)]
        username: Option<String>,

        /// Basic-auth password (overrides profile)
        #[arg(long)]
        password: Option<String>,

        /// Scrape endpoint URL (overrides profile)
        #[arg(long)]
        endpoint: Option<String>,
    },

    /// Search the product catalog for an item
    Products {
        /// Free-text item description, e.g. "zara white blouse"
        item: String,
    },

    /// Load and validate the profile; no network call
    Validate,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON on one line
    Json,
    /// Pretty-printed JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fetch() {
        let cli = Cli::try_parse_from([
            "pagefetch",
            "fetch",
            "https://example.com/item",
            "--source",
            "universal",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Pretty);
        match cli.command {
            Commands::Fetch { url, source, .. } => {
                assert_eq!(url, "https://example.com/item");
                assert_eq!(source.as_deref(), Some("universal"));
            }
            other => panic!("Expected Fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_fetch_with_credentials() {
        let cli = Cli::try_parse_from([
            "pagefetch",
            "fetch",
            "https://example.com/item",
            "-u",
            "user",
            "--password",
            "pass1",
        ])
        .unwrap();

        match cli.command {
            Commands::Fetch {
                username, password, ..
            } => {
                assert_eq!(username.as_deref(), Some("user"));
                assert_eq!(password.as_deref(), Some("pass1"));
            }
            other => panic!("Expected Fetch, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_products_with_format() {
        let cli =
            Cli::try_parse_from(["pagefetch", "products", "zara white blouse", "-f", "json"])
                .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        match cli.command {
            Commands::Products { item } => assert_eq!(item, "zara white blouse"),
            other => panic!("Expected Products, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_validate_with_profile() {
        let cli =
            Cli::try_parse_from(["pagefetch", "validate", "-p", "pagefetch.yaml"]).unwrap();

        assert_eq!(cli.profile.unwrap().to_str(), Some("pagefetch.yaml"));
        assert!(matches!(cli.command, Commands::Validate));
    }

    #[test]
    fn test_fetch_requires_url() {
        assert!(Cli::try_parse_from(["pagefetch", "fetch"]).is_err());
    }
}
