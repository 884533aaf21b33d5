//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::Profile;
use crate::error::{Error, Result};
use crate::products::ProductSearch;
use crate::scrape::{ScrapeClient, ScrapeQuery};
use crate::types::OptionStringExt;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Fetch {
                url,
                source,
                username,
                password,
                endpoint,
            } => {
                self.fetch(
                    url,
                    source.as_deref(),
                    username.as_deref(),
                    password.as_deref(),
                    endpoint.as_deref(),
                )
                .await
            }
            Commands::Products { item } => self.products(item).await,
            Commands::Validate => self.validate(),
        }
    }

    /// Load the profile, or fall back to defaults when no file is given
    fn load_profile(&self) -> Result<Profile> {
        match &self.cli.profile {
            Some(path) => Profile::load(path),
            None => Ok(Profile::default()),
        }
    }

    /// Execute the fetch command: one scrape query, result to stdout
    async fn fetch(
        &self,
        url: &str,
        source: Option<&str>,
        username: Option<&str>,
        password: Option<&str>,
        endpoint: Option<&str>,
    ) -> Result<()> {
        let mut profile = self.load_profile()?;

        // Flags override the profile
        if let Some(source) = source {
            profile.source = source.to_string();
        }
        if let Some(endpoint) = endpoint {
            profile.endpoint = endpoint.to_string();
        }
        if let Some(username) = username.map(str::to_string).none_if_empty() {
            profile.auth.username = Some(username);
        }
        if let Some(password) = password.map(str::to_string).none_if_empty() {
            profile.auth.password = Some(password);
        }

        let client = ScrapeClient::from_profile(&profile)?;
        let query = ScrapeQuery::new(&profile.source, url)?;
        let result = client.submit(&query).await?;

        self.print_value(&result)
    }

    /// Execute the products command: catalog search, hit list to stdout
    async fn products(&self, item: &str) -> Result<()> {
        let profile = self.load_profile()?;
        let config = profile
            .products
            .as_ref()
            .ok_or_else(|| Error::missing_field("products"))?;

        let search = ProductSearch::new(config, &profile.http);
        let hits = search.search(item).await?;

        self.print_value(&serde_json::to_value(hits)?)
    }

    /// Execute the validate command: load, validate, print masked summary
    fn validate(&self) -> Result<()> {
        let profile = self.load_profile()?;
        profile.validate()?;
        self.print_value(&profile.summary())
    }

    /// Print a JSON value in the selected output format
    fn print_value(&self, value: &serde_json::Value) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{rendered}");
        Ok(())
    }
}
