//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// Default site title shown in headers, page titles and footer.
pub const DEFAULT_SITE_NAME: &str = "Papersite";

/// Command line configuration for Papersite.
#[derive(Debug, Clone, Parser)]
#[command(name = "papersite", version, about, long_about = None)]
pub struct Config {
    /// Articles JSON file
    #[arg(default_value = "articles.json")]
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site name
    #[arg(long, default_value = DEFAULT_SITE_NAME)]
    pub name: String,

    /// Do not open the generated site in a browser
    #[arg(long)]
    pub no_open: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the articles file does not exist or is a directory,
    /// or if the site name is blank.
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            bail!("Articles file does not exist: {}", self.input.display());
        }

        if self.input.is_dir() {
            bail!("Articles path is a directory: {}", self.input.display());
        }

        if self.name.trim().is_empty() {
            bail!("Site name must not be blank");
        }

        Ok(())
    }
}
