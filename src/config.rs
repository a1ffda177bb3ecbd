//! Command line configuration.

use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

use crate::i18n::Locale;

/// Command line configuration for Medina.
#[derive(Debug, Clone, Parser)]
#[command(name = "medina", version, about, long_about = None)]
pub struct Config {
    /// Blog content directory
    #[arg(default_value = "content/blog")]
    pub content: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Site name shown in page chrome
    #[arg(long, default_value = "Maghrib.Digital")]
    pub name: String,

    /// Chrome locale for the listing pages (fr, en, ar)
    #[arg(long, default_value = "fr")]
    pub locale: String,

    /// Base URL the site will be served from, used for share links
    #[arg(long, default_value = "https://maghrib.digital")]
    pub base_url: String,

    /// Open the generated listing in a browser
    #[arg(long)]
    pub open: bool,
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
    /// Returns error if the content directory does not exist or the
    /// locale code is not supported.
    pub fn validate(&self) -> Result<()> {
        if !self.content.exists() {
            bail!(
                "Content directory does not exist: {}",
                self.content.display()
            );
        }

        Locale::parse(&self.locale)?;
        Ok(())
    }

    /// Returns the parsed chrome locale.
    ///
    /// # Errors
    ///
    /// Returns error if the locale code is not supported.
    pub fn chrome_locale(&self) -> Result<Locale> {
        Locale::parse(&self.locale)
    }

    /// Absolute URL of a generated post page, for share intents.
    pub fn share_url(&self, slug: &str) -> String {
        format!("{}/blog/{}.html", self.base_url.trim_end_matches('/'), slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            content: PathBuf::from("."),
            output: PathBuf::from("dist"),
            name: "Maghrib.Digital".to_string(),
            locale: "fr".to_string(),
            base_url: "https://maghrib.digital".to_string(),
            open: false,
        }
    }

    #[test]
    fn test_validate_existing_path() {
        // Arrange
        let config = test_config();

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_ok(), "Current directory should be valid");
    }

    #[test]
    fn test_validate_missing_content_dir() {
        // Arrange
        let config = Config {
            content: PathBuf::from("/no/such/content/dir"),
            ..test_config()
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Missing content directory should fail");
    }

    #[test]
    fn test_validate_unknown_locale() {
        // Arrange
        let config = Config {
            locale: "de".to_string(),
            ..test_config()
        };

        // Act
        let result = config.validate();

        // Assert
        assert!(result.is_err(), "Unsupported locale should fail validation");
    }

    #[test]
    fn test_chrome_locale_parses() {
        // Arrange
        let config = Config {
            locale: "en".to_string(),
            ..test_config()
        };

        // Act & Assert
        assert_eq!(config.chrome_locale().unwrap(), Locale::En);
    }

    #[test]
    fn test_share_url_joins_cleanly() {
        // Arrange
        let config = Config {
            base_url: "https://maghrib.digital/".to_string(),
            ..test_config()
        };

        // Act & Assert
        assert_eq!(
            config.share_url("us-llc-guide"),
            "https://maghrib.digital/blog/us-llc-guide.html"
        );
    }

    #[test]
    fn test_config_clone() {
        // Arrange
        let original = test_config();

        // Act
        let cloned = original.clone();

        // Assert
        assert_eq!(cloned.content, original.content);
        assert_eq!(cloned.output, original.output);
        assert_eq!(cloned.name, original.name);
        assert_eq!(cloned.locale, original.locale);
    }
}
