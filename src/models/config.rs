//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
///
/// Every field has a compiled-in default, so a missing config file yields a
/// fully working setup pointed at the stock source page on port 8080.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Source page and HTTP client settings
    #[serde(default)]
    pub scrape: ScrapeConfig,

    /// CSS selectors for the release listing page
    #[serde(default)]
    pub selectors: SelectorConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        if !path.as_ref().exists() {
            return Self::default();
        }
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.scrape.source_url.trim().is_empty() {
            return Err(AppError::config("scrape.source_url is empty"));
        }
        url::Url::parse(&self.scrape.source_url)?;
        if self.scrape.provider.trim().is_empty() {
            return Err(AppError::config("scrape.provider is empty"));
        }
        if self.scrape.user_agent.trim().is_empty() {
            return Err(AppError::config("scrape.user_agent is empty"));
        }
        if self.scrape.timeout_secs == 0 {
            return Err(AppError::config("scrape.timeout_secs must be > 0"));
        }
        if self.server.port == 0 {
            return Err(AppError::config("server.port must be > 0"));
        }
        Ok(())
    }
}

/// Source page and HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapeConfig {
    /// URL of the release listing page
    #[serde(default = "defaults::source_url")]
    pub source_url: String,

    /// Label identifying the origin site, stamped on every record
    #[serde(default = "defaults::provider")]
    pub provider: String,

    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds
    #[serde(default = "defaults::timeout")]
    pub timeout_secs: u64,

    /// Year appended when composing the release date string
    #[serde(default = "defaults::release_year")]
    pub release_year: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            source_url: defaults::source_url(),
            provider: defaults::provider(),
            user_agent: defaults::user_agent(),
            timeout_secs: defaults::timeout(),
            release_year: defaults::release_year(),
        }
    }
}

/// CSS selectors for the release listing page.
///
/// Two nested scopes: `group` matches one date-scoped cluster of releases,
/// `item` matches each release inside a group. The rest are relative to their
/// enclosing scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Selector for a date-scoped release group
    #[serde(default = "defaults::group_selector")]
    pub group: String,

    /// Selector for the day-of-month element within a group
    #[serde(default = "defaults::day_selector")]
    pub day: String,

    /// Selector for the month element within a group
    #[serde(default = "defaults::month_selector")]
    pub month: String,

    /// Selector for a release item within a group
    #[serde(default = "defaults::item_selector")]
    pub item: String,

    /// Selector for the title element within an item
    #[serde(default = "defaults::title_selector")]
    pub title: String,

    /// Selector for the price element within an item
    #[serde(default = "defaults::price_selector")]
    pub price: String,

    /// Selector for the image element within an item (src attribute)
    #[serde(default = "defaults::image_selector")]
    pub image: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            group: defaults::group_selector(),
            day: defaults::day_selector(),
            month: defaults::month_selector(),
            item: defaults::item_selector(),
            title: defaults::title_selector(),
            price: defaults::price_selector(),
            image: defaults::image_selector(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Port to listen on
    #[serde(default = "defaults::port")]
    pub port: u16,

    /// Directory served at the root route
    #[serde(default = "defaults::static_dir")]
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: defaults::port(),
            static_dir: defaults::static_dir(),
        }
    }
}

mod defaults {
    // Scrape defaults
    pub fn source_url() -> String {
        "https://solecollector.com/sneaker-release-dates/all-release-dates".into()
    }
    pub fn provider() -> String {
        "SOLECOLLECTOR".into()
    }
    pub fn user_agent() -> String {
        "Mozilla/5.0 (compatible; kickwatch/0.1)".into()
    }
    pub fn timeout() -> u64 {
        30
    }
    pub fn release_year() -> String {
        "2019".into()
    }

    // Selector defaults
    pub fn group_selector() -> String {
        ".release-group__container".into()
    }
    pub fn day_selector() -> String {
        ".clg-releases__date__day".into()
    }
    pub fn month_selector() -> String {
        ".clg-releases__date__month".into()
    }
    pub fn item_selector() -> String {
        ".sneaker-release-item".into()
    }
    pub fn title_selector() -> String {
        ".sneaker-release__title".into()
    }
    pub fn price_selector() -> String {
        ".sneaker-release__option--price".into()
    }
    pub fn image_selector() -> String {
        ".sneaker-release__img-16x9 a img".into()
    }

    // Server defaults
    pub fn port() -> u16 {
        8080
    }
    pub fn static_dir() -> String {
        "static".into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_provider() {
        let mut config = Config::default();
        config.scrape.provider = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_unparseable_source_url() {
        let mut config = Config::default();
        config.scrape.source_url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_timeout() {
        let mut config = Config::default();
        config.scrape.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_server_settings_match_the_fixed_surface() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.static_dir, "static");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("[server]\nport = 9090\n").unwrap();
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.scrape.provider, "SOLECOLLECTOR");
        assert_eq!(config.selectors.item, ".sneaker-release-item");
    }
}
