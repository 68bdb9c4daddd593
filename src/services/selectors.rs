// src/services/selectors.rs

//! Parsed CSS selectors for the release listing page.

use scraper::Selector;

use crate::error::{AppError, Result};
use crate::models::SelectorConfig;

/// The full selector set, parsed once up front so a bad selector fails at
/// startup instead of mid-extraction.
#[derive(Debug)]
pub struct ReleaseSelectors {
    /// Date-scoped release group
    pub group: Selector,

    /// Day-of-month element within a group
    pub day: Selector,

    /// Month element within a group
    pub month: Selector,

    /// Release item within a group
    pub item: Selector,

    /// Title element within an item
    pub title: Selector,

    /// Price element within an item
    pub price: Selector,

    /// Image element within an item
    pub image: Selector,
}

impl ReleaseSelectors {
    /// Parse all selectors from the configuration.
    pub fn parse(config: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            group: parse_selector(&config.group)?,
            day: parse_selector(&config.day)?,
            month: parse_selector(&config.month)?,
            item: parse_selector(&config.item)?,
            title: parse_selector(&config.title)?,
            price: parse_selector(&config.price)?,
            image: parse_selector(&config.image)?,
        })
    }
}

fn parse_selector(s: &str) -> Result<Selector> {
    Selector::parse(s).map_err(|e| AppError::selector(s, format!("{e:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selector_valid() {
        assert!(parse_selector("div.class").is_ok());
        assert!(parse_selector(".sneaker-release__img-16x9 a img").is_ok());
    }

    #[test]
    fn test_parse_selector_invalid() {
        assert!(parse_selector("[[invalid").is_err());
    }

    #[test]
    fn test_parse_default_selector_set() {
        assert!(ReleaseSelectors::parse(&SelectorConfig::default()).is_ok());
    }
}
