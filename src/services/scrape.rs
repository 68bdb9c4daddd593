// src/services/scrape.rs

//! Release scraper service.
//!
//! Fetches the release listing page once and extracts one record per release
//! item using the configured CSS selectors.

use std::sync::Arc;
use std::time::Duration;

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::Result;
use crate::models::{Config, Release};
use crate::services::ReleaseSelectors;
use crate::utils::resolve_url;

/// Service for scraping the release listing page.
pub struct ReleaseScraper {
    config: Arc<Config>,
    selectors: ReleaseSelectors,
    client: reqwest::Client,
    base_url: Option<Url>,
}

impl ReleaseScraper {
    /// Create a new scraper with the given configuration.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let selectors = ReleaseSelectors::parse(&config.selectors)?;
        let client = reqwest::Client::builder()
            .user_agent(&config.scrape.user_agent)
            .timeout(Duration::from_secs(config.scrape.timeout_secs))
            .build()?;
        let base_url = Url::parse(&config.scrape.source_url).ok();

        Ok(Self {
            config,
            selectors,
            client,
            base_url,
        })
    }

    /// Fetch the listing page and extract all releases.
    pub async fn fetch_releases(&self) -> Result<Vec<Release>> {
        let url = &self.config.scrape.source_url;
        log::info!("request: {url}");

        let html = self.client.get(url).send().await?.text().await?;
        let document = Html::parse_document(&html);
        Ok(self.extract(&document))
    }

    /// Extract all releases from a parsed listing page, in document order.
    ///
    /// Missing sub-elements yield empty-string fields. Ids restart at 1 in
    /// every release group; lookups treat the first match as canonical.
    pub fn extract(&self, document: &Html) -> Vec<Release> {
        let mut releases = Vec::new();

        for group in document.select(&self.selectors.group) {
            let day = text_of(&group, &self.selectors.day);
            let month = text_of(&group, &self.selectors.month);
            let date = format!("{}/{}/{}", day, month, self.config.scrape.release_year);

            for (index, item) in group.select(&self.selectors.item).enumerate() {
                let title = text_of(&item, &self.selectors.title);
                let price = text_of(&item, &self.selectors.price).trim().to_string();
                let image = item
                    .select(&self.selectors.image)
                    .next()
                    .and_then(|el| el.value().attr("src"))
                    .map(|src| match &self.base_url {
                        Some(base) => resolve_url(base, src),
                        None => src.to_string(),
                    })
                    .unwrap_or_default();

                releases.push(Release {
                    id: (index + 1) as i32,
                    title,
                    price,
                    date: date.clone(),
                    image,
                    provider: self.config.scrape.provider.clone(),
                });
            }
        }

        releases
    }
}

/// Text content of the first element matching `selector` inside `scope`,
/// or an empty string when nothing matches.
fn text_of(scope: &ElementRef<'_>, selector: &Selector) -> String {
    scope
        .select(selector)
        .next()
        .map(|el| el.text().collect())
        .unwrap_or_default()
}
