// src/main.rs

//! kickwatch: scrape the release listing once, then serve it.
//!
//! Startup is strictly sequential: configuration, one fetch-and-extract pass,
//! then the HTTP listener. A failed fetch aborts the process before it ever
//! accepts a request.

use std::sync::Arc;

use kickwatch::error::Result;
use kickwatch::models::Config;
use kickwatch::server;
use kickwatch::services::ReleaseScraper;
use kickwatch::store::ReleaseStore;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load_or_default("data/config.toml");
    config.validate()?;

    let scraper = ReleaseScraper::new(Arc::new(config.clone()))?;
    let releases = scraper.fetch_releases().await?;
    log::info!(
        "scraped {} releases from {}",
        releases.len(),
        config.scrape.provider
    );

    server::serve(&config, ReleaseStore::new(releases)).await
}
