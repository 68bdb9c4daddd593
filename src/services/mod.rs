// src/services/mod.rs

//! Scraping services.

mod scrape;
mod selectors;

pub use scrape::ReleaseScraper;
pub use selectors::ReleaseSelectors;
