// src/models/mod.rs

//! Domain models for the application.

mod config;
mod release;

// Re-export all public types
pub use config::{Config, ScrapeConfig, SelectorConfig, ServerConfig};
pub use release::Release;
