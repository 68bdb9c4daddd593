// src/lib.rs

//! kickwatch library
//!
//! Scrapes a sneaker release-date listing page once at startup and serves the
//! extracted releases over a small GraphQL-style query endpoint.

pub mod error;
pub mod graphql;
pub mod models;
pub mod server;
pub mod services;
pub mod store;
pub mod utils;
