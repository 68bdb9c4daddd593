// src/graphql/mod.rs

//! GraphQL-style query layer over the release store.
//!
//! Supports the two-field surface the frontend needs:
//!
//! ```text
//! { sneaker(id: 3) { id title price date image provider } }
//! { sneakerList { id title price date image provider } }
//! ```
//!
//! A hand-written parser handles this query subset; execution resolves root
//! fields through a fixed dispatch table. Errors (bad syntax, unknown fields,
//! missing selections) are collected into the result document and never
//! escape as process failures.

mod execute;
mod parser;
mod schema;

pub use execute::{GraphqlError, QueryResult, execute};
pub use parser::{Document, Field, ParseError, Value, parse};
pub use schema::{RELEASE_FIELDS, Resolved, RootField, Schema};
