// src/server/handlers.rs

//! Request handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use serde::Deserialize;

use crate::graphql::{self, QueryResult};

use super::AppState;

/// Query string parameters for the graphql route.
#[derive(Debug, Deserialize)]
pub struct GraphqlParams {
    /// The raw query-language string; absent means empty, which surfaces as a
    /// syntax error inside the result document.
    #[serde(default)]
    pub query: String,
}

/// `GET /graphql?query=...`
///
/// Always responds 200; query failures ride inside the result document's
/// error list.
pub async fn graphql(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GraphqlParams>,
) -> Json<QueryResult> {
    Json(graphql::execute(&state.schema, &state.store, &params.query))
}
