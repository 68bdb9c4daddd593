// src/server/mod.rs

//! HTTP endpoint: the query route plus static file serving.

mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{Router, routing::get};
use tower_http::services::ServeDir;

use crate::error::Result;
use crate::graphql::Schema;
use crate::models::Config;
use crate::store::ReleaseStore;

/// Shared state for all handlers.
///
/// The store is populated before the listener starts and never written again,
/// so handlers read it without locking.
pub struct AppState {
    pub schema: Schema,
    pub store: ReleaseStore,
}

/// Build the application router.
///
/// `GET /graphql` executes a query string; every other path falls through to
/// static files under `static_dir`.
pub fn router(state: Arc<AppState>, static_dir: &str) -> Router {
    Router::new()
        .route("/graphql", get(handlers::graphql))
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
}

/// Bind the listener and serve until externally terminated.
pub async fn serve(config: &Config, store: ReleaseStore) -> Result<()> {
    let state = Arc::new(AppState {
        schema: Schema::new(),
        store,
    });
    let app = router(state, &config.server.static_dir);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    let port = config.server.port;
    log::info!("Now server is running on port {port}");
    log::info!(
        "Get single sneaker: curl -g 'http://localhost:{port}/graphql?query={{sneaker(id:1){{id,title,price,date}}}}'"
    );
    log::info!(
        "Load sneaker list: curl -g 'http://localhost:{port}/graphql?query={{sneakerList{{id,title}}}}'"
    );
    log::info!("Access the web app via browser at 'http://localhost:{port}'");

    axum::serve(listener, app).await?;
    Ok(())
}
