//! loadbench-api: HTTP surface for the load-testing platform
//!
//! Thin plumbing over the service layer: route dispatch and JSON
//! (de)serialization only. All domain behavior lives in `loadbench-core`.
//!
//! Routes:
//!
//! - `POST /scripts`: create a one-step script from a URL
//! - `GET /scripts`: list scripts
//! - `GET /scripts/k6?id=<id>`: fetch the generated k6 artifact
//! - `POST /tests/run`: execute a load test (body = TestConfig JSON)
//! - `GET /history[?scriptId=<id>]`: completed results
//! - `GET /profiles`: the preset catalog
//! - `GET /health`: liveness probe

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod handlers;

pub use error::ApiError;

use loadbench_core::{ScriptService, TestService};

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    /// Runs tests and serves history
    pub tests: Arc<TestService>,
    /// Creates and lists scripts
    pub scripts: Arc<ScriptService>,
}

/// Build the application router
///
/// CORS is permissive because the original platform serves a browser
/// frontend from a different origin.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/scripts",
            post(handlers::create_script).get(handlers::list_scripts),
        )
        .route("/scripts/k6", get(handlers::get_k6_script))
        .route("/tests/run", post(handlers::run_test))
        .route("/history", get(handlers::history))
        .route("/profiles", get(handlers::profiles))
        .route("/health", get(handlers::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
