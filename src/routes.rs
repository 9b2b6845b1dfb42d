//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`            - Redirect to the configured frontend
//! - `GET  /{code}`      - Short link redirect
//! - `GET  /health`      - Health check
//! - `POST /api/shorten` - Create a short link (CORS-enabled)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive CORS on the API routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, root_redirect_handler};
use crate::api::middleware::{cors, tracing};
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// Static routes (`/health`, `/api/...`) take precedence over the `/{code}`
/// capture, so those path segments can never be looked up as codes.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::api_routes().layer(cors::layer());

    let router = Router::new()
        .route("/", get(root_redirect_handler))
        .route("/{code}", get(redirect_handler))
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
