//! CORS middleware for the JSON API.

use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer for the API routes.
///
/// The create endpoint is consumed by a browser frontend served from a
/// different origin, so any origin may call it. The redirect path does not
/// need CORS; browsers follow redirects as navigations.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
