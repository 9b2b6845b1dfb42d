//! Handlers for short URL redirects.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// The path segment may be arbitrary text. Malformed codes are answered
/// exactly like unknown ones, without a database round-trip.
///
/// # Responses
///
/// - `302 Found` with `Location: <long_url>` on success
/// - `404` plain text when the code is invalid or unknown
/// - `500` plain text on unexpected failure (detail is logged, not exposed)
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.link_service.resolve(&code).await {
        Ok(link) => found(&link.long_url),
        Err(AppError::NotFound { .. }) => {
            (StatusCode::NOT_FOUND, "Short link not found").into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, code = %code, "redirect failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
        }
    }
}

/// Redirects the bare root path to the configured frontend.
///
/// # Endpoint
///
/// `GET /`
///
/// An empty short code is not a lookup; it sends the visitor to the
/// frontend with a `302 Found`.
pub async fn root_redirect_handler(State(state): State<AppState>) -> Response {
    found(&state.frontend_url)
}

/// Builds a `302 Found` response to the given location.
///
/// `axum::response::Redirect` only offers 303/307/308; the original wire
/// contract is 302.
fn found(location: &str) -> Response {
    (
        StatusCode::FOUND,
        [(header::LOCATION, location.to_string())],
    )
        .into_response()
}
