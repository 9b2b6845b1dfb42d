//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// `201 Created` with:
///
/// ```json
/// {
///   "shortUrl": "http://localhost:3001/1",
///   "shortCode": "1",
///   "longUrl": "https://example.com/some/long/path"
/// }
/// ```
///
/// # Errors
///
/// Returns `400` with `{ "error": "<message>" }` on validation failure —
/// including a missing `url` field or a non-JSON body, which never reach the
/// service — and `500` with the same shape on storage failure; the 500
/// message hints at a missing schema or unreachable database when that is
/// the likely cause.
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let created = state.link_service.create_short_link(&payload.url).await?;

    tracing::info!(id = created.id, code = %created.short_code, "short link created");

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_url: created.short_url,
            short_code: created.short_code,
            long_url: created.long_url,
        }),
    ))
}
