//! Application error taxonomy and HTTP response mapping.
//!
//! The create path always answers with a JSON body of the form
//! `{ "error": "<message>" }`; the redirect path renders plain text in its
//! handler instead of going through [`IntoResponse`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned when the database is unreachable or the schema is missing.
pub const DATABASE_HINT: &str =
    "Database error. Ensure PostgreSQL is running, the database exists, and migrations have been applied.";

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client-side input error (bad/missing/wrong-scheme URL). 400.
    #[error("{message}")]
    Validation { message: String },

    /// Unknown or malformed short code. 404.
    #[error("{message}")]
    NotFound { message: String },

    /// Datastore unreachable, pool exhausted, or schema missing. 500.
    #[error("{message}")]
    Unavailable { message: String },

    /// Any other persistence or unexpected failure. 500.
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Unavailable { message } | AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "database operation failed");

        match &e {
            // The pool could not produce a connection within its bounds, or
            // the round-trip to Postgres never happened.
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::Configuration(_) => AppError::unavailable(DATABASE_HINT),
            // 42P01 undefined_table: the database is up but schema.sql /
            // migrations were never applied.
            sqlx::Error::Database(db) if db.code().as_deref() == Some("42P01") => {
                AppError::unavailable(DATABASE_HINT)
            }
            _ => AppError::internal("Failed to shorten URL"),
        }
    }
}

impl From<axum::extract::rejection::JsonRejection> for AppError {
    fn from(e: axum::extract::rejection::JsonRejection) -> Self {
        // A body that is not JSON or lacks the `url` field is the client's
        // fault; the wire contract is the same 400 + `{"error": msg}` as any
        // other validation failure, not the extractor's plain-text rejection.
        tracing::debug!(error = %e, "rejected request body");
        AppError::bad_request("Missing or invalid url")
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let message = e
            .field_errors()
            .values()
            .flat_map(|errors| errors.iter())
            .filter_map(|err| err.message.as_ref())
            .map(|m| m.to_string())
            .next()
            .unwrap_or_else(|| "Invalid request".to_string());

        AppError::bad_request(message)
    }
}
