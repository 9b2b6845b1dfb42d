//! Repository trait for short link data access.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for persisting and looking up short links.
///
/// Each operation executes a single statement on a pooled connection; the
/// connection is released when the call returns, whatever the outcome.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgShortLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShortLinkRepository: Send + Sync {
    /// Inserts a new row and returns it with the database-assigned id and
    /// creation timestamp.
    ///
    /// Identical long URLs are not deduplicated: every call creates a new
    /// row with a fresh id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] if the datastore cannot be reached
    /// (including pool-acquire timeout) and [`AppError::Internal`] for any
    /// other persistence failure.
    async fn create(&self, long_url: &str) -> Result<ShortLink, AppError>;

    /// Point lookup by primary key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found
    /// - `Ok(None)` if no row matches, including for non-positive ids
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Unavailable`] / [`AppError::Internal`] on
    /// database errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<ShortLink>, AppError>;
}
