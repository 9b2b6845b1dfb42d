//! ShortLink entity representing a stored URL mapping.

use chrono::{DateTime, Utc};

use crate::utils::base62;

/// A persisted mapping from a generated id to an original long URL.
///
/// Rows are immutable: the id is assigned once by the database sequence and
/// never reused, and there are no update or delete operations. The short
/// code is not stored; it is derived from `id` on demand.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct ShortLink {
    pub id: i64,
    pub long_url: String,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(id: i64, long_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            long_url,
            created_at,
        }
    }

    /// Returns the base62 short code derived from this link's id.
    pub fn short_code(&self) -> String {
        base62::encode(self.id)
    }
}
