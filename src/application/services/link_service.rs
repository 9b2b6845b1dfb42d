//! Short link creation and resolution service.

use std::sync::Arc;

use url::Url;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::ShortLinkRepository;
use crate::error::AppError;
use crate::utils::base62;

/// A freshly created short link together with its derived code and full URL.
#[derive(Debug, Clone)]
pub struct CreatedLink {
    pub id: i64,
    pub short_code: String,
    pub short_url: String,
    pub long_url: String,
}

/// Service orchestrating validated creation and resolution of short links.
///
/// The short code is derived from the row id after the insert returns: codes
/// depend on the server-assigned id, so they can never be computed before
/// the row is durably persisted.
pub struct LinkService<R: ShortLinkRepository> {
    repository: Arc<R>,
    base_url: String,
}

impl<R: ShortLinkRepository> LinkService<R> {
    /// Creates a new link service.
    ///
    /// `base_url` is the public base joined with a code to form the full
    /// short URL.
    pub fn new(repository: Arc<R>, base_url: String) -> Self {
        Self {
            repository,
            base_url,
        }
    }

    /// Validates a raw URL, persists it, and returns the new short link.
    ///
    /// Validation, in order: the input must be non-empty, must parse as an
    /// absolute URL, and its scheme must be exactly `http` or `https`. The
    /// URL is stored in its canonical serialized form. Identical URLs are
    /// not deduplicated; each call creates a new row and a new code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the input fails any of the checks
    /// above (no row is written), and the storage error variants otherwise.
    pub async fn create_short_link(&self, raw_url: &str) -> Result<CreatedLink, AppError> {
        let long_url = validate_url(raw_url)?;

        let link = self.repository.create(&long_url).await?;

        let short_code = link.short_code();
        let short_url = self.short_url(&short_code);

        Ok(CreatedLink {
            id: link.id,
            short_code,
            short_url,
            long_url: link.long_url,
        })
    }

    /// Resolves a short code to its stored link.
    ///
    /// The code may be arbitrary text from the request path. A code that
    /// decodes to the sentinel `0` is reported as not found without touching
    /// the store; so is a well-formed code whose id was never issued.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] for malformed or unknown codes, and
    /// the storage error variants on database failure.
    pub async fn resolve(&self, code: &str) -> Result<ShortLink, AppError> {
        let id = base62::decode(code);
        if id == 0 {
            return Err(AppError::not_found("Short link not found"));
        }

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Short link not found"))
    }

    /// Constructs the full short URL from a code.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}

/// Validates a raw input as an absolute http(s) URL and canonicalizes it.
fn validate_url(raw: &str) -> Result<String, AppError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request("Missing or invalid url"));
    }

    let parsed = Url::parse(trimmed).map_err(|_| AppError::bad_request("Invalid URL format"))?;

    match parsed.scheme() {
        "http" | "https" => {}
        _ => return Err(AppError::bad_request("URL must be http or https")),
    }

    Ok(parsed.to_string())
}
