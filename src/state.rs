//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::LinkService;
use crate::infrastructure::persistence::PgShortLinkRepository;

/// Process-scoped shared state.
///
/// Built once at startup and passed to handlers via Axum's `State`
/// extractor; there is no ambient global access. The pool is the only
/// shared resource and is kept here for health checks.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub link_service: Arc<LinkService<PgShortLinkRepository>>,
    /// Where `GET /` (an empty short code) redirects to.
    pub frontend_url: String,
}

impl AppState {
    pub fn new(
        db: Arc<PgPool>,
        link_service: Arc<LinkService<PgShortLinkRepository>>,
        frontend_url: String,
    ) -> Self {
        Self {
            db,
            link_service,
            frontend_url,
        }
    }
}
