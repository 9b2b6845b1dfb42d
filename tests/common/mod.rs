#![allow(dead_code)]

use sqlx::PgPool;
use std::sync::Arc;

use shortlink::application::services::LinkService;
use shortlink::infrastructure::persistence::PgShortLinkRepository;
use shortlink::state::AppState;

pub const BASE_URL: &str = "http://localhost:3001";
pub const FRONTEND_URL: &str = "http://localhost:3000";

pub fn create_test_state(pool: PgPool) -> AppState {
    let pool = Arc::new(pool);
    let repository = Arc::new(PgShortLinkRepository::new(pool.clone()));
    let link_service = Arc::new(LinkService::new(repository, BASE_URL.to_string()));

    AppState::new(pool, link_service, FRONTEND_URL.to_string())
}

pub async fn insert_link(pool: &PgPool, long_url: &str) -> i64 {
    sqlx::query_scalar("INSERT INTO short_links (long_url) VALUES ($1) RETURNING id")
        .bind(long_url)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM short_links")
        .fetch_one(pool)
        .await
        .unwrap()
}
