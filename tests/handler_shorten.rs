mod common;

use axum::{Router, http::StatusCode, routing::post};
use axum_test::TestServer;
use serde_json::json;
use sqlx::PgPool;

use shortlink::api::handlers::shorten_handler;

fn test_app(pool: PgPool) -> TestServer {
    let state = common::create_test_state(pool);
    let app = Router::new()
        .route("/api/shorten", post(shorten_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

#[sqlx::test]
async fn test_shorten_success(pool: PgPool) {
    let server = test_app(pool);

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "http://example.com/path" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["longUrl"], "http://example.com/path");

    let code = json["shortCode"].as_str().unwrap();
    assert!(!code.is_empty());
    assert_eq!(
        json["shortUrl"],
        format!("{}/{}", common::BASE_URL, code)
    );
}

#[sqlx::test]
async fn test_shorten_stores_canonical_url(pool: PgPool) {
    let server = test_app(pool.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "http://example.com" }))
        .await;

    response.assert_status(StatusCode::CREATED);

    // URL parsing adds the root path to a bare authority.
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["longUrl"], "http://example.com/");

    let stored: String = sqlx::query_scalar("SELECT long_url FROM short_links")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(stored, "http://example.com/");
}

#[sqlx::test]
async fn test_shorten_empty_url(pool: PgPool) {
    let server = test_app(pool.clone());

    let response = server.post("/api/shorten").json(&json!({ "url": "" })).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Missing or invalid url");
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_missing_url_field(pool: PgPool) {
    let server = test_app(pool.clone());

    // No `url` field at all: the extractor rejection must render the same
    // wire contract as an empty url, not a plain-text 422.
    let response = server.post("/api/shorten").json(&json!({})).await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Missing or invalid url");
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_non_json_body(pool: PgPool) {
    let server = test_app(pool.clone());

    let response = server.post("/api/shorten").text("not json at all").await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Missing or invalid url");
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_invalid_url(pool: PgPool) {
    let server = test_app(pool.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "not-a-valid-url" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Invalid URL format");
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_rejects_non_http_scheme(pool: PgPool) {
    let server = test_app(pool.clone());

    let response = server
        .post("/api/shorten")
        .json(&json!({ "url": "ftp://example.com/file.txt" }))
        .await;

    response.assert_status_bad_request();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "URL must be http or https");

    // Validation failures must not create rows.
    assert_eq!(common::count_links(&pool).await, 0);
}

#[sqlx::test]
async fn test_shorten_identical_urls_create_distinct_links(pool: PgPool) {
    let server = test_app(pool.clone());

    let first = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/same" }))
        .await
        .json::<serde_json::Value>();
    let second = server
        .post("/api/shorten")
        .json(&json!({ "url": "https://example.com/same" }))
        .await
        .json::<serde_json::Value>();

    assert_ne!(first["shortCode"], second["shortCode"]);
    assert_ne!(first["shortUrl"], second["shortUrl"]);
    assert_eq!(common::count_links(&pool).await, 2);
}
