//! HTTP-level integration tests for signup, login and bearer-token checks.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, signup_and_login, TEST_PASSWORD};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn signup_returns_created_user_without_hash(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = serde_json::json!({
        "name": "Ada",
        "email": "ada@example.com",
        "password": TEST_PASSWORD,
    });
    let response = post_json(app, "/api/v1/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["name"], "Ada");
    assert_eq!(json["data"]["email"], "ada@example.com");
    assert_eq!(json["data"]["id"].as_str().unwrap().len(), 26);
    assert!(json["data"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_email_is_conflict(pool: PgPool) {
    signup_and_login(&pool, "Ada").await;

    let body = serde_json::json!({
        "name": "Other Ada",
        "email": "ada@example.com",
        "password": TEST_PASSWORD,
    });
    let response = post_json(common::build_test_app(pool), "/api/v1/signup", body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(body_json(response).await["code"], "CONFLICT");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn signup_rejects_short_password_and_bad_email(pool: PgPool) {
    let short = serde_json::json!({ "name": "Ada", "email": "ada@example.com", "password": "short" });
    let response = post_json(common::build_test_app(pool.clone()), "/api/v1/signup", short).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let bad_email =
        serde_json::json!({ "name": "Ada", "email": "not-an-email", "password": TEST_PASSWORD });
    let response = post_json(common::build_test_app(pool), "/api/v1/signup", bad_email).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_wrong_password_is_unauthorized(pool: PgPool) {
    signup_and_login(&pool, "Ada").await;

    let body = serde_json::json!({ "email": "ada@example.com", "password": "wrong-password" });
    let response = post_json(common::build_test_app(pool), "/api/v1/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_unknown_email_is_unauthorized(pool: PgPool) {
    let body = serde_json::json!({ "email": "ghost@example.com", "password": TEST_PASSWORD });
    let response = post_json(common::build_test_app(pool), "/api/v1/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn protected_routes_require_bearer_token(pool: PgPool) {
    let response = get(common::build_test_app(pool.clone()), "/api/v1/terms").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = get_auth(common::build_test_app(pool), "/api/v1/terms", "garbage").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn health_reports_database(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("x-request-id").is_some());

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}
