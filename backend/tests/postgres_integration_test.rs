//! Integration tests against a real PostgreSQL database
//!
//! Run with: TEST_DATABASE_URL=... cargo test -- --ignored

mod common;

use auth_gate_backend::repositories::UserStore;
use axum::http::StatusCode;
use serde_json::{json, Value};

async fn seed(pool: &sqlx::PgPool, password_hash: Option<String>) -> String {
    let username = format!("user_{}", uuid::Uuid::new_v4().simple());
    sqlx::query("INSERT INTO users (name, password_hash) VALUES ($1, $2)")
        .bind(&username)
        .bind(password_hash)
        .execute(pool)
        .await
        .expect("Failed to seed user");
    username
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_find_and_update() {
    let (store, pool) = common::postgres_store().await;
    let username = seed(&pool, Some(common::hash("hunter2"))).await;

    let user = store.find_by_username(&username).await.unwrap().unwrap();
    assert_eq!(user.username, username);
    assert!(!user.id.is_empty());

    assert!(store.update_password_hash(&username, "replaced").await.unwrap());
    let user = store.find_by_username(&username).await.unwrap().unwrap();
    assert_eq!(user.password_hash.as_deref(), Some("replaced"));

    assert!(!store
        .update_password_hash("no_such_user_here", "x")
        .await
        .unwrap());
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_login_and_reset_roundtrip() {
    let (store, pool) = common::postgres_store().await;
    let username = seed(&pool, Some(common::hash("hunter2"))).await;
    let app = common::TestApp::with_store(store);

    let login = json!({ "username": username, "password": "hunter2" });
    let (status, _) = app.post("/login", &login.to_string()).await;
    assert_eq!(status, StatusCode::OK);

    let reset = json!({
        "username": username,
        "adminCode": common::ADMIN_CODE,
        "newPassword": "rotated"
    });
    let (status, body) = app.post("/forgot-password/reset", &reset.to_string()).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["success"], true);

    let (status, _) = app.post("/login", &login.to_string()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_null_hash_is_server_error() {
    let (store, pool) = common::postgres_store().await;
    let username = seed(&pool, None).await;
    let app = common::TestApp::with_store(store);

    let login = json!({ "username": username, "password": "anything" });
    let (status, _) = app.post("/login", &login.to_string()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}
