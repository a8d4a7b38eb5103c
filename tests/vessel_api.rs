//! Tests de integración de `/vessel`.

mod common;

use axum::http::StatusCode;
use common::{build_offline_app, build_test_app, count, post_json};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_vessel(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let (status, body) = post_json(&app, "/vessel/insert_vessel", json!({"code": "MV102"})).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "OK"}));

    let codes: Vec<(String,)> = sqlx::query_as("SELECT code FROM vessels")
        .fetch_all(&pool)
        .await
        .unwrap();
    assert_eq!(codes, vec![("MV102".to_string(),)]);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_duplicated_vessel(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let (status, _) = post_json(&app, "/vessel/insert_vessel", json!({"code": "MV102"})).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(&app, "/vessel/insert_vessel", json!({"code": "MV102"})).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body, json!({"message": "Duplicated vessel code"}));
    assert_eq!(count(&pool, "vessels").await, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_invalid_codes_creates_nothing(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let cases = [
        (json!({}), json!({"code": ["Missing data for required field."]})),
        (json!({"code": ""}), json!({"code": ["Length must be between 1 and 8."]})),
        (json!({"code": "123456789"}), json!({"code": ["Length must be between 1 and 8."]})),
    ];

    for (input, expected) in cases {
        let (status, body) = post_json(&app, "/vessel/insert_vessel", input.clone()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "input: {}", input);
        assert_eq!(body, json!({"message": expected}), "input: {}", input);
    }
    assert_eq!(count(&pool, "vessels").await, 0);
}

#[tokio::test]
async fn test_insert_vessel_malformed_json() {
    let app = build_offline_app();
    let (status, body) = post_json(&app, "/vessel/insert_vessel", json!({"code": 42})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["message"].is_string());
}
