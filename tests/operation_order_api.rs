//! Tests de integración de `/operation_order`.

mod common;

use axum::http::StatusCode;
use common::{build_test_app, count, get, get_json, post_json, seed_equipment, seed_vessel};
use rust_decimal::Decimal;
use serde_json::json;
use sqlx::PgPool;
use std::str::FromStr;

struct Fleet {
    first_equipment: i64,
    second_equipment: i64,
}

/// Dos buques con un compresor cada uno
async fn seed_fleet(pool: &PgPool) -> Fleet {
    let mv102 = seed_vessel(pool, "MV102").await;
    let mv101 = seed_vessel(pool, "MV101").await;
    Fleet {
        first_equipment: seed_equipment(pool, mv102, "5310B9D7", "compressor").await,
        second_equipment: seed_equipment(pool, mv101, "5310B9D8", "compressor").await,
    }
}

async fn insert_both_orders(app: &axum::Router) {
    let (status, body) = post_json(
        app,
        "/operation_order/insert_operation",
        json!({"code": "5310B9D7", "type": "replacement", "cost": 123.45}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "OK"}));

    let (status, _) = post_json(
        app,
        "/operation_order/insert_operation",
        json!({"code": "5310B9D8", "type": "instalation", "cost": 234.56}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_operation(pool: PgPool) {
    let fleet = seed_fleet(&pool).await;
    let app = build_test_app(pool.clone());
    insert_both_orders(&app).await;

    let rows: Vec<(i64, String, Decimal)> =
        sqlx::query_as("SELECT equipment_id, type, cost FROM operation_order ORDER BY id")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(
        rows,
        vec![
            (fleet.first_equipment, "replacement".to_string(), Decimal::from_str("123.45").unwrap()),
            (fleet.second_equipment, "instalation".to_string(), Decimal::from_str("234.56").unwrap()),
        ]
    );
}

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_operation_rounds_cost(pool: PgPool) {
    seed_fleet(&pool).await;
    let app = build_test_app(pool.clone());

    let (status, _) = post_json(
        &app,
        "/operation_order/insert_operation",
        json!({"code": "5310B9D7", "type": "inspection", "cost": "10.125"}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (cost,): (Decimal,) = sqlx::query_as("SELECT cost FROM operation_order")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(cost, Decimal::from_str("10.12").unwrap());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_operation_rejections(pool: PgPool) {
    seed_fleet(&pool).await;
    let app = build_test_app(pool.clone());

    let (status, body) = post_json(
        &app,
        "/operation_order/insert_operation",
        json!({"code": "INVALID", "type": "replacement", "cost": 123.45}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Invalid equipment code"}));

    let (status, body) = post_json(
        &app,
        "/operation_order/insert_operation",
        json!({"code": "5310B9D7", "type": "", "cost": -1}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"message": {
            "cost": ["Must be greater than or equal to 0."],
            "type": ["Length must be between 1 and 64."],
        }})
    );

    assert_eq!(count(&pool, "operation_order").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_operation_large_cost(pool: PgPool) {
    seed_fleet(&pool).await;
    let app = build_test_app(pool.clone());

    let (status, body) = post_json(
        &app,
        "/operation_order/insert_operation",
        json!({"code": "5310B9D7", "type": "replacement", "cost": 10000000000.00}),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({"message": "OK"}));

    let (cost,): (Decimal,) = sqlx::query_as("SELECT cost FROM operation_order")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(cost, Decimal::from_str("10000000000.00").unwrap());

    let (status, body) = get(&app, "/operation_order/total_cost?code=5310B9D7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"total_cost": 10000000000.0}));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_operation_null_field(pool: PgPool) {
    seed_fleet(&pool).await;
    let app = build_test_app(pool.clone());

    let (status, body) = post_json(
        &app,
        "/operation_order/insert_operation",
        json!({"code": null, "type": "replacement", "cost": 1.5}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"message": {"code": ["Missing data for required field."]}})
    );
    assert_eq!(count(&pool, "operation_order").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_insert_operation_database_error(pool: PgPool) {
    seed_fleet(&pool).await;
    sqlx::query("ALTER TABLE operation_order ADD CONSTRAINT ck_operation_order_cost_cap CHECK (cost < 1000)")
        .execute(&pool)
        .await
        .unwrap();
    let app = build_test_app(pool.clone());

    let (status, body) = post_json(
        &app,
        "/operation_order/insert_operation",
        json!({"code": "5310B9D7", "type": "replacement", "cost": 5000}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["message"].as_str().unwrap();
    assert!(message.starts_with("error returned from database"), "{}", message);
    assert!(message.contains("ck_operation_order_cost_cap"), "{}", message);

    assert_eq!(count(&pool, "operation_order").await, 0);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_total_cost(pool: PgPool) {
    seed_fleet(&pool).await;
    let app = build_test_app(pool.clone());
    insert_both_orders(&app).await;

    let (status, body) = get(&app, "/operation_order/total_cost?code=5310B9D8").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"total_cost": 234.56}));

    let (status, body) = get(&app, "/operation_order/total_cost?name=compressor").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"total_cost": 358.01}));

    let (status, body) =
        get_json(&app, "/operation_order/total_cost", json!({"code": "5310B9D7"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"total_cost": 123.45}));

    let (status, body) = get(&app, "/operation_order/total_cost?code=INVALID").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Invalid parameters"}));

    let (status, body) = get(&app, "/operation_order/total_cost").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"message": "Invalid parameters"}));

    assert_eq!(count(&pool, "operation_order").await, 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_total_cost_without_orders_is_zero(pool: PgPool) {
    seed_fleet(&pool).await;
    let app = build_test_app(pool);

    let (status, body) = get(&app, "/operation_order/total_cost?code=5310B9D7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"total_cost": 0.0}));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_average_cost(pool: PgPool) {
    seed_fleet(&pool).await;
    seed_vessel(&pool, "MV100").await;
    let app = build_test_app(pool.clone());
    insert_both_orders(&app).await;

    let (status, body) = get(&app, "/operation_order/average_cost").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"MV102": 123.45, "MV101": 234.56}));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_average_cost_rounds_to_cents(pool: PgPool) {
    seed_fleet(&pool).await;
    let app = build_test_app(pool);

    for cost in ["1.00", "1.00", "2.00"] {
        let (status, _) = post_json(
            &app,
            "/operation_order/insert_operation",
            json!({"code": "5310B9D7", "type": "inspection", "cost": cost}),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = get(&app, "/operation_order/average_cost").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"MV102": 1.33}));
}
