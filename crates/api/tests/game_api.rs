//! HTTP-level integration tests for the `/games` endpoints.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router
//! without an actual TCP listener.

mod common;

use axum::http::StatusCode;
use common::{body_json, delete, get, patch_json, post_json, put_json};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_game_returns_201(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/v1/games",
        serde_json::json!({"name": "Forgotten Realms"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert_eq!(json["name"], "Forgotten Realms");
    assert!(json["id"].is_number());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_game_with_preset_id_is_rejected(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/v1/games",
        serde_json::json!({"id": 42, "name": "Sneaky"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    // Nothing was persisted.
    let app = common::build_test_app(pool);
    let listed = body_json(get(app, "/api/v1/games").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_nonexistent_game_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/games/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_game_requires_matching_body_id(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/v1/games", serde_json::json!({"name": "Original"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    // Mismatched body id.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/games/{id}"),
        serde_json::json!({"id": id + 1, "name": "Evil Twin"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Missing body id.
    let app = common::build_test_app(pool.clone());
    let response = put_json(
        app,
        &format!("/api/v1/games/{id}"),
        serde_json::json!({"name": "Anonymous"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // The rejected updates never reached the store.
    let app = common::build_test_app(pool);
    let json = body_json(get(app, &format!("/api/v1/games/{id}")).await).await;
    assert_eq!(json["name"], "Original");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_full_update_replaces_fields(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/games",
            serde_json::json!({"name": "Old", "description": "dusty"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = put_json(
        app,
        &format!("/api/v1/games/{id}"),
        serde_json::json!({"id": id, "name": "New"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "New");
    // PUT is a full replace: the omitted description is cleared.
    assert!(json["description"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_partial_update_merges_only_non_null(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(
            app,
            "/api/v1/games",
            serde_json::json!({"name": "Ravnica", "description": "city plane"}),
        )
        .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool);
    let response = patch_json(
        app,
        &format!("/api/v1/games/{id}"),
        serde_json::json!({"id": id, "description": "guild-ruled city plane"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["name"], "Ravnica");
    assert_eq!(json["description"], "guild-ruled city plane");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_absent_game_is_a_noop_204(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = delete(app, "/api/v1/games/999999").await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_game_then_get_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let created = body_json(
        post_json(app, "/api/v1/games", serde_json::json!({"name": "Doomed"})).await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let app = common::build_test_app(pool.clone());
    let response = delete(app, &format!("/api/v1/games/{id}")).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/games/{id}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_error_response_has_code_and_error_fields(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/games/999999").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert!(json["error"].is_string(), "Error response should have 'error' field");
    assert!(json["code"].is_string(), "Error response should have 'code' field");
    assert_eq!(json["code"], "NOT_FOUND");
}
