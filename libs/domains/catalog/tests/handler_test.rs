//! Handler tests for the catalog domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON), including the
//!   `{"product": ...}` envelope and null fields
//! - HTTP status codes
//! - Error responses
//!
//! Unlike E2E tests, these test ONLY the catalog domain handlers,
//! not the full application with routing, middleware, etc.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_catalog::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDatabase;
use tower::ServiceExt; // For oneshot()

// Helper to parse JSON response body
async fn json_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap()
}

async fn app() -> (TestDatabase, axum::Router) {
    let db = TestDatabase::new().await;
    let repo = PgCatalogRepository::new(db.connection());
    let service = CatalogService::new(repo);
    let router = handlers::router(service);
    (db, router)
}

#[tokio::test]
async fn test_create_simple_product_returns_full_aggregate() {
    let (_db, app) = app().await;

    let response = app
        .oneshot(post_json(&json!({
            "product_name": "Test Product",
            "description": "<p>test description</p>",
            "status": "active",
            "price": 25,
            "stock": 3
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    let product = &body["product"];

    assert!(product["product_id"].as_i64().unwrap() > 0);
    assert_eq!(product["product_name"], "Test Product");
    assert_eq!(product["description"], "<p>test description</p>");
    assert_eq!(product["status"], "active");
    assert!(product["created_at"].is_string());
    assert!(product["updated_at"].is_null());
    // Creation with active status stamps published_at
    assert!(product["published_at"].is_string());

    assert!(product["options"].is_null());
    assert!(product["media"].is_null());

    let variants = product["variants"].as_array().unwrap();
    assert_eq!(variants.len(), 1);

    let variant = &variants[0];
    assert!(variant["variant_id"].as_i64().unwrap() > 0);
    assert_eq!(variant["product_id"], product["product_id"]);
    assert_eq!(variant["price"].as_f64().unwrap(), 25.0);
    assert_eq!(variant["stock"], 3);
    assert!(variant["option1"].is_null());
    assert!(variant["option2"].is_null());
    assert!(variant["option3"].is_null());
    assert!(variant["created_at"].is_string());
    assert!(variant["updated_at"].is_null());
}

#[tokio::test]
async fn test_create_variable_product_generates_eight_variants() {
    let (_db, app) = app().await;

    let response = app
        .oneshot(post_json(&json!({
            "product_name": "Test Product",
            "description": "<p>test description</p>",
            "status": "active",
            "price": 25,
            "stock": 3,
            "options": [
                {"option_name": "color", "items": ["red", "green"]},
                {"option_name": "material", "items": ["Cotton", "Nylon"]},
                {"option_name": "size", "items": ["M", "S"]}
            ]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    let product = &body["product"];

    let options = product["options"].as_array().unwrap();
    assert_eq!(options.len(), 3);
    for option in options {
        assert!(option["options_id"].as_i64().unwrap() > 0);
        assert!(option["option_name"].is_string());
        let items = option["items"].as_array().unwrap();
        assert_eq!(items.len(), 2);
        for item in items {
            assert!(item["item_id"].as_i64().unwrap() > 0);
            assert!(item["item_name"].is_string());
        }
    }

    let variants = product["variants"].as_array().unwrap();
    assert_eq!(variants.len(), 8);

    let mut seen = std::collections::HashSet::new();
    for variant in variants {
        assert!(variant["variant_id"].as_i64().unwrap() > 0);
        assert_eq!(variant["price"].as_f64().unwrap(), 25.0);
        assert_eq!(variant["stock"], 3);
        assert!(variant["option1"].is_i64());
        assert!(variant["option2"].is_i64());
        assert!(variant["option3"].is_i64());
        assert!(variant["updated_at"].is_null());

        // No two variants share an (option1, option2, option3) tuple
        let tuple = (
            variant["option1"].as_i64(),
            variant["option2"].as_i64(),
            variant["option3"].as_i64(),
        );
        assert!(seen.insert(tuple), "duplicate combination: {:?}", tuple);
    }

    assert!(product["media"].is_null());
}

#[tokio::test]
async fn test_create_product_with_only_required_fields_uses_defaults() {
    let (_db, app) = app().await;

    let response = app
        .oneshot(post_json(&json!({"product_name": "Test Product"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    let product = &body["product"];

    assert_eq!(product["product_name"], "Test Product");
    assert!(product["description"].is_null());
    assert_eq!(product["status"], "draft");
    assert!(product["published_at"].is_null());
    assert!(product["options"].is_null());
    assert!(product["media"].is_null());

    let variants = product["variants"].as_array().unwrap();
    assert_eq!(variants.len(), 1);
    assert_eq!(variants[0]["price"].as_f64().unwrap(), 0.0);
    assert_eq!(variants[0]["stock"], 0);
}

#[tokio::test]
async fn test_create_single_option_single_item_product() {
    let (_db, app) = app().await;

    let response = app
        .oneshot(post_json(&json!({
            "product_name": "Test Product",
            "options": [{"option_name": "color", "items": ["red"]}]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    let product = &body["product"];

    let options = product["options"].as_array().unwrap();
    assert_eq!(options.len(), 1);
    assert_eq!(options[0]["option_name"], "color");
    assert_eq!(options[0]["items"].as_array().unwrap().len(), 1);
    assert_eq!(options[0]["items"][0]["item_name"], "red");

    let variants = product["variants"].as_array().unwrap();
    assert_eq!(variants.len(), 1);
    assert!(variants[0]["option1"].is_i64());
    assert!(variants[0]["option2"].is_null());
    assert!(variants[0]["option3"].is_null());
}

#[tokio::test]
async fn test_create_product_with_unknown_status_falls_back_to_draft() {
    let (_db, app) = app().await;

    let response = app
        .oneshot(post_json(&json!({
            "product_name": "Test Product",
            "status": "published"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["product"]["status"], "draft");
    assert!(body["product"]["published_at"].is_null());
}

#[tokio::test]
async fn test_create_product_validates_empty_name() {
    let (_db, app) = app().await;

    let response = app
        .oneshot(post_json(&json!({"product_name": ""})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_product_rejects_empty_item_list() {
    let (_db, app) = app().await;

    let response = app
        .oneshot(post_json(&json!({
            "product_name": "Test Product",
            "options": [{"option_name": "color", "items": []}]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_product_rejects_four_options() {
    let (_db, app) = app().await;

    let response = app
        .oneshot(post_json(&json!({
            "product_name": "Test Product",
            "options": [
                {"option_name": "a", "items": ["1"]},
                {"option_name": "b", "items": ["1"]},
                {"option_name": "c", "items": ["1"]},
                {"option_name": "d", "items": ["1"]}
            ]
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_product_round_trips_creation_response() {
    let db = TestDatabase::new().await;
    let repo = PgCatalogRepository::new(db.connection());
    let service = CatalogService::new(repo);
    let app = handlers::router(service);

    let create_response = app
        .clone()
        .oneshot(post_json(&json!({
            "product_name": "Test Product",
            "price": 25,
            "stock": 3,
            "options": [
                {"option_name": "color", "items": ["red", "green"]},
                {"option_name": "size", "items": ["M", "S"]}
            ]
        })))
        .await
        .unwrap();

    assert_eq!(create_response.status(), StatusCode::CREATED);
    let created = json_body(create_response.into_body()).await;
    let product_id = created["product"]["product_id"].as_i64().unwrap();

    let get_response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(format!("/{}", product_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(get_response.status(), StatusCode::OK);
    let fetched = json_body(get_response.into_body()).await;

    // Options and variants are identical (by id and content) to creation time
    assert_eq!(fetched["product"]["product_id"], created["product"]["product_id"]);
    assert_eq!(fetched["product"]["options"], created["product"]["options"]);
    assert_eq!(fetched["product"]["variants"], created["product"]["variants"]);
}

#[tokio::test]
async fn test_get_product_returns_404_for_missing() {
    let (_db, app) = app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/424242")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NotFound");
    assert!(body["message"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_get_product_returns_400_for_invalid_id() {
    let (_db, app) = app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
