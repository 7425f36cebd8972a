//! Handler tests for Products domain
//!
//! These drive the products router directly (no `/api` prefix, no global
//! middleware) over an in-memory repository:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt; // For oneshot()

const MAKER: &str = "KOREAN SHORT CAT";
const NAME: &str = "CAT FISHING ROD";
const PRICE: i64 = 20000;
const IMAGE: &str = "https://www.zoostore.de/media/image/product/4598/sm/katzenspielzeug-katzenangel-spielangel-zum-zusammenschrauben-mit-heuschrecke~2.jpg";

fn app_with(repo: InMemoryProductRepository) -> Router {
    handlers::router(ProductController::new(ProductService::new(repo)))
}

fn app() -> Router {
    app_with(InMemoryProductRepository::new())
}

fn fixture_body() -> Value {
    json!({
        "name": NAME,
        "maker": MAKER,
        "price": PRICE,
        "imageUrl": IMAGE
    })
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn seeded() -> (InMemoryProductRepository, Product) {
    let repo = InMemoryProductRepository::new();
    let product = repo
        .save(Product {
            id: None,
            name: NAME.to_string(),
            maker: MAKER.to_string(),
            price: PRICE,
            image_url: IMAGE.to_string(),
        })
        .await
        .unwrap();
    (repo, product)
}

#[tokio::test]
async fn test_list_on_empty_catalog_returns_empty_array() {
    let response = app().oneshot(empty_request("GET", "/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_create_returns_201_with_assigned_id() {
    let response = app()
        .oneshot(json_request("POST", "/", &fixture_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], NAME);
    assert_eq!(body["maker"], MAKER);
    assert_eq!(body["price"], PRICE);
    assert_eq!(body["imageUrl"], IMAGE);
}

#[tokio::test]
async fn test_create_with_missing_field_is_rejected() {
    let response = app()
        .oneshot(json_request("POST", "/", &json!({ "name": NAME })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "JSON_EXTRACTION");
}

#[tokio::test]
async fn test_detail_returns_stored_product() {
    let (repo, product) = seeded().await;

    let response = app_with(repo)
        .oneshot(empty_request("GET", "/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let found: Product = json_body(response.into_body()).await;
    assert_eq!(found, product);
}

#[tokio::test]
async fn test_detail_with_unknown_id_returns_404() {
    let (repo, _) = seeded().await;

    let response = app_with(repo)
        .oneshot(empty_request("GET", "/100000"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Product 100000 not found");
}

#[tokio::test]
async fn test_detail_with_non_numeric_id_returns_400() {
    let response = app()
        .oneshot(empty_request("GET", "/not-a-number"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "INVALID_ID");
}

#[tokio::test]
async fn test_put_replaces_all_fields() {
    let (repo, _) = seeded().await;
    let app = app_with(repo.clone());

    let update = json!({
        "name": format!("updated{NAME}"),
        "maker": format!("updated{MAKER}"),
        "price": PRICE + 1000,
        "imageUrl": format!("{IMAGE}updated")
    });

    let response = app.oneshot(json_request("PUT", "/1", &update)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.id, Some(1));
    assert_eq!(updated.name, format!("updated{NAME}"));
    assert_eq!(updated.price, PRICE + 1000);

    // Visible on the next read
    let stored = repo.find_by_id(1).await.unwrap().unwrap();
    assert_eq!(stored, updated);
}

#[tokio::test]
async fn test_patch_behaves_like_put() {
    let (repo, _) = seeded().await;

    let update = json!({
        "name": "patched",
        "maker": MAKER,
        "price": 1,
        "imageUrl": IMAGE
    });

    let response = app_with(repo)
        .oneshot(json_request("PATCH", "/1", &update))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.name, "patched");
    assert_eq!(updated.price, 1);
}

#[tokio::test]
async fn test_update_with_unknown_id_returns_404() {
    let response = app()
        .oneshot(json_request("PUT", "/100000", &fixture_body()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_returns_204_and_removes() {
    let (repo, _) = seeded().await;

    let response = app_with(repo.clone())
        .oneshot(empty_request("DELETE", "/1"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_delete_with_unknown_id_returns_404() {
    let response = app()
        .oneshot(empty_request("DELETE", "/100000"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_reflects_creates_in_id_order() {
    let repo = InMemoryProductRepository::new();
    let app = app_with(repo);

    for name in ["first", "second"] {
        let mut body = fixture_body();
        body["name"] = json!(name);
        let response = app
            .clone()
            .oneshot(json_request("POST", "/", &body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app.oneshot(empty_request("GET", "/")).await.unwrap();
    let products: Vec<Product> = json_body(response.into_body()).await;

    let names: Vec<_> = products.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["first", "second"]);
    assert_eq!(products[0].id, Some(1));
    assert_eq!(products[1].id, Some(2));
}
