//! Handler tests for the Products domain
//!
//! These tests verify that HTTP handlers work correctly:
//! - Request deserialization (JSON → Rust structs)
//! - Response serialization (Rust structs → JSON)
//! - HTTP status codes
//! - Error responses
//!
//! They run against the in-memory repository, so they exercise the full
//! handler → service → repository path without a database.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_products::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use test_utils::TestDataBuilder;
use tower::ServiceExt; // For oneshot()

fn app() -> Router {
    let repo = InMemoryProductRepository::new();
    let service = ProductService::new(repo);
    handlers::router(service)
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn patch_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("PATCH")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

async fn create_product(app: &Router, body: Value) -> Product {
    let response = app.clone().oneshot(post_json("/", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    json_body(response.into_body()).await
}

#[tokio::test]
async fn test_create_product_returns_201_with_id() {
    let app = app();
    let builder = TestDataBuilder::from_test_name("handler_create_201");

    let response = app
        .clone()
        .oneshot(post_json(
            "/",
            json!({
                "nombre": builder.name("producto", "main"),
                "descripcion": "Teclado mecánico",
                "precio": 59.9,
                "stock": 10,
                "categoria": "ELECTRONICA"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let product: Product = json_body(response.into_body()).await;
    assert_eq!(product.name, builder.name("producto", "main"));
    assert_eq!(product.category, Category::Electronica);

    // The created product is retrievable under its new id
    let response = app
        .oneshot(get(&format!("/{}", product.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_create_product_rejects_empty_name() {
    let app = app();

    let response = app
        .oneshot(post_json(
            "/",
            json!({
                "nombre": "",
                "descripcion": "",
                "precio": 1.0,
                "stock": 0,
                "categoria": "OTROS"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Error de validación");
    assert_eq!(body["errores"]["nombre"], "El nombre es obligatorio");
}

#[tokio::test]
async fn test_create_product_accepts_negative_stock() {
    // Only the stock patch endpoint validates non-negativity.
    let app = app();

    let product = create_product(
        &app,
        json!({
            "nombre": "Producto raro",
            "descripcion": "",
            "precio": 1.0,
            "stock": -5,
            "categoria": "OTROS"
        }),
    )
    .await;

    assert_eq!(product.stock, -5);
}

#[tokio::test]
async fn test_get_unknown_product_returns_404() {
    let app = app();
    let id = uuid::Uuid::now_v7();

    let response = app.oneshot(get(&format!("/{}", id))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["status"], 404);
    assert_eq!(
        body["message"],
        format!("Producto no encontrado con ID: {}", id)
    );
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn test_get_with_malformed_uuid_returns_400() {
    let app = app();

    let response = app.oneshot(get("/not-a-uuid")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_products_returns_all() {
    let app = app();

    for i in 0..3 {
        create_product(
            &app,
            json!({
                "nombre": format!("Producto {}", i),
                "descripcion": "",
                "precio": 5.0,
                "stock": i,
                "categoria": "HOGAR"
            }),
        )
        .await;
    }

    let response = app.oneshot(get("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 3);
}

#[tokio::test]
async fn test_list_by_category_filters() {
    let app = app();

    create_product(
        &app,
        json!({
            "nombre": "Camiseta",
            "descripcion": "",
            "precio": 15.0,
            "stock": 3,
            "categoria": "ROPA"
        }),
    )
    .await;
    create_product(
        &app,
        json!({
            "nombre": "Balón",
            "descripcion": "",
            "precio": 20.0,
            "stock": 7,
            "categoria": "DEPORTES"
        }),
    )
    .await;

    let response = app.clone().oneshot(get("/categoria/ROPA")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].name, "Camiseta");

    // Empty category is a 200 with an empty list, not an error
    let response = app.oneshot(get("/categoria/LIBROS")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let products: Vec<Product> = json_body(response.into_body()).await;
    assert!(products.is_empty());
}

#[tokio::test]
async fn test_list_by_unknown_category_returns_400() {
    let app = app();

    let response = app.oneshot(get("/categoria/COMIDA")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["message"], "Categoría inválida: COMIDA");
}

#[tokio::test]
async fn test_put_replaces_every_field() {
    let app = app();

    let product = create_product(
        &app,
        json!({
            "nombre": "Original",
            "descripcion": "Antes",
            "precio": 10.0,
            "stock": 1,
            "categoria": "HOGAR"
        }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(put_json(
            &format!("/{}", product.id),
            json!({
                "nombre": "Reemplazado",
                "descripcion": "Después",
                "precio": 99.0,
                "stock": 8,
                "categoria": "DEPORTES"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.id, product.id);
    assert_eq!(updated.name, "Reemplazado");
    assert_eq!(updated.description, "Después");
    assert_eq!(updated.price, 99.0);
    assert_eq!(updated.stock, 8);
    assert_eq!(updated.category, Category::Deportes);
}

#[tokio::test]
async fn test_put_unknown_product_returns_404() {
    let app = app();

    let response = app
        .oneshot(put_json(
            &format!("/{}", uuid::Uuid::now_v7()),
            json!({
                "nombre": "Fantasma",
                "descripcion": "",
                "precio": 1.0,
                "stock": 0,
                "categoria": "OTROS"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_patch_stock_updates_only_stock() {
    let app = app();

    let product = create_product(
        &app,
        json!({
            "nombre": "Libro",
            "descripcion": "Tapa dura",
            "precio": 25.0,
            "stock": 2,
            "categoria": "LIBROS"
        }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(patch_json(
            &format!("/{}/stock", product.id),
            json!({ "stock": 40 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let updated: Product = json_body(response.into_body()).await;
    assert_eq!(updated.stock, 40);
    assert_eq!(updated.name, "Libro");
    assert_eq!(updated.price, 25.0);
}

#[tokio::test]
async fn test_patch_negative_stock_rejected_and_state_unchanged() {
    let app = app();

    let product = create_product(
        &app,
        json!({
            "nombre": "Silla",
            "descripcion": "",
            "precio": 45.0,
            "stock": 6,
            "categoria": "HOGAR"
        }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(patch_json(
            &format!("/{}/stock", product.id),
            json!({ "stock": -1 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(body["errores"]["stock"], "El stock no puede ser negativo");

    // Stock must be untouched after the rejected patch
    let response = app
        .oneshot(get(&format!("/{}", product.id)))
        .await
        .unwrap();
    let fetched: Product = json_body(response.into_body()).await;
    assert_eq!(fetched.stock, 6);
}

#[tokio::test]
async fn test_patch_stock_unknown_product_returns_404() {
    let app = app();
    let id = uuid::Uuid::now_v7();

    let response = app
        .oneshot(patch_json(&format!("/{}/stock", id), json!({ "stock": 5 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = json_body(response.into_body()).await;
    assert_eq!(
        body["message"],
        format!("Producto no encontrado con ID: {}", id)
    );
}

#[tokio::test]
async fn test_patch_null_stock_rejected_with_spanish_message() {
    let app = app();

    let product = create_product(
        &app,
        json!({
            "nombre": "Mesa",
            "descripcion": "",
            "precio": 80.0,
            "stock": 4,
            "categoria": "HOGAR"
        }),
    )
    .await;

    // Both an absent field and an explicit null produce the same error.
    for body in [json!({}), json!({ "stock": null })] {
        let response = app
            .clone()
            .oneshot(patch_json(&format!("/{}/stock", product.id), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = json_body(response.into_body()).await;
        assert_eq!(body["message"], "Error de validación");
        assert_eq!(body["errores"]["stock"], "El stock no puede ser nulo");
    }
}

#[tokio::test]
async fn test_delete_product_returns_204_then_404() {
    let app = app();

    let product = create_product(
        &app,
        json!({
            "nombre": "Temporal",
            "descripcion": "",
            "precio": 5.0,
            "stock": 1,
            "categoria": "OTROS"
        }),
    )
    .await;

    let response = app
        .clone()
        .oneshot(delete(&format!("/{}", product.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .clone()
        .oneshot(get(&format!("/{}", product.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Deleting again is also a 404
    let response = app
        .oneshot(delete(&format!("/{}", product.id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
