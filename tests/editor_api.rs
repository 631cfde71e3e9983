mod common;

use axum::http::{Method, StatusCode};
use serde_json::{Value, json};

use common::*;

async fn open(router: &axum::Router, product_id: i32) -> String {
    let (status, body) = post(router, "/admin/editor/sessions", json!({ "product_id": product_id })).await;
    assert_eq!(status, StatusCode::CREATED);
    body["session_id"].as_str().unwrap().to_string()
}

async fn command(router: &axum::Router, session: &str, cmd: Value) -> Value {
    let (status, body) = post(
        router,
        &format!("/admin/editor/sessions/{}/commands", session),
        cmd,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

#[tokio::test]
async fn local_image_saved_through_editor_becomes_cover() {
    let (router, _) = sqlite_router().await;
    let session = open(&router, 3).await;

    let (_, view) = get(&router, &format!("/admin/editor/sessions/{}", session)).await;
    assert_eq!(view["folder_path"], "/images/products/shade-structures/");
    assert_eq!(view["product_name"], "Car Shade Port");

    command(&router, &session, json!({ "action": "remove", "index": 0 })).await;
    let view = command(&router, &session, json!({ "action": "add_local" })).await;
    assert_eq!(view["images"], json!(["/images/products/shade-structures/main.jpg"]));

    let (status, saved) = post(&router, &format!("/admin/editor/sessions/{}/save", session), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(saved["product"]["image"], "/images/products/shade-structures/main.jpg");

    let (status, _) = get(&router, &format!("/admin/editor/sessions/{}", session)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, showcase) = get(&router, "/products").await;
    let shade = find_product(&showcase["products"], 3);
    assert_eq!(shade["image"], "/images/products/shade-structures/main.jpg");
}

#[tokio::test]
async fn saving_an_empty_buffer_keeps_the_session_open() {
    let (router, storage) = memory_router();
    let session = open(&router, 3).await;

    command(&router, &session, json!({ "action": "remove", "index": 0 })).await;
    let (status, body) = post(&router, &format!("/admin/editor/sessions/{}/save", session), json!({})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "You must have at least one image for the product.");
    assert!(storage.is_empty());

    let (status, view) = get(&router, &format!("/admin/editor/sessions/{}", session)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(view["images"], json!([]));
}

#[tokio::test]
async fn reordering_and_blank_urls() {
    let (router, _) = memory_router();
    let session = open(&router, 1).await;
    let original = json!([
        "/images/products/tents/main.jpg",
        "/images/products/tents/2.jpg",
        "/images/products/tents/3.jpg"
    ]);

    let view = command(&router, &session, json!({ "action": "move_up", "index": 0 })).await;
    assert_eq!(view["images"], original);
    let view = command(&router, &session, json!({ "action": "move_down", "index": 2 })).await;
    assert_eq!(view["images"], original);
    let view = command(&router, &session, json!({ "action": "move_down", "index": usize::MAX })).await;
    assert_eq!(view["images"], original);

    command(&router, &session, json!({ "action": "move_up", "index": 1 })).await;
    let view = command(&router, &session, json!({ "action": "move_down", "index": 0 })).await;
    assert_eq!(view["images"], original);

    let view = command(&router, &session, json!({ "action": "add_url", "url": "" })).await;
    assert_eq!(view["images"], original);
}

#[tokio::test]
async fn reset_restores_effective_images_not_defaults() {
    let (router, _) = memory_router();

    let (status, _) = send(
        &router,
        Method::PUT,
        "/admin/products/3/images",
        Some(json!({ "images": ["saved.jpg"] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let session = open(&router, 3).await;
    command(&router, &session, json!({ "action": "add_url", "url": "https://example.com/x.jpg" })).await;
    let view = command(&router, &session, json!({ "action": "reset" })).await;

    assert_eq!(view["images"], json!(["saved.jpg"]));
}

#[tokio::test]
async fn cancel_discards_the_buffer() {
    let (router, storage) = memory_router();
    let session = open(&router, 2).await;

    command(&router, &session, json!({ "action": "add_url", "url": "https://example.com/x.jpg" })).await;
    let (status, _) = send(
        &router,
        Method::DELETE,
        &format!("/admin/editor/sessions/{}", session),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert!(storage.is_empty());

    let (status, _) = post(&router, &format!("/admin/editor/sessions/{}/save", session), json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn opening_unknown_product_is_not_found() {
    let (router, _) = memory_router();

    let (status, _) = post(&router, "/admin/editor/sessions", json!({ "product_id": 999 })).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
