mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::*;

#[tokio::test]
async fn lists_fixed_rental_inventory() {
    let (router, _) = memory_router();

    let (status, items) = get(&router, "/rentals/items").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(items.as_array().unwrap().len(), 6);
    assert_eq!(items[0]["dailyRate"], "$250");
}

#[tokio::test]
async fn availability_requires_known_item_and_ordered_dates() {
    let (router, _) = memory_router();

    let (status, body) = get(&router, "/rentals/items/2/availability?start=2026-03-01&end=2026-03-04").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["available"], true);

    let (status, _) = get(&router, "/rentals/items/2/availability?start=2026-03-04&end=2026-03-01").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = get(&router, "/rentals/items/42/availability?start=2026-03-01&end=2026-03-04").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn rental_request_round_trip() {
    let (router, _) = memory_router();

    let (status, body) = post(
        &router,
        "/rentals/requests",
        json!({
            "rentalType": "Market Stall Tent",
            "duration": "1 week",
            "phoneNumber": "+258843989573",
            "additionalNotes": "Delivery to Maputo"
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);

    let (status, body) = post(
        &router,
        "/rentals/requests",
        json!({ "rentalType": "Market Stall Tent", "duration": "", "phoneNumber": "1" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "duration is required");
}
