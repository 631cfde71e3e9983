mod admin;
mod categories;
mod editor;
mod health;
mod products;
mod rentals;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::AppState;

pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/products", get(products::showcase))
        .route("/products/{id}", get(products::get_product))
        .route("/collections/{collection}", get(products::get_collection))
        .route("/categories", get(categories::category_facets))
        .route("/categories/{slug}/products", get(categories::category_products))
        .route("/types", get(categories::type_facets))
        .route("/types/{slug}/products", get(categories::type_products))
        .route("/rentals/items", get(rentals::list_items))
        .route("/rentals/items/{id}/availability", get(rentals::check_availability))
        .route("/rentals/requests", post(rentals::submit_request))
        .route("/admin/products", get(admin::list_products))
        .route("/admin/products/{id}/images", put(admin::update_product_images))
        .route("/admin/editor/sessions", post(editor::open_session))
        .route(
            "/admin/editor/sessions/{id}",
            get(editor::get_session).delete(editor::cancel_session),
        )
        .route("/admin/editor/sessions/{id}/commands", post(editor::apply_command))
        .route("/admin/editor/sessions/{id}/save", post(editor::save_session))
}
