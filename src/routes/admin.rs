use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    AppState,
    catalog::{Collection, views},
    editor::SAVE_FAILED_MESSAGE,
    error::{AppError, Result},
    models::{AdminProductQuery, Product, UpdateImagesRequest, UpdateImagesResponse},
};

pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<AdminProductQuery>,
) -> Result<Json<Vec<Product>>> {
    let collection: Collection = match params.collection.as_deref() {
        Some(value) => value.parse().map_err(AppError::BadRequest)?,
        None => Collection::All,
    };

    let products = state.catalog.load_products().await;

    Ok(Json(views::filter_collection(&products, collection)))
}

pub async fn update_product_images(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateImagesRequest>,
) -> Result<Json<UpdateImagesResponse>> {
    if !state.catalog.update_product_images(id, payload.images).await {
        return Err(AppError::UnprocessableEntity(SAVE_FAILED_MESSAGE.to_string()));
    }

    let product = state
        .catalog
        .find_product(id)
        .await
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(UpdateImagesResponse {
        success: true,
        product,
    }))
}
