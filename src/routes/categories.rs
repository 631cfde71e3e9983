use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    AppState,
    catalog::views,
    error::{AppError, Result},
    models::{CategoryProductsResponse, FacetResponse},
};

pub async fn category_facets(State(state): State<AppState>) -> Json<FacetResponse> {
    let products = state.catalog.load_products().await;

    Json(FacetResponse {
        facets: views::category_facets(&products),
    })
}

pub async fn type_facets(State(state): State<AppState>) -> Json<FacetResponse> {
    let products = state.catalog.load_products().await;

    Json(FacetResponse {
        facets: views::subcategory_facets(&products),
    })
}

pub async fn category_products(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryProductsResponse>> {
    let products = state.catalog.load_products().await;

    let (name, matching) = views::products_in_category(&products, &slug)
        .ok_or_else(|| AppError::NotFound(format!("Category {} not found", slug)))?;

    Ok(Json(CategoryProductsResponse {
        name,
        slug,
        products: state.images.render_all(matching),
    }))
}

pub async fn type_products(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CategoryProductsResponse>> {
    let products = state.catalog.load_products().await;

    let (name, matching) = views::products_of_type(&products, &slug)
        .ok_or_else(|| AppError::NotFound(format!("Product type {} not found", slug)))?;

    Ok(Json(CategoryProductsResponse {
        name,
        slug,
        products: state.images.render_all(matching),
    }))
}
