use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    AppState,
    catalog::{Collection, views},
    error::{AppError, Result},
    i18n::Language,
    models::{LanguageQuery, ProductDetailResponse, ProductView, ShowcaseResponse},
};

pub async fn showcase(
    State(state): State<AppState>,
    Query(params): Query<LanguageQuery>,
) -> Json<ShowcaseResponse> {
    let language = Language::from_query(params.lang.as_deref());
    let t = |key: &str| state.translator.t(language, key);

    let products = state.catalog.load_products().await;
    let categories = views::category_names(&products);

    Json(ShowcaseResponse {
        badge: t("products.ourProducts"),
        title: t("products.leadingManufacturer"),
        subtitle: t("products.professionalGrade"),
        categories,
        products: state.images.render_all(products),
    })
}

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<LanguageQuery>,
) -> Result<Json<ProductDetailResponse>> {
    let language = Language::from_query(params.lang.as_deref());

    let product = state
        .catalog
        .find_product(id)
        .await
        .ok_or(AppError::NotFound("Product not found".to_string()))?;

    Ok(Json(ProductDetailResponse {
        product: state.images.render(product),
        view_details_label: state.translator.t(language, "products.viewDetails"),
        request_quote_label: state.translator.t(language, "products.requestQuote"),
    }))
}

pub async fn get_collection(
    State(state): State<AppState>,
    Path(collection): Path<String>,
) -> Result<Json<Vec<ProductView>>> {
    let collection: Collection = collection.parse().map_err(AppError::NotFound)?;

    let products = state.catalog.load_products().await;
    let filtered = views::filter_collection(&products, collection);

    Ok(Json(state.images.render_all(filtered)))
}
