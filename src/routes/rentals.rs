use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{
    AppState,
    error::Result,
    models::{AvailabilityQuery, RentalAvailability, RentalItem, RentalRequest, RentalResponse},
};

pub async fn list_items(State(state): State<AppState>) -> Json<Vec<RentalItem>> {
    Json(state.rentals.get_available_rental_items())
}

pub async fn check_availability(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(params): Query<AvailabilityQuery>,
) -> Result<Json<RentalAvailability>> {
    let availability = state
        .rentals
        .check_rental_availability(id, params.start, params.end)?;

    Ok(Json(availability))
}

pub async fn submit_request(
    State(state): State<AppState>,
    Json(payload): Json<RentalRequest>,
) -> Result<Json<RentalResponse>> {
    let response = state.rentals.submit_rental_request(&payload).await?;

    Ok(Json(response))
}
