use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalRequest {
    pub rental_type: String,
    pub duration: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub name: Option<String>,
    pub start_date: Option<String>,
    pub additional_notes: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RentalResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalItem {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub image: String,
    pub daily_rate: String,
    pub weekly_rate: String,
    pub deposit: String,
    pub category: String,
    pub available: bool,
}

#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct RentalAvailability {
    pub available: bool,
}
