//! Stand-in for the rental backend: fixed inventory, a simulated network
//! delay, and a configurable chance of failure.

use std::time::Duration;

use chrono::NaiveDate;
use rand::Rng;

use crate::{
    config::RentalConfig,
    error::{AppError, Result},
    models::{RentalAvailability, RentalItem, RentalRequest, RentalResponse},
};

#[derive(Debug, Clone)]
pub struct RentalService {
    config: RentalConfig,
}

impl RentalService {
    pub fn new(config: RentalConfig) -> Self {
        Self { config }
    }

    pub async fn submit_rental_request(&self, request: &RentalRequest) -> Result<RentalResponse> {
        validate_request(request)?;

        tokio::time::sleep(Duration::from_millis(self.config.delay_ms)).await;

        let roll: f64 = rand::thread_rng().r#gen();
        if roll < self.config.failure_rate {
            return Err(AppError::ServiceUnavailable("Network error".to_string()));
        }

        tracing::info!(
            rental_type = %request.rental_type,
            duration = %request.duration,
            "Rental request accepted"
        );

        Ok(RentalResponse {
            success: true,
            message: "Rental request submitted successfully".to_string(),
        })
    }

    pub fn get_available_rental_items(&self) -> Vec<RentalItem> {
        rental_items()
    }

    pub fn check_rental_availability(
        &self,
        item_id: i32,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<RentalAvailability> {
        if end < start {
            return Err(AppError::BadRequest(
                "end date must not be before start date".to_string(),
            ));
        }

        if !rental_items().iter().any(|item| item.id == item_id) {
            return Err(AppError::NotFound(format!("Rental item {} not found", item_id)));
        }

        Ok(RentalAvailability { available: true })
    }
}

fn validate_request(request: &RentalRequest) -> Result<()> {
    let required = [
        ("rentalType", &request.rental_type),
        ("duration", &request.duration),
        ("phoneNumber", &request.phone_number),
    ];

    for (field, value) in required {
        if value.trim().is_empty() {
            return Err(AppError::BadRequest(format!("{} is required", field)));
        }
    }

    Ok(())
}

fn item(
    id: i32,
    name: &str,
    description: &str,
    image: &str,
    rates: (&str, &str, &str),
    category: &str,
) -> RentalItem {
    RentalItem {
        id,
        name: name.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        daily_rate: rates.0.to_string(),
        weekly_rate: rates.1.to_string(),
        deposit: rates.2.to_string(),
        category: category.to_string(),
        available: true,
    }
}

fn rental_items() -> Vec<RentalItem> {
    vec![
        item(
            1,
            "Event Tent (Large)",
            "Spacious tent perfect for weddings, corporate events, and large gatherings. Includes setup and takedown.",
            "https://images.unsplash.com/photo-1478827387698-1527781a4887?w=800&q=80",
            ("$250", "$1,200", "$500"),
            "tents",
        ),
        item(
            2,
            "Family Camping Tent",
            "Comfortable 6-person tent with weather-resistant materials, perfect for family camping trips.",
            "https://images.unsplash.com/photo-1504280390367-361c6d9f38f4?w=800&q=80",
            ("$45", "$225", "$100"),
            "tents",
        ),
        item(
            3,
            "Car Shade Port",
            "Durable shade structure to protect vehicles from sun and weather. Easy to install and highly portable.",
            "https://images.unsplash.com/photo-1489824904134-891ab64532f1?w=800&q=80",
            ("$35", "$175", "$75"),
            "shade",
        ),
        item(
            4,
            "Heavy-Duty Tarpaulin",
            "Waterproof PVC tarpaulin for various outdoor applications. Multiple sizes available.",
            "https://images.unsplash.com/photo-1508873696983-2dfd5898f08b?w=800&q=80",
            ("$15", "$75", "$30"),
            "covers",
        ),
        item(
            5,
            "Retractable Awning",
            "Stylish and functional awning for residential and commercial spaces. Professional installation included.",
            "https://images.unsplash.com/photo-1595111633191-7a8c1b16c722?w=800&q=80",
            ("$60", "$300", "$150"),
            "shade",
        ),
        item(
            6,
            "Market Stall Tent",
            "Compact and easy-to-setup tent perfect for market stalls, small events, and outdoor displays.",
            "https://images.unsplash.com/photo-1523987355523-c7b5b0dd90a7?w=800&q=80",
            ("$40", "$200", "$80"),
            "tents",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RentalRequest {
        RentalRequest {
            rental_type: "Event Tent (Large)".to_string(),
            duration: "3 days".to_string(),
            phone_number: "+258 84 000 0000".to_string(),
            email: None,
            name: Some("Ana".to_string()),
            start_date: None,
            additional_notes: None,
        }
    }

    fn service(failure_rate: f64) -> RentalService {
        RentalService::new(RentalConfig {
            delay_ms: 0,
            failure_rate,
        })
    }

    #[tokio::test]
    async fn request_succeeds_when_failure_rate_is_zero() {
        let response = service(0.0).submit_rental_request(&request()).await.unwrap();
        assert!(response.success);
    }

    #[tokio::test]
    async fn request_fails_when_failure_rate_is_one() {
        let result = service(1.0).submit_rental_request(&request()).await;
        assert!(matches!(result, Err(AppError::ServiceUnavailable(_))));
    }

    #[tokio::test]
    async fn blank_phone_number_is_rejected_before_delay() {
        let mut bad = request();
        bad.phone_number = " ".to_string();
        let result = service(0.0).submit_rental_request(&bad).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn availability_checks_dates_and_item() {
        let service = service(0.0);
        let start = NaiveDate::from_ymd_opt(2026, 1, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap();

        assert!(service.check_rental_availability(1, start, end).unwrap().available);
        assert!(matches!(
            service.check_rental_availability(1, end, start),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            service.check_rental_availability(99, start, end),
            Err(AppError::NotFound(_))
        ));
        assert_eq!(service.get_available_rental_items().len(), 6);
    }
}
