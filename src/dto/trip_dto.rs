use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::models::trip::{NewTrip, DEFAULT_PURPOSE};

fn default_purpose() -> String {
    DEFAULT_PURPOSE.to_string()
}

// Request para registrar un viaje
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTripRequest {
    pub vehicle_id: i32,
    pub trip_date: NaiveDate,

    #[validate(length(min = 1, max = 255), custom = "crate::utils::validation::validate_not_blank")]
    pub start_location: String,

    #[validate(length(min = 1, max = 255), custom = "crate::utils::validation::validate_not_blank")]
    pub end_location: String,

    #[validate(custom = "crate::utils::validation::validate_non_negative_amount")]
    pub distance: f64,

    #[validate(range(min = 0))]
    pub duration: Option<i32>,

    #[serde(default = "default_purpose")]
    #[validate(length(min = 1, max = 50))]
    pub purpose: String,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

impl From<CreateTripRequest> for NewTrip {
    fn from(request: CreateTripRequest) -> Self {
        let purpose = match request.purpose.trim() {
            "" => default_purpose(),
            purpose => purpose.to_string(),
        };

        Self {
            vehicle_id: request.vehicle_id,
            trip_date: request.trip_date,
            start_location: request.start_location.trim().to_string(),
            end_location: request.end_location.trim().to_string(),
            distance: request.distance,
            duration: request.duration,
            purpose,
            notes: request.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_body() -> serde_json::Value {
        json!({
            "vehicle_id": 2,
            "trip_date": "2024-06-10",
            "start_location": "Porto",
            "end_location": "Braga",
            "distance": 55.4,
            "duration": 48
        })
    }

    #[test]
    fn test_purpose_defaults_to_commute() {
        let request: CreateTripRequest = serde_json::from_value(valid_body()).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.purpose, "commute");

        let trip = NewTrip::from(request);
        assert_eq!(trip.purpose, "commute");
        assert_eq!(trip.duration, Some(48));
    }

    #[test]
    fn test_explicit_purpose_is_kept() {
        let mut body = valid_body();
        body["purpose"] = json!("business");
        let request: CreateTripRequest = serde_json::from_value(body).unwrap();
        assert_eq!(NewTrip::from(request).purpose, "business");
    }

    #[test]
    fn test_invalid_trip_fails_validation() {
        let mut body = valid_body();
        body["start_location"] = json!("");
        body["distance"] = json!(-3.0);
        body["duration"] = json!(-1);
        let request: CreateTripRequest = serde_json::from_value(body).unwrap();
        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("start_location"));
        assert!(fields.contains_key("distance"));
        assert!(fields.contains_key("duration"));
    }
}
