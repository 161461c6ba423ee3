use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::models::fuel_log::NewFuelLog;
use crate::utils::errors::AppError;

// Request para registrar una carga de combustible
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFuelLogRequest {
    pub vehicle_id: i32,
    pub log_date: NaiveDate,

    #[validate(custom = "crate::utils::validation::validate_positive_amount")]
    pub fuel_amount: f64,

    #[validate(custom = "crate::utils::validation::validate_non_negative_amount")]
    pub fuel_cost: Option<f64>,

    #[validate(custom = "crate::utils::validation::validate_non_negative_amount")]
    pub odometer: f64,

    #[validate(length(min = 1, max = 20), custom = "crate::utils::validation::validate_not_blank")]
    pub fuel_type: String,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

impl TryFrom<CreateFuelLogRequest> for NewFuelLog {
    type Error = AppError;

    fn try_from(request: CreateFuelLogRequest) -> Result<Self, Self::Error> {
        // El costo se guarda como NUMERIC(10,2)
        let fuel_cost = request
            .fuel_cost
            .map(|cost| {
                Decimal::from_f64_retain(cost)
                    .map(|d| d.round_dp(2))
                    .ok_or_else(|| AppError::BadRequest("Invalid fuel_cost value".to_string()))
            })
            .transpose()?;

        Ok(NewFuelLog {
            vehicle_id: request.vehicle_id,
            log_date: request.log_date,
            fuel_amount: request.fuel_amount,
            fuel_cost,
            odometer: request.odometer,
            fuel_type: request.fuel_type.trim().to_string(),
            notes: request.notes,
        })
    }
}
