use serde::Deserialize;

use super::empty_string_as_none;
use crate::models::analytics::Period;
use crate::utils::errors::AppError;

// Query de /analytics/fuel_consumption
#[derive(Debug, Default, Deserialize)]
pub struct FuelConsumptionQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub vehicle_id: Option<i32>,

    /// Se valida aparte para poder listar los valores aceptados
    pub period: Option<String>,
}

impl FuelConsumptionQuery {
    pub fn period(&self) -> Result<Period, AppError> {
        match self.period.as_deref() {
            None => Ok(Period::default()),
            Some(raw) => raw
                .parse::<Period>()
                .map_err(|e| AppError::UnprocessableEntity(e.to_string())),
        }
    }
}
