//! Modelo de Vehicle
//!
//! Los vehículos se crean fuera de esta API; aquí solo se leen.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Vehicle principal - mapea a la tabla vehicles
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Vehicle {
    pub id: i32,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub fuel_type: String,
}

impl Vehicle {
    /// Nombre para selectores del frontend: "Toyota Corolla (2019)"
    pub fn display_name(&self) -> String {
        format!("{} {} ({})", self.make, self.model, self.year)
    }
}

/// Par id / nombre visible
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct VehicleDisplay {
    pub id: i32,
    pub display: String,
}

impl From<&Vehicle> for VehicleDisplay {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            display: vehicle.display_name(),
        }
    }
}
