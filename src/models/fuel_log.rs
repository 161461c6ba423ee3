//! Modelo de FuelLog
//!
//! Una carga de combustible. `efficiency` se calcula al insertar y no se
//! vuelve a tocar.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// FuelLog - mapea a la tabla fuel_logs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct FuelLog {
    pub id: i32,
    pub vehicle_id: i32,
    pub log_date: NaiveDate,
    pub fuel_amount: f64,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub fuel_cost: Option<Decimal>,
    pub odometer: f64,
    pub fuel_type: String,
    pub notes: Option<String>,
    /// Litros cada 100 unidades de distancia desde la carga anterior
    pub efficiency: Option<f64>,
}

/// Datos ya validados para insertar una carga
#[derive(Debug, Clone)]
pub struct NewFuelLog {
    pub vehicle_id: i32,
    pub log_date: NaiveDate,
    pub fuel_amount: f64,
    pub fuel_cost: Option<Decimal>,
    pub odometer: f64,
    pub fuel_type: String,
    pub notes: Option<String>,
}
