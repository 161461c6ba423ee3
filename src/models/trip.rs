//! Modelo de Trip

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Propósito asignado cuando el viaje no trae uno
pub const DEFAULT_PURPOSE: &str = "commute";

/// Trip - mapea a la tabla trips
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Trip {
    pub id: i32,
    pub vehicle_id: i32,
    pub trip_date: NaiveDate,
    pub start_location: String,
    pub end_location: String,
    pub distance: f64,
    /// Minutos
    pub duration: Option<i32>,
    pub purpose: String,
    pub notes: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct NewTrip {
    pub vehicle_id: i32,
    pub trip_date: NaiveDate,
    pub start_location: String,
    pub end_location: String,
    pub distance: f64,
    pub duration: Option<i32>,
    pub purpose: String,
    pub notes: Option<String>,
}
