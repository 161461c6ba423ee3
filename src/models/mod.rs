//! Modelos del sistema
//!
//! Este módulo contiene los modelos de datos que mapean al schema
//! PostgreSQL (vehicles, fuel_logs, trips) y a los reportes.

pub mod analytics;
pub mod fuel_log;
pub mod trip;
pub mod vehicle;

pub use analytics::{MonthlyConsumption, Period};
pub use fuel_log::{FuelLog, NewFuelLog};
pub use trip::{NewTrip, Trip};
pub use vehicle::{Vehicle, VehicleDisplay};
