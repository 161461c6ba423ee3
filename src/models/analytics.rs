//! Modelos de Analytics
//!
//! Este módulo contiene el periodo de consulta del reporte de consumo
//! y las filas agregadas por mes.

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;

/// Ventana hacia atrás desde hoy para el reporte de consumo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    SevenDays,
    #[default]
    ThirtyDays,
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

impl Period {
    pub const ALL: [Period; 5] = [
        Period::SevenDays,
        Period::ThirtyDays,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::TwelveMonths,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::SevenDays => "7days",
            Period::ThirtyDays => "30days",
            Period::ThreeMonths => "3months",
            Period::SixMonths => "6months",
            Period::TwelveMonths => "12months",
        }
    }

    /// Primer día incluido en la ventana. Los meses se restan por calendario
    /// (31 de mayo - 3 meses = 28/29 de febrero).
    pub fn window_start(&self, today: NaiveDate) -> NaiveDate {
        let start = match self {
            Period::SevenDays => today.checked_sub_days(Days::new(7)),
            Period::ThirtyDays => today.checked_sub_days(Days::new(30)),
            Period::ThreeMonths => today.checked_sub_months(Months::new(3)),
            Period::SixMonths => today.checked_sub_months(Months::new(6)),
            Period::TwelveMonths => today.checked_sub_months(Months::new(12)),
        };
        start.unwrap_or(NaiveDate::MIN)
    }

    /// "7days, 30days, 3months, 6months, 12months"
    pub fn valid_values() -> String {
        Self::ALL.iter().map(Period::as_str).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPeriod(pub String);

impl fmt::Display for InvalidPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid period. Must be one of: {}", Period::valid_values())
    }
}

impl FromStr for Period {
    type Err = InvalidPeriod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|period| period.as_str() == s)
            .ok_or_else(|| InvalidPeriod(s.to_string()))
    }
}

/// Fila del reporte: un mes calendario
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct MonthlyConsumption {
    /// "YYYY-MM"
    pub month: String,
    pub total_fuel: f64,
    /// Promedio de las eficiencias no nulas del mes
    pub avg_efficiency: Option<f64>,
}
