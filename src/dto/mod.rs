//! DTOs de requests y query strings

pub mod analytics_dto;
pub mod fuel_log_dto;
pub mod trip_dto;

use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;
use validator::Validate;

/// Cantidad de filas cuando el cliente no envía `limit`
pub const DEFAULT_LIMIT: i64 = 10;

/// Query string común de los listados: `?vehicle_id=&limit=`
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ListQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub vehicle_id: Option<i32>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(range(min = 1, max = 500))]
    pub limit: Option<i64>,
}

impl ListQuery {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

/// Los formularios envían `vehicle_id=` cuando se elige "todos"
pub fn empty_string_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => FromStr::from_str(s).map_err(de::Error::custom).map(Some),
    }
}
