//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores, extracción y validación.

pub mod errors;
pub mod extractors;
pub mod validation;

pub use errors::{AppError, AppResult};
