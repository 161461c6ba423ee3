//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! usadas por los DTOs con `#[validate(custom = ...)]`.

use serde::Serialize;
use std::borrow::Borrow;
use validator::ValidationError;

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea no negativo
pub fn validate_non_negative<T: PartialOrd + std::fmt::Display + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("value".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Cantidades (litros, kilómetros) deben ser finitas y mayores que cero.
/// Acepta `f64` o `&f64`: el derive pasa los números por valor.
pub fn validate_positive_amount<T: Borrow<f64>>(value: T) -> Result<(), ValidationError> {
    let value = *value.borrow();
    validate_finite(value)?;
    validate_positive(value)
}

/// Lecturas y costos: finitos y >= 0
pub fn validate_non_negative_amount<T: Borrow<f64>>(value: T) -> Result<(), ValidationError> {
    let value = *value.borrow();
    validate_finite(value)?;
    validate_non_negative(value)
}

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new("finite"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive(5).is_ok());
        assert!(validate_positive(0).is_err());
        assert!(validate_positive(-5).is_err());
    }

    #[test]
    fn test_validate_non_negative() {
        assert!(validate_non_negative(0.0).is_ok());
        assert!(validate_non_negative(12.5).is_ok());
        assert!(validate_non_negative(-0.1).is_err());
    }

    #[test]
    fn test_validate_amounts() {
        assert!(validate_positive_amount(20.0).is_ok());
        assert!(validate_positive_amount(&0.0).is_err());
        assert!(validate_positive_amount(f64::INFINITY).is_err());
        assert!(validate_non_negative_amount(&0.0).is_ok());
        assert!(validate_non_negative_amount(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Lisbon").is_ok());
        assert!(validate_not_blank("   ").is_err());
    }
}
