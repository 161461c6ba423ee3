//! Cálculo de eficiencia de combustible
//!
//! La eficiencia de una carga se mide contra la carga anterior del mismo
//! vehículo: litros consumidos cada 100 unidades de distancia recorrida.

/// Eficiencia de una nueva carga.
///
/// `previous_odometer` es la lectura de la carga más reciente del vehículo
/// (por fecha y luego por id). Devuelve `None` si no hay carga previa o si
/// la distancia no es positiva; lecturas duplicadas o fuera de orden no
/// son un error.
pub fn compute_efficiency(
    previous_odometer: Option<f64>,
    current_odometer: f64,
    fuel_amount: f64,
) -> Option<f64> {
    let distance = current_odometer - previous_odometer?;
    if distance > 0.0 {
        Some(fuel_amount / distance * 100.0)
    } else {
        None
    }
}
