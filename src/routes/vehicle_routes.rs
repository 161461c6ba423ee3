use axum::{extract::State, routing::get, Json, Router};
use crate::controllers::vehicle_controller::VehicleController;
use crate::models::vehicle::{Vehicle, VehicleDisplay};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/display", get(list_vehicle_display_names))
}

async fn list_vehicles(
    State(state): State<AppState>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

pub(crate) async fn list_vehicle_display_names(
    State(state): State<AppState>,
) -> Result<Json<Vec<VehicleDisplay>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.list_display().await?;
    Ok(Json(response))
}
