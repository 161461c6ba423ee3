use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use crate::controllers::fuel_log_controller::FuelLogController;
use crate::dto::fuel_log_dto::CreateFuelLogRequest;
use crate::dto::ListQuery;
use crate::models::fuel_log::FuelLog;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::{ApiJson, ApiQuery};

pub fn create_fuel_log_router() -> Router<AppState> {
    Router::new().route("/", get(list_fuel_logs).post(create_fuel_log))
}

async fn create_fuel_log(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateFuelLogRequest>,
) -> Result<Json<FuelLog>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_fuel_logs(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<Vec<FuelLog>>, AppError> {
    let controller = FuelLogController::new(state.pool.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}
