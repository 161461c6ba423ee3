use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use crate::controllers::analytics_controller::AnalyticsController;
use crate::dto::analytics_dto::FuelConsumptionQuery;
use crate::models::analytics::MonthlyConsumption;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::ApiQuery;

pub fn create_analytics_router() -> Router<AppState> {
    Router::new().route("/fuel_consumption", get(get_fuel_consumption))
}

async fn get_fuel_consumption(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<FuelConsumptionQuery>,
) -> Result<Json<Vec<MonthlyConsumption>>, AppError> {
    let controller = AnalyticsController::new(state.pool.clone());
    let response = controller.fuel_consumption(query).await?;
    Ok(Json(response))
}
