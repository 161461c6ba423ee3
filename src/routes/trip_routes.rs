use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use crate::controllers::trip_controller::TripController;
use crate::dto::trip_dto::CreateTripRequest;
use crate::dto::ListQuery;
use crate::models::trip::Trip;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::extractors::{ApiJson, ApiQuery};

pub fn create_trip_router() -> Router<AppState> {
    Router::new().route("/", get(list_trips).post(create_trip))
}

async fn create_trip(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<CreateTripRequest>,
) -> Result<Json<Trip>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_trips(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<ListQuery>,
) -> Result<Json<Vec<Trip>>, AppError> {
    let controller = TripController::new(state.pool.clone());
    let response = controller.list(query).await?;
    Ok(Json(response))
}
