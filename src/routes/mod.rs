//! Rutas de la API
//!
//! Este módulo arma el router completo: endpoints JSON, páginas y middleware.

pub mod analytics_routes;
pub mod fuel_log_routes;
pub mod page_routes;
pub mod trip_routes;
pub mod vehicle_routes;

use axum::{http::Uri, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

/// Crear el router principal de la aplicación
pub fn create_app_router(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/", get(service_info))
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .route("/api/vehicles/display", get(vehicle_routes::list_vehicle_display_names))
        .nest("/fuel_logs", fuel_log_routes::create_fuel_log_router())
        .nest("/trips", trip_routes::create_trip_router())
        .nest("/analytics", analytics_routes::create_analytics_router())
        .merge(page_routes::create_page_router(&static_dir))
        .fallback(route_not_found)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Endpoint raíz: describe la API
async fn service_info() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Fuel Tracker API is running",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "vehicles": "/vehicles",
            "vehicles_display": "/vehicles/display",
            "fuel_logs": "/fuel_logs",
            "trips": "/trips",
            "analytics": "/analytics/fuel_consumption",
            "frontend": {
                "home": "/index",
                "add_log": "/add-log",
                "trips": "/trips-page",
                "analytics": "/analytics-page"
            }
        }
    }))
}

async fn route_not_found(uri: Uri) -> AppError {
    not_found_error("Route", uri.path())
}
