use crate::dto::trip_dto::CreateTripRequest;
use crate::dto::ListQuery;
use crate::models::trip::{NewTrip, Trip};
use crate::repositories::trip_repository::TripRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use tracing::{debug, info};
use validator::Validate;

pub struct TripController {
    repository: TripRepository,
    vehicles: VehicleRepository,
}

impl TripController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TripRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateTripRequest) -> Result<Trip, AppError> {
        request.validate()?;

        // Verificar que el vehículo exista antes de insertar
        if !self.vehicles.exists(request.vehicle_id).await? {
            return Err(AppError::BadRequest("Vehicle does not exist".to_string()));
        }

        let trip = self.repository.create(&NewTrip::from(request)).await?;
        info!(
            "🛣️ Viaje {} registrado para vehículo {}: {} → {}",
            trip.id, trip.vehicle_id, trip.start_location, trip.end_location
        );

        Ok(trip)
    }

    pub async fn list(&self, query: ListQuery) -> Result<Vec<Trip>, AppError> {
        query.validate()?;

        let trips = self.repository.find_recent(query.vehicle_id, query.limit()).await?;
        debug!("📋 {} viajes devueltos (vehículo: {:?})", trips.len(), query.vehicle_id);

        Ok(trips)
    }
}
