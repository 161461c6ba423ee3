use crate::models::vehicle::{Vehicle, VehicleDisplay};
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;

pub struct VehicleController {
    repository: VehicleRepository,
}

impl VehicleController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleRepository::new(pool),
        }
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, AppError> {
        self.repository.find_all().await
    }

    /// Lista para los selectores del frontend
    pub async fn list_display(&self) -> Result<Vec<VehicleDisplay>, AppError> {
        let vehicles = self.repository.find_all().await?;
        Ok(vehicles.iter().map(VehicleDisplay::from).collect())
    }
}
