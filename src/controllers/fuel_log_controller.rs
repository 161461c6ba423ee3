use crate::dto::fuel_log_dto::CreateFuelLogRequest;
use crate::dto::ListQuery;
use crate::models::fuel_log::{FuelLog, NewFuelLog};
use crate::repositories::fuel_log_repository::FuelLogRepository;
use crate::utils::errors::AppError;
use sqlx::PgPool;
use tracing::{debug, info};
use validator::Validate;

pub struct FuelLogController {
    repository: FuelLogRepository,
}

impl FuelLogController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FuelLogRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateFuelLogRequest) -> Result<FuelLog, AppError> {
        request.validate()?;

        let new_log = NewFuelLog::try_from(request)?;
        let log = self.repository.create(&new_log).await?;

        info!(
            "⛽ Carga {} registrada para vehículo {} (eficiencia: {:?})",
            log.id, log.vehicle_id, log.efficiency
        );

        Ok(log)
    }

    pub async fn list(&self, query: ListQuery) -> Result<Vec<FuelLog>, AppError> {
        query.validate()?;

        let logs = self.repository.find_recent(query.vehicle_id, query.limit()).await?;
        debug!("📋 {} cargas devueltas (vehículo: {:?})", logs.len(), query.vehicle_id);

        Ok(logs)
    }
}
