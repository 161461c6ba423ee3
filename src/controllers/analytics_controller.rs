use crate::dto::analytics_dto::FuelConsumptionQuery;
use crate::models::analytics::MonthlyConsumption;
use crate::repositories::analytics_repository::AnalyticsRepository;
use crate::utils::errors::AppResult;
use chrono::{NaiveDate, Utc};
use sqlx::PgPool;
use tracing::debug;

pub struct AnalyticsController {
    repository: AnalyticsRepository,
}

impl AnalyticsController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AnalyticsRepository::new(pool),
        }
    }

    pub async fn fuel_consumption(
        &self,
        query: FuelConsumptionQuery,
    ) -> AppResult<Vec<MonthlyConsumption>> {
        self.fuel_consumption_as_of(query, Utc::now().date_naive()).await
    }

    /// Reporte mensual con `today` como fin de la ventana
    pub async fn fuel_consumption_as_of(
        &self,
        query: FuelConsumptionQuery,
        today: NaiveDate,
    ) -> AppResult<Vec<MonthlyConsumption>> {
        // El periodo se valida antes de tocar la base de datos
        let period = query.period()?;
        let since = period.window_start(today);

        debug!(
            "📊 Reporte de consumo: periodo {} desde {} (vehículo: {:?})",
            period, since, query.vehicle_id
        );

        self.repository
            .fuel_consumption_by_month(query.vehicle_id, since)
            .await
    }
}
