use crate::models::analytics::MonthlyConsumption;
use crate::utils::errors::AppError;
use chrono::NaiveDate;
use sqlx::PgPool;

pub struct AnalyticsRepository {
    pool: PgPool,
}

impl AnalyticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Litros totales y eficiencia promedio por mes calendario desde `since`.
    /// AVG ignora las eficiencias NULL.
    pub async fn fuel_consumption_by_month(
        &self,
        vehicle_id: Option<i32>,
        since: NaiveDate,
    ) -> Result<Vec<MonthlyConsumption>, AppError> {
        let rows = sqlx::query_as::<_, MonthlyConsumption>(
            r#"
            SELECT
                to_char(log_date, 'YYYY-MM') AS month,
                SUM(fuel_amount)::FLOAT8 AS total_fuel,
                AVG(efficiency)::FLOAT8 AS avg_efficiency
            FROM fuel_logs
            WHERE log_date >= $1
            AND ($2::INT IS NULL OR vehicle_id = $2)
            GROUP BY to_char(log_date, 'YYYY-MM')
            ORDER BY month
            "#
        )
        .bind(since)
        .bind(vehicle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
