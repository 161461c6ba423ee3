use crate::models::fuel_log::{FuelLog, NewFuelLog};
use crate::services::compute_efficiency;
use crate::utils::errors::AppError;
use sqlx::PgPool;

const FUEL_LOG_COLUMNS: &str =
    "id, vehicle_id, log_date, fuel_amount, fuel_cost, odometer, fuel_type, notes, efficiency";

pub struct FuelLogRepository {
    pool: PgPool,
}

impl FuelLogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Inserta la carga calculando su eficiencia contra la carga anterior.
    ///
    /// Todo ocurre en una transacción con un advisory lock por vehículo, así
    /// dos cargas simultáneas del mismo vehículo no leen el mismo odómetro.
    pub async fn create(&self, new_log: &NewFuelLog) -> Result<FuelLog, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("SELECT pg_advisory_xact_lock($1)")
            .bind(i64::from(new_log.vehicle_id))
            .execute(&mut *tx)
            .await?;

        let previous: Option<(f64,)> = sqlx::query_as(
            r#"
            SELECT odometer FROM fuel_logs
            WHERE vehicle_id = $1
            ORDER BY log_date DESC, id DESC
            LIMIT 1
            "#
        )
        .bind(new_log.vehicle_id)
        .fetch_optional(&mut *tx)
        .await?;

        let efficiency = compute_efficiency(
            previous.map(|(odometer,)| odometer),
            new_log.odometer,
            new_log.fuel_amount,
        );

        let log = sqlx::query_as::<_, FuelLog>(&format!(
            r#"
            INSERT INTO fuel_logs (vehicle_id, log_date, fuel_amount, fuel_cost, odometer, fuel_type, notes, efficiency)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            FUEL_LOG_COLUMNS
        ))
        .bind(new_log.vehicle_id)
        .bind(new_log.log_date)
        .bind(new_log.fuel_amount)
        .bind(new_log.fuel_cost)
        .bind(new_log.odometer)
        .bind(&new_log.fuel_type)
        .bind(&new_log.notes)
        .bind(efficiency)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(log)
    }

    /// Cargas más recientes primero, opcionalmente de un solo vehículo
    pub async fn find_recent(
        &self,
        vehicle_id: Option<i32>,
        limit: i64,
    ) -> Result<Vec<FuelLog>, AppError> {
        let logs = sqlx::query_as::<_, FuelLog>(&format!(
            r#"
            SELECT {} FROM fuel_logs
            WHERE ($1::INT IS NULL OR vehicle_id = $1)
            ORDER BY log_date DESC, id DESC
            LIMIT $2
            "#,
            FUEL_LOG_COLUMNS
        ))
        .bind(vehicle_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(logs)
    }
}
