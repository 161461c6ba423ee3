use crate::models::trip::{NewTrip, Trip};
use crate::utils::errors::AppError;
use sqlx::PgPool;

// purpose puede venir NULL de filas antiguas
const TRIP_COLUMNS: &str = r#"
    id, vehicle_id, trip_date, start_location, end_location,
    distance, duration, COALESCE(purpose, 'commute') AS purpose,
    notes, created_at
"#;

pub struct TripRepository {
    pool: PgPool,
}

impl TripRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_trip: &NewTrip) -> Result<Trip, AppError> {
        let trip = sqlx::query_as::<_, Trip>(&format!(
            r#"
            INSERT INTO trips (vehicle_id, trip_date, start_location, end_location, distance, duration, purpose, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            TRIP_COLUMNS
        ))
        .bind(new_trip.vehicle_id)
        .bind(new_trip.trip_date)
        .bind(&new_trip.start_location)
        .bind(&new_trip.end_location)
        .bind(new_trip.distance)
        .bind(new_trip.duration)
        .bind(&new_trip.purpose)
        .bind(&new_trip.notes)
        .fetch_one(&self.pool)
        .await?;

        Ok(trip)
    }

    pub async fn find_recent(
        &self,
        vehicle_id: Option<i32>,
        limit: i64,
    ) -> Result<Vec<Trip>, AppError> {
        let trips = sqlx::query_as::<_, Trip>(&format!(
            r#"
            SELECT {} FROM trips
            WHERE ($1::INT IS NULL OR vehicle_id = $1)
            ORDER BY trip_date DESC, id DESC
            LIMIT $2
            "#,
            TRIP_COLUMNS
        ))
        .bind(vehicle_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(trips)
    }
}
