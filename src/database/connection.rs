//! Configuración de conexión a PostgreSQL
//!
//! Este módulo maneja el pool de conexiones y el bootstrap del schema.

use sqlx::{Executor, PgPool};
use tracing::info;

use crate::config::DatabaseConfig;

/// Script idempotente con las tablas vehicles, fuel_logs y trips
pub const SCHEMA_SQL: &str = include_str!("schema.sql");

/// Pool de conexiones compartido por todos los requests
#[derive(Debug, Clone)]
pub struct DatabaseConnection {
    pool: PgPool,
}

impl DatabaseConnection {
    /// Conectar usando la configuración dada y verificar la conexión
    pub async fn new(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        info!("🗄️ Conectando a {}", mask_database_url(&config.url));

        let connection = Self {
            pool: config.create_pool().await?,
        };
        connection.health_check().await?;

        if config.bootstrap {
            connection.bootstrap_schema().await?;
        }

        Ok(connection)
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Verificar que la conexión funciona
    pub async fn health_check(&self) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// Crear las tablas si no existen
    pub async fn bootstrap_schema(&self) -> Result<(), sqlx::Error> {
        // Sin parámetros sqlx usa el protocolo simple, que acepta varias sentencias
        self.pool.execute(SCHEMA_SQL).await?;
        info!("✅ Schema verificado");
        Ok(())
    }
}

/// Función helper para enmascarar la URL de la base de datos en logs
pub fn mask_database_url(url: &str) -> String {
    let Some(scheme_end) = url.find("://") else {
        return url.to_string();
    };
    match url.rfind('@') {
        Some(at_pos) if at_pos > scheme_end => {
            format!("{}***:***@{}", &url[..scheme_end + 3], &url[at_pos + 1..])
        }
        _ => url.to_string(),
    }
}
