use anyhow::Result;
use dotenvy::dotenv;
use tokio::signal;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fuel_tracker::config::{DatabaseConfig, EnvironmentConfig};
use fuel_tracker::database::DatabaseConnection;
use fuel_tracker::routes::create_app_router;
use fuel_tracker::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fuel_tracker=debug,tower_http=info")),
        )
        .init();

    info!("⛽ Fuel Tracker API");
    info!("==================");

    let env_config = EnvironmentConfig::from_env()?;
    let db_config = DatabaseConfig::from_env()?;

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new(&db_config).await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };
    info!("✅ Base de datos conectada");

    let addr = env_config.server_url();
    let app_state = AppState::new(db_connection.pool().clone(), env_config);
    let app = create_app_router(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  / - Información de la API");
    info!("🚗 Vehículos:");
    info!("   GET  /vehicles - Listar vehículos");
    info!("   GET  /vehicles/display - Nombres para selectores");
    info!("⛽ Cargas de combustible:");
    info!("   POST /fuel_logs - Registrar carga");
    info!("   GET  /fuel_logs?vehicle_id=&limit= - Cargas recientes");
    info!("🛣️ Viajes:");
    info!("   POST /trips - Registrar viaje");
    info!("   GET  /trips?vehicle_id=&limit= - Viajes recientes");
    info!("📊 Analytics:");
    info!("   GET  /analytics/fuel_consumption?vehicle_id=&period= - Consumo mensual");
    info!("🖥️ Páginas: /index, /add-log, /trips-page, /analytics-page");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Error del servidor: {}", e);
        return Err(e.into());
    }

    db_connection.pool().close().await;
    info!("👋 Servidor terminado");
    Ok(())
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("❌ No se pudo instalar el handler de Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("❌ No se pudo instalar el handler de SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
