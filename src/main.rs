mod cache;
mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod pricing;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{extract::State, middleware::from_fn_with_state, response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::signal;
use tracing::{error, info};

use cache::redis_client::RedisClient;
use config::environment::EnvironmentConfig;
use database::create_pool;
use middleware::auth::auth_middleware;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use services::notificacion_service::HttpMailSender;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    info!("🚐 Medellín Travel API - Reservas de tours y transporte");
    info!("=======================================================");

    let config = EnvironmentConfig::default();

    // Inicializar base de datos
    let pool = match create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    // Inicializar Redis
    let redis_url = std::env::var("REDIS_URL")
        .unwrap_or_else(|_| "redis://localhost:6379".to_string());
    let redis_config = cache::CacheConfig {
        redis_url,
        default_ttl: config.catalogo_cache_ttl,
    };
    let redis_client = match RedisClient::new(redis_config).await {
        Ok(client) => client,
        Err(e) => {
            error!("❌ Error conectando a Redis: {}", e);
            return Err(anyhow::anyhow!("Error de Redis: {}", e));
        }
    };

    let http_client = reqwest::Client::new();
    let notificador = Arc::new(HttpMailSender::new(http_client, &config));

    let app_state = AppState::new(pool, config.clone(), redis_client, notificador);

    let cors = if config.cors_origins.is_empty() {
        cors_middleware()
    } else {
        cors_middleware_with_origins(config.cors_origins.clone())
    };

    // Routers del panel, detrás del middleware de auth
    let admin_auth = from_fn_with_state(app_state.clone(), auth_middleware);
    let reservas_router = routes::reserva_routes::create_reserva_public_router().merge(
        routes::reserva_routes::create_reserva_admin_router()
            .route_layer(admin_auth.clone()),
    );

    let app = Router::new()
        .route("/health", get(health))
        // Rutas públicas del sitio de reservas
        .nest("/api/catalogo", routes::catalogo_routes::create_catalogo_router())
        .nest("/api/cotizaciones", routes::cotizacion_routes::create_cotizacion_router())
        .nest("/api/reservas", reservas_router)
        .nest("/api/tracking", routes::reserva_routes::create_tracking_router())
        .nest("/api/bold", routes::pago_routes::create_pago_router())
        // Autenticación del panel
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        // Rutas del panel de administración
        .nest(
            "/api/servicios",
            routes::servicio_routes::create_servicio_router().route_layer(admin_auth.clone()),
        )
        .nest(
            "/api/vehiculos",
            routes::vehiculo_routes::create_vehiculo_router().route_layer(admin_auth.clone()),
        )
        .nest(
            "/api/precios",
            routes::precio_routes::create_precio_router().route_layer(admin_auth.clone()),
        )
        .nest(
            "/api/hoteles",
            routes::hotel_routes::create_hotel_router().route_layer(admin_auth),
        )
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints públicos:");
    info!("   GET  /health - Health check");
    info!("   GET  /api/catalogo - Catálogo de servicios y precios");
    info!("   POST /api/cotizaciones/preview - Vista previa de cotización");
    info!("   POST /api/reservas/:tipo_servicio - Crear reserva");
    info!("   GET  /api/tracking/:codigo - Estado de reserva");
    info!("   POST /api/bold/generate-hash - Firma de integridad de pago");
    info!("🔐 Endpoints del panel:");
    info!("   POST  /api/auth/login - Login de administrador");
    info!("   CRUD  /api/servicios - Servicios");
    info!("   CRUD  /api/vehiculos - Vehículos");
    info!("   PUT   /api/precios/vehiculos - Precios de vehículo");
    info!("   PUT   /api/precios/adicionales - Precios de adicionales");
    info!("   CRUD  /api/hoteles - Hoteles y comisiones");
    info!("   PATCH /api/reservas/update-status - Transiciones de estado");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check: el servidor responde aunque Redis esté caído, el catálogo
/// simplemente deja de cachearse.
async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    let redis = if state.redis.is_connected().await { "up" } else { "down" };
    Json(json!({
        "status": "ok",
        "redis": redis,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
