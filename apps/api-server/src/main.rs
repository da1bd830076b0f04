//! # Postboard API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::HttpServer;

use api_server::config::AppConfig;
use api_server::state::AppState;
use api_server::telemetry::{TelemetryConfig, init_telemetry};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env();

    if !config.listen {
        tracing::info!(
            environment = %config.environment,
            "Listener disabled; mount the service with api_server::build_app"
        );
        return Ok(());
    }

    tracing::info!(
        environment = %config.environment,
        public_dir = %config.public_dir.display(),
        "Starting Postboard API server on {}:{}",
        config.host,
        config.port
    );

    // Built once; every worker shares the same store.
    let state = AppState::new();
    let bind = (config.host.clone(), config.port);

    HttpServer::new(move || api_server::build_app(state.clone(), config.clone()))
        .bind(bind)?
        .run()
        .await
}
