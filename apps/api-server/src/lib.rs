//! # Postboard API Server
//!
//! HTTP layer for the post store. [`build_app`] returns the complete actix `App`
//! (middleware, state, `/api` routes and front-end) for the bundled binary or any
//! external host. [`configure_app`] registers the same services without middleware
//! for hosts that assemble their own stack.

pub mod config;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod state;
pub mod telemetry;

use actix_web::{
    App, Error,
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web,
};
use tracing_actix_web::TracingLogger;

use config::AppConfig;
use middleware::error::query_error_handler;
use middleware::{cors, internal_error_handlers};
use state::AppState;

/// Upper bound on JSON request bodies.
pub const JSON_BODY_LIMIT: usize = 10 * 1024 * 1024;

/// The full application: request tracing, CORS, internal error rendering and every route.
pub fn build_app(
    state: AppState,
    config: AppConfig,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(internal_error_handlers())
        .wrap(cors())
        .wrap(TracingLogger::default())
        .configure(configure_app(state, config))
}

/// Register state, extractor configuration and routes on an actix `App`.
pub fn configure_app(state: AppState, config: AppConfig) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(state))
            .app_data(web::PayloadConfig::new(JSON_BODY_LIMIT))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler));

        handlers::configure_routes(cfg);
        handlers::configure_frontend(cfg, &config.public_dir);

        cfg.app_data(web::Data::new(config));
    }
}
