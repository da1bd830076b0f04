//! HTTP handlers and route configuration.

mod fallback;
mod health;
mod posts;


use actix_web::web;

pub use fallback::configure_frontend;

/// Configure the `/api` routes.
///
/// Routes are flat inside the scope so that anything unmatched, including a known
/// path with the wrong method, reaches the scope's JSON 404.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            // Public routes
            .route("/health", web::get().to(health::health_check))
            // Post routes
            .route("/posts", web::get().to(posts::list_posts))
            .route("/posts", web::post().to(posts::create_post))
            .route("/posts/{id}", web::get().to(posts::get_post))
            .route("/posts/{id}", web::put().to(posts::update_post))
            .route("/posts/{id}", web::delete().to(posts::delete_post))
            .default_service(web::to(fallback::api_not_found)),
    );
}
