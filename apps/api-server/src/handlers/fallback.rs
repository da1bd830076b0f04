//! Fallbacks for unmatched routes and the static front-end.

use std::path::{Path, PathBuf};

use actix_files::{Files, NamedFile};
use actix_web::{
    HttpRequest, HttpResponse,
    dev::{ServiceRequest, ServiceResponse, fn_service},
    guard,
    http::StatusCode,
    web,
};

use crate::middleware::error::{AppError, AppResult};

/// Any unmatched path or method under `/api`.
pub async fn api_not_found(req: HttpRequest) -> AppResult<HttpResponse> {
    tracing::debug!(method = %req.method(), path = %req.path(), "Unknown API endpoint");
    Err(AppError::EndpointNotFound)
}

/// Serve the front-end from `public_dir`. Unknown non-API paths get `index.html`
/// with a 404 status so client-side routing can take over.
pub fn configure_frontend(cfg: &mut web::ServiceConfig, public_dir: &Path) {
    let index = public_dir.join("index.html");
    let files_fallback = index.clone();

    cfg.service(
        Files::new("/", public_dir)
            .index_file("index.html")
            .guard(guard::Any(guard::Get()).or(guard::Head()))
            .default_handler(fn_service(move |req: ServiceRequest| {
                serve_index(files_fallback.clone(), req)
            })),
    )
    .default_service(fn_service(move |req: ServiceRequest| {
        serve_index(index.clone(), req)
    }));
}

async fn serve_index(index: PathBuf, req: ServiceRequest) -> Result<ServiceResponse, actix_web::Error> {
    let (req, _) = req.into_parts();

    let mut res = match NamedFile::open_async(&index).await {
        Ok(file) => file.into_response(&req),
        Err(err) => {
            tracing::warn!(path = %index.display(), error = %err, "Front-end index unavailable");
            HttpResponse::NotFound().finish()
        }
    };
    *res.status_mut() = StatusCode::NOT_FOUND;

    Ok(ServiceResponse::new(req, res))
}
