//! CORS policy - any origin, the four CRUD methods.

use actix_cors::Cors;
use actix_web::http::{Method, header};

pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .send_wildcard()
        .allowed_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
