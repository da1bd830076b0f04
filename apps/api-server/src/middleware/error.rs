//! Error handling - maps domain failures to JSON error envelopes.

use std::fmt;

use actix_web::{
    HttpRequest, HttpResponse, ResponseError,
    dev::ServiceResponse,
    error::QueryPayloadError,
    http::StatusCode,
    middleware::{ErrorHandlerResponse, ErrorHandlers},
    web,
};
use postboard_core::error::{DomainError, ValidationError};
use postboard_shared::ErrorResponse;

use crate::config::AppConfig;

/// Routes advertised when a client hits an unknown path under `/api`.
pub const AVAILABLE_ENDPOINTS: [&str; 6] = [
    "GET /api/health",
    "GET /api/posts",
    "GET /api/posts/:id",
    "POST /api/posts",
    "PUT /api/posts/:id",
    "DELETE /api/posts/:id",
];

/// Application-level error type that converts to error envelopes.
#[derive(Debug)]
pub enum AppError {
    Validation(ValidationError),
    InvalidId,
    NotFound(String),
    BadRequest(String),
    PayloadTooLarge,
    EndpointNotFound,
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(err) => write!(f, "Validation failed: {}", err),
            AppError::InvalidId => write!(f, "Invalid post ID"),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::PayloadTooLarge => write!(f, "Request body too large"),
            AppError::EndpointNotFound => write!(f, "API endpoint not found"),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::InvalidId | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound(_) | AppError::EndpointNotFound => StatusCode::NOT_FOUND,
            AppError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            AppError::Validation(err) => match err {
                ValidationError::MissingFields(fields) => {
                    ErrorResponse::new(err.to_string()).with_required(fields.iter().copied())
                }
                _ => ErrorResponse::new(err.to_string()),
            },
            AppError::InvalidId => ErrorResponse::invalid_id(),
            AppError::NotFound(_) => ErrorResponse::not_found(),
            AppError::BadRequest(msg) => ErrorResponse::new(msg.as_str()),
            AppError::PayloadTooLarge => ErrorResponse::new("Request body too large"),
            AppError::EndpointNotFound => ErrorResponse::new("API endpoint not found")
                .with_available_endpoints(AVAILABLE_ENDPOINTS),
            AppError::Internal(detail) => {
                // Log internal errors
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

// Conversion from domain errors
impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(err) => AppError::Validation(err),
            DomainError::InvalidId(raw) => {
                tracing::debug!(raw_id = %raw, "Rejected non-integer post id");
                AppError::InvalidId
            }
            err @ DomainError::NotFound { .. } => AppError::NotFound(err.to_string()),
            DomainError::Internal(msg) => AppError::Internal(msg),
        }
    }
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    tracing::debug!(error = %err, "Rejected query string");
    AppError::BadRequest("Invalid query string".to_string()).into()
}

/// Middleware that puts the real internal error text back into 500 responses
/// when the app runs in development.
pub fn internal_error_handlers<B: 'static>() -> ErrorHandlers<B> {
    ErrorHandlers::new().handler(StatusCode::INTERNAL_SERVER_ERROR, expose_internal_detail)
}

fn expose_internal_detail<B>(res: ServiceResponse<B>) -> actix_web::Result<ErrorHandlerResponse<B>> {
    let expose = res
        .request()
        .app_data::<web::Data<AppConfig>>()
        .is_some_and(|config| config.environment.exposes_error_details());

    let detail = match res.response().error().and_then(|e| e.as_error::<AppError>()) {
        Some(AppError::Internal(detail)) if expose => Some(detail.clone()),
        _ => None,
    };

    let Some(detail) = detail else {
        return Ok(ErrorHandlerResponse::Response(res.map_into_left_body()));
    };

    let (req, _) = res.into_parts();
    let response = HttpResponse::InternalServerError()
        .json(ErrorResponse::new("Internal server error").with_error(detail));

    Ok(ErrorHandlerResponse::Response(
        ServiceResponse::new(req, response).map_into_right_body(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use postboard_core::domain::PostId;

    async fn body_json(err: AppError) -> serde_json::Value {
        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[actix_rt::test]
    async fn test_missing_fields_lists_required() {
        let err = AppError::Validation(ValidationError::MissingFields(vec!["title", "content"]));
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = body_json(err).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Title and content are required");
        assert_eq!(body["required"], serde_json::json!(["title", "content"]));
    }

    #[actix_rt::test]
    async fn test_internal_error_hides_detail() {
        let body = body_json(AppError::Internal("lock poisoned".to_string())).await;
        assert_eq!(body["message"], "Internal server error");
        assert_eq!(body["error"], "Something went wrong");
    }

    #[test]
    fn test_domain_error_mapping() {
        let err: AppError = DomainError::post_not_found(PostId(5)).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err: AppError = DomainError::InvalidId("abc".to_string()).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let err: AppError = DomainError::Validation(ValidationError::TitleTooLong).into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }
}
