//! Request extractors.

use std::future::Future;
use std::pin::Pin;

use actix_web::{FromRequest, HttpRequest, dev::Payload, error::PayloadError, web};
use serde::de::DeserializeOwned;

use crate::middleware::error::AppError;

/// JSON request body where an empty body reads as `T::default()`.
///
/// The content type is not checked. The size limit comes from the app's
/// [`web::PayloadConfig`].
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> FromRequest for JsonBody<T>
where
    T: DeserializeOwned + Default + 'static,
{
    type Error = actix_web::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let body = web::Bytes::from_request(req, payload);

        Box::pin(async move { read_json(body).await.map(JsonBody) })
    }
}

async fn read_json<T, F>(body: F) -> Result<T, actix_web::Error>
where
    T: DeserializeOwned + Default,
    F: Future<Output = Result<web::Bytes, actix_web::Error>>,
{
    let bytes = body.await.map_err(|err| match err.as_error::<PayloadError>() {
        Some(PayloadError::Overflow) => actix_web::Error::from(AppError::PayloadTooLarge),
        _ => err,
    })?;

    parse_json(&bytes).map_err(actix_web::Error::from)
}

fn parse_json<T: DeserializeOwned + Default>(bytes: &[u8]) -> Result<T, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    serde_json::from_slice(bytes).map_err(|err| {
        tracing::debug!(error = %err, "Rejected request body");
        AppError::BadRequest("Invalid JSON body".to_string())
    })
}
