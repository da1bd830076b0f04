//! Standardized API response envelopes.
//!
//! Every response carries `success` and `message`. Successful responses add
//! `data` (and pagination fields for lists); failures add whichever of
//! `required`, `error` or `availableEndpoints` applies.

use serde::{Deserialize, Serialize};

/// Standard successful API response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Flattened into the envelope for list responses.
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

impl<T> ApiResponse<T> {
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            pagination: None,
        }
    }

    pub fn with_pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = Some(pagination);
        self
    }
}

/// Pagination metadata for list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: usize,
    pub page: usize,
    pub total_pages: usize,
}

/// Failure envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,

    /// A short, human-readable summary of the failure.
    pub message: String,

    /// Required fields that were missing from the request body.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    /// Detail for internal failures. Generic unless running in development.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Routes served under the API prefix, returned for unknown API paths.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_endpoints: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            required: None,
            error: None,
            available_endpoints: None,
        }
    }

    pub fn with_required<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn with_available_endpoints<I, S>(mut self, endpoints: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available_endpoints = Some(endpoints.into_iter().map(Into::into).collect());
        self
    }

    // Common error constructors
    pub fn invalid_id() -> Self {
        Self::new("Invalid post ID")
    }

    pub fn not_found() -> Self {
        Self::new("Post not found")
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error").with_error("Something went wrong")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_envelope_flattens_pagination() {
        let response = ApiResponse::ok_with_message(vec![1, 2], "Posts retrieved successfully")
            .with_pagination(Pagination {
                total: 12,
                page: 1,
                total_pages: 2,
            });

        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "success": true,
                "message": "Posts retrieved successfully",
                "data": [1, 2],
                "total": 12,
                "page": 1,
                "totalPages": 2
            })
        );
    }

    #[test]
    fn test_single_envelope_has_no_pagination() {
        let response = ApiResponse::ok_with_message("x", "Post retrieved successfully");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["data"], "x");
        assert!(value.get("total").is_none());
        assert!(value.get("totalPages").is_none());
    }

    #[test]
    fn test_error_envelope_omits_unset_fields() {
        let value = serde_json::to_value(ErrorResponse::not_found()).unwrap();
        assert_eq!(value, json!({ "success": false, "message": "Post not found" }));

        let value = serde_json::to_value(
            ErrorResponse::new("API endpoint not found").with_available_endpoints(["GET /api/health"]),
        )
        .unwrap();
        assert_eq!(value["availableEndpoints"], json!(["GET /api/health"]));
    }
}
