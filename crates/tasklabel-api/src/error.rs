//! HTTP error responses.
//!
//! Each endpoint has its own failure body (plain text, `{"message"}`,
//! `{"message","classification"}` or `{"error"}`), so the variants carry the
//! body shape as well as the status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// 400 with a plain-text body.
    Conflict(String),
    /// 500 with a plain-text body.
    Plain(String),
    /// 500 with `{"message": ...}`.
    Message(String),
    /// 500 with `{"message": ..., "classification": null}`.
    Lookup(String),
    /// 500 with `{"error": ...}`.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Conflict(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Plain(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg).into_response(),
            ApiError::Message(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "message": msg })),
            )
                .into_response(),
            ApiError::Lookup(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "message": msg, "classification": null })),
            )
                .into_response(),
            ApiError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": msg })),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::Conflict("c".into()), StatusCode::BAD_REQUEST),
            (ApiError::Plain("p".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ApiError::Message("m".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ApiError::Lookup("l".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ApiError::Internal("i".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn test_json_variants_set_content_type() {
        let response = ApiError::Lookup("x".into()).into_response();
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .unwrap();
        assert_eq!(content_type, "application/json");
    }
}
