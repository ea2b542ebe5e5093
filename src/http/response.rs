//! Failure response reported to the proxy's caller.
//!
//! # Responsibilities
//! - Carry status, body and headers of an outcome
//! - Render the diagnostic body as a JSON document
//! - Convert into an Axum response for HTTP-facing callers
//!
//! # Design Decisions
//! - A response is built fresh for each failure and never reused
//! - Error bodies are `{"error": "<message>"}` so they agree with the
//!   `Content-Type: application/json` header

use std::collections::HashMap;

use axum::body::Body;
use axum::http::{header, HeaderName, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use serde::Serialize;

pub const CONTENT_TYPE: &str = "Content-Type";
pub const APPLICATION_JSON: &str = "application/json";

/// Outcome reported to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Response {
    pub status: u16,
    pub body: String,
    pub headers: HashMap<String, String>,
}

impl Response {
    /// Create an empty response with the given status.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status: status.as_u16(),
            body: String::new(),
            headers: HashMap::new(),
        }
    }

    /// Create a JSON error response: `{"error": message}`.
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        let message: String = message.into();
        let body = serde_json::json!({ "error": message }).to_string();
        let mut res = Self::new(status);
        res.body = body;
        res.headers
            .insert(CONTENT_TYPE.to_string(), APPLICATION_JSON.to_string());
        res
    }

    /// Serialize the whole response (`status`, `body`, `headers`) as JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let mut res = axum::response::Response::new(Body::from(self.body));
        *res.status_mut() = status;

        for (name, value) in &self.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    res.headers_mut().insert(name, value);
                }
                _ => tracing::warn!(header = %name, "Dropping invalid response header"),
            }
        }

        if !res.headers().contains_key(header::CONTENT_TYPE) {
            res.headers_mut()
                .insert(header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
        }
        res
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_shape() {
        let res = Response::error(StatusCode::INTERNAL_SERVER_ERROR, "YAML syntax error");
        assert_eq!(res.status, 500);
        assert_eq!(res.headers.len(), 1);
        assert_eq!(res.headers[CONTENT_TYPE], APPLICATION_JSON);
        assert_eq!(res.body, r#"{"error":"YAML syntax error"}"#);
    }

    #[test]
    fn test_error_body_escapes_quotes() {
        let res = Response::error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Configuration file missing `target_vm` key \"x\"",
        );
        let parsed: serde_json::Value = serde_json::from_str(&res.body).unwrap();
        assert_eq!(parsed["error"], "Configuration file missing `target_vm` key \"x\"");
    }

    #[test]
    fn test_to_json_contains_all_fields() {
        let res = Response::error(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        let value: serde_json::Value = serde_json::from_str(&res.to_json().unwrap()).unwrap();
        assert_eq!(value["status"], 500);
        assert_eq!(value["headers"]["Content-Type"], "application/json");
        assert_eq!(value["body"], r#"{"error":"boom"}"#);
    }

    #[test]
    fn test_new_has_no_body() {
        let res = Response::new(StatusCode::OK);
        assert_eq!(res.status, 200);
        assert!(res.body.is_empty());
    }

    #[tokio::test]
    async fn test_into_axum_response() {
        let res = Response::error(StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(res.headers()[header::CONTENT_TYPE], APPLICATION_JSON);

        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], br#"{"error":"boom"}"#);
    }
}
