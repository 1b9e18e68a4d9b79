//! Response bodies and error mapping.
//!
//! # Design Decisions
//! - Every response body is JSON, errors included
//! - Errors carry a single `message` field
//! - 408/413 answered by tower-http layers are rewritten into the same shape

use axum::{
    extract::rejection::JsonRejection,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// JSON body for errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Errors surfaced at the HTTP boundary.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Route not found")]
    RouteNotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Invalid request body: {}", .0.body_text())]
    InvalidBody(#[from] JsonRejection),
    #[error("Request body too large")]
    PayloadTooLarge,
    #[error("Request timed out")]
    Timeout,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::InvalidBody(rejection) => rejection.status(),
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Timeout => StatusCode::REQUEST_TIMEOUT,
        }
    }
}

/// Replace non-JSON 408/413 bodies produced by middleware with `ApiError` bodies.
pub async fn json_error_bodies(response: Response) -> Response {
    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json"));
    if is_json {
        return response;
    }

    let error = match response.status() {
        StatusCode::PAYLOAD_TOO_LARGE => ApiError::PayloadTooLarge,
        StatusCode::REQUEST_TIMEOUT => ApiError::Timeout,
        _ => return response,
    };
    let mut rewritten = error.into_response();
    // Keep headers the outer layers rely on, e.g. x-request-id.
    for (name, value) in response.headers() {
        if name != header::CONTENT_TYPE && name != header::CONTENT_LENGTH {
            rewritten.headers_mut().insert(name.clone(), value.clone());
        }
    }
    rewritten
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = MessageBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Response;
    use serde_json::{json, Value};

    async fn body_json(response: Response<Body>) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_empty_timeout_becomes_json() {
        let response = Response::builder()
            .status(StatusCode::REQUEST_TIMEOUT)
            .header("x-request-id", "t-1")
            .body(Body::empty())
            .unwrap();
        let response = json_error_bodies(response).await;
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
        assert_eq!(response.headers()["x-request-id"], "t-1");
        assert_eq!(body_json(response).await, json!({ "message": "Request timed out" }));
    }

    #[tokio::test]
    async fn test_plain_text_limit_becomes_json() {
        let response = Response::builder()
            .status(StatusCode::PAYLOAD_TOO_LARGE)
            .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
            .body(Body::from("length limit exceeded"))
            .unwrap();
        let response = json_error_bodies(response).await;
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(body_json(response).await, json!({ "message": "Request body too large" }));
    }

    #[tokio::test]
    async fn test_other_responses_pass_through() {
        let response = Response::builder()
            .status(StatusCode::OK)
            .body(Body::from("ok"))
            .unwrap();
        let response = json_error_bodies(response).await;
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }
}
