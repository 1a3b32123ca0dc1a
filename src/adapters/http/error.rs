//! Error responses for the HTTP boundary.
//!
//! Every failure is rendered as `{ "code": <status>, "error": <KIND>, "message": ... }`
//! with the status carried by the domain error kind.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Error body returned by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&DomainError> for ErrorResponse {
    fn from(e: &DomainError) -> Self {
        Self {
            code: e.status(),
            error: e.code.to_string(),
            message: e.message.clone(),
            details: (!e.details.is_empty())
                .then(|| serde_json::to_value(&e.details).ok())
                .flatten(),
        }
    }
}

/// Render a domain error with its kind's status.
pub fn handle_domain_error(error: DomainError) -> Response {
    let status =
        StatusCode::from_u16(error.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        tracing::error!(error = %error, "Request failed");
    } else {
        tracing::debug!(error = %error, "Request rejected");
    }
    (status, Json(ErrorResponse::from(&error))).into_response()
}

/// Render an unreadable JSON body as a missing parameter.
pub fn handle_body_rejection(rejection: JsonRejection) -> Response {
    handle_domain_error(
        DomainError::new(
            ErrorCode::MissingParameter,
            format!("Invalid request body: {}", rejection.body_text()),
        )
        .with_detail("field", "body"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_carries_status_kind_and_message() {
        let response = ErrorResponse::from(&DomainError::missing_parameter("name"));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["code"], 400);
        assert_eq!(json["error"], "MISSING_PARAMETER");
        assert_eq!(json["message"], "Missing required parameter: name");
        assert_eq!(json["details"]["field"], "name");
    }

    #[test]
    fn details_are_omitted_when_empty() {
        let response = ErrorResponse::from(&DomainError::conflict("taken"));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["code"], 409);
        assert!(json.get("details").is_none());
    }

    #[test]
    fn handle_domain_error_uses_kind_status() {
        let response = handle_domain_error(DomainError::not_found("Job", "x"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = handle_domain_error(DomainError::storage_failure("down"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
