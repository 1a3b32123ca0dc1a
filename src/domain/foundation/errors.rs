//! Error types for the domain layer.
//!
//! Every failure the core reports is a [`DomainError`] tagged with one of four
//! [`ErrorCode`] kinds. The kind carries a stable numeric status that the HTTP
//! boundary uses verbatim.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Error kinds exposed by the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A required field was absent or falsy.
    MissingParameter,
    /// A uniqueness invariant was violated.
    Conflict,
    /// Lookup by id or code found nothing.
    NotFound,
    /// A collaborator (store, queue) rejected the operation.
    StorageFailure,
}

impl ErrorCode {
    /// Stable numeric status for this kind.
    pub fn status(&self) -> u16 {
        match self {
            ErrorCode::MissingParameter => 400,
            ErrorCode::NotFound => 404,
            ErrorCode::Conflict => 409,
            ErrorCode::StorageFailure => 500,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::MissingParameter => "MISSING_PARAMETER",
            ErrorCode::Conflict => "CONFLICT",
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::StorageFailure => "STORAGE_FAILURE",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("[{code}] {message}")]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// A required parameter was absent; always names the field.
    pub fn missing_parameter(field: &str) -> Self {
        Self::new(
            ErrorCode::MissingParameter,
            format!("Missing required parameter: {}", field),
        )
        .with_detail("field", field)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::Conflict, message)
    }

    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        Self::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
            .with_detail("resource", resource)
    }

    pub fn storage_failure(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageFailure, message)
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }

    /// Field named by a `MissingParameter` error.
    pub fn field(&self) -> Option<&str> {
        self.details.get("field").map(String::as_str)
    }

    /// Numeric status carried by the error kind.
    pub fn status(&self) -> u16 {
        self.code.status()
    }

    /// Logs a collaborator failure and replaces it with a coarse storage failure.
    ///
    /// Domain kinds (missing parameter, conflict, not found) pass through unchanged.
    pub fn masked(self, message: &str) -> Self {
        match self.code {
            ErrorCode::StorageFailure => {
                tracing::error!(error = %self, "{}", message);
                Self::storage_failure(message)
            }
            _ => self,
        }
    }
}
