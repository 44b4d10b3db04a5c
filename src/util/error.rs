use axum::{response::{IntoResponse, Response}, http::StatusCode};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug)]
pub enum HandlerErrorKind {
    BadRequest,
    MethodNotAllowed,
    Provider,
    Internal,
}

impl std::fmt::Display for HandlerErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            HandlerErrorKind::BadRequest => "BadRequest",
            HandlerErrorKind::MethodNotAllowed => "MethodNotAllowed",
            HandlerErrorKind::Provider => "Provider",
            HandlerErrorKind::Internal => "Internal",
        };
        write!(f, "{}", s)
    }
}

/// Error answered to the caller as a JSON payload of the shape
/// `{"error": <message>, "details": <optional diagnostics>}`.
#[derive(Debug, Serialize)]
pub struct HandlerError {
    #[serde(skip)]
    pub kind: HandlerErrorKind,
    #[serde(rename = "error")]
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl std::fmt::Display for HandlerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for HandlerError {}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        let status = match self.kind {
            HandlerErrorKind::BadRequest => StatusCode::BAD_REQUEST,
            HandlerErrorKind::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            HandlerErrorKind::Provider | HandlerErrorKind::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = axum::Json(self);
        (status, body).into_response()
    }
}

#[derive(Debug, Clone)]
pub enum ServiceError {
    InvalidInput(String),
    ProviderFailure { message: String, details: Option<Value> },
    InternalError(String),
}

impl std::fmt::Display for ServiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceError::InvalidInput(msg) => write!(f, "Invalid Input: {}", msg),
            ServiceError::ProviderFailure { message, .. } => {
                write!(f, "Provider Failure: {}", message)
            }
            ServiceError::InternalError(msg) => write!(f, "Internal Error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

// Allow conversion from ServiceError to HandlerError at the handler boundary
impl From<ServiceError> for HandlerError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(msg) => HandlerError {
                kind: HandlerErrorKind::BadRequest,
                message: msg,
                details: None,
            },
            ServiceError::ProviderFailure { message, details } => HandlerError {
                kind: HandlerErrorKind::Provider,
                message: "Failed to send email".to_string(),
                details: details.or(Some(Value::String(message))),
            },
            ServiceError::InternalError(msg) => HandlerError {
                kind: HandlerErrorKind::Internal,
                message: "Internal server error".to_string(),
                details: Some(Value::String(msg)),
            },
        }
    }
}
