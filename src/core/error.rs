//! Typed error handling for the GrubDash API
//!
//! Every failure a request can end in is a variant of [`GrubError`], which
//! groups errors by category so callers can match on them precisely:
//!
//! - [`PipelineError`]: rejections produced by the validation pipeline
//! - [`RequestError`]: malformed requests, unknown routes, wrong methods
//! - `Internal`: store failures that should not happen in normal operation
//!
//! # Example
//!
//! ```rust,ignore
//! match service.update("42", payload).await {
//!     Ok(dish) => println!("Updated: {:?}", dish),
//!     Err(GrubError::Pipeline(PipelineError::NotFound { id, .. })) => {
//!         println!("Dish {} not found", id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use crate::core::entity::ResourceKind;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the GrubDash API
#[derive(Debug)]
pub enum GrubError {
    /// A pipeline stage rejected the request
    Pipeline(PipelineError),

    /// HTTP/Request errors outside the pipeline
    Request(RequestError),

    /// Internal errors (store lock failures and the like)
    Internal(String),
}

impl fmt::Display for GrubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrubError::Pipeline(e) => write!(f, "{}", e),
            GrubError::Request(e) => write!(f, "{}", e),
            GrubError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for GrubError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GrubError::Pipeline(e) => Some(e),
            GrubError::Request(e) => Some(e),
            GrubError::Internal(_) => None,
        }
    }
}

/// Error body rendered for every failed request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    /// HTTP status code, repeated in the body
    pub status: u16,
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl GrubError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            GrubError::Pipeline(e) => e.status_code(),
            GrubError::Request(e) => e.status_code(),
            GrubError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            GrubError::Pipeline(e) => e.error_code(),
            GrubError::Request(e) => e.error_code(),
            GrubError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            status: self.status_code().as_u16(),
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for GrubError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::warn!(error = %self, "request failed");
        }
        (status, Json(self.to_response())).into_response()
    }
}

// =============================================================================
// Pipeline Errors
// =============================================================================

/// Rejections produced by the existence guard and the field validators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineError {
    /// No record with the route id exists
    NotFound { kind: ResourceKind, id: String },

    /// A required field is absent or falsy
    MissingField { kind: ResourceKind, field: String },

    /// A present field carries an unacceptable value
    InvalidField { kind: ResourceKind, field: String },

    /// An order line has a missing, non-integer or non-positive quantity
    InvalidDishQuantity { index: usize },

    /// The order status is not one of the canonical values
    InvalidStatus,

    /// The payload id disagrees with the route id
    IdMismatch {
        kind: ResourceKind,
        payload_id: String,
        route_id: String,
    },

    /// The order has been delivered and can no longer change
    TerminalStateViolation,

    /// Only pending orders may be deleted
    DeleteNotAllowed,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::NotFound { kind, id } => {
                write!(f, "{} id not found: {}", kind, id)
            }
            PipelineError::MissingField { kind, field } => {
                write!(f, "{} must include a {}", kind, field)
            }
            PipelineError::InvalidField { kind, field } => match (kind, field.as_str()) {
                (ResourceKind::Dish, "price") => write!(
                    f,
                    "Dish must have a price that is an integer greater than 0"
                ),
                (ResourceKind::Order, "dishes") => {
                    write!(f, "Order must include at least one dish")
                }
                _ => write!(f, "{} must include a {}", kind, field),
            },
            PipelineError::InvalidDishQuantity { index } => write!(
                f,
                "dish {} must have a quantity that is an integer greater than 0",
                index
            ),
            PipelineError::InvalidStatus => write!(
                f,
                "Order must have a status of pending, preparing, out-for-delivery, delivered"
            ),
            PipelineError::IdMismatch {
                kind,
                payload_id,
                route_id,
            } => write!(
                f,
                "{} id does not match route id. {}: {}, Route: {}",
                kind, kind, payload_id, route_id
            ),
            PipelineError::TerminalStateViolation => {
                write!(f, "A delivered order cannot be changed")
            }
            PipelineError::DeleteNotAllowed => {
                write!(f, "An order cannot be deleted unless it is pending.")
            }
        }
    }
}

impl std::error::Error for PipelineError {}

impl PipelineError {
    pub fn missing_field(kind: ResourceKind, field: &str) -> Self {
        PipelineError::MissingField {
            kind,
            field: field.to_string(),
        }
    }

    pub fn invalid_field(kind: ResourceKind, field: &str) -> Self {
        PipelineError::InvalidField {
            kind,
            field: field.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            PipelineError::NotFound { .. } => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            PipelineError::NotFound { .. } => "NOT_FOUND",
            PipelineError::MissingField { .. } => "MISSING_FIELD",
            PipelineError::InvalidField { .. } => "INVALID_FIELD",
            PipelineError::InvalidDishQuantity { .. } => "INVALID_DISH_QUANTITY",
            PipelineError::InvalidStatus => "INVALID_STATUS",
            PipelineError::IdMismatch { .. } => "ID_MISMATCH",
            PipelineError::TerminalStateViolation => "TERMINAL_STATE_VIOLATION",
            PipelineError::DeleteNotAllowed => "DELETE_NOT_ALLOWED",
        }
    }
}

impl From<PipelineError> for GrubError {
    fn from(err: PipelineError) -> Self {
        GrubError::Pipeline(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to HTTP requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// The body is not valid JSON
    MalformedBody { message: String },

    /// The body could not be read (too large, connection dropped)
    BodyRejected { status: StatusCode, message: String },

    /// No route matches the path
    RouteNotFound { path: String },

    /// The path exists but not for this method
    MethodNotAllowed { method: String, path: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::MalformedBody { message } => {
                write!(f, "Invalid request body: {}", message)
            }
            RequestError::BodyRejected { message, .. } => {
                write!(f, "Request body rejected: {}", message)
            }
            RequestError::RouteNotFound { path } => write!(f, "Path not found: {}", path),
            RequestError::MethodNotAllowed { method, path } => {
                write!(f, "{} not allowed for {}", method, path)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::MalformedBody { .. } => StatusCode::BAD_REQUEST,
            RequestError::BodyRejected { status, .. } => *status,
            RequestError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            RequestError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::MalformedBody { .. } => "INVALID_BODY",
            RequestError::BodyRejected { status, .. } if *status == StatusCode::PAYLOAD_TOO_LARGE => {
                "PAYLOAD_TOO_LARGE"
            }
            RequestError::BodyRejected { .. } => "INVALID_BODY",
            RequestError::RouteNotFound { .. } => "ROUTE_NOT_FOUND",
            RequestError::MethodNotAllowed { .. } => "METHOD_NOT_ALLOWED",
        }
    }
}

impl From<RequestError> for GrubError {
    fn from(err: RequestError) -> Self {
        GrubError::Request(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_json::Error> for GrubError {
    fn from(err: serde_json::Error) -> Self {
        GrubError::Request(RequestError::MalformedBody {
            message: err.to_string(),
        })
    }
}

impl From<anyhow::Error> for GrubError {
    fn from(err: anyhow::Error) -> Self {
        GrubError::Internal(err.to_string())
    }
}

/// A specialized Result type for GrubDash operations
pub type GrubResult<T> = Result<T, GrubError>;
