//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "field"?}}`
//! with the mapped status. Storage and hashing detail stays in the log.

use ud_auth::{AuthError, AuthRejection, TokenRejection};
use ud_core::CoreError;
use ud_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "NOT_FOUND", "VALIDATION_ERROR")
    pub code: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// No usable bearer token on a protected route (401)
    #[error("Missing bearer token {location}")]
    MissingToken { location: ErrorLocation },

    /// Bearer token present but rejected (403)
    #[error("Invalid token ({reason}) {location}")]
    InvalidToken {
        reason: TokenRejection,
        location: ErrorLocation,
    },

    /// Unknown user or wrong password (401)
    #[error("Invalid credentials {location}")]
    InvalidCredentials { location: ErrorLocation },

    /// Username already taken (409)
    #[error("Duplicate username: {message} {location}")]
    DuplicateUsername {
        message: String,
        location: ErrorLocation,
    },

    /// Record lookup miss (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Any other store failure (500)
    #[error("Storage error: {message} {location}")]
    Storage {
        message: String,
        location: ErrorLocation,
    },

    /// Credential hashing primitive failure (500)
    #[error("Hashing error: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    /// Token signing or other unexpected failure (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: Option<&str>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: field.map(str::to_string),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_credentials() -> Self {
        ApiError::InvalidCredentials {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::MissingToken { .. } | ApiError::InvalidCredentials { .. } => {
                StatusCode::UNAUTHORIZED
            }
            ApiError::InvalidToken { .. } => StatusCode::FORBIDDEN,
            ApiError::DuplicateUsername { .. } => StatusCode::CONFLICT,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Storage { .. } | ApiError::Hashing { .. } | ApiError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let body = match self {
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR",
                message,
                field,
            },
            ApiError::MissingToken { .. } => ApiErrorBody {
                code: "MISSING_TOKEN",
                message: "Authorization header with a bearer token is required".to_string(),
                field: None,
            },
            ApiError::InvalidToken { .. } => ApiErrorBody {
                code: "INVALID_TOKEN",
                message: "Token is invalid or expired".to_string(),
                field: None,
            },
            ApiError::InvalidCredentials { .. } => ApiErrorBody {
                code: "INVALID_CREDENTIALS",
                message: "Invalid username or password".to_string(),
                field: None,
            },
            ApiError::DuplicateUsername { .. } => ApiErrorBody {
                code: "DUPLICATE_USERNAME",
                message: "Username already exists".to_string(),
                field: Some("username".to_string()),
            },
            ApiError::NotFound { message, .. } => ApiErrorBody {
                code: "NOT_FOUND",
                message,
                field: None,
            },
            // Don't expose internal details to clients
            ApiError::Storage { .. } => ApiErrorBody {
                code: "STORAGE_ERROR",
                message: "Database operation failed".to_string(),
                field: None,
            },
            ApiError::Hashing { .. } => ApiErrorBody {
                code: "HASHING_ERROR",
                message: "Credential processing failed".to_string(),
                field: None,
            },
            ApiError::Internal { .. } => ApiErrorBody {
                code: "INTERNAL_ERROR",
                message: "Internal server error".to_string(),
                field: None,
            },
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::UniqueViolation { message, .. } => ApiError::DuplicateUsername {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other => ApiError::Storage {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::Hashing { .. } | AuthError::InvalidHashingParams { .. } => {
                ApiError::Hashing {
                    message: e.to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            AuthError::JwtEncode { .. } | AuthError::InvalidClaim { .. } => ApiError::Internal {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

impl From<AuthRejection> for ApiError {
    #[track_caller]
    fn from(rejection: AuthRejection) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match rejection {
            AuthRejection::MissingToken => ApiError::MissingToken { location },
            AuthRejection::InvalidToken(reason) => ApiError::InvalidToken { reason, location },
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        log::debug!("JSON body rejected: {}", rejection.body_text());
        ApiError::Validation {
            message: "Request body must be a JSON object with the expected fields".to_string(),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
