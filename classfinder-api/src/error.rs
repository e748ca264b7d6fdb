/// Error handling for the API server
///
/// Handlers return `Result<T, ApiError>`; the error converts into a JSON body
/// of the form `{ "error": "<message>" }` with a matching status code.
///
/// | Variant              | Status | Message                                      |
/// |----------------------|--------|----------------------------------------------|
/// | `MissingFilters`     | 400    | Missing filters to search classes            |
/// | `RegistrationFailed` | 400    | Unexpected error while creating new class    |
/// | `InternalError`      | 500    | An internal error occurred                   |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use classfinder_shared::classes::ClassError;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MISSING_FILTERS_MESSAGE: &str = "Missing filters to search classes";
pub const REGISTRATION_FAILED_MESSAGE: &str = "Unexpected error while creating new class";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// API result type alias
pub type ApiResult<T> = Result<T, ApiError>;

/// Unified API error type
#[derive(Debug)]
pub enum ApiError {
    /// A search filter is absent or empty (400)
    MissingFilters,

    /// Any failure while registering a class (400)
    ///
    /// The cause is logged where it happens and never sent to the client.
    RegistrationFailed,

    /// Unexpected failure, e.g. storage errors during search (500)
    InternalError(String),
}

/// Error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::MissingFilters => write!(f, "{}", MISSING_FILTERS_MESSAGE),
            ApiError::RegistrationFailed => write!(f, "{}", REGISTRATION_FAILED_MESSAGE),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::MissingFilters => (StatusCode::BAD_REQUEST, MISSING_FILTERS_MESSAGE),
            ApiError::RegistrationFailed => (StatusCode::BAD_REQUEST, REGISTRATION_FAILED_MESSAGE),
            ApiError::InternalError(msg) => {
                // Log internal errors but don't expose details to clients
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        };

        let body = Json(ErrorResponse {
            error: message.to_string(),
        });

        (status, body).into_response()
    }
}

/// Maps search-side class errors
///
/// Registration handlers do not use this; every registration failure
/// collapses into `ApiError::RegistrationFailed`.
impl From<ClassError> for ApiError {
    fn from(err: ClassError) -> Self {
        match err {
            ClassError::MissingFilters => ApiError::MissingFilters,
            ClassError::InvalidRegistration(_) => ApiError::RegistrationFailed,
            ClassError::Database(db_err) => {
                ApiError::InternalError(format!("Database error: {}", db_err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ApiError::MissingFilters.to_string(),
            "Missing filters to search classes"
        );
        assert_eq!(
            ApiError::RegistrationFailed.to_string(),
            "Unexpected error while creating new class"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::MissingFilters.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::RegistrationFailed.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InternalError("boom".to_string()).into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_class_error_mapping() {
        assert!(matches!(
            ApiError::from(ClassError::MissingFilters),
            ApiError::MissingFilters
        ));
        assert!(matches!(
            ApiError::from(ClassError::Database(sqlx::Error::RowNotFound)),
            ApiError::InternalError(_)
        ));
    }
}
