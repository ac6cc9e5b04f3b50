// ABOUTME: Error type for recipe REST calls
// ABOUTME: Separates transport failures from server-reported errors and undecodable bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 Recipe Kitchen Contributors

use kitchen_core::errors::{AppError, ErrorCode};
use serde::Deserialize;
use thiserror::Error;

/// Message used when a failed response carries no `error` field
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Failure of a single REST call
#[derive(Debug, Error)]
pub enum ApiError {
    /// Connection refused, DNS failure, timeout, ...
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("HTTP {status}: {message}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Server `error` field, or [`UNKNOWN_ERROR`]
        message: String,
    },

    /// 2xx response whose body did not decode
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

impl ApiError {
    /// Build a status error from the raw response body
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|b| b.error)
            .unwrap_or_else(|| UNKNOWN_ERROR.to_owned());
        Self::Status { status, message }
    }

    /// Whether the backend could not be reached at all
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// Text shown to the user
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            Self::Transport(_) => "Could not reach the recipe service".to_owned(),
            Self::Decode(_) => "Unexpected response from the recipe service".to_owned(),
        }
    }

    /// Alert line for a failed user action, e.g. `action = "saving recipe"`
    ///
    /// Server-reported errors are quoted; anything else asks the user to retry.
    #[must_use]
    pub fn alert(&self, action: &str) -> String {
        match self {
            Self::Status { message, .. } => format!("Error {action}: {message}"),
            Self::Transport(_) | Self::Decode(_) => format!("Error {action}. Please try again."),
        }
    }
}

impl From<ApiError> for AppError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status: 404, message } => {
                Self::new(ErrorCode::ResourceNotFound, message)
            }
            ApiError::Status { status, message } => {
                Self::external_service(format!("HTTP {status}: {message}"))
            }
            ApiError::Transport(source) => {
                Self::external_unavailable(source.to_string()).with_source(source)
            }
            ApiError::Decode(source) => Self::from(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_uses_server_error_field() {
        let err = ApiError::from_status(400, r#"{"error": "Recipe already exists"}"#);
        assert_eq!(err.user_message(), "Recipe already exists");
        assert_eq!(
            err.alert("saving recipe"),
            "Error saving recipe: Recipe already exists"
        );
        assert!(!err.is_transport());
    }

    #[test]
    fn test_status_without_error_field() {
        for body in ["", "<html>oops</html>", r#"{"message": "nope"}"#] {
            let err = ApiError::from_status(500, body);
            assert_eq!(err.user_message(), UNKNOWN_ERROR);
        }
    }

    #[test]
    fn test_conversion_to_app_error() {
        let not_found: AppError = ApiError::from_status(404, r#"{"error": "Recipe not found"}"#).into();
        assert_eq!(not_found.code, ErrorCode::ResourceNotFound);
        assert_eq!(not_found.message, "Recipe not found");

        let failed: AppError = ApiError::from_status(500, "").into();
        assert_eq!(failed.code, ErrorCode::ExternalServiceError);
    }
}
