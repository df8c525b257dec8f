// ABOUTME: Unified error handling for VDOT lookup and training pace derivation
// ABOUTME: Defines error codes, the application error type and serialisable error responses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Defines standard error codes and the application-wide [`AppError`] so that
//! every failure in the pipeline (time parsing, VDOT resolution, pace lookup)
//! reaches the user with the same shape, whether rendered as text or JSON.

/// Domain errors raised by parsing, resolution and pace derivation
pub mod pace;

pub use pace::PaceError;

use serde::Serialize;
use std::error::Error as StdError;
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Generic invalid input
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Input did not match the expected format
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,

    // Resource Management (4000-4999)
    /// Table entry not found
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Internal Errors (9000-9999)
    /// Reference data or logic error
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::InvalidFormat => "The data format is invalid",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::InternalError => "An internal error occurred",
        }
    }

    /// Whether the error was caused by user input rather than reference data
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput | Self::InvalidFormat | Self::ResourceNotFound
        )
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Serialisable error body, emitted when the report format is JSON
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Error payload of an [`ErrorResponse`]
#[derive(Debug, Serialize)]
pub struct ErrorResponseDetails {
    /// Machine-readable error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message.clone(),
            },
        }
    }
}

impl From<PaceError> for AppError {
    fn from(error: PaceError) -> Self {
        let code = match &error {
            PaceError::TimeFormat { .. } => ErrorCode::InvalidFormat,
            PaceError::VdotNotFound { .. } | PaceError::PaceLookup { .. } => {
                ErrorCode::ResourceNotFound
            }
            PaceError::MissingSubDistance { .. } | PaceError::InvalidTable(_) => {
                ErrorCode::InternalError
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Duration, RaceDistance};

    #[test]
    fn test_pace_error_maps_to_error_code() {
        let format = AppError::from(PaceError::time_format("20:00", "HH:MM:SS"));
        assert_eq!(format.code, ErrorCode::InvalidFormat);
        assert!(format.code.is_user_error());

        let missing = AppError::from(PaceError::VdotNotFound {
            distance: RaceDistance::FiveK,
            time: Duration::from_hms(1, 0, 0),
        });
        assert_eq!(missing.code, ErrorCode::ResourceNotFound);

        let table = AppError::from(PaceError::InvalidTable("empty".to_owned()));
        assert_eq!(table.code, ErrorCode::InternalError);
        assert!(!table.code.is_user_error());
    }

    #[test]
    fn test_app_error_keeps_source() {
        let error = AppError::from(PaceError::PaceLookup { vdot: 29 });
        assert!(error.source.is_some());
        assert!(error.to_string().contains("VDOT 29"));
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::from(PaceError::PaceLookup { vdot: 12 });
        let json = serde_json::to_value(ErrorResponse::from(&error)).unwrap();
        assert_eq!(json["error"]["code"], "RESOURCE_NOT_FOUND");
        assert_eq!(json["error"]["message"], "No training paces for VDOT 12");
    }
}
