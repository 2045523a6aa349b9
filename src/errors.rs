// ABOUTME: Unified error handling for session mutations and collaborator calls
// ABOUTME: Defines ErrorCode, AppError with context, and conversions from crate errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! The accounting core never fails. Errors only arise at the edges: a session
//! mutation that names an unknown entry, a malformed value from a caller, or
//! an external collaborator that times out or rejects a request. All of them
//! surface as [`AppError`].

use std::error::Error as StdError;
use std::fmt;

use fuelwise_core::ModelError;
use fuelwise_intelligence::ConfigError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Caller supplied an invalid value
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// Numeric value outside its accepted range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Entry (or other resource) does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// Entry id already used in this session
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,

    // External Services (5000-5999)
    /// Collaborator returned an error
    #[serde(rename = "EXTERNAL_SERVICE_ERROR")]
    ExternalServiceError = 5000,
    /// Collaborator did not answer in time
    #[serde(rename = "EXTERNAL_SERVICE_UNAVAILABLE")]
    ExternalServiceUnavailable = 5001,

    // Configuration (6000-6999)
    /// Configuration could not be loaded or is invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// Snapshot or payload could not be (de)serialized
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested resource was not found",
            Self::ResourceAlreadyExists => "A resource with this identifier already exists",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::ConfigError => "Configuration error encountered",
            Self::InternalError => "An internal error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Whether retrying the same operation later may succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::ExternalServiceUnavailable)
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Resource ID if applicable (entry id, collaborator name)
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: Option<serde_json::Value>,
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn StdError + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = Some(details);
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Convenience functions for creating common errors
impl AppError {
    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Resource already exists
    pub fn already_exists(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceAlreadyExists,
            format!("{} already exists", resource.into()),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// External service error
    pub fn external_service(service: impl Into<String>, message: impl Into<String>) -> Self {
        let service = service.into();
        Self::new(
            ErrorCode::ExternalServiceError,
            format!("{service}: {}", message.into()),
        )
        .with_resource_id(service)
    }

    /// External service did not respond in time
    pub fn external_timeout(service: impl Into<String>, timeout_secs: u64) -> Self {
        let service = service.into();
        Self::new(
            ErrorCode::ExternalServiceUnavailable,
            format!("{service}: no response within {timeout_secs}s"),
        )
        .with_resource_id(service)
        .with_details(serde_json::json!({ "timeout_secs": timeout_secs }))
    }
}

impl From<ModelError> for AppError {
    fn from(error: ModelError) -> Self {
        let code = match error {
            ModelError::InvalidNutrient { .. } => ErrorCode::ValueOutOfRange,
            ModelError::UnknownMealSlot(_) | ModelError::UnknownGoalType(_) => {
                ErrorCode::InvalidInput
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string()).with_source(error)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let error = AppError::not_found("Entry 42");
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(
            error.to_string(),
            "The requested resource was not found: Entry 42 not found"
        );
    }

    #[test]
    fn test_model_error_conversion() {
        let error: AppError = ModelError::InvalidNutrient {
            field: "salt",
            value: -3.0,
        }
        .into();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert!(std::error::Error::source(&error).is_some());

        let error: AppError = ModelError::UnknownMealSlot("brunch".into()).into();
        assert_eq!(error.code, ErrorCode::InvalidInput);
    }

    #[test]
    fn test_timeout_is_retryable() {
        let error = AppError::external_timeout("recipe", 30);
        assert!(error.code.is_retryable());
        assert_eq!(error.context.resource_id.as_deref(), Some("recipe"));
        assert!(!AppError::external_service("recipe", "bad json").code.is_retryable());
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ResourceAlreadyExists).unwrap();
        assert_eq!(json, "\"RESOURCE_ALREADY_EXISTS\"");
    }
}
