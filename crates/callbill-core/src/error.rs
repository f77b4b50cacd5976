//! Unified error handling for CallBill
//!
//! `ValidationError` describes why a single raw call was rejected.
//! `AppError` covers every failure the services can surface, each with a
//! stable error code for callers that need a machine-readable kind.

use thiserror::Error;

/// Renders an optional offending value, `null` when the field was absent
fn shown<T: std::fmt::Display>(value: &Option<T>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "null".to_string(),
    }
}

/// Rejection of a raw call input
///
/// Variants are listed in the order the checks run. Each carries the
/// offending field value(s) as received.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Caller number must not be null and must be a positive number (got {})", shown(.0))]
    InvalidCallerNumber(Option<i64>),

    #[error("Callee number must not be null and must be a positive number (got {})", shown(.0))]
    InvalidCalleeNumber(Option<i64>),

    #[error("Start timestamp must not be null and must be bigger than 0 (got {})", shown(.0))]
    InvalidStartTimestamp(Option<i64>),

    #[error("End timestamp must not be null and must be bigger than 0 (got {})", shown(.0))]
    InvalidEndTimestamp(Option<i64>),

    #[error("Start timestamp must not be after end timestamp (start {start}, end {end})")]
    StartAfterEnd { start: i64, end: i64 },

    #[error("Call type must be Inbound or Outbound (got {})", shown(.0))]
    InvalidCallType(Option<String>),
}

impl ValidationError {
    /// Returns the error code for this rejection
    pub fn error_code(&self) -> &'static str {
        match self {
            ValidationError::InvalidCallerNumber(_) => "invalid_caller_number",
            ValidationError::InvalidCalleeNumber(_) => "invalid_callee_number",
            ValidationError::InvalidStartTimestamp(_) => "invalid_start_timestamp",
            ValidationError::InvalidEndTimestamp(_) => "invalid_end_timestamp",
            ValidationError::StartAfterEnd { .. } => "start_after_end",
            ValidationError::InvalidCallType(_) => "invalid_call_type",
        }
    }
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    // ==================== Validation Errors ====================
    #[error("Invalid call at position {index}: {source}")]
    InvalidCall {
        index: usize,
        #[source]
        source: ValidationError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    // ==================== Resource Errors ====================
    #[error("Call not found: {0}")]
    CallNotFound(i64),

    #[error("Store error: {0}")]
    Store(String),

    // ==================== Internal Errors ====================
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether the error was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidCall { .. } | AppError::Validation(_) | AppError::CallNotFound(_)
        )
    }

    /// The underlying validation failure, if any
    pub fn validation(&self) -> Option<&ValidationError> {
        match self {
            AppError::InvalidCall { source, .. } => Some(source),
            AppError::Validation(err) => Some(err),
            _ => None,
        }
    }

    /// Returns the error code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::InvalidCall { source, .. } => source.error_code(),
            AppError::Validation(err) => err.error_code(),
            AppError::CallNotFound(_) => "call_not_found",
            AppError::Store(_) => "store_error",
            AppError::Config(_) => "config_error",
            AppError::InvalidTimezone(_) => "invalid_timezone",
            AppError::Internal(_) => "internal_error",
        }
    }
}

// ==================== From implementations ====================

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
