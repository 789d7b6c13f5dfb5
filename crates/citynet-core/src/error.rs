//! Error types and exit codes for citynet
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid input values)
//! - 3: Data error (unknown city, duplicate city, rejected road, capacity)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - lookup miss, rejected mutation (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during citynet operations
#[derive(Error, Debug)]
pub enum CityNetError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    #[error("city already exists: {name}")]
    DuplicateName { name: String },

    #[error("invalid road: {reason}")]
    InvalidEdge { reason: String },

    #[error("too many {context}: {requested} (limit {limit})")]
    CapacityExceeded {
        context: String,
        limit: usize,
        requested: usize,
    },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl CityNetError {
    /// Create an error for an invalid value
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        CityNetError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an entity that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        CityNetError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    pub fn invalid_edge(reason: impl Into<String>) -> Self {
        CityNetError::InvalidEdge {
            reason: reason.into(),
        }
    }

    pub fn capacity_exceeded(context: &str, limit: usize, requested: usize) -> Self {
        CityNetError::CapacityExceeded {
            context: context.to_string(),
            limit,
            requested,
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            CityNetError::UnknownFormat(_)
            | CityNetError::UsageError(_)
            | CityNetError::InvalidValue { .. } => ExitCode::Usage,

            CityNetError::NotFound { .. }
            | CityNetError::DuplicateName { .. }
            | CityNetError::InvalidEdge { .. }
            | CityNetError::CapacityExceeded { .. } => ExitCode::Data,

            CityNetError::Io(_)
            | CityNetError::Json(_)
            | CityNetError::Toml(_)
            | CityNetError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            CityNetError::UnknownFormat(_) => "unknown_format",
            CityNetError::UsageError(_) => "usage_error",
            CityNetError::InvalidValue { .. } => "invalid_value",
            CityNetError::NotFound { .. } => "not_found",
            CityNetError::DuplicateName { .. } => "duplicate_name",
            CityNetError::InvalidEdge { .. } => "invalid_edge",
            CityNetError::CapacityExceeded { .. } => "capacity_exceeded",
            CityNetError::Io(_) => "io_error",
            CityNetError::Json(_) => "json_error",
            CityNetError::Toml(_) => "toml_error",
            CityNetError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for citynet operations
pub type Result<T> = std::result::Result<T, CityNetError>;
