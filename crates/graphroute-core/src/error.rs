//! Error types and exit codes for graphroute
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid config values)
//! - 3: Data error (invalid vertex, weight, capacity or label)

mod macros;

use thiserror::Error;

use crate::graph::VertexId;

/// Process exit codes for the graphroute CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - graph rejected the request (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during graph construction, mutation or queries
#[derive(Error, Debug)]
pub enum GraphError {
    // Structural errors (exit code 3)
    #[error("invalid capacity {requested}: must be between 1 and {max}")]
    Capacity { requested: usize, max: usize },

    #[error("invalid vertex {vertex}: graph has {vertex_count} vertices")]
    InvalidVertex {
        vertex: VertexId,
        vertex_count: usize,
    },

    #[error("invalid weight {weight}: edge weights must be non-negative")]
    InvalidWeight { weight: i64 },

    #[error("label for vertex {vertex} is {len} characters long (max {max})")]
    LabelTooLong {
        vertex: VertexId,
        len: usize,
        max: usize,
    },

    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

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

impl GraphError {
    /// Create an error for a vertex id outside `[0, vertex_count)`
    pub fn invalid_vertex(vertex: VertexId, vertex_count: usize) -> Self {
        GraphError::InvalidVertex {
            vertex,
            vertex_count,
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        GraphError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            GraphError::UnknownFormat(_)
            | GraphError::UsageError(_)
            | GraphError::InvalidValue { .. } => ExitCode::Usage,

            GraphError::Capacity { .. }
            | GraphError::InvalidVertex { .. }
            | GraphError::InvalidWeight { .. }
            | GraphError::LabelTooLong { .. } => ExitCode::Data,

            GraphError::Io(_) | GraphError::Json(_) | GraphError::Toml(_) | GraphError::Other(_) => {
                ExitCode::Failure
            }
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            GraphError::Capacity { .. } => "capacity",
            GraphError::InvalidVertex { .. } => "invalid_vertex",
            GraphError::InvalidWeight { .. } => "invalid_weight",
            GraphError::LabelTooLong { .. } => "label_too_long",
            GraphError::UnknownFormat(_) => "unknown_format",
            GraphError::UsageError(_) => "usage_error",
            GraphError::InvalidValue { .. } => "invalid_value",
            GraphError::Io(_) => "io_error",
            GraphError::Json(_) => "json_error",
            GraphError::Toml(_) => "toml_error",
            GraphError::Other(_) => "other",
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

/// Result type alias for graphroute operations
pub type Result<T> = std::result::Result<T, GraphError>;
