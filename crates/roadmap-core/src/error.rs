//! Error types and exit codes for roadmap
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, invalid vertex indices)
//! - 3: Data error (missing map, malformed map header)

mod macros;

use std::collections::TryReserveError;
use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for the roadmap CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - missing or malformed map (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during roadmap operations
#[derive(Error, Debug)]
pub enum RoadmapError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid input for nodes: {src} -> {dst}")]
    InvalidNodes { src: i64, dst: i64 },

    #[error("invalid source or destination node: {src} -> {dest} (map has {vertex_count} vertices)")]
    InvalidEndpoints {
        src: usize,
        dest: usize,
        vertex_count: usize,
    },

    #[error("invalid source node: {src} (map has {vertex_count} vertices)")]
    InvalidSource { src: usize, vertex_count: usize },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    #[error("map not found: {path:?}")]
    MapNotFound { path: PathBuf },

    #[error("invalid map header {header:?}: {reason}")]
    InvalidHeader { header: String, reason: String },

    // Generic failures (exit code 1)
    #[error("failed to allocate storage for {what}: {source}")]
    Allocation {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation} {target}: {reason}")]
    FailedOperationWithTarget {
        operation: String,
        target: String,
        reason: String,
    },

    #[error("{0}")]
    Other(String),
}

impl RoadmapError {
    /// Create an error for a failed IO operation with context
    pub fn io_operation(
        operation: &str,
        path: impl std::fmt::Display,
        error: impl std::fmt::Display,
    ) -> Self {
        RoadmapError::FailedOperationWithTarget {
            operation: operation.to_string(),
            target: path.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        RoadmapError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a failed allocation of internal storage
    pub fn allocation(what: &'static str, source: TryReserveError) -> Self {
        RoadmapError::Allocation { what, source }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            RoadmapError::UnknownFormat(_)
            | RoadmapError::UsageError(_)
            | RoadmapError::InvalidNodes { .. }
            | RoadmapError::InvalidEndpoints { .. }
            | RoadmapError::InvalidSource { .. }
            | RoadmapError::InvalidValue { .. } => ExitCode::Usage,

            RoadmapError::MapNotFound { .. } | RoadmapError::InvalidHeader { .. } => {
                ExitCode::Data
            }

            RoadmapError::Allocation { .. }
            | RoadmapError::Io(_)
            | RoadmapError::Json(_)
            | RoadmapError::Toml(_)
            | RoadmapError::FailedOperationWithTarget { .. }
            | RoadmapError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            RoadmapError::UnknownFormat(_) => "unknown_format",
            RoadmapError::UsageError(_) => "usage_error",
            RoadmapError::InvalidNodes { .. } => "invalid_nodes",
            RoadmapError::InvalidEndpoints { .. } => "invalid_endpoints",
            RoadmapError::InvalidSource { .. } => "invalid_source",
            RoadmapError::InvalidValue { .. } => "invalid_value",
            RoadmapError::MapNotFound { .. } => "map_not_found",
            RoadmapError::InvalidHeader { .. } => "invalid_header",
            RoadmapError::Allocation { .. } => "allocation",
            RoadmapError::Io(_) => "io_error",
            RoadmapError::Json(_) => "json_error",
            RoadmapError::Toml(_) => "toml_error",
            RoadmapError::FailedOperationWithTarget { .. } => "failed_operation_with_target",
            RoadmapError::Other(_) => "other",
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

/// Result type alias for roadmap operations
pub type Result<T> = std::result::Result<T, RoadmapError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_is_usage_error() {
        let err = RoadmapError::InvalidNodes { src: -1, dst: 3 };
        assert_eq!(err.exit_code(), ExitCode::Usage);
        assert!(err.to_string().starts_with("invalid input for nodes"));

        let err = RoadmapError::InvalidEndpoints {
            src: 7,
            dest: 0,
            vertex_count: 3,
        };
        assert_eq!(err.exit_code(), ExitCode::Usage);
        assert!(err
            .to_string()
            .starts_with("invalid source or destination node"));
    }

    #[test]
    fn test_malformed_map_is_data_error() {
        let err = RoadmapError::InvalidHeader {
            header: "abc".to_string(),
            reason: "invalid digit found in string".to_string(),
        };
        assert_eq!(err.exit_code(), ExitCode::Data);
        assert_eq!(i32::from(err.exit_code()), 3);
    }

    #[test]
    fn test_io_operation_message() {
        let err = RoadmapError::io_operation("read map", "roads.map", "permission denied");
        assert_eq!(
            err.to_string(),
            "failed to read map roads.map: permission denied"
        );
        assert_eq!(err.exit_code(), ExitCode::Failure);
    }

    #[test]
    fn test_to_json_envelope() {
        let err = RoadmapError::InvalidSource {
            src: 9,
            vertex_count: 4,
        };
        let json = err.to_json();
        assert_eq!(json["error"]["code"], 2);
        assert_eq!(json["error"]["type"], "invalid_source");
        assert_eq!(
            json["error"]["message"],
            "invalid source node: 9 (map has 4 vertices)"
        );
    }
}
