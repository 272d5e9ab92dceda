//! Error types and exit codes for wayfarer
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args, bad configuration)
//!
//! An exhausted search that finds no path is NOT an error; it is
//! reported as an empty path by the search API.

use thiserror::Error;

/// Exit codes reported by the wayfarer binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args/configuration (2)
    Usage = 2,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during wayfarer operations
#[derive(Error, Debug)]
pub enum WayfarerError {
    // Configuration errors, raised at construction
    #[error("aggregate cost has {weights} weights for {parts} cost functions")]
    WeightCountMismatch { weights: usize, parts: usize },

    #[error("unknown distance metric: {0} (expected: euclidean, manhattan)")]
    UnknownMetric(String),

    #[error("unknown algorithm: {0} (expected: bfs, dfs, ucs, a-star)")]
    UnknownAlgorithm(String),

    #[error("unknown format: {0} (expected: human, json)")]
    UnknownFormat(String),

    #[error("node value {index} has {found} components, expected {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    // Index errors
    #[error("edge endpoint {endpoint} out of range for {num_nodes} nodes")]
    EdgeEndpointOutOfBounds { endpoint: usize, num_nodes: usize },

    #[error("node index {index} out of range for {num_nodes} nodes")]
    NodeIndexOutOfBounds { index: usize, num_nodes: usize },

    // State errors
    #[error("environment has not been created yet (call create() before search())")]
    NotCreated,

    #[error("environment has already been created (create() may only be called once)")]
    AlreadyCreated,

    // Generic failures (CLI scenario plumbing)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    UsageError(String),
}

impl WayfarerError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            WayfarerError::WeightCountMismatch { .. }
            | WayfarerError::UnknownMetric(_)
            | WayfarerError::UnknownAlgorithm(_)
            | WayfarerError::UnknownFormat(_)
            | WayfarerError::DimensionMismatch { .. }
            | WayfarerError::EdgeEndpointOutOfBounds { .. }
            | WayfarerError::NodeIndexOutOfBounds { .. }
            | WayfarerError::UsageError(_) => ExitCode::Usage,

            WayfarerError::NotCreated
            | WayfarerError::AlreadyCreated
            | WayfarerError::Io(_)
            | WayfarerError::Json(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier used in structured output
    fn error_type(&self) -> &'static str {
        match self {
            WayfarerError::WeightCountMismatch { .. } => "weight_count_mismatch",
            WayfarerError::UnknownMetric(_) => "unknown_metric",
            WayfarerError::UnknownAlgorithm(_) => "unknown_algorithm",
            WayfarerError::UnknownFormat(_) => "unknown_format",
            WayfarerError::DimensionMismatch { .. } => "dimension_mismatch",
            WayfarerError::EdgeEndpointOutOfBounds { .. } => "edge_endpoint_out_of_bounds",
            WayfarerError::NodeIndexOutOfBounds { .. } => "node_index_out_of_bounds",
            WayfarerError::NotCreated => "not_created",
            WayfarerError::AlreadyCreated => "already_created",
            WayfarerError::Io(_) => "io_error",
            WayfarerError::Json(_) => "json_error",
            WayfarerError::UsageError(_) => "usage_error",
        }
    }

    /// Convert error to JSON representation for structured error output
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

/// Result type alias for wayfarer operations
pub type Result<T> = std::result::Result<T, WayfarerError>;
