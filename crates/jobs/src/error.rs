use datafusion::arrow::error::ArrowError;
use datafusion::error::DataFusionError;
use jobkit_core::CoreError;

/// Errors raised by the registry and by job bodies.
#[derive(Debug, thiserror::Error)]
pub enum JobError {
    #[error("Job '{name}' is not registered")]
    NotFound { name: String },

    #[error("Job '{name}' is already registered")]
    AlreadyRegistered { name: String },

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Engine error: {0}")]
    Engine(#[from] DataFusionError),

    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),

    /// A job-specific failure with a human-readable message.
    #[error("{0}")]
    Failed(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
