use std::path::PathBuf;

use datafusion::error::DataFusionError;

/// Errors raised while building a [`Session`](crate::Session).
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A session setting read from the environment could not be parsed.
    #[error("Invalid value for {var}: {reason}")]
    InvalidSetting { var: &'static str, reason: String },

    /// The local defaults file does not exist; the local path cannot be used.
    #[error("Local session defaults not found at {}", path.display())]
    LocalUnavailable { path: PathBuf },

    #[error("Failed to read local session defaults {}: {source}", path.display())]
    ReadDefaults {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid local session defaults {}: {source}", path.display())]
    ParseDefaults {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A defaults entry whose value is not a string, number or boolean.
    #[error("Invalid local session default '{key}' in {}: expected a scalar value", path.display())]
    NonScalarDefault { path: PathBuf, key: String },

    /// The engine rejected an option key or value.
    #[error("Engine rejected session configuration: {0}")]
    Engine(#[from] DataFusionError),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
