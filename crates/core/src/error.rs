#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("Malformed job argument '{token}': expected key=value")]
    MalformedArgument { token: String },

    #[error("Duplicate job argument key '{key}'")]
    DuplicateArgument { key: String },

    #[error("Invalid job name '{name}': {reason}")]
    InvalidJobName { name: String, reason: &'static str },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
