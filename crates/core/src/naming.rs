//! Job name rules.
//!
//! A job name is the key the registry and the CLI agree on. Names are
//! lowercase identifiers so they can double as span fields and file stems.

use crate::error::CoreError;

/// Maximum length of a job name.
pub const MAX_JOB_NAME_LEN: usize = 64;

/// Validate a job name.
///
/// Rules:
/// - Must not be empty or exceed [`MAX_JOB_NAME_LEN`] characters.
/// - Must start with a lowercase ASCII letter.
/// - Must contain only lowercase ASCII letters, digits or underscores.
pub fn validate_job_name(name: &str) -> Result<(), CoreError> {
    let invalid = |reason| CoreError::InvalidJobName {
        name: name.to_string(),
        reason,
    };

    if name.is_empty() {
        return Err(invalid("must not be empty"));
    }
    if name.len() > MAX_JOB_NAME_LEN {
        return Err(invalid("exceeds 64 characters"));
    }
    if !name.starts_with(|c: char| c.is_ascii_lowercase()) {
        return Err(invalid("must start with a lowercase letter"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    {
        return Err(invalid("may only contain a-z, 0-9 and '_'"));
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
