use jobkit_jobs::JobError;
use jobkit_session::SessionError;

/// Why a dispatch did not complete successfully.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("Failed to create session: {0}")]
    Session(#[from] SessionError),

    /// The job name is not in the registry.
    #[error("Failed to resolve job: {0}")]
    Resolve(#[source] JobError),

    /// The job ran and returned an error.
    #[error("Job execution error: {name}: {source}")]
    Job {
        name: String,
        #[source]
        source: JobError,
    },
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
