//! Name-to-job registry.
//!
//! Populated once at process start. The CLI resolves the `--job` value
//! against it; an unknown name is a typed [`JobError::NotFound`].

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use jobkit_core::validate_job_name;

use crate::error::JobError;
use crate::job::Job;
use crate::word::WordJob;

/// Jobs shipped with the runner.
fn builtin_jobs() -> Vec<Arc<dyn Job>> {
    vec![Arc::new(WordJob)]
}

#[derive(Clone, Default)]
pub struct JobRegistry {
    jobs: HashMap<&'static str, Arc<dyn Job>>,
}

impl JobRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in job.
    pub fn with_builtin_jobs() -> Self {
        let mut registry = Self::new();
        for job in builtin_jobs() {
            registry.jobs.insert(job.name(), job);
        }
        registry
    }

    /// Add a job under its own [`Job::name`].
    ///
    /// Fails if the name is not a valid job name or is already taken.
    pub fn register<J>(&mut self, job: J) -> Result<(), JobError>
    where
        J: Job + 'static,
    {
        let name = job.name();
        validate_job_name(name)?;

        if self.jobs.contains_key(name) {
            return Err(JobError::AlreadyRegistered {
                name: name.to_string(),
            });
        }

        self.jobs.insert(name, Arc::new(job));
        tracing::debug!(job = name, "Job registered");
        Ok(())
    }

    pub fn resolve(&self, name: &str) -> Result<Arc<dyn Job>, JobError> {
        self.jobs
            .get(name)
            .cloned()
            .ok_or_else(|| JobError::NotFound {
                name: name.to_string(),
            })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.jobs.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.jobs.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

impl fmt::Debug for JobRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JobRegistry")
            .field("jobs", &self.names())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
