//! The job entry point contract.

use async_trait::async_trait;
use jobkit_core::JobArgs;
use jobkit_session::Session;

use crate::error::JobError;

/// Everything a job receives for one run. All borrowed: the dispatcher
/// owns the session and arguments and outlives the call.
#[derive(Debug, Clone, Copy)]
pub struct JobContext<'a> {
    /// Name the job was dispatched under.
    pub name: &'a str,
    pub session: &'a Session,
    pub args: &'a JobArgs,
}

/// A unit of business logic with a single entry point.
///
/// Jobs log through the `tracing` macros; the dispatcher runs [`Job::run`]
/// inside a `job` span carrying the job name.
#[async_trait]
pub trait Job: Send + Sync {
    /// Registry key. Must satisfy [`jobkit_core::validate_job_name`].
    fn name(&self) -> &'static str;

    async fn run(&self, ctx: JobContext<'_>) -> Result<(), JobError>;
}
