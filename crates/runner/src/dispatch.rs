//! Job dispatcher.
//!
//! One dispatch walks `CreateSession → ResolveJob → RunJob` and always ends
//! by recording and logging the elapsed wall-clock time, whatever the
//! outcome. The outcome is returned as a typed [`DispatchReport`]; choosing
//! the process exit status is left to the caller.

use std::process::ExitCode;
use std::time::{Duration, Instant};

use jobkit_core::JobArgs;
use jobkit_jobs::{JobContext, JobRegistry};
use jobkit_session::{create_session, SessionSettings};
use tracing::Instrument;

use crate::error::DispatchError;

/// Exit status for a dispatch that failed at any stage.
pub const EXIT_FAILURE: u8 = 1;

/// Exit status for invalid command-line input or configuration.
pub const EXIT_USAGE: u8 = 2;

/// Result of one dispatch.
#[derive(Debug)]
pub struct DispatchReport {
    pub job: String,
    pub elapsed: Duration,
    pub outcome: Result<(), DispatchError>,
}

impl DispatchReport {
    pub fn is_success(&self) -> bool {
        self.outcome.is_ok()
    }

    /// `0` on success, [`EXIT_FAILURE`] otherwise.
    pub fn exit_status(&self) -> u8 {
        if self.is_success() {
            0
        } else {
            EXIT_FAILURE
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }
}

/// Runs registered jobs against freshly built sessions.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    registry: JobRegistry,
}

impl Dispatcher {
    pub fn new(registry: JobRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &JobRegistry {
        &self.registry
    }

    /// Run job `name` with `args` on a session built from `settings`.
    pub async fn dispatch(
        &self,
        name: &str,
        args: &JobArgs,
        settings: &SessionSettings,
    ) -> DispatchReport {
        let start = Instant::now();

        let outcome = self.run_job(name, args, settings).await;
        if let Err(e) = &outcome {
            tracing::error!(job = name, error = %e, "Job execution error");
        }

        let elapsed = start.elapsed();
        tracing::info!(
            job = name,
            success = outcome.is_ok(),
            elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
            "Execution of job {name} took {:.3} seconds",
            elapsed.as_secs_f64(),
        );

        DispatchReport {
            job: name.to_string(),
            elapsed,
            outcome,
        }
    }

    async fn run_job(
        &self,
        name: &str,
        args: &JobArgs,
        settings: &SessionSettings,
    ) -> Result<(), DispatchError> {
        let session = create_session(settings)?;
        let job = self.registry.resolve(name).map_err(DispatchError::Resolve)?;

        let span = tracing::info_span!("job", job = name, session_id = %session.session_id());
        let ctx = JobContext {
            name,
            session: &session,
            args,
        };

        job.run(ctx)
            .instrument(span)
            .await
            .map_err(|source| DispatchError::Job {
                name: name.to_string(),
                source,
            })
    }
}
