//! Binary orchestration: from parsed [`Cli`] to a process exit status.
//!
//! Lives in the library so its log events carry the `jobkit_runner`
//! target and so each step can be exercised without spawning the binary.

use jobkit_core::{JobArgs, JOB_ARGS_ENV};
use jobkit_jobs::JobRegistry;
use jobkit_session::SessionSettings;

use crate::cli::Cli;
use crate::dispatch::{Dispatcher, EXIT_FAILURE, EXIT_USAGE};

/// A validated request to run one job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub job: String,
    pub args: JobArgs,
    pub settings: SessionSettings,
}

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListJobs,
    Run(Invocation),
}

/// Validate the command line and read session settings through `lookup`.
///
/// Errors are logged here; the returned `Err` is the exit status to use.
pub fn prepare<F>(cli: &Cli, lookup: F) -> Result<Command, u8>
where
    F: Fn(&str) -> Option<String>,
{
    tracing::info!(?cli, "Called with arguments");

    if cli.list_jobs {
        return Ok(Command::ListJobs);
    }

    let Some(job) = cli.job.clone() else {
        tracing::error!("--job is required");
        return Err(EXIT_USAGE);
    };

    let args = JobArgs::parse(&cli.job_args).map_err(|e| {
        tracing::error!(job = %job, error = %e, "Invalid job arguments");
        EXIT_USAGE
    })?;

    let settings = SessionSettings::from_lookup(job.as_str(), lookup).map_err(|e| {
        tracing::error!(job = %job, error = %e, "Invalid session settings");
        EXIT_USAGE
    })?;
    tracing::info!(mode = %settings.mode, "Loaded session settings");

    Ok(Command::Run(Invocation {
        job,
        args,
        settings,
    }))
}

/// Write the raw argument tokens to [`JOB_ARGS_ENV`] for the engine.
///
/// Must run before any async runtime starts.
pub fn mirror_job_args(job: &str, args: &JobArgs) {
    let env_value = args.env_value();
    std::env::set_var(JOB_ARGS_ENV, &env_value);

    tracing::info!(
        job,
        args = %serde_json::to_string(args).unwrap_or_default(),
        "Running job {job}, environment is {JOB_ARGS_ENV}={env_value:?}",
    );
}

/// Run the binary end to end and return its exit status.
pub fn run(cli: &Cli, registry: JobRegistry) -> u8 {
    let invocation = match prepare(cli, |key| {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }) {
        Ok(Command::ListJobs) => {
            for name in registry.names() {
                println!("{name}");
            }
            return 0;
        }
        Ok(Command::Run(invocation)) => invocation,
        Err(status) => return status,
    };

    mirror_job_args(&invocation.job, &invocation.args);

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "Failed to start async runtime");
            return EXIT_FAILURE;
        }
    };

    let dispatcher = Dispatcher::new(registry);
    let report = runtime.block_on(dispatcher.dispatch(
        &invocation.job,
        &invocation.args,
        &invocation.settings,
    ));

    report.exit_status()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
