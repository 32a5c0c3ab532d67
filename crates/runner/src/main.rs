//! `jobkit` -- run one registered job against a fresh engine session.
//!
//! ```text
//! jobkit --job <name> [--job-args <key=value> ...]
//! jobkit --list-jobs
//! ```
//!
//! # Environment variables
//!
//! | Variable                   | Direction | Description                                   |
//! |----------------------------|-----------|-----------------------------------------------|
//! | `JOBKIT_CLUSTER`           | read      | Presence selects the cluster session builder  |
//! | `JOBKIT_LOCAL_DEFAULTS`    | read      | Local session defaults file                   |
//! | `JOBKIT_TARGET_PARTITIONS` | read      | Engine target partitions                      |
//! | `RUST_LOG`                 | read      | Log filter                                    |
//! | `JOBKIT_JOB_ARGS`          | written   | Raw `--job-args` tokens, space-joined         |
//!
//! Exit status: `0` success, `1` job/session failure, `2` usage error.

use std::process::ExitCode;

use clap::Parser;
use jobkit_jobs::JobRegistry;
use jobkit_runner::telemetry::init_tracing;
use jobkit_runner::{app, Cli};

fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    init_tracing();

    let cli = Cli::parse();
    ExitCode::from(app::run(&cli, JobRegistry::with_builtin_jobs()))
}
