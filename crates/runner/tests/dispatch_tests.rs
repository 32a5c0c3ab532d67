//! Integration tests for the job dispatcher.
//!
//! Exercises every path through a dispatch: success, unknown job, failing
//! job and session failure. Each must still record an elapsed duration and
//! report a typed outcome.

mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;

use assert_matches::assert_matches;
use async_trait::async_trait;
use jobkit_core::JobArgs;
use jobkit_jobs::{Job, JobContext, JobError, JobRegistry};
use jobkit_runner::{DispatchError, Dispatcher, EXIT_FAILURE};
use jobkit_session::{SessionError, SessionMode, SessionSettings};

use common::LogCapture;

fn cluster_settings(app_name: &str) -> SessionSettings {
    SessionSettings::new(app_name, SessionMode::Cluster).with_target_partitions(2)
}

/// Fails after a short delay, so a recorded duration proves timing
/// continued past the failure.
struct FailingJob;

#[async_trait]
impl Job for FailingJob {
    fn name(&self) -> &'static str {
        "explode"
    }

    async fn run(&self, _ctx: JobContext<'_>) -> Result<(), JobError> {
        tokio::time::sleep(Duration::from_millis(5)).await;
        Err(JobError::Failed("boom".to_string()))
    }
}

/// Records the arguments and session it was handed.
#[derive(Clone, Default)]
struct RecordingJob {
    seen: Arc<Mutex<Option<(Vec<(String, String)>, String)>>>,
}

#[async_trait]
impl Job for RecordingJob {
    fn name(&self) -> &'static str {
        "record"
    }

    async fn run(&self, ctx: JobContext<'_>) -> Result<(), JobError> {
        let args = ctx
            .args
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        *self.seen.lock().unwrap() = Some((args, ctx.session.app_name().to_string()));
        Ok(())
    }
}

fn dispatcher_with(extra: impl FnOnce(&mut JobRegistry)) -> Dispatcher {
    let mut registry = JobRegistry::with_builtin_jobs();
    extra(&mut registry);
    Dispatcher::new(registry)
}

// ---------------------------------------------------------------------------
// Test: success path
// ---------------------------------------------------------------------------

#[tokio::test]
async fn word_job_dispatches_successfully() {
    let dispatcher = dispatcher_with(|_| {});

    let report = dispatcher
        .dispatch("word", &JobArgs::default(), &cluster_settings("word"))
        .await;

    assert!(report.is_success(), "dispatch failed: {:?}", report.outcome);
    assert_eq!(report.job, "word");
    assert_eq!(report.exit_status(), 0);
}

/// Arguments given on the command line reach the job entry point.
#[tokio::test]
async fn arguments_are_forwarded_to_job() {
    let recorder = RecordingJob::default();
    let seen = Arc::clone(&recorder.seen);
    let dispatcher = dispatcher_with(|registry| registry.register(recorder).unwrap());
    let args = JobArgs::parse(["template=manual-email", "foo=bar"]).unwrap();

    let report = dispatcher
        .dispatch("record", &args, &cluster_settings("record"))
        .await;

    assert!(report.is_success());
    let (received, app_name) = seen.lock().unwrap().clone().expect("job should have run");
    assert_eq!(
        received,
        [
            ("foo".to_string(), "bar".to_string()),
            ("template".to_string(), "manual-email".to_string()),
        ]
    );
    assert_eq!(app_name, "record");
}

// ---------------------------------------------------------------------------
// Test: failure paths
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_job_is_a_resolve_error() {
    let dispatcher = dispatcher_with(|_| {});

    let report = dispatcher
        .dispatch(
            "nonexistent",
            &JobArgs::default(),
            &cluster_settings("nonexistent"),
        )
        .await;

    let err = report.outcome.as_ref().unwrap_err();
    assert_matches!(err, DispatchError::Resolve(JobError::NotFound { name }) if name == "nonexistent");
    assert!(err.to_string().contains("nonexistent"));
    assert_eq!(report.exit_status(), EXIT_FAILURE);
}

#[tokio::test]
async fn failing_job_is_reported_and_timed() {
    let dispatcher = dispatcher_with(|registry| registry.register(FailingJob).unwrap());

    let report = dispatcher
        .dispatch("explode", &JobArgs::default(), &cluster_settings("explode"))
        .await;

    assert_matches!(
        &report.outcome,
        Err(DispatchError::Job { name, source: JobError::Failed(msg) })
            if name == "explode" && msg == "boom"
    );
    assert!(report.elapsed >= Duration::from_millis(5));
    assert_eq!(report.exit_status(), EXIT_FAILURE);
}

/// The failure is logged with the job name and message, and the duration
/// line still follows it.
#[tokio::test]
async fn failing_job_logs_error_then_duration() {
    let capture = LogCapture::default();
    let _guard = tracing::subscriber::set_default(capture.subscriber());
    let dispatcher = dispatcher_with(|registry| registry.register(FailingJob).unwrap());

    let report = dispatcher
        .dispatch("explode", &JobArgs::default(), &cluster_settings("explode"))
        .await;
    assert!(!report.is_success());

    let logs = capture.contents();
    let error_line = logs
        .lines()
        .position(|line| line.contains("ERROR") && line.contains("Job execution error: explode: boom"))
        .unwrap_or_else(|| panic!("missing error line in logs:\n{logs}"));
    let duration_line = logs
        .lines()
        .position(|line| line.contains("Execution of job explode took") && line.contains("seconds"))
        .unwrap_or_else(|| panic!("missing duration line in logs:\n{logs}"));
    assert!(error_line < duration_line);
}

/// An unknown job is logged by name and still gets its duration line.
#[tokio::test]
async fn unknown_job_logs_name_and_duration() {
    let capture = LogCapture::default();
    let _guard = tracing::subscriber::set_default(capture.subscriber());
    let dispatcher = dispatcher_with(|_| {});

    dispatcher
        .dispatch(
            "nonexistent",
            &JobArgs::default(),
            &cluster_settings("nonexistent"),
        )
        .await;

    let logs = capture.contents();
    assert!(
        logs.lines()
            .any(|line| line.contains("ERROR") && line.contains("Job 'nonexistent' is not registered")),
        "logs:\n{logs}"
    );
    assert!(logs.contains("Execution of job nonexistent took"), "logs:\n{logs}");
}

#[tokio::test]
async fn session_failure_stops_before_resolution() {
    let dispatcher = dispatcher_with(|_| {});
    let settings = cluster_settings("word").with_option("datafusion.no_such.option", "1");

    let report = dispatcher
        .dispatch("word", &JobArgs::default(), &settings)
        .await;

    assert_matches!(
        &report.outcome,
        Err(DispatchError::Session(SessionError::Engine(_)))
    );
    assert!(!report.is_success());
}

/// Dispatching the same job twice gives the same outcome.
#[tokio::test]
async fn repeated_dispatch_is_stable() {
    let dispatcher = dispatcher_with(|_| {});
    let settings = cluster_settings("word");

    for _ in 0..2 {
        let report = dispatcher
            .dispatch("word", &JobArgs::default(), &settings)
            .await;
        assert!(report.is_success());
    }
}
