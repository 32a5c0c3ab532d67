//! Shared building blocks for the jobkit runner.
//!
//! - [`JobArgs`]: `key=value` job arguments parsed from the command line.
//! - [`naming`]: rules for registrable job names.
//! - [`CoreError`]: errors raised by the above.

pub mod args;
pub mod error;
pub mod naming;

pub use args::{JobArgs, JOB_ARGS_ENV};
pub use error::CoreError;
pub use naming::validate_job_name;
