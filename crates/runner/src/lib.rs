//! `jobkit-runner` library crate.
//!
//! Re-exports the dispatcher and CLI types for integration testing. The
//! binary entrypoint lives in `main.rs`.

pub mod app;
pub mod cli;
pub mod dispatch;
pub mod error;
pub mod telemetry;

pub use cli::Cli;
pub use dispatch::{DispatchReport, Dispatcher, EXIT_FAILURE, EXIT_USAGE};
pub use error::DispatchError;
