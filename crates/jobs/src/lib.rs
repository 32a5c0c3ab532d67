//! Jobs and the registry that names them.
//!
//! - [`Job`]: the single-entry-point contract every job implements.
//! - [`JobRegistry`]: explicit name-to-job mapping built at startup.
//! - [`word`]: the example job shipped with the runner.
//! - [`render`]: logging of engine results as ASCII tables.

pub mod error;
pub mod job;
pub mod registry;
pub mod render;
pub mod word;

pub use error::JobError;
pub use job::{Job, JobContext};
pub use registry::JobRegistry;
pub use word::WordJob;
