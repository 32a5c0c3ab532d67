//! Engine session construction.
//!
//! [`SessionSettings`] is read once from the environment at process start;
//! [`create_session`] turns it into a [`Session`] wrapping a DataFusion
//! `SessionContext`.

pub mod error;
pub mod factory;
pub mod session;
pub mod settings;

pub use error::SessionError;
pub use factory::{build_cluster_session, build_local_session, create_session};
pub use session::Session;
pub use settings::{SessionMode, SessionSettings};
