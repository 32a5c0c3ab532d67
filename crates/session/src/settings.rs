//! Session settings and the environment boundary they are read from.
//!
//! The factory never touches the process environment. Binaries call
//! [`SessionSettings::from_env`] once at startup and pass the result in.
//!
//! | Env Var                    | Default                   |
//! |----------------------------|---------------------------|
//! | `JOBKIT_CLUSTER`           | unset (local mode)        |
//! | `JOBKIT_LOCAL_DEFAULTS`    | `conf/local-session.json` |
//! | `JOBKIT_TARGET_PARTITIONS` | engine default            |

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

use crate::error::SessionError;

/// Presence of this variable (any value) selects [`SessionMode::Cluster`].
pub const CLUSTER_MARKER_ENV: &str = "JOBKIT_CLUSTER";

/// Path of the JSON file read by the local convenience path.
pub const LOCAL_DEFAULTS_ENV: &str = "JOBKIT_LOCAL_DEFAULTS";

/// Positive integer overriding the engine's target partition count.
pub const TARGET_PARTITIONS_ENV: &str = "JOBKIT_TARGET_PARTITIONS";

pub const DEFAULT_LOCAL_DEFAULTS_PATH: &str = "conf/local-session.json";

/// Which configuration path the factory takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    /// Developer machine: try the local defaults file first.
    Local,
    /// Managed environment: always use the generic builder.
    Cluster,
}

impl fmt::Display for SessionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Local => f.write_str("local"),
            Self::Cluster => f.write_str("cluster"),
        }
    }
}

/// Everything the factory needs to produce a [`Session`](crate::Session).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Application name attached to the session, used in logs.
    pub app_name: String,
    pub mode: SessionMode,
    /// JSON object of engine option key to value, used in local mode.
    pub local_defaults_path: PathBuf,
    /// Overrides the engine's target partition count when set.
    pub target_partitions: Option<usize>,
    /// Engine options applied on top of every other source.
    pub options: BTreeMap<String, String>,
}

impl SessionSettings {
    pub fn new(app_name: impl Into<String>, mode: SessionMode) -> Self {
        Self {
            app_name: app_name.into(),
            mode,
            local_defaults_path: PathBuf::from(DEFAULT_LOCAL_DEFAULTS_PATH),
            target_partitions: None,
            options: BTreeMap::new(),
        }
    }

    /// Read settings from the process environment.
    pub fn from_env(app_name: impl Into<String>) -> Result<Self, SessionError> {
        Self::from_lookup(app_name, |key| {
            std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
        })
    }

    /// Read settings through `lookup`, which returns the value of a variable
    /// or `None` when it is unset.
    pub fn from_lookup<F>(app_name: impl Into<String>, lookup: F) -> Result<Self, SessionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mode = if lookup(CLUSTER_MARKER_ENV).is_some() {
            SessionMode::Cluster
        } else {
            SessionMode::Local
        };

        let mut settings = Self::new(app_name, mode);

        if let Some(path) = lookup(LOCAL_DEFAULTS_ENV).filter(|p| !p.trim().is_empty()) {
            settings.local_defaults_path = PathBuf::from(path.trim());
        }

        if let Some(raw) = lookup(TARGET_PARTITIONS_ENV) {
            settings.target_partitions = Some(parse_target_partitions(&raw)?);
        }

        Ok(settings)
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_local_defaults_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.local_defaults_path = path.into();
        self
    }

    pub fn with_target_partitions(mut self, partitions: usize) -> Self {
        self.target_partitions = Some(partitions);
        self
    }
}

fn parse_target_partitions(raw: &str) -> Result<usize, SessionError> {
    let invalid = |reason: String| SessionError::InvalidSetting {
        var: TARGET_PARTITIONS_ENV,
        reason,
    };

    match raw.trim().parse::<usize>() {
        Ok(0) => Err(invalid("must be greater than zero".to_string())),
        Ok(n) => Ok(n),
        Err(e) => Err(invalid(format!("'{raw}' is not a valid integer ({e})"))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
