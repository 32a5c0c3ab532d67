//! Session factory.
//!
//! Two configuration paths produce a [`Session`]:
//!
//! - **local**: engine options come from a JSON defaults file on disk
//!   (see [`SessionSettings::local_defaults_path`]). When the file does not
//!   exist the path is unavailable and the factory falls back to the cluster
//!   builder.
//! - **cluster**: the generic builder, driven only by the base options and
//!   [`SessionSettings::options`].

use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::Path;

use datafusion::prelude::SessionConfig;
use serde_json::Value;

use crate::error::SessionError;
use crate::session::Session;
use crate::settings::{SessionMode, SessionSettings};

/// Options every session starts from, whichever path built it.
const BASE_OPTIONS: &[(&str, &str)] = &[("datafusion.catalog.information_schema", "true")];

/// Build a session for `settings`.
///
/// Cluster mode goes straight to the builder. Local mode tries the defaults
/// file first and only falls back when that file is missing; any other
/// failure is returned to the caller.
pub fn create_session(settings: &SessionSettings) -> Result<Session, SessionError> {
    match settings.mode {
        SessionMode::Cluster => build_cluster_session(settings),
        SessionMode::Local => match build_local_session(settings) {
            Err(SessionError::LocalUnavailable { path }) => {
                tracing::warn!(
                    path = %path.display(),
                    "Local session defaults unavailable, falling back to cluster builder",
                );
                build_cluster_session(settings)
            }
            other => other,
        },
    }
}

/// Local convenience path.
///
/// Options are layered base, then defaults file, then explicit settings.
/// Target partitions default to the host's available parallelism.
pub fn build_local_session(settings: &SessionSettings) -> Result<Session, SessionError> {
    let mut options = base_options();
    options.extend(load_local_defaults(&settings.local_defaults_path)?);
    options.extend(settings.options.clone());

    let partitions = settings
        .target_partitions
        .unwrap_or_else(available_parallelism);
    let config = engine_config(&options, Some(partitions))?;

    let session = Session::new(settings.app_name.clone(), SessionMode::Local, config);
    tracing::info!(
        app_name = %session.app_name(),
        session_id = %session.session_id(),
        target_partitions = session.target_partitions(),
        defaults = %settings.local_defaults_path.display(),
        "Local session created",
    );
    Ok(session)
}

/// Generic cluster builder path.
pub fn build_cluster_session(settings: &SessionSettings) -> Result<Session, SessionError> {
    let mut options = base_options();
    options.extend(settings.options.clone());

    let config = engine_config(&options, settings.target_partitions)?;

    let session = Session::new(settings.app_name.clone(), SessionMode::Cluster, config);
    tracing::info!(
        app_name = %session.app_name(),
        session_id = %session.session_id(),
        target_partitions = session.target_partitions(),
        "Cluster session created",
    );
    Ok(session)
}

fn base_options() -> BTreeMap<String, String> {
    BASE_OPTIONS
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn available_parallelism() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

fn engine_config(
    options: &BTreeMap<String, String>,
    target_partitions: Option<usize>,
) -> Result<SessionConfig, SessionError> {
    let mut config = SessionConfig::new();
    for (key, value) in options {
        config.options_mut().set(key, value)?;
    }

    if let Some(partitions) = target_partitions {
        if partitions == 0 {
            return Err(SessionError::InvalidSetting {
                var: crate::settings::TARGET_PARTITIONS_ENV,
                reason: "must be greater than zero".to_string(),
            });
        }
        config = config.with_target_partitions(partitions);
    }

    Ok(config)
}

/// Read the local defaults file into string options.
///
/// Scalar JSON values are accepted and stringified so `4096` and `"4096"`
/// mean the same thing.
fn load_local_defaults(path: &Path) -> Result<BTreeMap<String, String>, SessionError> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(SessionError::LocalUnavailable {
                path: path.to_path_buf(),
            })
        }
        Err(source) => {
            return Err(SessionError::ReadDefaults {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let raw: HashMap<String, Value> =
        serde_json::from_str(&contents).map_err(|source| SessionError::ParseDefaults {
            path: path.to_path_buf(),
            source,
        })?;

    raw.into_iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s,
                Value::Number(n) => n.to_string(),
                Value::Bool(b) => b.to_string(),
                Value::Null | Value::Array(_) | Value::Object(_) => {
                    return Err(SessionError::NonScalarDefault {
                        path: path.to_path_buf(),
                        key,
                    })
                }
            };
            Ok((key, value))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
