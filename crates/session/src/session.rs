use std::fmt;

use datafusion::prelude::{SessionConfig, SessionContext};

use crate::settings::SessionMode;

/// Handle to the processing engine.
///
/// Built once per invocation by [`create_session`](crate::create_session)
/// and lent to jobs for the duration of one call. Jobs only read from it.
#[derive(Clone)]
pub struct Session {
    app_name: String,
    mode: SessionMode,
    ctx: SessionContext,
}

impl Session {
    pub(crate) fn new(app_name: String, mode: SessionMode, config: SessionConfig) -> Self {
        Self {
            app_name,
            mode,
            ctx: SessionContext::new_with_config(config),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The configuration path that actually produced this session. A local
    /// request that fell back to the cluster builder reports `Cluster`.
    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    /// The engine context jobs build their queries on.
    pub fn context(&self) -> &SessionContext {
        &self.ctx
    }

    pub fn session_id(&self) -> String {
        self.ctx.session_id()
    }

    pub fn target_partitions(&self) -> usize {
        self.ctx.copied_config().target_partitions()
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("app_name", &self.app_name)
            .field("mode", &self.mode)
            .field("session_id", &self.ctx.session_id())
            .finish_non_exhaustive()
    }
}
