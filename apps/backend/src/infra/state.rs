use std::sync::Arc;

use crate::config::db::{DbOwner, DbProfile};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::sessions::{MemoryRoundStore, RoundStateStore};
use crate::state::app_state::AppState;
use crate::state::session_config::SessionConfig;

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    session_config: SessionConfig,
    db_profile: Option<DbProfile>,
    round_store: Option<Arc<dyn RoundStateStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            session_config: SessionConfig::default(),
            db_profile: None,
            round_store: None,
        }
    }

    pub fn with_db(mut self, profile: DbProfile) -> Self {
        self.db_profile = Some(profile);
        self
    }

    pub fn with_session_config(mut self, session_config: SessionConfig) -> Self {
        self.session_config = session_config;
        self
    }

    /// Defaults to an in-memory store sized by the session TTL.
    pub fn with_round_store(mut self, store: Arc<dyn RoundStateStore>) -> Self {
        self.round_store = Some(store);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let rounds = self.round_store.unwrap_or_else(|| {
            Arc::new(MemoryRoundStore::new(self.session_config.ttl)) as Arc<dyn RoundStateStore>
        });

        if let Some(profile) = self.db_profile {
            // single entrypoint: build + migrate
            let conn = bootstrap_db(profile, DbOwner::App).await?;
            Ok(AppState::new(conn, rounds, self.session_config))
        } else {
            Ok(AppState::without_db(rounds, self.session_config))
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
