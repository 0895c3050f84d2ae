use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::session_config::SessionConfig;
use crate::sessions::RoundStateStore;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Database connection (optional for test scenarios)
    db: Option<DatabaseConnection>,
    /// Where each session's active answer lives
    rounds: Arc<dyn RoundStateStore>,
    session: SessionConfig,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        rounds: Arc<dyn RoundStateStore>,
        session: SessionConfig,
    ) -> Self {
        Self {
            db: Some(db),
            rounds,
            session,
        }
    }

    /// AppState without a database connection (health checks and error-path tests)
    pub fn without_db(rounds: Arc<dyn RoundStateStore>, session: SessionConfig) -> Self {
        Self {
            db: None,
            rounds,
            session,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }

    pub fn round_store(&self) -> &Arc<dyn RoundStateStore> {
        &self.rounds
    }

    pub fn session_config(&self) -> &SessionConfig {
        &self.session
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("db", &self.db.is_some())
            .field("rounds", &self.rounds.backend())
            .field("session", &self.session)
            .finish()
    }
}
