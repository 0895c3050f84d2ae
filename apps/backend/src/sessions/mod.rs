//! Per-session round state.
//!
//! Each browser session holds at most one active answer. Handlers reach the
//! store through `AppState`; implementations live in `memory` and `redis_store`.

use std::fmt;

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::domain::DomainError;

pub mod memory;
pub mod redis_store;

pub use memory::MemoryRoundStore;
pub use redis_store::RedisRoundStore;

/// Opaque session token carried by the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Accepts only well-formed v4 tokens; anything else gets a fresh session.
    pub fn parse(raw: &str) -> Option<Self> {
        Uuid::parse_str(raw.trim())
            .ok()
            .filter(|id| id.get_version_num() == 4)
            .map(Self)
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.as_hyphenated())
    }
}

#[async_trait]
pub trait RoundStateStore: Send + Sync {
    /// Answer of the session's active round, if any.
    async fn current_answer(&self, session: &SessionId) -> Result<Option<String>, DomainError>;

    /// Start a round, replacing whatever answer was stored before.
    async fn begin_round(&self, session: &SessionId, answer: &str) -> Result<(), DomainError>;

    /// Clear the round only if it still holds `expected`.
    ///
    /// Returns `true` when this call removed the round.
    async fn clear_if(&self, session: &SessionId, expected: &str) -> Result<bool, DomainError>;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
