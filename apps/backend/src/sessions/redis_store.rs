use std::time::Duration;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client, Script};
use tracing::warn;

use super::{RoundStateStore, SessionId};
use crate::error::AppError;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

const KEY_PREFIX: &str = "zooriddle:round:";

// Deletes the key only while it still holds the expected answer.
const COMPARE_AND_DELETE: &str = r#"
if redis.call("GET", KEYS[1]) == ARGV[1] then
    return redis.call("DEL", KEYS[1])
end
return 0
"#;

/// Round store shared by every server instance pointing at the same Redis.
pub struct RedisRoundStore {
    conn: ConnectionManager,
    ttl_secs: u64,
    compare_and_delete: Script,
}

impl RedisRoundStore {
    pub async fn connect(redis_url: &str, ttl: Duration) -> Result<Self, AppError> {
        let client = Client::open(redis_url)
            .map_err(|err| AppError::config(format!("Invalid REDIS_URL: {err}")))?;

        let conn = ConnectionManager::new(client).await.map_err(|err| {
            warn!(error = %Redacted(&err.to_string()), "redis.connect_failed");
            AppError::from(unavailable(err))
        })?;

        Ok(Self {
            conn,
            ttl_secs: ttl.as_secs().max(1),
            compare_and_delete: Script::new(COMPARE_AND_DELETE),
        })
    }

    fn key(session: &SessionId) -> String {
        format!("{KEY_PREFIX}{session}")
    }
}

fn unavailable(err: redis::RedisError) -> DomainError {
    warn!(
        trace_id = %trace_ctx::trace_id(),
        raw_error = %Redacted(&err.to_string()),
        "Session store unavailable"
    );
    DomainError::infra(
        InfraErrorKind::SessionUnavailable,
        "Session store unavailable",
    )
}

#[async_trait]
impl RoundStateStore for RedisRoundStore {
    async fn current_answer(&self, session: &SessionId) -> Result<Option<String>, DomainError> {
        let mut conn = self.conn.clone();
        conn.get::<_, Option<String>>(Self::key(session))
            .await
            .map_err(unavailable)
    }

    async fn begin_round(&self, session: &SessionId, answer: &str) -> Result<(), DomainError> {
        let mut conn = self.conn.clone();
        conn.set_ex::<_, _, ()>(Self::key(session), answer, self.ttl_secs)
            .await
            .map_err(unavailable)
    }

    async fn clear_if(&self, session: &SessionId, expected: &str) -> Result<bool, DomainError> {
        let mut conn = self.conn.clone();
        let deleted: i64 = self
            .compare_and_delete
            .key(Self::key(session))
            .arg(expected)
            .invoke_async(&mut conn)
            .await
            .map_err(unavailable)?;
        Ok(deleted == 1)
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
