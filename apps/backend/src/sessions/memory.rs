use std::time::{Duration, Instant};

use async_trait::async_trait;
use dashmap::DashMap;

use super::{RoundStateStore, SessionId};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone)]
struct RoundEntry {
    answer: String,
    started_at: Instant,
}

impl RoundEntry {
    fn is_expired(&self, ttl: Duration) -> bool {
        self.started_at.elapsed() >= ttl
    }
}

/// Process-local round store. State is lost on restart and not shared
/// between server instances.
pub struct MemoryRoundStore {
    rounds: DashMap<SessionId, RoundEntry>,
    ttl: Duration,
}

impl MemoryRoundStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            rounds: DashMap::new(),
            ttl,
        }
    }

    /// Drop every expired round. Called opportunistically on writes.
    fn purge_expired(&self) {
        let ttl = self.ttl;
        self.rounds.retain(|_, entry| !entry.is_expired(ttl));
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }
}

#[async_trait]
impl RoundStateStore for MemoryRoundStore {
    async fn current_answer(&self, session: &SessionId) -> Result<Option<String>, DomainError> {
        let ttl = self.ttl;
        let answer = match self.rounds.get(session) {
            Some(entry) if !entry.is_expired(ttl) => Some(entry.answer.clone()),
            Some(_) => None,
            None => return Ok(None),
        };

        if answer.is_none() {
            self.rounds.remove_if(session, |_, entry| entry.is_expired(ttl));
        }
        Ok(answer)
    }

    async fn begin_round(&self, session: &SessionId, answer: &str) -> Result<(), DomainError> {
        self.purge_expired();
        self.rounds.insert(
            *session,
            RoundEntry {
                answer: answer.to_string(),
                started_at: Instant::now(),
            },
        );
        Ok(())
    }

    async fn clear_if(&self, session: &SessionId, expected: &str) -> Result<bool, DomainError> {
        let ttl = self.ttl;
        let removed = self.rounds.remove_if(session, |_, entry| {
            entry.answer == expected && !entry.is_expired(ttl)
        });
        Ok(removed.is_some())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
