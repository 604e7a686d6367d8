//! In-memory [`SessionStore`] backed by a concurrent map.
//!
//! Tokens are 32 random bytes, hex-encoded. Sessions do not survive a restart.

use std::time::Duration;

use async_trait::async_trait;
use dashmap::DashMap;
use quotes_sdk::{Session, SessionToken, UserId};
use time::OffsetDateTime;
use tracing::debug;

use crate::domain::error::DomainError;
use crate::domain::ports::SessionStore;

pub struct InMemorySessionStore {
    sessions: DashMap<String, Session>,
    ttl: Duration,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            ttl,
        }
    }

    /// Number of stored sessions, expired ones included until purged.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop every expired session. Returns how many were removed.
    #[must_use]
    pub fn purge_expired(&self) -> usize {
        let now = OffsetDateTime::now_utc();
        let before = self.sessions.len();
        self.sessions.retain(|_, s| !s.is_expired_at(now));
        before.saturating_sub(self.sessions.len())
    }

    fn new_token() -> String {
        hex::encode(rand::random::<[u8; 32]>())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create(&self, user_id: UserId) -> Result<Session, DomainError> {
        let purged = self.purge_expired();
        if purged > 0 {
            debug!(purged, "Purged expired sessions");
        }

        let expires_at = time::Duration::try_from(self.ttl)
            .ok()
            .and_then(|ttl| OffsetDateTime::now_utc().checked_add(ttl))
            .ok_or_else(|| {
                DomainError::internal(format!(
                    "session ttl of {}s is out of the representable date range",
                    self.ttl.as_secs()
                ))
            })?;

        let session = Session {
            token: SessionToken::new(Self::new_token()),
            user_id,
            expires_at,
        };
        self.sessions
            .insert(session.token.as_str().to_owned(), session.clone());
        Ok(session)
    }

    async fn resolve(&self, token: &SessionToken) -> Option<Session> {
        let session = self.sessions.get(token.as_str()).map(|entry| entry.value().clone())?;
        if session.is_expired_at(OffsetDateTime::now_utc()) {
            self.sessions.remove(token.as_str());
            debug!(user_id = %session.user_id, "Session expired");
            return None;
        }
        Some(session)
    }

    async fn revoke(&self, token: &SessionToken) -> bool {
        self.sessions.remove(token.as_str()).is_some()
    }
}
