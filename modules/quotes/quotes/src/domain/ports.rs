//! Outbound capabilities the domain depends on.

use async_trait::async_trait;
use quotes_kit::SecretString;
use quotes_sdk::{Session, SessionToken, UserId};

use crate::domain::error::DomainError;

/// One-way password hashing and verification.
///
/// Implementations are CPU-bound; services call them on a blocking thread.
pub trait CredentialHasher: Send + Sync {
    /// Returns an encoded hash that embeds its own salt and parameters.
    fn hash(&self, secret: &SecretString) -> Result<String, DomainError>;

    /// `Ok(false)` for a wrong password; `Err` only for a malformed stored hash.
    fn verify(&self, secret: &SecretString, encoded_hash: &str) -> Result<bool, DomainError>;
}

/// Server-side session registry keyed by opaque token.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn create(&self, user_id: UserId) -> Result<Session, DomainError>;

    /// `None` for unknown or expired tokens.
    async fn resolve(&self, token: &SessionToken) -> Option<Session>;

    /// Returns whether a session was removed.
    async fn revoke(&self, token: &SessionToken) -> bool;
}
