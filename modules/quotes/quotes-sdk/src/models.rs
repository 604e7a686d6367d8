//! Public models for the quotes module.
//!
//! These are transport-agnostic data structures shared between the module
//! and its consumers. Password hashes never appear here.

use std::fmt;

use quotes_kit::SecretString;
use time::OffsetDateTime;

/// System-assigned user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(pub i32);

/// System-assigned quote identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct QuoteId(pub i32);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    pub id: QuoteId,
    pub author: String,
    pub text: String,
    /// Fixed at creation.
    pub owner: UserId,
}

/// Registration input.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password: SecretString,
    pub confirm_password: SecretString,
}

/// Author and text of a quote being contributed or edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuoteDraft {
    pub author: String,
    pub text: String,
}

impl QuoteDraft {
    #[must_use]
    pub fn new(author: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            text: text.into(),
        }
    }
}

/// Opaque bearer token identifying a session. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken([REDACTED])")
    }
}

/// An authenticated session. Passed explicitly to every call that needs a current user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: SessionToken,
    pub user_id: UserId,
    pub expires_at: OffsetDateTime,
}

impl Session {
    #[must_use]
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        now >= self.expires_at
    }
}

/// Result of flipping a (user, quote) favorite pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Added,
    Removed,
}

impl ToggleOutcome {
    /// Favorite state after the toggle.
    #[must_use]
    pub fn is_favorite(self) -> bool {
        matches!(self, Self::Added)
    }
}

/// Everything the home page shows to the current user.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HomeFeed {
    pub quotes: Vec<Quote>,
    /// All users except the current one.
    pub users: Vec<User>,
    pub favorite_ids: Vec<QuoteId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserQuotes {
    pub user: User,
    pub quotes: Vec<Quote>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::Duration;

    #[test]
    fn session_token_debug_is_redacted() {
        let token = SessionToken::new("abcdef");
        assert!(!format!("{token:?}").contains("abcdef"));
        assert_eq!(token.as_str(), "abcdef");
    }

    #[test]
    fn session_expiry_is_inclusive() {
        let now = OffsetDateTime::now_utc();
        let session = Session {
            token: SessionToken::new("t"),
            user_id: UserId(1),
            expires_at: now,
        };
        assert!(session.is_expired_at(now));
        assert!(!session.is_expired_at(now - Duration::seconds(1)));
    }

    #[test]
    fn toggle_outcome_reports_state() {
        assert!(ToggleOutcome::Added.is_favorite());
        assert!(!ToggleOutcome::Removed.is_favorite());
    }
}
