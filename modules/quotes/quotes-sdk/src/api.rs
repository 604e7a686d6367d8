//! `QuotesApi` trait definition.

use async_trait::async_trait;
use quotes_kit::SecretString;

use crate::errors::QuotesError;
use crate::models::{
    HomeFeed, NewUser, Quote, QuoteDraft, QuoteId, Session, SessionToken, ToggleOutcome, UserId,
    UserQuotes,
};

/// In-process API of the quotes module.
///
/// Every operation other than `register`, `login` and `current_user` takes the
/// caller's [`Session`] as its identity context.
#[async_trait]
pub trait QuotesApi: Send + Sync {
    /// Register a new account. Does not log the user in.
    async fn register(&self, new_user: NewUser) -> Result<UserId, QuotesError>;

    async fn login(&self, email: &str, password: &SecretString) -> Result<Session, QuotesError>;

    /// Invalidate the session. Idempotent.
    async fn logout(&self, ctx: &Session) -> Result<(), QuotesError>;

    /// `None` for unknown or expired tokens.
    async fn current_user(&self, token: &SessionToken) -> Option<UserId>;

    /// All quotes, all other users and the caller's favorite ids.
    async fn home_feed(&self, ctx: &Session) -> Result<HomeFeed, QuotesError>;

    async fn contribute(&self, ctx: &Session, draft: QuoteDraft) -> Result<Quote, QuotesError>;

    /// Only the owner may edit.
    async fn edit_quote(
        &self,
        ctx: &Session,
        id: QuoteId,
        draft: QuoteDraft,
    ) -> Result<Quote, QuotesError>;

    /// Only the owner may delete. Removes the quote from every favorite set.
    async fn delete_quote(&self, ctx: &Session, id: QuoteId) -> Result<(), QuotesError>;

    /// Flip the caller's favorite state for the quote.
    async fn toggle_favorite(
        &self,
        ctx: &Session,
        id: QuoteId,
    ) -> Result<ToggleOutcome, QuotesError>;

    async fn favorites(&self, ctx: &Session) -> Result<Vec<Quote>, QuotesError>;

    async fn user_quotes(&self, ctx: &Session, user_id: UserId)
    -> Result<UserQuotes, QuotesError>;
}
