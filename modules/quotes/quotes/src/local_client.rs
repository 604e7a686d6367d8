use std::sync::Arc;

use async_trait::async_trait;
use quotes_kit::SecretString;
use quotes_sdk::{
    HomeFeed, NewUser, Quote, QuoteDraft, QuoteId, QuotesApi, QuotesError, Session, SessionToken,
    ToggleOutcome, UserId, UserQuotes,
};

use crate::module::ConcreteAppServices;

/// In-process [`QuotesApi`] backed directly by the domain services.
pub struct QuotesLocalClient {
    services: Arc<ConcreteAppServices>,
}

impl QuotesLocalClient {
    #[must_use]
    pub(crate) fn new(services: Arc<ConcreteAppServices>) -> Self {
        Self { services }
    }

    /// Re-resolve the caller's session so revoked, expired or forged sessions are rejected.
    async fn resolve(&self, ctx: &Session) -> Result<Session, QuotesError> {
        self.services
            .identity
            .authenticate(&ctx.token)
            .await
            .map_err(Into::into)
    }
}

#[async_trait]
impl QuotesApi for QuotesLocalClient {
    async fn register(&self, new_user: NewUser) -> Result<UserId, QuotesError> {
        self.services
            .identity
            .register(new_user)
            .await
            .map_err(Into::into)
    }

    async fn login(&self, email: &str, password: &SecretString) -> Result<Session, QuotesError> {
        self.services
            .identity
            .login(email, password)
            .await
            .map_err(Into::into)
    }

    async fn logout(&self, ctx: &Session) -> Result<(), QuotesError> {
        self.services.identity.logout(ctx).await;
        Ok(())
    }

    async fn current_user(&self, token: &SessionToken) -> Option<UserId> {
        self.services.identity.current_user(token).await
    }

    async fn home_feed(&self, ctx: &Session) -> Result<HomeFeed, QuotesError> {
        let ctx = self.resolve(ctx).await?;
        self.services.quotes.home_feed(&ctx).await.map_err(Into::into)
    }

    async fn contribute(&self, ctx: &Session, draft: QuoteDraft) -> Result<Quote, QuotesError> {
        let ctx = self.resolve(ctx).await?;
        self.services
            .quotes
            .create(&ctx, draft)
            .await
            .map_err(Into::into)
    }

    async fn edit_quote(
        &self,
        ctx: &Session,
        id: QuoteId,
        draft: QuoteDraft,
    ) -> Result<Quote, QuotesError> {
        let ctx = self.resolve(ctx).await?;
        self.services
            .quotes
            .edit(&ctx, id, draft)
            .await
            .map_err(Into::into)
    }

    async fn delete_quote(&self, ctx: &Session, id: QuoteId) -> Result<(), QuotesError> {
        let ctx = self.resolve(ctx).await?;
        self.services
            .quotes
            .delete(&ctx, id)
            .await
            .map_err(Into::into)
    }

    async fn toggle_favorite(
        &self,
        ctx: &Session,
        id: QuoteId,
    ) -> Result<ToggleOutcome, QuotesError> {
        let ctx = self.resolve(ctx).await?;
        self.services
            .favorites
            .toggle(&ctx, id)
            .await
            .map_err(Into::into)
    }

    async fn favorites(&self, ctx: &Session) -> Result<Vec<Quote>, QuotesError> {
        let ctx = self.resolve(ctx).await?;
        self.services
            .favorites
            .favorites_of(ctx.user_id)
            .await
            .map_err(Into::into)
    }

    async fn user_quotes(&self, ctx: &Session, user_id: UserId) -> Result<UserQuotes, QuotesError> {
        self.resolve(ctx).await?;
        self.services
            .quotes
            .user_quotes(user_id)
            .await
            .map_err(Into::into)
    }
}
