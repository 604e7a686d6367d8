use std::sync::Arc;

use quotes_sdk::{HomeFeed, Quote, QuoteDraft, QuoteId, Session, UserId, UserQuotes};
use tracing::{debug, info, instrument};

use crate::domain::error::DomainError;
use crate::domain::fields;
use crate::domain::repos::{FavoritesRepository, QuotesRepository, UsersRepository};
use crate::domain::service::{DbProvider, ServiceConfig};

/// Quote lifecycle. Only the owner may edit or delete a quote.
pub struct QuotesService<Q: QuotesRepository, F: FavoritesRepository, U: UsersRepository> {
    db: Arc<DbProvider>,
    quotes: Arc<Q>,
    favorites: Arc<F>,
    users: Arc<U>,
    config: ServiceConfig,
}

impl<Q, F, U> QuotesService<Q, F, U>
where
    Q: QuotesRepository + 'static,
    F: FavoritesRepository + 'static,
    U: UsersRepository + 'static,
{
    #[must_use]
    pub fn new(
        db: Arc<DbProvider>,
        quotes: Arc<Q>,
        favorites: Arc<F>,
        users: Arc<U>,
        config: ServiceConfig,
    ) -> Self {
        Self {
            db,
            quotes,
            favorites,
            users,
            config,
        }
    }

    /// Contribute a quote owned by the session user.
    #[instrument(skip(self, ctx, draft), fields(user_id = %ctx.user_id))]
    pub async fn create(&self, ctx: &Session, draft: QuoteDraft) -> Result<Quote, DomainError> {
        info!("Creating quote");

        fields::validate_draft(&draft, &self.config)?;

        let quotes = Arc::clone(&self.quotes);
        let owner = ctx.user_id;
        let quote = self
            .db
            .transaction(move |tx| Box::pin(async move { quotes.create(tx, owner, draft).await }))
            .await?;

        info!(quote_id = %quote.id, "Quote created");
        Ok(quote)
    }

    #[instrument(skip(self), fields(quote_id = %id))]
    pub async fn get(&self, id: QuoteId) -> Result<Quote, DomainError> {
        debug!("Getting quote by id");
        self.quotes
            .get(self.db.conn(), id)
            .await?
            .ok_or_else(|| DomainError::quote_not_found(id))
    }

    /// Checks run in order: existence, ownership, field lengths.
    #[instrument(skip(self, ctx, draft), fields(quote_id = %id, user_id = %ctx.user_id))]
    pub async fn edit(
        &self,
        ctx: &Session,
        id: QuoteId,
        draft: QuoteDraft,
    ) -> Result<Quote, DomainError> {
        info!("Editing quote");

        let quotes = Arc::clone(&self.quotes);
        let requester = ctx.user_id;
        let config = self.config.clone();
        let quote = self
            .db
            .transaction(move |tx| {
                Box::pin(async move {
                    let existing = quotes
                        .get(tx, id)
                        .await?
                        .ok_or_else(|| DomainError::quote_not_found(id))?;
                    if existing.owner != requester {
                        return Err(DomainError::forbidden(id, requester));
                    }
                    fields::validate_draft(&draft, &config)?;
                    quotes.update(tx, id, draft).await
                })
            })
            .await?;

        info!("Quote updated");
        Ok(quote)
    }

    /// Deletes the quote and every favorite that references it in one transaction.
    #[instrument(skip(self, ctx), fields(quote_id = %id, user_id = %ctx.user_id))]
    pub async fn delete(&self, ctx: &Session, id: QuoteId) -> Result<(), DomainError> {
        info!("Deleting quote");

        let quotes = Arc::clone(&self.quotes);
        let favorites = Arc::clone(&self.favorites);
        let requester = ctx.user_id;
        let removed_favorites = self
            .db
            .transaction(move |tx| {
                Box::pin(async move {
                    let existing = quotes
                        .get(tx, id)
                        .await?
                        .ok_or_else(|| DomainError::quote_not_found(id))?;
                    if existing.owner != requester {
                        return Err(DomainError::forbidden(id, requester));
                    }
                    let removed = favorites.remove_all_for_quote(tx, id).await?;
                    if !quotes.delete(tx, id).await? {
                        return Err(DomainError::quote_not_found(id));
                    }
                    Ok(removed)
                })
            })
            .await?;

        info!(removed_favorites, "Quote deleted");
        Ok(())
    }

    pub async fn list_all(&self) -> Result<Vec<Quote>, DomainError> {
        self.quotes.list_all(self.db.conn()).await
    }

    pub async fn list_by_owner(&self, owner: UserId) -> Result<Vec<Quote>, DomainError> {
        self.quotes.list_by_owner(self.db.conn(), owner).await
    }

    /// Quotes of an existing user; `UserNotFound` otherwise.
    #[instrument(skip(self), fields(owner_id = %user_id))]
    pub async fn user_quotes(&self, user_id: UserId) -> Result<UserQuotes, DomainError> {
        debug!("Listing quotes of user");
        let conn = self.db.conn();
        let user = self
            .users
            .get(conn, user_id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(user_id))?;
        let quotes = self.quotes.list_by_owner(conn, user_id).await?;
        Ok(UserQuotes { user, quotes })
    }

    /// All quotes, every other user, and the ids the session user has favorited.
    #[instrument(skip(self, ctx), fields(user_id = %ctx.user_id))]
    pub async fn home_feed(&self, ctx: &Session) -> Result<HomeFeed, DomainError> {
        let conn = self.db.conn();
        let quotes = self.quotes.list_all(conn).await?;
        let users = self.users.list_except(conn, ctx.user_id).await?;
        let favorite_ids = self.favorites.quote_ids_of(conn, ctx.user_id).await?;

        debug!(
            quotes = quotes.len(),
            users = users.len(),
            favorites = favorite_ids.len(),
            "Built home feed"
        );
        Ok(HomeFeed {
            quotes,
            users,
            favorite_ids,
        })
    }
}
