use std::sync::Arc;

use quotes_sdk::{Quote, QuoteId, Session, ToggleOutcome, UserId};
use tracing::{info, instrument};

use crate::domain::error::DomainError;
use crate::domain::repos::{FavoritesRepository, QuotesRepository};
use crate::domain::service::DbProvider;

/// Per-user favorite set. `toggle` is the only mutator.
pub struct FavoritesService<F: FavoritesRepository, Q: QuotesRepository> {
    db: Arc<DbProvider>,
    favorites: Arc<F>,
    quotes: Arc<Q>,
}

impl<F, Q> FavoritesService<F, Q>
where
    F: FavoritesRepository + 'static,
    Q: QuotesRepository + 'static,
{
    #[must_use]
    pub fn new(db: Arc<DbProvider>, favorites: Arc<F>, quotes: Arc<Q>) -> Self {
        Self {
            db,
            favorites,
            quotes,
        }
    }

    /// Flip the (session user, quote) pair. Any quote may be favorited, including one's own.
    #[instrument(skip(self, ctx), fields(quote_id = %quote_id, user_id = %ctx.user_id))]
    pub async fn toggle(
        &self,
        ctx: &Session,
        quote_id: QuoteId,
    ) -> Result<ToggleOutcome, DomainError> {
        let favorites = Arc::clone(&self.favorites);
        let quotes = Arc::clone(&self.quotes);
        let user_id = ctx.user_id;
        let outcome = self
            .db
            .transaction(move |tx| {
                Box::pin(async move {
                    if quotes.get(tx, quote_id).await?.is_none() {
                        return Err(DomainError::quote_not_found(quote_id));
                    }
                    if favorites.exists(tx, user_id, quote_id).await? {
                        favorites.remove(tx, user_id, quote_id).await?;
                        Ok(ToggleOutcome::Removed)
                    } else {
                        favorites.add(tx, user_id, quote_id).await?;
                        Ok(ToggleOutcome::Added)
                    }
                })
            })
            .await?;

        info!(?outcome, "Favorite toggled");
        Ok(outcome)
    }

    pub async fn is_favorite(
        &self,
        user_id: UserId,
        quote_id: QuoteId,
    ) -> Result<bool, DomainError> {
        self.favorites
            .exists(self.db.conn(), user_id, quote_id)
            .await
    }

    /// Favorited quotes ordered by id.
    pub async fn favorites_of(&self, user_id: UserId) -> Result<Vec<Quote>, DomainError> {
        self.favorites.quotes_of(self.db.conn(), user_id).await
    }
}
