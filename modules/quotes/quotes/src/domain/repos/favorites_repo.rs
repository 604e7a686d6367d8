use async_trait::async_trait;
use quotes_kit::DbConnTrait;
use quotes_sdk::{Quote, QuoteId, UserId};

use crate::domain::error::DomainError;

/// Repository trait for the (user, quote) favorites relation.
#[async_trait]
pub trait FavoritesRepository: Send + Sync {
    async fn exists<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: UserId,
        quote_id: QuoteId,
    ) -> Result<bool, DomainError>;

    async fn add<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: UserId,
        quote_id: QuoteId,
    ) -> Result<(), DomainError>;

    /// Returns `false` when the pair was absent.
    async fn remove<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: UserId,
        quote_id: QuoteId,
    ) -> Result<bool, DomainError>;

    /// Drop every pair that references `quote_id`. Returns the number removed.
    async fn remove_all_for_quote<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        quote_id: QuoteId,
    ) -> Result<u64, DomainError>;

    async fn quote_ids_of<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: UserId,
    ) -> Result<Vec<QuoteId>, DomainError>;

    /// Favorited quotes of `user_id`, ordered by quote id.
    async fn quotes_of<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: UserId,
    ) -> Result<Vec<Quote>, DomainError>;
}
