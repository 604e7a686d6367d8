use async_trait::async_trait;
use quotes_kit::DbConnTrait;
use quotes_sdk::{Quote, QuoteDraft, QuoteId, UserId};

use crate::domain::error::DomainError;

/// Repository trait for Quote persistence operations. Lists are ordered by id.
#[async_trait]
pub trait QuotesRepository: Send + Sync {
    async fn get<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        id: QuoteId,
    ) -> Result<Option<Quote>, DomainError>;

    async fn list_all<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Quote>, DomainError>;

    async fn list_by_owner<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        owner: UserId,
    ) -> Result<Vec<Quote>, DomainError>;

    async fn create<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        owner: UserId,
        draft: QuoteDraft,
    ) -> Result<Quote, DomainError>;

    /// Overwrite author and text. Id and owner are left untouched.
    async fn update<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        id: QuoteId,
        draft: QuoteDraft,
    ) -> Result<Quote, DomainError>;

    /// Returns `false` when no row matched.
    async fn delete<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        id: QuoteId,
    ) -> Result<bool, DomainError>;
}
