use async_trait::async_trait;
use quotes_kit::DbConnTrait;
use quotes_sdk::{Quote, QuoteDraft, QuoteId, UserId};
use sea_orm::{
    ActiveModelTrait,
    ActiveValue::{NotSet, Unchanged},
    ColumnTrait, DbErr, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::domain::error::DomainError;
use crate::domain::repos::QuotesRepository;
use crate::infra::storage::db::{db_err, is_foreign_key_violation};
use crate::infra::storage::entity::quote::{ActiveModel as QuoteAM, Column, Entity as QuoteEntity};

/// ORM-based implementation of the `QuotesRepository` trait.
#[derive(Clone, Default)]
pub struct OrmQuotesRepository;

impl OrmQuotesRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QuotesRepository for OrmQuotesRepository {
    async fn get<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        id: QuoteId,
    ) -> Result<Option<Quote>, DomainError> {
        let found = QuoteEntity::find_by_id(id.0)
            .one(conn)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn list_all<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Quote>, DomainError> {
        let quotes = QuoteEntity::find()
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .map_err(db_err)?;
        Ok(quotes.into_iter().map(Into::into).collect())
    }

    async fn list_by_owner<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        owner: UserId,
    ) -> Result<Vec<Quote>, DomainError> {
        let quotes = QuoteEntity::find()
            .filter(Column::UserId.eq(owner.0))
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .map_err(db_err)?;
        Ok(quotes.into_iter().map(Into::into).collect())
    }

    async fn create<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        owner: UserId,
        draft: QuoteDraft,
    ) -> Result<Quote, DomainError> {
        let model = QuoteAM {
            id: NotSet,
            author: Set(draft.author),
            text: Set(draft.text),
            user_id: Set(owner.0),
        }
        .insert(conn)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                DomainError::user_not_found(owner)
            } else {
                db_err(e)
            }
        })?;
        Ok(model.into())
    }

    async fn update<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        id: QuoteId,
        draft: QuoteDraft,
    ) -> Result<Quote, DomainError> {
        let model = QuoteAM {
            id: Unchanged(id.0),
            author: Set(draft.author),
            text: Set(draft.text),
            user_id: NotSet,
        }
        .update(conn)
        .await
        .map_err(|e| match e {
            DbErr::RecordNotUpdated => DomainError::quote_not_found(id),
            other => db_err(other),
        })?;
        Ok(model.into())
    }

    async fn delete<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        id: QuoteId,
    ) -> Result<bool, DomainError> {
        let res = QuoteEntity::delete_by_id(id.0)
            .exec(conn)
            .await
            .map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }
}
