use async_trait::async_trait;
use quotes_kit::DbConnTrait;
use quotes_sdk::{Quote, QuoteId, UserId};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set};
use sea_orm::sea_query::JoinType;

use crate::domain::error::DomainError;
use crate::domain::repos::FavoritesRepository;
use crate::infra::storage::db::{db_err, is_foreign_key_violation};
use crate::infra::storage::entity::favorite::{
    self, ActiveModel as FavoriteAM, Entity as FavoriteEntity,
};
use crate::infra::storage::entity::quote::{self, Entity as QuoteEntity};

/// ORM-based implementation of the `FavoritesRepository` trait.
#[derive(Clone, Default)]
pub struct OrmFavoritesRepository;

impl OrmFavoritesRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FavoritesRepository for OrmFavoritesRepository {
    async fn exists<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: UserId,
        quote_id: QuoteId,
    ) -> Result<bool, DomainError> {
        let found = FavoriteEntity::find_by_id((user_id.0, quote_id.0))
            .one(conn)
            .await
            .map_err(db_err)?;
        Ok(found.is_some())
    }

    async fn add<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: UserId,
        quote_id: QuoteId,
    ) -> Result<(), DomainError> {
        let am = FavoriteAM {
            user_id: Set(user_id.0),
            quote_id: Set(quote_id.0),
        };
        FavoriteEntity::insert(am)
            .exec_without_returning(conn)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    DomainError::quote_not_found(quote_id)
                } else {
                    db_err(e)
                }
            })?;
        Ok(())
    }

    async fn remove<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: UserId,
        quote_id: QuoteId,
    ) -> Result<bool, DomainError> {
        let res = FavoriteEntity::delete_by_id((user_id.0, quote_id.0))
            .exec(conn)
            .await
            .map_err(db_err)?;
        Ok(res.rows_affected > 0)
    }

    async fn remove_all_for_quote<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        quote_id: QuoteId,
    ) -> Result<u64, DomainError> {
        let res = FavoriteEntity::delete_many()
            .filter(favorite::Column::QuoteId.eq(quote_id.0))
            .exec(conn)
            .await
            .map_err(db_err)?;
        Ok(res.rows_affected)
    }

    async fn quote_ids_of<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: UserId,
    ) -> Result<Vec<QuoteId>, DomainError> {
        let rows = FavoriteEntity::find()
            .filter(favorite::Column::UserId.eq(user_id.0))
            .order_by_asc(favorite::Column::QuoteId)
            .all(conn)
            .await
            .map_err(db_err)?;
        Ok(rows.into_iter().map(|f| QuoteId(f.quote_id)).collect())
    }

    async fn quotes_of<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        user_id: UserId,
    ) -> Result<Vec<Quote>, DomainError> {
        let quotes = QuoteEntity::find()
            .join(JoinType::InnerJoin, quote::Relation::Favorites.def())
            .filter(favorite::Column::UserId.eq(user_id.0))
            .order_by_asc(quote::Column::Id)
            .all(conn)
            .await
            .map_err(db_err)?;
        Ok(quotes.into_iter().map(Into::into).collect())
    }
}
