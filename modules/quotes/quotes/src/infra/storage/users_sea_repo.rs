use async_trait::async_trait;
use quotes_kit::DbConnTrait;
use quotes_sdk::{User, UserId};
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::domain::error::DomainError;
use crate::domain::repos::{UserCredentials, UsersRepository};
use crate::infra::storage::db::{db_err, is_unique_violation};
use crate::infra::storage::entity::user::{ActiveModel as UserAM, Column, Entity as UserEntity};

/// ORM-based implementation of the `UsersRepository` trait.
#[derive(Clone, Default)]
pub struct OrmUsersRepository;

impl OrmUsersRepository {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl UsersRepository for OrmUsersRepository {
    async fn get<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        id: UserId,
    ) -> Result<Option<User>, DomainError> {
        let found = UserEntity::find_by_id(id.0)
            .one(conn)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn find_credentials<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        email: &str,
    ) -> Result<Option<UserCredentials>, DomainError> {
        let found = UserEntity::find()
            .filter(Column::Email.eq(email))
            .order_by_asc(Column::Id)
            .one(conn)
            .await
            .map_err(db_err)?;
        Ok(found.map(Into::into))
    }

    async fn email_exists<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        email: &str,
    ) -> Result<bool, DomainError> {
        let count = UserEntity::find()
            .filter(Column::Email.eq(email))
            .count(conn)
            .await
            .map_err(db_err)?;
        Ok(count > 0)
    }

    async fn create<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        email: &str,
        password_hash: &str,
    ) -> Result<User, DomainError> {
        let model = UserAM {
            id: NotSet,
            email: Set(email.to_owned()),
            password_hash: Set(password_hash.to_owned()),
        }
        .insert(conn)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::email_already_exists(email)
            } else {
                db_err(e)
            }
        })?;
        Ok(model.into())
    }

    async fn list_except<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        exclude: UserId,
    ) -> Result<Vec<User>, DomainError> {
        let users = UserEntity::find()
            .filter(Column::Id.ne(exclude.0))
            .order_by_asc(Column::Id)
            .all(conn)
            .await
            .map_err(db_err)?;
        Ok(users.into_iter().map(Into::into).collect())
    }
}
