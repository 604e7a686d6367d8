use async_trait::async_trait;
use quotes_kit::DbConnTrait;
use quotes_sdk::{User, UserId};

use crate::domain::error::DomainError;

/// Login material for a user. Never leaves the domain.
#[derive(Clone)]
pub struct UserCredentials {
    pub id: UserId,
    pub password_hash: String,
}

impl std::fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentials")
            .field("id", &self.id)
            .field("password_hash", &"[REDACTED]")
            .finish()
    }
}

/// Repository trait for User persistence operations.
///
/// All methods accept `conn: &C`, either a `DatabaseConnection` or a
/// `DatabaseTransaction`, so services decide the transaction boundary.
#[async_trait]
pub trait UsersRepository: Send + Sync {
    async fn get<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        id: UserId,
    ) -> Result<Option<User>, DomainError>;

    async fn find_credentials<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        email: &str,
    ) -> Result<Option<UserCredentials>, DomainError>;

    async fn email_exists<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        email: &str,
    ) -> Result<bool, DomainError>;

    /// Insert a user. A concurrent duplicate surfaces as `EmailAlreadyExists`.
    async fn create<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        email: &str,
        password_hash: &str,
    ) -> Result<User, DomainError>;

    /// All users except `exclude`, ordered by id.
    async fn list_except<C: DbConnTrait + Send + Sync>(
        &self,
        conn: &C,
        exclude: UserId,
    ) -> Result<Vec<User>, DomainError>;
}
