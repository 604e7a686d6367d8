//! Domain service layer.
//!
//! - `identity`: registration, login, sessions
//! - `quotes`: quote CRUD with ownership checks and the home feed
//! - `favorites`: the per-user favorite toggle
//!
//! Every mutation runs inside a single [`DbProvider::transaction`].

use std::sync::Arc;

use crate::domain::error::DomainError;
use crate::domain::ports::{CredentialHasher, SessionStore};
use crate::domain::repos::{FavoritesRepository, QuotesRepository, UsersRepository};

mod favorites;
mod identity;
mod quotes;

pub use favorites::FavoritesService;
pub use identity::IdentityService;
pub use quotes::QuotesService;

/// Transactional DB entrypoint with errors mapped into [`DomainError`].
pub type DbProvider = quotes_kit::DbProvider<DomainError>;

/// Configuration for the domain services
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub min_author_length: usize,
    pub max_author_length: usize,
    pub min_text_length: usize,
    pub max_text_length: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            min_author_length: 3,
            max_author_length: 300,
            min_text_length: 10,
            max_text_length: 300,
        }
    }
}

// DI Container - aggregates all domain services
pub struct AppServices<U, Q, F>
where
    U: UsersRepository + 'static,
    Q: QuotesRepository + 'static,
    F: FavoritesRepository + 'static,
{
    pub identity: Arc<IdentityService<U>>,
    pub quotes: Arc<QuotesService<Q, F, U>>,
    pub favorites: Arc<FavoritesService<F, Q>>,
}

impl<U, Q, F> Clone for AppServices<U, Q, F>
where
    U: UsersRepository + 'static,
    Q: QuotesRepository + 'static,
    F: FavoritesRepository + 'static,
{
    fn clone(&self) -> Self {
        Self {
            identity: Arc::clone(&self.identity),
            quotes: Arc::clone(&self.quotes),
            favorites: Arc::clone(&self.favorites),
        }
    }
}

impl<U, Q, F> AppServices<U, Q, F>
where
    U: UsersRepository + 'static,
    Q: QuotesRepository + 'static,
    F: FavoritesRepository + 'static,
{
    #[must_use]
    pub fn new(
        users_repo: U,
        quotes_repo: Q,
        favorites_repo: F,
        db: DbProvider,
        hasher: Arc<dyn CredentialHasher>,
        sessions: Arc<dyn SessionStore>,
        config: ServiceConfig,
    ) -> Self {
        let db = Arc::new(db);
        let users_repo = Arc::new(users_repo);
        let quotes_repo = Arc::new(quotes_repo);
        let favorites_repo = Arc::new(favorites_repo);

        Self {
            identity: Arc::new(IdentityService::new(
                Arc::clone(&db),
                Arc::clone(&users_repo),
                hasher,
                sessions,
            )),
            quotes: Arc::new(QuotesService::new(
                Arc::clone(&db),
                Arc::clone(&quotes_repo),
                Arc::clone(&favorites_repo),
                users_repo,
                config,
            )),
            favorites: Arc::new(FavoritesService::new(db, favorites_repo, quotes_repo)),
        }
    }
}
