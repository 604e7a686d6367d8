#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(dead_code)] // Not every test binary uses every helper

//! Test support utilities for `quotes` integration tests.

use std::sync::Arc;
use std::time::Duration;

use quotes::config::QuotesConfig;
use quotes::domain::ports::CredentialHasher;
use quotes::domain::service::{AppServices, DbProvider, ServiceConfig};
use quotes::infra::storage::{OrmFavoritesRepository, OrmQuotesRepository, OrmUsersRepository};
use quotes::infra::{Argon2Hasher, InMemorySessionStore};
use quotes::QuotesModule;
use quotes_kit::db::{self, DbConfig};
use quotes_kit::SecretString;
use quotes_sdk::{NewUser, Session, UserId};
use sea_orm::DatabaseConnection;

pub type TestServices = AppServices<OrmUsersRepository, OrmQuotesRepository, OrmFavoritesRepository>;

/// Create a fresh in-memory `SQLite` database with migrations applied.
///
/// # Panics
/// Panics if the database connection or migrations fail.
pub async fn inmem_db() -> DatabaseConnection {
    let conn = db::connect(&DbConfig::in_memory())
        .await
        .expect("Failed to connect to in-memory database");
    QuotesModule::migrate(&conn)
        .await
        .expect("Failed to run migrations");
    conn
}

/// Argon2id with the smallest accepted cost so tests stay fast.
pub fn fast_hasher() -> Arc<dyn CredentialHasher> {
    Arc::new(Argon2Hasher::with_params(8, 1, 1).expect("valid argon2 params"))
}

pub struct TestContext {
    pub db: DatabaseConnection,
    pub services: TestServices,
    pub sessions: Arc<InMemorySessionStore>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_session_ttl(Duration::from_secs(3600)).await
    }

    pub async fn with_session_ttl(ttl: Duration) -> Self {
        let db = inmem_db().await;
        let sessions = Arc::new(InMemorySessionStore::new(ttl));
        let services = AppServices::new(
            OrmUsersRepository::new(),
            OrmQuotesRepository::new(),
            OrmFavoritesRepository::new(),
            DbProvider::new(db.clone()),
            fast_hasher(),
            sessions.clone(),
            ServiceConfig::default(),
        );
        Self {
            db,
            services,
            sessions,
        }
    }

    pub async fn register(&self, email: &str, password: &str) -> UserId {
        self.services
            .identity
            .register(new_user(email, password, password))
            .await
            .expect("registration should succeed")
    }

    pub async fn login(&self, email: &str, password: &str) -> Session {
        self.services
            .identity
            .login(email, &SecretString::new(password))
            .await
            .expect("login should succeed")
    }

    /// Register a user and open a session for it.
    pub async fn signed_in(&self, email: &str) -> Session {
        self.register(email, "pw-secret").await;
        self.login(email, "pw-secret").await
    }
}

pub fn new_user(email: &str, password: &str, confirm: &str) -> NewUser {
    NewUser {
        email: email.to_owned(),
        password: SecretString::new(password),
        confirm_password: SecretString::new(confirm),
    }
}

/// Module wired with the fast hasher, for REST and client tests.
pub async fn test_module() -> QuotesModule {
    let db = inmem_db().await;
    let config = QuotesConfig::default();
    let sessions = Arc::new(InMemorySessionStore::new(config.session_ttl()));
    QuotesModule::from_parts(db, config, fast_hasher(), sessions).expect("module wiring")
}
