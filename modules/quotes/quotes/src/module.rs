use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use crate::api::rest::routes;
use crate::config::QuotesConfig;
use crate::domain::ports::{CredentialHasher, SessionStore};
use crate::domain::service::{AppServices, DbProvider};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::{OrmFavoritesRepository, OrmQuotesRepository, OrmUsersRepository};
use crate::infra::{Argon2Hasher, InMemorySessionStore};
use crate::local_client::QuotesLocalClient;
use quotes_sdk::QuotesApi;

/// Type alias for the concrete `AppServices` type used with ORM repositories.
pub(crate) type ConcreteAppServices =
    AppServices<OrmUsersRepository, OrmQuotesRepository, OrmFavoritesRepository>;

/// The quotes module: owns the wired services and hands out the REST
/// router and the in-process client.
#[derive(Clone)]
pub struct QuotesModule {
    services: Arc<ConcreteAppServices>,
    config: QuotesConfig,
}

impl QuotesModule {
    /// Apply pending schema migrations.
    ///
    /// # Errors
    /// Returns an error if a migration fails.
    pub async fn migrate(conn: &DatabaseConnection) -> anyhow::Result<()> {
        info!("Running quotes module database migrations");
        Migrator::up(conn, None).await?;
        info!("Quotes module database migrations completed successfully");
        Ok(())
    }

    /// Wire repositories, the Argon2 hasher and the in-memory session store.
    ///
    /// # Errors
    /// Returns an error if the configuration is inconsistent or the hashing
    /// parameters are rejected.
    pub fn init(conn: DatabaseConnection, config: QuotesConfig) -> anyhow::Result<Self> {
        info!("Initializing quotes module");

        let ph = &config.password_hash;
        let hasher = Argon2Hasher::with_params(ph.memory_kib, ph.iterations, ph.parallelism)?;
        let sessions = InMemorySessionStore::new(config.session_ttl());

        let module = Self::from_parts(conn, config, Arc::new(hasher), Arc::new(sessions))?;
        info!("Quotes module initialized");
        Ok(module)
    }

    /// Wire the module with caller-provided adapters.
    ///
    /// # Errors
    /// Returns an error if the configuration is inconsistent.
    pub fn from_parts(
        conn: DatabaseConnection,
        config: QuotesConfig,
        hasher: Arc<dyn CredentialHasher>,
        sessions: Arc<dyn SessionStore>,
    ) -> anyhow::Result<Self> {
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("invalid quotes config: {e}"))?;

        let services = AppServices::new(
            OrmUsersRepository::new(),
            OrmQuotesRepository::new(),
            OrmFavoritesRepository::new(),
            DbProvider::new(conn),
            hasher,
            sessions,
            config.service_config(),
        );

        Ok(Self {
            services: Arc::new(services),
            config,
        })
    }

    #[must_use]
    pub fn router(&self) -> Router {
        routes::router(Arc::clone(&self.services), self.config.request_timeout())
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn QuotesApi> {
        Arc::new(QuotesLocalClient::new(Arc::clone(&self.services)))
    }
}
