//! Database connection and transaction plumbing on top of `SeaORM`.

use std::{fmt, future::Future, marker::PhantomData, pin::Pin, time::Duration};

use sea_orm::{
    ConnectOptions, Database, DatabaseConnection, DatabaseTransaction, DbErr, TransactionError,
    TransactionTrait,
};
use serde::{Deserialize, Serialize};

/// Connection-like handle accepted by repositories (pool or transaction).
pub use sea_orm::ConnectionTrait as DbConnTrait;

/// DSN that keeps the whole database in process memory.
pub const SQLITE_MEMORY_DSN: &str = "sqlite::memory:";

#[derive(thiserror::Error, Debug)]
pub enum DbError {
    #[error("database error: {0}")]
    Sea(#[from] DbErr),
    #[error("invalid database configuration: {0}")]
    InvalidConfig(String),
}

/// Database section of the application config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DbConfig {
    pub dsn: String,
    pub max_connections: u32,
    pub connect_timeout_secs: u64,
}

impl Default for DbConfig {
    fn default() -> Self {
        Self {
            dsn: "sqlite://quotes.db?mode=rwc".to_owned(),
            max_connections: 5,
            connect_timeout_secs: 10,
        }
    }
}

impl DbConfig {
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            dsn: SQLITE_MEMORY_DSN.to_owned(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn is_memory(&self) -> bool {
        self.dsn.starts_with("sqlite::memory:") || self.dsn.contains("mode=memory")
    }
}

/// Open a pooled connection for `cfg`.
///
/// In-memory `SQLite` is pinned to a single pooled connection so every query
/// sees the same database.
///
/// # Errors
/// Returns `DbError::InvalidConfig` for an empty DSN or zero pool size, and
/// `DbError::Sea` if the connection cannot be established.
pub async fn connect(cfg: &DbConfig) -> Result<DatabaseConnection, DbError> {
    if cfg.dsn.trim().is_empty() {
        return Err(DbError::InvalidConfig("dsn must not be empty".to_owned()));
    }
    if cfg.max_connections == 0 {
        return Err(DbError::InvalidConfig(
            "max_connections must be greater than zero".to_owned(),
        ));
    }

    let mut opts = ConnectOptions::new(cfg.dsn.clone());
    opts.connect_timeout(Duration::from_secs(cfg.connect_timeout_secs))
        .sqlx_logging(false);
    if cfg.is_memory() {
        opts.max_connections(1).min_connections(1);
    } else {
        opts.max_connections(cfg.max_connections);
    }

    let conn = Database::connect(opts).await?;
    tracing::debug!(memory = cfg.is_memory(), "database connection established");
    Ok(conn)
}

/// Thin, reusable DB entrypoint for application services.
///
/// Services store this behind an `Arc` and use:
///
/// ```ignore
/// let conn = self.db.conn();
/// let out = self.db.transaction(|tx| Box::pin(async move { /* ... */ })).await?;
/// ```
pub struct DbProvider<E> {
    conn: DatabaseConnection,
    _error: PhantomData<fn() -> E>,
}

impl<E> Clone for DbProvider<E> {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
            _error: PhantomData,
        }
    }
}

impl<E> DbProvider<E>
where
    E: From<DbError> + fmt::Display + fmt::Debug + Send + 'static,
{
    #[must_use]
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            _error: PhantomData,
        }
    }

    /// Non-transactional connection for reads.
    #[must_use]
    pub fn conn(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// Execute a closure inside a database transaction.
    ///
    /// The transaction commits when the closure returns `Ok` and rolls back otherwise.
    ///
    /// # Errors
    ///
    /// Returns `E` if:
    /// - starting or committing the transaction fails (mapped from `DbError`)
    /// - the closure returns an error
    pub async fn transaction<T, F>(&self, f: F) -> Result<T, E>
    where
        T: Send + 'static,
        F: for<'c> FnOnce(
                &'c DatabaseTransaction,
            ) -> Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'c>>
            + Send,
    {
        self.conn
            .transaction::<F, T, E>(f)
            .await
            .map_err(|e| match e {
                TransactionError::Connection(err) => E::from(DbError::Sea(err)),
                TransactionError::Transaction(err) => err,
            })
    }
}
