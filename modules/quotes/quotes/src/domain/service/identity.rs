use std::sync::Arc;

use quotes_kit::SecretString;
use quotes_sdk::{NewUser, Session, SessionToken, User, UserId};
use tracing::{debug, info, instrument, warn};

use crate::domain::error::DomainError;
use crate::domain::fields;
use crate::domain::ports::{CredentialHasher, SessionStore};
use crate::domain::repos::UsersRepository;
use crate::domain::service::DbProvider;

/// Registration, login and session resolution.
pub struct IdentityService<U: UsersRepository> {
    db: Arc<DbProvider>,
    users: Arc<U>,
    hasher: Arc<dyn CredentialHasher>,
    sessions: Arc<dyn SessionStore>,
}

impl<U: UsersRepository + 'static> IdentityService<U> {
    #[must_use]
    pub fn new(
        db: Arc<DbProvider>,
        users: Arc<U>,
        hasher: Arc<dyn CredentialHasher>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            db,
            users,
            hasher,
            sessions,
        }
    }

    /// Create an account. The new user is not logged in.
    #[instrument(skip(self, new_user), fields(email = %new_user.email))]
    pub async fn register(&self, new_user: NewUser) -> Result<UserId, DomainError> {
        info!("Registering new user");

        let NewUser {
            email,
            password,
            confirm_password,
        } = new_user;

        if password != confirm_password {
            debug!("Registration rejected: password confirmation mismatch");
            return Err(DomainError::PasswordMismatch);
        }
        fields::validate_email(&email)?;

        let password_hash = self.hash_password(password).await?;

        let users = Arc::clone(&self.users);
        let user = self
            .db
            .transaction(move |tx| {
                Box::pin(async move {
                    if users.email_exists(tx, &email).await? {
                        return Err(DomainError::email_already_exists(email));
                    }
                    users.create(tx, &email, &password_hash).await
                })
            })
            .await?;

        info!(user_id = %user.id, "User registered");
        Ok(user.id)
    }

    /// Unknown email and wrong password yield the same `InvalidCredentials`.
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &SecretString) -> Result<Session, DomainError> {
        debug!("Attempting login");

        let Some(credentials) = self
            .users
            .find_credentials(self.db.conn(), email)
            .await?
        else {
            warn!("Login failed: unknown email");
            return Err(DomainError::InvalidCredentials);
        };

        if !self
            .verify_password(password.clone(), credentials.password_hash)
            .await?
        {
            warn!(user_id = %credentials.id, "Login failed: wrong password");
            return Err(DomainError::InvalidCredentials);
        }

        let session = self.sessions.create(credentials.id).await?;
        info!(user_id = %session.user_id, "User logged in");
        Ok(session)
    }

    /// Revoke the session. Revoking an already revoked session is a no-op.
    #[instrument(skip(self, ctx), fields(user_id = %ctx.user_id))]
    pub async fn logout(&self, ctx: &Session) {
        let revoked = self.sessions.revoke(&ctx.token).await;
        info!(revoked, "User logged out");
    }

    /// `None` for unknown, revoked or expired tokens.
    pub async fn current_user(&self, token: &SessionToken) -> Option<UserId> {
        self.sessions.resolve(token).await.map(|s| s.user_id)
    }

    /// Resolve a token into its session or fail with `Unauthenticated`.
    pub async fn authenticate(&self, token: &SessionToken) -> Result<Session, DomainError> {
        self.sessions
            .resolve(token)
            .await
            .ok_or(DomainError::Unauthenticated)
    }

    /// Public record of the current user.
    #[instrument(skip(self, ctx), fields(user_id = %ctx.user_id))]
    pub async fn me(&self, ctx: &Session) -> Result<User, DomainError> {
        self.users
            .get(self.db.conn(), ctx.user_id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(ctx.user_id))
    }

    async fn hash_password(&self, password: SecretString) -> Result<String, DomainError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| DomainError::internal(format!("password hashing task failed: {e}")))?
    }

    async fn verify_password(
        &self,
        password: SecretString,
        password_hash: String,
    ) -> Result<bool, DomainError> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.verify(&password, &password_hash))
            .await
            .map_err(|e| DomainError::internal(format!("password verify task failed: {e}")))?
    }
}
