use quotes_kit::DbError;
use quotes_sdk::{QuoteId, QuotesError, UserId};
use thiserror::Error;

/// Coarse classification used by the transport layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input fails a length or match constraint.
    Validation,
    /// Bad credentials or missing session.
    Auth,
    NotFound,
    Forbidden,
    Conflict,
    /// Store or runtime failure.
    Internal,
}

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Invalid email format: '{email}'")]
    InvalidEmail { email: String },

    #[error("User with email '{email}' already exists")]
    EmailAlreadyExists { email: String },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Authentication required")]
    Unauthenticated,

    #[error("Author too short: {len} characters (min: {min})")]
    AuthorTooShort { len: usize, min: usize },

    #[error("Author too long: {len} characters (max: {max})")]
    AuthorTooLong { len: usize, max: usize },

    #[error("Text too short: {len} characters (min: {min})")]
    TextTooShort { len: usize, min: usize },

    #[error("Text too long: {len} characters (max: {max})")]
    TextTooLong { len: usize, max: usize },

    #[error("Quote not found: {id}")]
    QuoteNotFound { id: QuoteId },

    #[error("User not found: {id}")]
    UserNotFound { id: UserId },

    #[error("User {user_id} does not own quote {quote_id}")]
    Forbidden { quote_id: QuoteId, user_id: UserId },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    #[must_use]
    pub fn invalid_email(email: impl Into<String>) -> Self {
        Self::InvalidEmail {
            email: email.into(),
        }
    }

    #[must_use]
    pub fn email_already_exists(email: impl Into<String>) -> Self {
        Self::EmailAlreadyExists {
            email: email.into(),
        }
    }

    #[must_use]
    pub fn quote_not_found(id: QuoteId) -> Self {
        Self::QuoteNotFound { id }
    }

    #[must_use]
    pub fn user_not_found(id: UserId) -> Self {
        Self::UserNotFound { id }
    }

    #[must_use]
    pub fn forbidden(quote_id: QuoteId, user_id: UserId) -> Self {
        Self::Forbidden { quote_id, user_id }
    }

    #[must_use]
    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::PasswordMismatch
            | Self::InvalidEmail { .. }
            | Self::AuthorTooShort { .. }
            | Self::AuthorTooLong { .. }
            | Self::TextTooShort { .. }
            | Self::TextTooLong { .. } => ErrorCategory::Validation,
            Self::InvalidCredentials | Self::Unauthenticated => ErrorCategory::Auth,
            Self::QuoteNotFound { .. } | Self::UserNotFound { .. } => ErrorCategory::NotFound,
            Self::Forbidden { .. } => ErrorCategory::Forbidden,
            Self::EmailAlreadyExists { .. } => ErrorCategory::Conflict,
            Self::Database { .. } | Self::Internal { .. } => ErrorCategory::Internal,
        }
    }

    /// Request field the error refers to, for validation errors.
    #[must_use]
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::PasswordMismatch => Some("confirmPassword"),
            Self::InvalidEmail { .. } | Self::EmailAlreadyExists { .. } => Some("email"),
            Self::AuthorTooShort { .. } | Self::AuthorTooLong { .. } => Some("author"),
            Self::TextTooShort { .. } | Self::TextTooLong { .. } => Some("text"),
            _ => None,
        }
    }
}

impl From<DbError> for DomainError {
    fn from(e: DbError) -> Self {
        Self::database(e.to_string())
    }
}

/// Convert domain errors to SDK errors for public API consumption.
impl From<DomainError> for QuotesError {
    fn from(e: DomainError) -> Self {
        let message = e.to_string();
        match e {
            DomainError::PasswordMismatch
            | DomainError::InvalidEmail { .. }
            | DomainError::AuthorTooShort { .. }
            | DomainError::AuthorTooLong { .. }
            | DomainError::TextTooShort { .. }
            | DomainError::TextTooLong { .. } => {
                QuotesError::validation(e.field().unwrap_or_default(), message)
            }
            DomainError::InvalidCredentials | DomainError::Unauthenticated => {
                QuotesError::unauthorized(message)
            }
            DomainError::QuoteNotFound { id } => QuotesError::not_found("Quote", id.0),
            DomainError::UserNotFound { id } => QuotesError::not_found("User", id.0),
            DomainError::Forbidden { .. } => QuotesError::forbidden(message),
            DomainError::EmailAlreadyExists { .. } => QuotesError::conflict(message),
            DomainError::Database { .. } | DomainError::Internal { .. } => QuotesError::internal(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_follow_taxonomy() {
        assert_eq!(
            DomainError::PasswordMismatch.category(),
            ErrorCategory::Validation
        );
        assert_eq!(
            DomainError::InvalidCredentials.category(),
            ErrorCategory::Auth
        );
        assert_eq!(
            DomainError::quote_not_found(QuoteId(1)).category(),
            ErrorCategory::NotFound
        );
        assert_eq!(
            DomainError::forbidden(QuoteId(1), UserId(2)).category(),
            ErrorCategory::Forbidden
        );
        assert_eq!(
            DomainError::email_already_exists("a@x.com").category(),
            ErrorCategory::Conflict
        );
        assert_eq!(
            DomainError::database("boom").category(),
            ErrorCategory::Internal
        );
    }

    #[test]
    fn sdk_error_hides_database_details() {
        let sdk: QuotesError = DomainError::database("disk I/O error").into();
        assert_eq!(sdk, QuotesError::Internal);
    }

    #[test]
    fn sdk_validation_error_carries_field() {
        let sdk: QuotesError = DomainError::TextTooShort { len: 3, min: 10 }.into();
        assert!(matches!(sdk, QuotesError::Validation { ref field, .. } if field == "text"));
    }

    #[test]
    fn sdk_not_found_carries_resource() {
        let sdk: QuotesError = DomainError::user_not_found(UserId(9)).into();
        assert_eq!(sdk, QuotesError::not_found("User", 9));
    }
}
