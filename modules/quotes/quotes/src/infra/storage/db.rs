use std::fmt::Display;

use sea_orm::{DbErr, SqlErr};

use crate::domain::error::DomainError;

/// Map any storage error into `DomainError::Database`.
#[must_use]
pub fn db_err(e: impl Display) -> DomainError {
    DomainError::database(e.to_string())
}

#[must_use]
pub fn is_unique_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_)))
}

#[must_use]
pub fn is_foreign_key_violation(e: &DbErr) -> bool {
    matches!(e.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_)))
}
