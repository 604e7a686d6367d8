//! Field rules for registration and quote drafts.
//!
//! Lengths are counted in characters, not bytes.

use quotes_sdk::QuoteDraft;

use crate::domain::error::DomainError;
use crate::domain::service::ServiceConfig;

pub const EMAIL_MAX_LENGTH: usize = 120;

/// Non-empty, bounded, and `local@domain` with both parts present.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    let len = email.chars().count();
    if len == 0 || len > EMAIL_MAX_LENGTH || email.chars().any(char::is_whitespace) {
        return Err(DomainError::invalid_email(email));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => {
            Ok(())
        }
        _ => Err(DomainError::invalid_email(email)),
    }
}

/// Author is checked before text.
pub fn validate_draft(draft: &QuoteDraft, cfg: &ServiceConfig) -> Result<(), DomainError> {
    let author_len = draft.author.chars().count();
    if author_len < cfg.min_author_length {
        return Err(DomainError::AuthorTooShort {
            len: author_len,
            min: cfg.min_author_length,
        });
    }
    if author_len > cfg.max_author_length {
        return Err(DomainError::AuthorTooLong {
            len: author_len,
            max: cfg.max_author_length,
        });
    }

    let text_len = draft.text.chars().count();
    if text_len < cfg.min_text_length {
        return Err(DomainError::TextTooShort {
            len: text_len,
            min: cfg.min_text_length,
        });
    }
    if text_len > cfg.max_text_length {
        return Err(DomainError::TextTooLong {
            len: text_len,
            max: cfg.max_text_length,
        });
    }
    Ok(())
}
