use axum::http::StatusCode;
use quotes_kit::problem::current_trace_id;
use quotes_kit::{Problem, ValidationViolation};

use crate::domain::error::{DomainError, ErrorCategory};

const ERROR_TYPE_BASE: &str = "https://errors.quotes.local";

/// Machine-readable code carried in `Problem.code`.
fn error_code(e: &DomainError) -> &'static str {
    match e {
        DomainError::PasswordMismatch => "QUOTES_PASSWORD_MISMATCH",
        DomainError::InvalidEmail { .. } => "QUOTES_INVALID_EMAIL",
        DomainError::EmailAlreadyExists { .. } => "QUOTES_EMAIL_ALREADY_EXISTS",
        DomainError::InvalidCredentials => "QUOTES_INVALID_CREDENTIALS",
        DomainError::Unauthenticated => "QUOTES_UNAUTHENTICATED",
        DomainError::AuthorTooShort { .. } => "QUOTES_AUTHOR_TOO_SHORT",
        DomainError::AuthorTooLong { .. } => "QUOTES_AUTHOR_TOO_LONG",
        DomainError::TextTooShort { .. } => "QUOTES_TEXT_TOO_SHORT",
        DomainError::TextTooLong { .. } => "QUOTES_TEXT_TOO_LONG",
        DomainError::QuoteNotFound { .. } => "QUOTES_QUOTE_NOT_FOUND",
        DomainError::UserNotFound { .. } => "QUOTES_USER_NOT_FOUND",
        DomainError::Forbidden { .. } => "QUOTES_FORBIDDEN",
        DomainError::Database { .. } | DomainError::Internal { .. } => "QUOTES_INTERNAL",
    }
}

/// Map domain error to RFC9457 Problem
pub fn domain_error_to_problem(e: &DomainError) -> Problem {
    let code = error_code(e);
    let (status, title) = match e.category() {
        ErrorCategory::Validation => (StatusCode::BAD_REQUEST, "Validation Failed"),
        ErrorCategory::Auth => (StatusCode::UNAUTHORIZED, "Unauthorized"),
        ErrorCategory::NotFound => (StatusCode::NOT_FOUND, "Not Found"),
        ErrorCategory::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
        ErrorCategory::Conflict => (StatusCode::CONFLICT, "Conflict"),
        ErrorCategory::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
    };

    let detail = if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %e, "Internal error occurred");
        "An internal error occurred".to_owned()
    } else {
        e.to_string()
    };

    let type_slug = code.trim_start_matches("QUOTES_").to_lowercase().replace('_', "-");
    let mut problem = Problem::new(status, title, detail.clone())
        .with_type(format!("{ERROR_TYPE_BASE}/{type_slug}"))
        .with_code(code);

    if status == StatusCode::BAD_REQUEST
        && let Some(field) = e.field()
    {
        problem = problem.with_errors(vec![ValidationViolation {
            field: field.to_owned(),
            message: detail,
            code: Some(code.to_owned()),
        }]);
    }

    if let Some(id) = current_trace_id() {
        problem = problem.with_trace_id(id);
    }

    problem
}

impl From<DomainError> for Problem {
    fn from(e: DomainError) -> Self {
        domain_error_to_problem(&e)
    }
}
