use std::sync::Arc;

use axum::extract::{Extension, Request};
use axum::middleware::Next;
use axum::response::Response;
use quotes_kit::Problem;
use quotes_kit::auth::extract_bearer_token;
use quotes_sdk::SessionToken;

use crate::domain::error::DomainError;
use crate::module::ConcreteAppServices;

/// Resolve `Authorization: Bearer <token>` into a [`quotes_sdk::Session`]
/// request extension, or answer 401.
///
/// # Errors
/// Returns an `Unauthenticated` problem for a missing, unknown, revoked or
/// expired token.
pub async fn require_session(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Problem> {
    let Some(token) = extract_bearer_token(req.headers()).map(SessionToken::new) else {
        tracing::debug!(path = %req.uri().path(), "Request without bearer token");
        return Err(Problem::from(DomainError::Unauthenticated).with_request_context(req.uri()));
    };

    let session = match svc.identity.authenticate(&token).await {
        Ok(session) => session,
        Err(e) => {
            tracing::debug!(path = %req.uri().path(), "Bearer token did not resolve to a session");
            return Err(Problem::from(e).with_request_context(req.uri()));
        }
    };

    req.extensions_mut().insert(session);
    Ok(next.run(req).await)
}
