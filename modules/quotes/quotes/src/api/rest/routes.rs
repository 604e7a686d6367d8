use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Extension, Json};
use axum::http::{Request, StatusCode};
use axum::middleware::from_fn;
use axum::Router;
use axum::routing::{get, post};
use quotes_kit::error_layer::problem_context_middleware;
use quotes_kit::{Problem, ValidationViolation};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::api::rest::{auth, dto, handlers};
use crate::module::ConcreteAppServices;

#[derive(OpenApi)]
#[openapi(
    info(title = "Quotes API", description = "Users contribute quotes and keep favorites"),
    components(schemas(
        dto::UserDto,
        dto::QuoteDto,
        dto::RegisterReq,
        dto::LoginReq,
        dto::QuoteReq,
        dto::SessionDto,
        dto::HomeFeedDto,
        dto::ToggleOutcomeDto,
        dto::ToggleDto,
        dto::UserQuotesDto,
        dto::HealthDto,
        Problem,
        ValidationViolation,
    ))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Full REST router: public auth routes, session-scoped routes behind
/// [`auth::require_session`], and the common middleware stack.
#[must_use]
pub fn router(services: Arc<ConcreteAppServices>, request_timeout: Duration) -> Router {
    let protected = Router::new()
        .route("/auth/logout", post(handlers::logout))
        .route("/auth/me", get(handlers::me))
        .route("/feed", get(handlers::home_feed))
        .route("/quotes", post(handlers::create_quote))
        .route(
            "/quotes/{id}",
            get(handlers::get_quote)
                .put(handlers::update_quote)
                .delete(handlers::delete_quote),
        )
        .route("/quotes/{id}/favorite", post(handlers::toggle_favorite))
        .route("/favorites", get(handlers::list_favorites))
        .route("/users/{id}/quotes", get(handlers::user_quotes))
        .route_layer(from_fn(auth::require_session));

    let public = Router::new()
        .route("/auth/register", post(handlers::register))
        .route("/auth/login", post(handlers::login))
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(openapi_json));

    // Registered last runs first
    public
        .merge(protected)
        .layer(from_fn(problem_context_middleware))
        .layer(Extension(services))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            request_timeout,
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<axum::body::Body>| {
                let rid = req
                    .headers()
                    .get("x-request-id")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    request_id = %rid,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
