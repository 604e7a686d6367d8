//! Axum handlers. Each one is instrumented here and delegates to the
//! resource submodule that does the work.

use std::sync::Arc;

use axum::extract::{Extension, Json, Path};
use axum::http::Uri;
use axum::response::IntoResponse;
use quotes_kit::ApiResult;
use quotes_kit::response::JsonBody;
use quotes_sdk::Session;
use tracing::field::Empty;

use crate::api::rest::dto::{
    HealthDto, HomeFeedDto, LoginReq, QuoteDto, QuoteReq, RegisterReq, SessionDto, ToggleDto,
    UserDto, UserQuotesDto,
};
use crate::module::ConcreteAppServices;

mod auth;
mod favorites;
mod quotes;

// ---- auth ----

#[tracing::instrument(skip(svc, req), fields(user_id = Empty))]
pub async fn register(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    Json(req): Json<RegisterReq>,
) -> ApiResult<impl IntoResponse> {
    auth::register(svc, req).await
}

#[tracing::instrument(skip(svc, req), fields(user_id = Empty))]
pub async fn login(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    Json(req): Json<LoginReq>,
) -> ApiResult<JsonBody<SessionDto>> {
    auth::login(svc, req).await
}

#[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
pub async fn logout(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    Extension(session): Extension<Session>,
) -> ApiResult<impl IntoResponse> {
    auth::logout(svc, session).await
}

#[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
pub async fn me(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    Extension(session): Extension<Session>,
) -> ApiResult<JsonBody<UserDto>> {
    auth::me(svc, session).await
}

// ---- quotes ----

#[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
pub async fn home_feed(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    Extension(session): Extension<Session>,
) -> ApiResult<JsonBody<HomeFeedDto>> {
    quotes::home_feed(svc, session).await
}

#[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
pub async fn create_quote(
    uri: Uri,
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    Extension(session): Extension<Session>,
    Json(req): Json<QuoteReq>,
) -> ApiResult<impl IntoResponse> {
    quotes::create_quote(uri, svc, session, req).await
}

#[tracing::instrument(skip(svc), fields(quote_id = %id))]
pub async fn get_quote(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    Path(id): Path<i32>,
) -> ApiResult<JsonBody<QuoteDto>> {
    quotes::get_quote(svc, id).await
}

#[tracing::instrument(skip(svc, session, req), fields(quote_id = %id, user_id = %session.user_id))]
pub async fn update_quote(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
    Json(req): Json<QuoteReq>,
) -> ApiResult<JsonBody<QuoteDto>> {
    quotes::update_quote(svc, session, id, req).await
}

#[tracing::instrument(skip(svc, session), fields(quote_id = %id, user_id = %session.user_id))]
pub async fn delete_quote(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
) -> ApiResult<impl IntoResponse> {
    quotes::delete_quote(svc, session, id).await
}

#[tracing::instrument(skip(svc), fields(owner_id = %id))]
pub async fn user_quotes(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    Path(id): Path<i32>,
) -> ApiResult<JsonBody<UserQuotesDto>> {
    quotes::user_quotes(svc, id).await
}

// ---- favorites ----

#[tracing::instrument(skip(svc, session), fields(quote_id = %id, user_id = %session.user_id))]
pub async fn toggle_favorite(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    Extension(session): Extension<Session>,
    Path(id): Path<i32>,
) -> ApiResult<JsonBody<ToggleDto>> {
    favorites::toggle_favorite(svc, session, id).await
}

#[tracing::instrument(skip_all, fields(user_id = %session.user_id))]
pub async fn list_favorites(
    Extension(svc): Extension<Arc<ConcreteAppServices>>,
    Extension(session): Extension<Session>,
) -> ApiResult<JsonBody<Vec<QuoteDto>>> {
    favorites::list_favorites(svc, session).await
}

// ---- misc ----

pub async fn health() -> JsonBody<HealthDto> {
    Json(HealthDto {
        status: "ok".to_owned(),
    })
}
