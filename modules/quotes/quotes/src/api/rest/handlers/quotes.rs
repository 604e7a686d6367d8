use std::sync::Arc;

use axum::extract::Json;
use axum::http::Uri;
use axum::response::IntoResponse;
use quotes_kit::ApiResult;
use quotes_kit::response::{JsonBody, created_json, no_content};
use quotes_sdk::{QuoteId, Session, UserId};

use crate::api::rest::dto::{HomeFeedDto, QuoteDto, QuoteReq, UserQuotesDto};
use crate::module::ConcreteAppServices;

pub(super) async fn home_feed(
    svc: Arc<ConcreteAppServices>,
    session: Session,
) -> ApiResult<JsonBody<HomeFeedDto>> {
    let feed = svc.quotes.home_feed(&session).await?;
    Ok(Json(feed.into()))
}

pub(super) async fn create_quote(
    uri: Uri,
    svc: Arc<ConcreteAppServices>,
    session: Session,
    req: QuoteReq,
) -> ApiResult<impl IntoResponse> {
    let quote = svc.quotes.create(&session, req.into()).await?;
    let id_str = quote.id.to_string();
    Ok(created_json(QuoteDto::from(quote), &uri, &id_str))
}

pub(super) async fn get_quote(svc: Arc<ConcreteAppServices>, id: i32) -> ApiResult<JsonBody<QuoteDto>> {
    let quote = svc.quotes.get(QuoteId(id)).await?;
    Ok(Json(quote.into()))
}

pub(super) async fn update_quote(
    svc: Arc<ConcreteAppServices>,
    session: Session,
    id: i32,
    req: QuoteReq,
) -> ApiResult<JsonBody<QuoteDto>> {
    let quote = svc.quotes.edit(&session, QuoteId(id), req.into()).await?;
    Ok(Json(quote.into()))
}

pub(super) async fn delete_quote(
    svc: Arc<ConcreteAppServices>,
    session: Session,
    id: i32,
) -> ApiResult<impl IntoResponse> {
    svc.quotes.delete(&session, QuoteId(id)).await?;
    Ok(no_content())
}

pub(super) async fn user_quotes(
    svc: Arc<ConcreteAppServices>,
    id: i32,
) -> ApiResult<JsonBody<UserQuotesDto>> {
    let uq = svc.quotes.user_quotes(UserId(id)).await?;
    Ok(Json(uq.into()))
}
